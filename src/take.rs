use std::sync::Arc;

use arrow_array::builder::{BinaryBuilder, BooleanBuilder, PrimitiveBuilder, StringBuilder};
use arrow_array::cast::AsArray;
use arrow_array::types::ArrowPrimitiveType;
use arrow_array::{Array, ArrayRef, RecordBatch, RecordBatchOptions, UInt32Array};
use arrow_schema::{DataType, Schema};

use crate::dispatch::with_primitive_type;
use crate::error::{ArrowBatchError, Result};
use crate::schema::field_indices;

/// Gather rows of `batch` at the given indices, in the order given.
///
/// Indices may repeat and need not be ordered, but must be non-null and
/// less than the batch's row count; both are checked before any column is
/// copied. The result has the same schema and `indices.len()` rows, with
/// every value (and its null flag) copied from the source row.
pub fn take_batch(batch: &RecordBatch, indices: &UInt32Array) -> Result<RecordBatch> {
    check_indices(indices, batch.num_rows())?;
    let columns = batch
        .columns()
        .iter()
        .map(|column| take_array_unchecked(column.as_ref(), indices))
        .collect::<Result<Vec<_>>>()?;
    let options = RecordBatchOptions::new().with_row_count(Some(indices.len()));
    Ok(RecordBatch::try_new_with_options(
        batch.schema(),
        columns,
        &options,
    )?)
}

/// Gather values of a single array at the given indices.
pub fn take_array(array: &dyn Array, indices: &UInt32Array) -> Result<ArrayRef> {
    check_indices(indices, array.len())?;
    take_array_unchecked(array, indices)
}

fn check_indices(indices: &UInt32Array, bound: usize) -> Result<()> {
    if indices.null_count() > 0 {
        return Err(ArrowBatchError::NullValuesNotAllowed("the indices array"));
    }
    for i in 0..indices.len() {
        let index = indices.value(i) as usize;
        if index >= bound {
            return Err(ArrowBatchError::IndexOutOfBounds { index, bound });
        }
    }
    Ok(())
}

fn take_array_unchecked(array: &dyn Array, indices: &UInt32Array) -> Result<ArrayRef> {
    match array.data_type() {
        DataType::Boolean => {
            let values = array.as_boolean();
            let mut builder = BooleanBuilder::with_capacity(indices.len());
            for i in 0..indices.len() {
                let index = indices.value(i) as usize;
                if values.is_null(index) {
                    builder.append_null();
                } else {
                    builder.append_value(values.value(index));
                }
            }
            Ok(Arc::new(builder.finish()))
        }
        DataType::Utf8 => {
            let values = array.as_string::<i32>();
            let mut builder = StringBuilder::with_capacity(indices.len(), 0);
            for i in 0..indices.len() {
                let index = indices.value(i) as usize;
                if values.is_null(index) {
                    builder.append_null();
                } else {
                    builder.append_value(values.value(index));
                }
            }
            Ok(Arc::new(builder.finish()))
        }
        DataType::Binary => {
            let values = array.as_binary::<i32>();
            let mut builder = BinaryBuilder::with_capacity(indices.len(), 0);
            for i in 0..indices.len() {
                let index = indices.value(i) as usize;
                if values.is_null(index) {
                    builder.append_null();
                } else {
                    builder.append_value(values.value(index));
                }
            }
            Ok(Arc::new(builder.finish()))
        }
        data_type => with_primitive_type!(data_type, take_primitive(array, indices)),
    }
}

fn take_primitive<T: ArrowPrimitiveType>(
    array: &dyn Array,
    indices: &UInt32Array,
) -> Result<ArrayRef> {
    let values = array.as_primitive::<T>();
    // `with_data_type` keeps timestamp/time/duration parameters intact.
    let mut builder = PrimitiveBuilder::<T>::with_capacity(indices.len())
        .with_data_type(values.data_type().clone());
    for i in 0..indices.len() {
        let index = indices.value(i) as usize;
        if values.is_null(index) {
            builder.append_null();
        } else {
            builder.append_value(values.value(index));
        }
    }
    Ok(Arc::new(builder.finish()))
}

/// Project the named columns out of `batch` without copying data.
///
/// Duplicate field names select every matching column. The field list must
/// be non-empty ([`ArrowBatchError::NoColumnsProvided`]) and every name
/// must resolve ([`ArrowBatchError::ColumnNotFound`]).
pub fn select_columns(batch: &RecordBatch, names: &[&str]) -> Result<RecordBatch> {
    if names.is_empty() {
        return Err(ArrowBatchError::NoColumnsProvided);
    }
    let schema = batch.schema();
    let mut selected_fields = Vec::new();
    let mut selected_columns: Vec<ArrayRef> = Vec::new();
    for name in names {
        let indices = field_indices(&schema, name);
        if indices.is_empty() {
            return Err(ArrowBatchError::ColumnNotFound((*name).to_owned()));
        }
        for index in indices {
            selected_fields.push(schema.field(index).clone());
            selected_columns.push(batch.column(index).clone());
        }
    }
    let options = RecordBatchOptions::new().with_row_count(Some(batch.num_rows()));
    Ok(RecordBatch::try_new_with_options(
        Arc::new(Schema::new(selected_fields)),
        selected_columns,
        &options,
    )?)
}
