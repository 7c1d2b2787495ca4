use std::sync::Arc;

use arrow_array::builder::{BinaryBuilder, BooleanBuilder, PrimitiveBuilder, StringBuilder};
use arrow_array::cast::AsArray;
use arrow_array::types::{ArrowPrimitiveType, UInt32Type};
use arrow_array::{Array, ArrayRef, PrimitiveArray, RecordBatch, RecordBatchOptions, UInt32Array};
use arrow_schema::DataType;

use crate::dispatch::with_primitive_type;
use crate::error::{ArrowBatchError, Result};
use crate::schema::batch_schemas_equal;

/// Gather rows from several schema-identical batches at once.
///
/// `index_pairs` is a two-column `UInt32` batch: column 0 selects a source
/// batch, column 1 a row within it. Row `k` of the result is copied from
/// the pair at row `k`, so the output interleaves sources in the pair
/// order rather than grouping rows per source batch.
///
/// All preconditions are validated before any copying starts: a non-empty
/// batch list, the pair batch shape, no null selectors, both selectors in
/// bounds for every row, and exact schema equality across the sources.
pub fn take_from_batches(
    batches: &[RecordBatch],
    index_pairs: &RecordBatch,
) -> Result<RecordBatch> {
    let first = batches.first().ok_or(ArrowBatchError::NoDataSupplied)?;

    if index_pairs.num_columns() != 2 {
        return Err(ArrowBatchError::SchemasNotEqual {
            context: format!(
                "index pairs must have exactly 2 columns, got {}",
                index_pairs.num_columns()
            ),
        });
    }
    for column in index_pairs.columns() {
        if column.data_type() != &DataType::UInt32 {
            return Err(ArrowBatchError::UnsupportedType(column.data_type().clone()));
        }
    }

    let batch_selectors = index_pairs.column(0).as_primitive::<UInt32Type>();
    let row_selectors = index_pairs.column(1).as_primitive::<UInt32Type>();
    if batch_selectors.null_count() > 0 || row_selectors.null_count() > 0 {
        return Err(ArrowBatchError::NullValuesNotAllowed("the index pairs"));
    }
    for i in 0..index_pairs.num_rows() {
        let batch_idx = batch_selectors.value(i) as usize;
        if batch_idx >= batches.len() {
            return Err(ArrowBatchError::IndexOutOfBounds {
                index: batch_idx,
                bound: batches.len(),
            });
        }
        let row_idx = row_selectors.value(i) as usize;
        if row_idx >= batches[batch_idx].num_rows() {
            return Err(ArrowBatchError::IndexOutOfBounds {
                index: row_idx,
                bound: batches[batch_idx].num_rows(),
            });
        }
    }
    for (idx, other) in batches.iter().enumerate().skip(1) {
        if !batch_schemas_equal(first, other, &[]) {
            return Err(ArrowBatchError::SchemasNotEqual {
                context: format!("batches 0 and {idx} have different schemas"),
            });
        }
    }

    let columns = (0..first.num_columns())
        .map(|col| {
            let arrays: Vec<&dyn Array> = batches
                .iter()
                .map(|batch| batch.column(col).as_ref())
                .collect();
            take_from_arrays(&arrays, batch_selectors, row_selectors)
        })
        .collect::<Result<Vec<_>>>()?;

    let options = RecordBatchOptions::new().with_row_count(Some(index_pairs.num_rows()));
    Ok(RecordBatch::try_new_with_options(
        first.schema(),
        columns,
        &options,
    )?)
}

fn take_from_arrays(
    arrays: &[&dyn Array],
    batch_selectors: &UInt32Array,
    row_selectors: &UInt32Array,
) -> Result<ArrayRef> {
    match arrays[0].data_type() {
        DataType::Boolean => {
            let typed: Vec<_> = arrays.iter().map(|array| array.as_boolean()).collect();
            let mut builder = BooleanBuilder::with_capacity(row_selectors.len());
            for i in 0..row_selectors.len() {
                let values = typed[batch_selectors.value(i) as usize];
                let row = row_selectors.value(i) as usize;
                if values.is_null(row) {
                    builder.append_null();
                } else {
                    builder.append_value(values.value(row));
                }
            }
            Ok(Arc::new(builder.finish()))
        }
        DataType::Utf8 => {
            let typed: Vec<_> = arrays.iter().map(|array| array.as_string::<i32>()).collect();
            let mut builder = StringBuilder::with_capacity(row_selectors.len(), 0);
            for i in 0..row_selectors.len() {
                let values = typed[batch_selectors.value(i) as usize];
                let row = row_selectors.value(i) as usize;
                if values.is_null(row) {
                    builder.append_null();
                } else {
                    builder.append_value(values.value(row));
                }
            }
            Ok(Arc::new(builder.finish()))
        }
        DataType::Binary => {
            let typed: Vec<_> = arrays.iter().map(|array| array.as_binary::<i32>()).collect();
            let mut builder = BinaryBuilder::with_capacity(row_selectors.len(), 0);
            for i in 0..row_selectors.len() {
                let values = typed[batch_selectors.value(i) as usize];
                let row = row_selectors.value(i) as usize;
                if values.is_null(row) {
                    builder.append_null();
                } else {
                    builder.append_value(values.value(row));
                }
            }
            Ok(Arc::new(builder.finish()))
        }
        data_type => {
            with_primitive_type!(
                data_type,
                take_multi_primitive(arrays, batch_selectors, row_selectors)
            )
        }
    }
}

fn take_multi_primitive<T: ArrowPrimitiveType>(
    arrays: &[&dyn Array],
    batch_selectors: &UInt32Array,
    row_selectors: &UInt32Array,
) -> Result<ArrayRef> {
    let typed: Vec<&PrimitiveArray<T>> = arrays
        .iter()
        .map(|array| array.as_primitive::<T>())
        .collect();
    let mut builder = PrimitiveBuilder::<T>::with_capacity(row_selectors.len())
        .with_data_type(arrays[0].data_type().clone());
    for i in 0..row_selectors.len() {
        let values = typed[batch_selectors.value(i) as usize];
        let row = row_selectors.value(i) as usize;
        if values.is_null(row) {
            builder.append_null();
        } else {
            builder.append_value(values.value(row));
        }
    }
    Ok(Arc::new(builder.finish()))
}
