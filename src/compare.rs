use std::cmp::Ordering;

use arrow_array::cast::AsArray;
use arrow_array::types::ArrowPrimitiveType;
use arrow_array::{Array, ArrowNativeTypeOp, RecordBatch};
use arrow_schema::DataType;

use crate::dispatch::with_primitive_type;
use crate::error::{ArrowBatchError, Result};
use crate::schema::{batch_schemas_equal, field_indices};

/// Three-way comparison of row `left_row` of `left` against row `right_row`
/// of `right`.
///
/// With an empty `fields` slice every column of `left`, in column order, is
/// compared against the same-named column(s) of `right`; otherwise only the
/// named fields are compared, in the order given. Either way the schemas
/// must agree for the compared fields ([`ArrowBatchError::SchemasNotEqual`]).
///
/// Per field: two nulls are equal, a null orders before any value, and
/// values use the type's natural order (floats use Arrow's total order,
/// `false < true`, bytes compare lexicographically). The first field that is
/// not equal decides. Columns that share a name but differ in physical type
/// contribute `Equal`.
pub fn compare_rows(
    left: &RecordBatch,
    left_row: usize,
    right: &RecordBatch,
    right_row: usize,
    fields: &[&str],
) -> Result<Ordering> {
    if left_row >= left.num_rows() {
        return Err(ArrowBatchError::IndexOutOfBounds {
            index: left_row,
            bound: left.num_rows(),
        });
    }
    if right_row >= right.num_rows() {
        return Err(ArrowBatchError::IndexOutOfBounds {
            index: right_row,
            bound: right.num_rows(),
        });
    }
    if fields.is_empty() {
        compare_all_fields(left, left_row, right, right_row)
    } else {
        compare_subset(left, left_row, right, right_row, fields)
    }
}

fn compare_subset(
    left: &RecordBatch,
    left_row: usize,
    right: &RecordBatch,
    right_row: usize,
    fields: &[&str],
) -> Result<Ordering> {
    if !batch_schemas_equal(left, right, fields) {
        return Err(ArrowBatchError::SchemasNotEqual {
            context: format!("fields {fields:?} do not match between the two batches"),
        });
    }
    let left_schema = left.schema();
    let right_schema = right.schema();
    for name in fields {
        for left_idx in field_indices(&left_schema, name) {
            for right_idx in field_indices(&right_schema, name) {
                let ordering = compare_array_values(
                    left.column(left_idx).as_ref(),
                    right.column(right_idx).as_ref(),
                    left_row,
                    right_row,
                )?;
                if ordering != Ordering::Equal {
                    return Ok(ordering);
                }
            }
        }
    }
    Ok(Ordering::Equal)
}

/// All-fields comparison, ordered by the column order of `left`.
fn compare_all_fields(
    left: &RecordBatch,
    left_row: usize,
    right: &RecordBatch,
    right_row: usize,
) -> Result<Ordering> {
    if !batch_schemas_equal(left, right, &[]) {
        return Err(ArrowBatchError::SchemasNotEqual {
            context: "batches have different schemas".to_owned(),
        });
    }
    let left_schema = left.schema();
    let right_schema = right.schema();
    for (left_idx, field) in left_schema.fields().iter().enumerate() {
        for right_idx in field_indices(&right_schema, field.name()) {
            let ordering = compare_array_values(
                left.column(left_idx).as_ref(),
                right.column(right_idx).as_ref(),
                left_row,
                right_row,
            )?;
            if ordering != Ordering::Equal {
                return Ok(ordering);
            }
        }
    }
    Ok(Ordering::Equal)
}

fn compare_array_values(
    left: &dyn Array,
    right: &dyn Array,
    left_row: usize,
    right_row: usize,
) -> Result<Ordering> {
    if left.data_type() != right.data_type() {
        return Ok(Ordering::Equal);
    }
    match (left.is_null(left_row), right.is_null(right_row)) {
        (true, true) => return Ok(Ordering::Equal),
        (true, false) => return Ok(Ordering::Less),
        (false, true) => return Ok(Ordering::Greater),
        (false, false) => {}
    }
    match left.data_type() {
        DataType::Boolean => Ok(left
            .as_boolean()
            .value(left_row)
            .cmp(&right.as_boolean().value(right_row))),
        DataType::Utf8 => Ok(left
            .as_string::<i32>()
            .value(left_row)
            .cmp(right.as_string::<i32>().value(right_row))),
        DataType::Binary => Ok(left
            .as_binary::<i32>()
            .value(left_row)
            .cmp(right.as_binary::<i32>().value(right_row))),
        data_type => {
            with_primitive_type!(data_type, compare_primitive(left, right, left_row, right_row))
        }
    }
}

fn compare_primitive<T>(
    left: &dyn Array,
    right: &dyn Array,
    left_row: usize,
    right_row: usize,
) -> Result<Ordering>
where
    T: ArrowPrimitiveType,
    T::Native: ArrowNativeTypeOp,
{
    let left_value = left.as_primitive::<T>().value(left_row);
    let right_value = right.as_primitive::<T>().value(right_row);
    Ok(left_value.compare(right_value))
}
