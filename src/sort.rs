use std::cmp::Ordering;

use arrow_array::cast::AsArray;
use arrow_array::types::ArrowPrimitiveType;
use arrow_array::{Array, ArrowNativeTypeOp, RecordBatch, UInt32Array};
use arrow_schema::DataType;

use crate::dispatch::with_primitive_type;
use crate::error::{ArrowBatchError, Result};
use crate::schema::field_indices;
use crate::take::take_batch;

/// Sort a batch ascending by the given key columns, in the order given.
///
/// Each pass computes dense ranks from the previous key's column (all zero
/// for the first key), stably sorts `(rank, row, value)` items, then
/// gathers the whole batch by the resulting permutation before the next key
/// is processed. Null key values order before non-null values. Ties among
/// fully equal rows keep whatever order the previous pass produced.
///
/// Unknown key names fail with [`ArrowBatchError::ColumnNotFound`]; key
/// columns outside the supported type set fail with
/// [`ArrowBatchError::UnsupportedType`].
pub fn sort_batch(batch: &RecordBatch, keys: &[&str]) -> Result<RecordBatch> {
    let mut current = batch.clone();
    for (pass, key) in keys.iter().enumerate() {
        let schema = current.schema();
        let key_idx = *field_indices(&schema, key)
            .first()
            .ok_or_else(|| ArrowBatchError::ColumnNotFound((*key).to_owned()))?;

        let ranks = if pass == 0 {
            UInt32Array::from(vec![0u32; current.num_rows()])
        } else {
            // Keys before this one are already grouped, so ranking the
            // previous key's column is well-defined.
            let prev_idx = field_indices(&schema, keys[pass - 1])[0];
            rank_array(current.column(prev_idx).as_ref())?
        };

        let permutation = sorted_indices(current.column(key_idx).as_ref(), &ranks)?;
        current = take_batch(&current, &permutation)?;
    }
    Ok(current)
}

/// Dense integer group labels for a pre-grouped column.
///
/// Precondition: equal values are already adjacent (e.g. the column belongs
/// to a batch sorted by earlier keys); this is not itself a sort. Two nulls
/// count as equal. A zero-row column yields a zero-row rank array.
pub fn rank_array(array: &dyn Array) -> Result<UInt32Array> {
    if array.is_empty() {
        return Ok(UInt32Array::from(Vec::<u32>::new()));
    }
    match array.data_type() {
        DataType::Boolean => {
            let values = array.as_boolean();
            Ok(rank_by(values.len(), |i, j| {
                match (values.is_null(i), values.is_null(j)) {
                    (true, true) => true,
                    (false, false) => values.value(i) == values.value(j),
                    _ => false,
                }
            }))
        }
        DataType::Utf8 => {
            let values = array.as_string::<i32>();
            Ok(rank_by(values.len(), |i, j| {
                match (values.is_null(i), values.is_null(j)) {
                    (true, true) => true,
                    (false, false) => values.value(i) == values.value(j),
                    _ => false,
                }
            }))
        }
        DataType::Binary => {
            let values = array.as_binary::<i32>();
            Ok(rank_by(values.len(), |i, j| {
                match (values.is_null(i), values.is_null(j)) {
                    (true, true) => true,
                    (false, false) => values.value(i) == values.value(j),
                    _ => false,
                }
            }))
        }
        data_type => with_primitive_type!(data_type, rank_primitive(array)),
    }
}

fn rank_primitive<T>(array: &dyn Array) -> Result<UInt32Array>
where
    T: ArrowPrimitiveType,
    T::Native: ArrowNativeTypeOp,
{
    let values = array.as_primitive::<T>();
    Ok(rank_by(values.len(), |i, j| {
        match (values.is_null(i), values.is_null(j)) {
            (true, true) => true,
            // NaN runs stay a single group under `is_eq`.
            (false, false) => values.value(i).is_eq(values.value(j)),
            _ => false,
        }
    }))
}

fn rank_by(len: usize, values_equal: impl Fn(usize, usize) -> bool) -> UInt32Array {
    let mut ranks = Vec::with_capacity(len);
    let mut current = 0u32;
    ranks.push(current);
    for i in 1..len {
        if !values_equal(i, i - 1) {
            current += 1;
        }
        ranks.push(current);
    }
    UInt32Array::from(ranks)
}

/// The permutation that stably sorts `(rank, value)` items ascending.
fn sorted_indices(array: &dyn Array, ranks: &UInt32Array) -> Result<UInt32Array> {
    match array.data_type() {
        DataType::Boolean => {
            let values = array.as_boolean();
            Ok(sort_items_by(
                ranks,
                values.len(),
                |i| (!values.is_null(i)).then(|| values.value(i)),
                |a, b| a.cmp(b),
            ))
        }
        DataType::Utf8 => {
            let values = array.as_string::<i32>();
            Ok(sort_items_by(
                ranks,
                values.len(),
                |i| (!values.is_null(i)).then(|| values.value(i)),
                |a, b| a.cmp(b),
            ))
        }
        DataType::Binary => {
            let values = array.as_binary::<i32>();
            Ok(sort_items_by(
                ranks,
                values.len(),
                |i| (!values.is_null(i)).then(|| values.value(i)),
                |a, b| a.cmp(b),
            ))
        }
        data_type => with_primitive_type!(data_type, sort_primitive(array, ranks)),
    }
}

fn sort_primitive<T>(array: &dyn Array, ranks: &UInt32Array) -> Result<UInt32Array>
where
    T: ArrowPrimitiveType,
    T::Native: ArrowNativeTypeOp,
{
    let values = array.as_primitive::<T>();
    Ok(sort_items_by(
        ranks,
        values.len(),
        |i| (!values.is_null(i)).then(|| values.value(i)),
        |a, b| a.compare(*b),
    ))
}

fn sort_items_by<V>(
    ranks: &UInt32Array,
    len: usize,
    value_at: impl Fn(usize) -> Option<V>,
    compare: impl Fn(&V, &V) -> Ordering,
) -> UInt32Array {
    let mut items: Vec<(u32, u32, Option<V>)> = (0..len)
        .map(|i| (ranks.value(i), i as u32, value_at(i)))
        .collect();
    items.sort_by(|a, b| {
        a.0.cmp(&b.0).then_with(|| match (&a.2, &b.2) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => compare(x, y),
        })
    });
    UInt32Array::from(items.iter().map(|item| item.1).collect::<Vec<u32>>())
}
