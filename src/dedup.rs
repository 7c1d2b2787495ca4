use std::cmp::Ordering;

use arrow_array::{RecordBatch, UInt32Array};

use crate::compare::compare_rows;
use crate::error::{ArrowBatchError, Result};
use crate::sort::sort_batch;
use crate::take::take_batch;

/// Keep one row per distinct key-value group.
///
/// Unless `presorted` is set, the batch is first sorted ascending by
/// `keys` (which must be non-empty,
/// [`ArrowBatchError::ColumnNamesRequired`]). A row starts a new retained
/// group whenever it compares greater than its predecessor on the key
/// fields; the first row index of each group is kept. All columns survive,
/// and the result keeps ascending key order, not the original input order.
pub fn dedup_batch(batch: &RecordBatch, keys: &[&str], presorted: bool) -> Result<RecordBatch> {
    if keys.is_empty() {
        return Err(ArrowBatchError::ColumnNamesRequired);
    }

    let sorted = if presorted {
        batch.clone()
    } else {
        sort_batch(batch, keys)?
    };
    if sorted.num_rows() == 0 {
        return Ok(sorted);
    }

    let mut retained = vec![0u32];
    for row in 1..sorted.num_rows() {
        if compare_rows(&sorted, row, &sorted, row - 1, keys)? == Ordering::Greater {
            retained.push(row as u32);
        }
    }

    take_batch(&sorted, &UInt32Array::from(retained))
}
