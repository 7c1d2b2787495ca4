use arrow_array::{Array, RecordBatch, RecordBatchOptions};
use arrow_select::concat::concat;

use crate::error::{ArrowBatchError, Result};
use crate::schema::batch_schemas_equal;

/// Append schema-identical batches column-wise, in input order.
///
/// Requires at least one batch ([`ArrowBatchError::NoDataSupplied`]) and
/// exact schema equality across all of them
/// ([`ArrowBatchError::SchemasNotEqual`]). The result's row count is the
/// sum of the input row counts; no reordering or deduplication happens.
pub fn concat_batches(batches: &[RecordBatch]) -> Result<RecordBatch> {
    let first = batches.first().ok_or(ArrowBatchError::NoDataSupplied)?;
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
            Ok(concat(&arrays)?)
        })
        .collect::<Result<Vec<_>>>()?;

    let row_count = batches.iter().map(RecordBatch::num_rows).sum();
    let options = RecordBatchOptions::new().with_row_count(Some(row_count));
    Ok(RecordBatch::try_new_with_options(
        first.schema(),
        columns,
        &options,
    )?)
}
