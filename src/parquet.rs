use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow_array::{RecordBatch, RecordBatchOptions};
use arrow_schema::Schema;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::{ArrowWriter, PARQUET_FIELD_ID_META_KEY};
use parquet::file::properties::{EnabledStatistics, WriterProperties};

use crate::error::Result;

/// Row cap per batch handed back by [`read_parquet`].
const READ_BATCH_SIZE: usize = 1 << 20;

/// Rewrite every schema field with a `PARQUET:field_id` metadata entry set
/// to its 0-based position, giving each column a stable identifier in the
/// persisted form. The columns themselves are reused as-is.
pub fn with_field_ids(batch: &RecordBatch) -> Result<RecordBatch> {
    let schema = batch.schema();
    let fields: Vec<_> = schema
        .fields()
        .iter()
        .enumerate()
        .map(|(position, field)| {
            let metadata = HashMap::from([(
                PARQUET_FIELD_ID_META_KEY.to_owned(),
                position.to_string(),
            )]);
            field.as_ref().clone().with_metadata(metadata)
        })
        .collect();
    let stamped = Schema::new_with_metadata(fields, schema.metadata().clone());
    let options = RecordBatchOptions::new().with_row_count(Some(batch.num_rows()));
    Ok(RecordBatch::try_new_with_options(
        Arc::new(stamped),
        batch.columns().to_vec(),
        &options,
    )?)
}

/// Write a batch to a Parquet file at `path`, with column statistics
/// enabled.
pub fn write_parquet(batch: &RecordBatch, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    let properties = WriterProperties::builder()
        .set_statistics_enabled(EnabledStatistics::Page)
        .build();
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(properties))?;
    writer.write(batch)?;
    writer.close()?;
    Ok(())
}

/// Read every row batch from a Parquet file.
///
/// A file written as one batch may come back split into several, each
/// holding at most `READ_BATCH_SIZE` rows.
pub fn read_parquet(path: impl AsRef<Path>) -> Result<Vec<RecordBatch>> {
    let file = File::open(path)?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?
        .with_batch_size(READ_BATCH_SIZE)
        .build()?;
    let mut batches = Vec::new();
    for batch in reader {
        batches.push(batch?);
    }
    Ok(batches)
}
