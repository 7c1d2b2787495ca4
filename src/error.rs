use arrow_schema::{ArrowError, DataType};
use parquet::errors::ParquetError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArrowBatchError>;

/// Errors surfaced by the batch algorithms.
///
/// Every precondition is validated before any output is built, so a failed
/// call never leaves a partially constructed batch behind.
#[derive(Debug, Error)]
pub enum ArrowBatchError {
    #[error("unsupported data type {0}")]
    UnsupportedType(DataType),
    #[error("column not found: `{0}`")]
    ColumnNotFound(String),
    #[error("schemas not equal: {context}")]
    SchemasNotEqual { context: String },
    #[error("no data supplied")]
    NoDataSupplied,
    #[error("index {index} out of bounds ({bound})")]
    IndexOutOfBounds { index: usize, bound: usize },
    #[error("null values not allowed in {0}")]
    NullValuesNotAllowed(&'static str),
    #[error("column names required")]
    ColumnNamesRequired,
    #[error("no columns provided")]
    NoColumnsProvided,
    #[error(transparent)]
    Arrow(#[from] ArrowError),
    #[error(transparent)]
    Parquet(#[from] ParquetError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
