//! Row-level algorithms over Arrow record batches.
//!
//! This crate focuses on:
//! - Multi-key ascending sort via iterative rank refinement (`sort_batch`).
//! - Row gather by index, from one batch (`take_batch`) or interleaved
//!   across several (`take_from_batches`).
//! - Sorted deduplication by key columns (`dedup_batch`).
//! - Null-aware three-way row comparison (`compare_rows`).
//! - Schema-preserving concatenation (`concat_batches`) and schema/content
//!   equality helpers.
//! - A thin Parquet boundary (`write_parquet` / `read_parquet`) with
//!   positional field-id stamping.
//!
//! All operations are pure with respect to their inputs: they return a
//! freshly built [`arrow_array::RecordBatch`] or an error, never a mutated
//! or partially constructed one.

#![forbid(unsafe_code)]

mod compare;
mod concat;
mod dedup;
mod dispatch;
mod error;
mod parquet;
mod schema;
mod sort;
mod take;
mod take_multi;

pub use crate::compare::compare_rows;
pub use crate::concat::concat_batches;
pub use crate::dedup::dedup_batch;
pub use crate::error::{ArrowBatchError, Result};
pub use crate::parquet::{read_parquet, with_field_ids, write_parquet};
pub use crate::schema::{batch_schemas_equal, batches_equal, field_indices, schema_subset_equal};
pub use crate::sort::{rank_array, sort_batch};
pub use crate::take::{select_columns, take_array, take_batch};
pub use crate::take_multi::take_from_batches;
