mod common;

use std::sync::Arc;

use arrowbatch::{concat_batches, ArrowBatchError};
use arrow_array::{Float32Array, Int32Array, RecordBatch, StringArray, UInt32Array};
use arrow_schema::{DataType, Field, Schema};
use common::mock_schema;

fn small_batch(a: Vec<u32>, b: Vec<f32>, c: Vec<&str>) -> RecordBatch {
    RecordBatch::try_new(
        mock_schema(),
        vec![
            Arc::new(UInt32Array::from(a)),
            Arc::new(Float32Array::from(b)),
            Arc::new(StringArray::from(c)),
        ],
    )
    .unwrap()
}

#[test]
fn appends_batches_in_input_order() {
    let first = small_batch(vec![0, 1, 2], vec![0.0, 1.0, 2.0], vec!["x0", "x1", "x2"]);
    let second = small_batch(vec![3, 4, 5], vec![3.0, 4.0, 5.0], vec!["y0", "y1", "y2"]);

    let combined = concat_batches(&[first, second]).unwrap();
    let expected = small_batch(
        vec![0, 1, 2, 3, 4, 5],
        vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
        vec!["x0", "x1", "x2", "y0", "y1", "y2"],
    );
    assert_eq!(combined, expected);
}

#[test]
fn row_counts_add_up_and_schema_is_preserved() {
    let first = small_batch(vec![1, 2], vec![1.0, 2.0], vec!["a", "b"]);
    let second = small_batch(vec![3], vec![3.0], vec!["c"]);
    let third = small_batch(vec![], vec![], vec![]);

    let combined = concat_batches(&[first.clone(), second.clone(), third]).unwrap();
    assert_eq!(combined.num_rows(), 3);
    assert_eq!(combined.schema(), first.schema());
}

#[test]
fn concatenation_is_associative() {
    let a = small_batch(vec![1], vec![1.0], vec!["a"]);
    let b = small_batch(vec![2], vec![2.0], vec!["b"]);
    let c = small_batch(vec![3], vec![3.0], vec!["c"]);

    let left = concat_batches(&[concat_batches(&[a.clone(), b.clone()]).unwrap(), c.clone()])
        .unwrap();
    let right = concat_batches(&[a, concat_batches(&[b, c]).unwrap()]).unwrap();
    assert_eq!(left, right);
}

#[test]
fn single_batch_concatenates_to_itself() {
    let only = small_batch(vec![7, 8], vec![7.0, 8.0], vec!["p", "q"]);
    let combined = concat_batches(std::slice::from_ref(&only)).unwrap();
    assert_eq!(combined, only);
}

#[test]
fn requires_at_least_one_batch() {
    let err = concat_batches(&[]).unwrap_err();
    assert!(matches!(err, ArrowBatchError::NoDataSupplied));
}

#[test]
fn rejects_mismatched_schemas() {
    let first = small_batch(vec![1], vec![1.0], vec!["a"]);
    let other = RecordBatch::try_new(
        Arc::new(Schema::new(vec![Field::new("a", DataType::Int32, false)])),
        vec![Arc::new(Int32Array::from(vec![1]))],
    )
    .unwrap();
    let err = concat_batches(&[first, other]).unwrap_err();
    assert!(matches!(err, ArrowBatchError::SchemasNotEqual { .. }));
}
