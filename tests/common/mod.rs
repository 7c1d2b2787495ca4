#![allow(dead_code)]

use std::sync::Arc;

use arrow_array::{Float32Array, RecordBatch, StringArray, UInt32Array};
use arrow_schema::{DataType, Field, Schema};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub enum Order {
    Ascending,
    Descending,
    Random,
}

pub fn mock_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("a", DataType::UInt32, false),
        Field::new("b", DataType::Float32, false),
        Field::new("c", DataType::Utf8, false),
    ]))
}

/// Three-column fixture batch mirroring the shapes the sort and dedup tests
/// care about: `a` drives the ordering, `b` and `c` ride along.
pub fn mock_batch(size: usize, order: Order) -> RecordBatch {
    let mut rng = StdRng::seed_from_u64(7);
    let values: Vec<u32> = match order {
        Order::Ascending => (0..size as u32).collect(),
        Order::Descending => (0..size as u32).rev().collect(),
        Order::Random => (0..size).map(|_| rng.gen_range(0..size as u32)).collect(),
    };
    let a = UInt32Array::from(values.clone());
    let b = Float32Array::from(values.iter().map(|v| *v as f32).collect::<Vec<_>>());
    let c = StringArray::from(values.iter().map(|v| format!("s{v}")).collect::<Vec<_>>());
    RecordBatch::try_new(mock_schema(), vec![Arc::new(a), Arc::new(b), Arc::new(c)])
        .expect("mock batch")
}
