//! Closed-set dispatch from a column's [`arrow_schema::DataType`] to a
//! generic algorithm instantiation.
//!
//! Every operation in this crate supports the same closed set of physical
//! kinds: the integer, floating point and temporal primitives below, plus
//! `Boolean`, `Utf8` and `Binary` (handled by explicit arms at each call
//! site). Anything else fails with
//! [`ArrowBatchError::UnsupportedType`](crate::ArrowBatchError::UnsupportedType),
//! so adding a new kind forces a decision at every dispatch point.

/// Expands to a `match` over the supported primitive data types, invoking
/// `$helper::<ConcreteArrowType>($args...)` for the matching arm.
///
/// The caller is expected to have already handled `Boolean`, `Utf8` and
/// `Binary`; the fallthrough arm returns `UnsupportedType`.
macro_rules! with_primitive_type {
    ($data_type:expr, $helper:ident($($args:expr),* $(,)?)) => {{
        use arrow_array::types as at;
        use arrow_schema::{DataType, TimeUnit};
        match $data_type {
            DataType::Int8 => $helper::<at::Int8Type>($($args),*),
            DataType::Int16 => $helper::<at::Int16Type>($($args),*),
            DataType::Int32 => $helper::<at::Int32Type>($($args),*),
            DataType::Int64 => $helper::<at::Int64Type>($($args),*),
            DataType::UInt8 => $helper::<at::UInt8Type>($($args),*),
            DataType::UInt16 => $helper::<at::UInt16Type>($($args),*),
            DataType::UInt32 => $helper::<at::UInt32Type>($($args),*),
            DataType::UInt64 => $helper::<at::UInt64Type>($($args),*),
            DataType::Float16 => $helper::<at::Float16Type>($($args),*),
            DataType::Float32 => $helper::<at::Float32Type>($($args),*),
            DataType::Float64 => $helper::<at::Float64Type>($($args),*),
            DataType::Date32 => $helper::<at::Date32Type>($($args),*),
            DataType::Date64 => $helper::<at::Date64Type>($($args),*),
            DataType::Timestamp(TimeUnit::Second, _) => {
                $helper::<at::TimestampSecondType>($($args),*)
            }
            DataType::Timestamp(TimeUnit::Millisecond, _) => {
                $helper::<at::TimestampMillisecondType>($($args),*)
            }
            DataType::Timestamp(TimeUnit::Microsecond, _) => {
                $helper::<at::TimestampMicrosecondType>($($args),*)
            }
            DataType::Timestamp(TimeUnit::Nanosecond, _) => {
                $helper::<at::TimestampNanosecondType>($($args),*)
            }
            DataType::Time32(TimeUnit::Second) => $helper::<at::Time32SecondType>($($args),*),
            DataType::Time32(TimeUnit::Millisecond) => {
                $helper::<at::Time32MillisecondType>($($args),*)
            }
            DataType::Time64(TimeUnit::Microsecond) => {
                $helper::<at::Time64MicrosecondType>($($args),*)
            }
            DataType::Time64(TimeUnit::Nanosecond) => {
                $helper::<at::Time64NanosecondType>($($args),*)
            }
            DataType::Duration(TimeUnit::Second) => $helper::<at::DurationSecondType>($($args),*),
            DataType::Duration(TimeUnit::Millisecond) => {
                $helper::<at::DurationMillisecondType>($($args),*)
            }
            DataType::Duration(TimeUnit::Microsecond) => {
                $helper::<at::DurationMicrosecondType>($($args),*)
            }
            DataType::Duration(TimeUnit::Nanosecond) => {
                $helper::<at::DurationNanosecondType>($($args),*)
            }
            other => Err($crate::error::ArrowBatchError::UnsupportedType(other.clone())),
        }
    }};
}

pub(crate) use with_primitive_type;
