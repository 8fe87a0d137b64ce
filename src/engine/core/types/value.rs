use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::core::types::DataType;

/// Tagged search value usable across all comparison paths.
///
/// `Null` is a distinct sentinel, not a value of any data type. Any comparison
/// against it yields no match; three-valued logic lives in the expression
/// layer, one level up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Int32(i32),
    Int64(i64),
    Float(f32),
    Double(f64),
    String(String),
}

impl Value {
    /// The data type this value belongs to; `None` for the null sentinel.
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Value::Null => None,
            Value::Int32(_) => Some(DataType::Int32),
            Value::Int64(_) => Some(DataType::Int64),
            Value::Float(_) => Some(DataType::Float),
            Value::Double(_) => Some(DataType::Double),
            Value::String(_) => Some(DataType::String),
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Int32(v) => write!(f, "{v}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v}"),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

/// Rust-typed face of [`DataType`]: one implementation per column data type.
///
/// Segments, iterables and the scan loops are generic over this trait; type
/// resolution happens once per chunk and monomorphizes everything below it.
pub trait ScanValue:
    Clone + PartialEq + PartialOrd + fmt::Debug + Send + Sync + 'static
{
    const DATA_TYPE: DataType;

    /// Extracts a typed value from the variant; `None` on type mismatch
    /// or the null sentinel.
    fn from_value(value: &Value) -> Option<Self>;

    /// A value to point null positions at so value access stays a pure load.
    /// Never observed by a scan: null positions are dropped before the value
    /// is used.
    fn stand_in() -> &'static Self;
}

impl ScanValue for i32 {
    const DATA_TYPE: DataType = DataType::Int32;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int32(v) => Some(*v),
            _ => None,
        }
    }

    fn stand_in() -> &'static Self {
        static ZERO: i32 = 0;
        &ZERO
    }
}

impl ScanValue for i64 {
    const DATA_TYPE: DataType = DataType::Int64;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    fn stand_in() -> &'static Self {
        static ZERO: i64 = 0;
        &ZERO
    }
}

impl ScanValue for f32 {
    const DATA_TYPE: DataType = DataType::Float;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    fn stand_in() -> &'static Self {
        static ZERO: f32 = 0.0;
        &ZERO
    }
}

impl ScanValue for f64 {
    const DATA_TYPE: DataType = DataType::Double;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    fn stand_in() -> &'static Self {
        static ZERO: f64 = 0.0;
        &ZERO
    }
}

impl ScanValue for String {
    const DATA_TYPE: DataType = DataType::String;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(v) => Some(v.clone()),
            _ => None,
        }
    }

    fn stand_in() -> &'static Self {
        static EMPTY: String = String::new();
        &EMPTY
    }
}
