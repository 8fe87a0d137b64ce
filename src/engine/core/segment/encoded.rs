use serde::{Deserialize, Serialize};

use crate::engine::core::segment::dictionary_segment::DictionarySegment;
use crate::engine::core::segment::run_length_segment::RunLengthSegment;
use crate::engine::core::segment::value_segment::ValueSegment;
use crate::engine::core::types::{DataType, ScanValue};
use crate::engine::errors::ScanError;

/// Physical encodings known to the engine. `FrameOfReference` is declared
/// for forward compatibility but has no registered encoder or iterable yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncodingType {
    Unencoded,
    Dictionary,
    RunLength,
    FrameOfReference,
}

impl EncodingType {
    pub fn name(&self) -> &'static str {
        match self {
            EncodingType::Unencoded => "unencoded",
            EncodingType::Dictionary => "dictionary",
            EncodingType::RunLength => "run-length",
            EncodingType::FrameOfReference => "frame-of-reference",
        }
    }
}

/// One column's values within one chunk, under a concrete encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodedSegment<T: ScanValue> {
    Value(ValueSegment<T>),
    Dictionary(DictionarySegment<T>),
    RunLength(RunLengthSegment<T>),
}

impl<T: ScanValue> EncodedSegment<T> {
    pub fn len(&self) -> usize {
        match self {
            EncodedSegment::Value(segment) => segment.len(),
            EncodedSegment::Dictionary(segment) => segment.len(),
            EncodedSegment::RunLength(segment) => segment.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn encoding_type(&self) -> EncodingType {
        match self {
            EncodedSegment::Value(_) => EncodingType::Unencoded,
            EncodedSegment::Dictionary(_) => EncodingType::Dictionary,
            EncodedSegment::RunLength(_) => EncodingType::RunLength,
        }
    }
}

/// Encoder registry entry point: materializes a row slice under the requested
/// encoding. Encodings without a registered encoder are rejected.
pub fn encode_values<T: ScanValue>(
    rows: &[Option<T>],
    encoding: EncodingType,
) -> Result<EncodedSegment<T>, ScanError> {
    match encoding {
        EncodingType::Unencoded => {
            let nullable = rows.iter().any(Option::is_none);
            if nullable {
                Ok(EncodedSegment::Value(ValueSegment::from_nullable_values(
                    rows.to_vec(),
                )))
            } else {
                Ok(EncodedSegment::Value(ValueSegment::from_values(
                    rows.iter().flatten().cloned().collect(),
                )))
            }
        }
        EncodingType::Dictionary => Ok(EncodedSegment::Dictionary(DictionarySegment::from_values(
            rows,
        ))),
        EncodingType::RunLength => Ok(EncodedSegment::RunLength(RunLengthSegment::from_values(
            rows,
        ))),
        EncodingType::FrameOfReference => Err(ScanError::EncodingUnsupported(encoding.name())),
    }
}

/// Type-level sum over the five column data types.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Int32(EncodedSegment<i32>),
    Int64(EncodedSegment<i64>),
    Float(EncodedSegment<f32>),
    Double(EncodedSegment<f64>),
    String(EncodedSegment<String>),
}

impl Segment {
    pub fn data_type(&self) -> DataType {
        match self {
            Segment::Int32(_) => DataType::Int32,
            Segment::Int64(_) => DataType::Int64,
            Segment::Float(_) => DataType::Float,
            Segment::Double(_) => DataType::Double,
            Segment::String(_) => DataType::String,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Segment::Int32(segment) => segment.len(),
            Segment::Int64(segment) => segment.len(),
            Segment::Float(segment) => segment.len(),
            Segment::Double(segment) => segment.len(),
            Segment::String(segment) => segment.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn encoding_type(&self) -> EncodingType {
        match self {
            Segment::Int32(segment) => segment.encoding_type(),
            Segment::Int64(segment) => segment.encoding_type(),
            Segment::Float(segment) => segment.encoding_type(),
            Segment::Double(segment) => segment.encoding_type(),
            Segment::String(segment) => segment.encoding_type(),
        }
    }
}

impl From<EncodedSegment<i32>> for Segment {
    fn from(segment: EncodedSegment<i32>) -> Self {
        Segment::Int32(segment)
    }
}

impl From<EncodedSegment<i64>> for Segment {
    fn from(segment: EncodedSegment<i64>) -> Self {
        Segment::Int64(segment)
    }
}

impl From<EncodedSegment<f32>> for Segment {
    fn from(segment: EncodedSegment<f32>) -> Self {
        Segment::Float(segment)
    }
}

impl From<EncodedSegment<f64>> for Segment {
    fn from(segment: EncodedSegment<f64>) -> Self {
        Segment::Double(segment)
    }
}

impl From<EncodedSegment<String>> for Segment {
    fn from(segment: EncodedSegment<String>) -> Self {
        Segment::String(segment)
    }
}
