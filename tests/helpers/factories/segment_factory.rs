use crate::engine::core::segment::{EncodingType, Segment, encode_values};

pub struct SegmentFactory {
    rows: Vec<Option<i32>>,
    encoding: EncodingType,
}

impl SegmentFactory {
    pub fn new() -> Self {
        Self {
            rows: vec![Some(1), Some(2), Some(3)],
            encoding: EncodingType::Unencoded,
        }
    }

    pub fn with_rows(mut self, rows: Vec<Option<i32>>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_encoding(mut self, encoding: EncodingType) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn create(self) -> Segment {
        Segment::from(encode_values(&self.rows, self.encoding).unwrap())
    }
}
