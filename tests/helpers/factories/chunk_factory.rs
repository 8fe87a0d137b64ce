use crate::engine::core::segment::{EncodingType, Segment, encode_values};
use crate::engine::core::table::{Chunk, SortDescriptor};
use crate::engine::core::types::OrderByMode;

pub struct ChunkFactory {
    rows: Vec<Option<i32>>,
    encoding: EncodingType,
    order_by: Option<OrderByMode>,
}

impl ChunkFactory {
    pub fn new() -> Self {
        Self {
            rows: vec![Some(1), Some(2), Some(3)],
            encoding: EncodingType::Unencoded,
            order_by: None,
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

    pub fn with_order_by(mut self, order_by: OrderByMode) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn create(self) -> Chunk {
        let segment = Segment::from(encode_values(&self.rows, self.encoding).unwrap());
        let descriptor = self.order_by.map(|order_by| SortDescriptor {
            column_id: 0,
            order_by,
        });
        Chunk::new(vec![segment], descriptor).unwrap()
    }
}
