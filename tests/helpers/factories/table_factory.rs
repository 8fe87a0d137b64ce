use crate::engine::core::segment::EncodingType;
use crate::engine::core::table::{Chunk, ColumnDefinition, Table};
use crate::engine::core::types::{DataType, OrderByMode};

use super::ChunkFactory;

pub struct TableFactory {
    columns: Vec<ColumnDefinition>,
    encoding: EncodingType,
    chunks: Vec<Chunk>,
}

impl TableFactory {
    pub fn new() -> Self {
        Self {
            columns: vec![ColumnDefinition::new("n", DataType::Int32, true)],
            encoding: EncodingType::Unencoded,
            chunks: Vec::new(),
        }
    }

    pub fn with_column(mut self, name: &str, data_type: DataType, nullable: bool) -> Self {
        self.columns = vec![ColumnDefinition::new(name, data_type, nullable)];
        self
    }

    pub fn with_encoding(mut self, encoding: EncodingType) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_rows(mut self, rows: Vec<Option<i32>>) -> Self {
        self.chunks.push(
            ChunkFactory::new()
                .with_rows(rows)
                .with_encoding(self.encoding)
                .create(),
        );
        self
    }

    pub fn with_sorted_rows(mut self, rows: Vec<Option<i32>>, order_by: OrderByMode) -> Self {
        self.chunks.push(
            ChunkFactory::new()
                .with_rows(rows)
                .with_encoding(self.encoding)
                .with_order_by(order_by)
                .create(),
        );
        self
    }

    pub fn with_chunk(mut self, chunk: Chunk) -> Self {
        self.chunks.push(chunk);
        self
    }

    pub fn create(self) -> Table {
        let mut table = Table::new(self.columns);
        for chunk in self.chunks {
            table.append_chunk(chunk).unwrap();
        }
        table
    }
}
