use serde::{Deserialize, Serialize};

use crate::engine::core::table::chunk::Chunk;
use crate::engine::core::types::{ColumnId, DataType};
use crate::engine::errors::ScanError;

/// Name, type and nullability of one table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, data_type: DataType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable,
        }
    }
}

/// In-memory table: column definitions plus an ordered chunk sequence.
/// Chunks are append-only; finalized chunks are never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<ColumnDefinition>,
    chunks: Vec<Chunk>,
}

impl Table {
    pub fn new(columns: Vec<ColumnDefinition>) -> Self {
        Self {
            columns,
            chunks: Vec::new(),
        }
    }

    pub fn append_chunk(&mut self, chunk: Chunk) -> Result<(), ScanError> {
        if chunk.segments().len() != self.columns.len() {
            return Err(ScanError::InvariantViolation(format!(
                "chunk has {} segments, table defines {} columns",
                chunk.segments().len(),
                self.columns.len()
            )));
        }
        for (column, segment) in self.columns.iter().zip(chunk.segments()) {
            if segment.data_type() != column.data_type {
                return Err(ScanError::InvariantViolation(format!(
                    "segment type {} does not match column '{}' of type {}",
                    segment.data_type(),
                    column.name,
                    column.data_type
                )));
            }
        }
        self.chunks.push(chunk);
        Ok(())
    }

    #[inline]
    pub fn column(&self, column_id: ColumnId) -> Option<&ColumnDefinition> {
        self.columns.get(column_id as usize)
    }

    #[inline]
    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    #[inline]
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn row_count(&self) -> usize {
        self.chunks.iter().map(|chunk| chunk.row_count() as usize).sum()
    }
}
