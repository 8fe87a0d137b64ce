use serde::{Deserialize, Serialize};

/// Row position within a chunk.
pub type ChunkOffset = u32;

/// Index of a chunk within a table.
pub type ChunkId = u32;

/// Index of a column within a table.
pub type ColumnId = u16;

/// Global row identifier: chunk plus chunk-relative offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowId {
    pub chunk_id: ChunkId,
    pub chunk_offset: ChunkOffset,
}

impl RowId {
    #[inline]
    pub fn new(chunk_id: ChunkId, chunk_offset: ChunkOffset) -> Self {
        Self {
            chunk_id,
            chunk_offset,
        }
    }
}

/// Scan result: row ids grouped per chunk, ascending chunk then offset order.
pub type PosList = Vec<RowId>;
