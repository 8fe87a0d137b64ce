use serde::{Deserialize, Serialize};

use crate::engine::core::segment::Segment;
use crate::engine::core::types::{ColumnId, OrderByMode};
use crate::engine::errors::ScanError;

/// Declares that one column of a chunk is physically sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDescriptor {
    pub column_id: ColumnId,
    pub order_by: OrderByMode,
}

/// Immutable horizontal partition of a table: one segment per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    segments: Vec<Segment>,
    row_count: u32,
    sort_descriptor: Option<SortDescriptor>,
}

impl Chunk {
    pub fn new(
        segments: Vec<Segment>,
        sort_descriptor: Option<SortDescriptor>,
    ) -> Result<Self, ScanError> {
        let row_count = segments.first().map_or(0, Segment::len);
        for (column_id, segment) in segments.iter().enumerate() {
            if segment.len() != row_count {
                return Err(ScanError::InvariantViolation(format!(
                    "segment for column {column_id} has {} rows, chunk has {row_count}",
                    segment.len()
                )));
            }
        }
        if let Some(descriptor) = sort_descriptor {
            if descriptor.column_id as usize >= segments.len() {
                return Err(ScanError::InvariantViolation(format!(
                    "sort descriptor names column {} but chunk has {} segments",
                    descriptor.column_id,
                    segments.len()
                )));
            }
        }
        Ok(Self {
            segments,
            row_count: row_count as u32,
            sort_descriptor,
        })
    }

    #[inline]
    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    #[inline]
    pub fn segment(&self, column_id: ColumnId) -> Option<&Segment> {
        self.segments.get(column_id as usize)
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn sort_descriptor(&self) -> Option<SortDescriptor> {
        self.sort_descriptor
    }

    /// The sort order of `column_id`, when the chunk is declared sorted on it.
    pub fn sort_order_of(&self, column_id: ColumnId) -> Option<OrderByMode> {
        self.sort_descriptor
            .filter(|descriptor| descriptor.column_id == column_id)
            .map(|descriptor| descriptor.order_by)
    }
}
