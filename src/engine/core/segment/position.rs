use crate::engine::core::types::ChunkOffset;

/// Per-row view yielded by segment iterators: value, null flag and
/// chunk-relative offset.
#[derive(Debug, PartialEq)]
pub struct SegmentPosition<'a, T> {
    value: &'a T,
    is_null: bool,
    chunk_offset: ChunkOffset,
}

// Derived Copy would demand T: Copy; only the reference is copied.
impl<T> Clone for SegmentPosition<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SegmentPosition<'_, T> {}

impl<'a, T> SegmentPosition<'a, T> {
    #[inline]
    pub fn new(value: &'a T, is_null: bool, chunk_offset: ChunkOffset) -> Self {
        Self {
            value,
            is_null,
            chunk_offset,
        }
    }

    /// The stored value. For null positions this is a stand-in and must not
    /// be interpreted; callers check `is_null` first (or mask it branchlessly).
    #[inline]
    pub fn value(&self) -> &'a T {
        self.value
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.is_null
    }

    #[inline]
    pub fn chunk_offset(&self) -> ChunkOffset {
        self.chunk_offset
    }
}
