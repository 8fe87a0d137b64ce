use serde::{Deserialize, Serialize};

/// Sort order of a chunk's column: direction crossed with null placement.
///
/// `Ascending` and `Descending` put nulls first; the `NullsLast` variants put
/// them at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderByMode {
    Ascending,
    AscendingNullsLast,
    Descending,
    DescendingNullsLast,
}

impl OrderByMode {
    #[inline]
    pub fn is_ascending(&self) -> bool {
        matches!(self, OrderByMode::Ascending | OrderByMode::AscendingNullsLast)
    }

    #[inline]
    pub fn is_nulls_first(&self) -> bool {
        matches!(self, OrderByMode::Ascending | OrderByMode::Descending)
    }
}
