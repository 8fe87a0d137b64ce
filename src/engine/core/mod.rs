pub mod scan;
pub mod segment;
pub mod table;
pub mod types;

pub use scan::{CancellationToken, SortedSegmentSearch, TableScan};
pub use segment::{
    AnySegmentIterator, DictionarySegment, EncodedSegment, EncodingType, RunLengthSegment, Segment,
    SegmentIterable, SegmentIterator, SegmentPosition, ValueSegment, encode_values,
};
pub use table::{Chunk, ColumnDefinition, SortDescriptor, Table};
pub use types::{
    ChunkId, ChunkOffset, ColumnId, DataType, OrderByMode, PosList, PredicateCondition, RowId,
    ScanValue, Value,
};
