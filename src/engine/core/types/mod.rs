pub mod data_type;
pub mod order_by;
pub mod predicate;
pub mod row_id;
pub mod value;

pub use data_type::DataType;
pub use order_by::OrderByMode;
pub use predicate::PredicateCondition;
pub use row_id::{ChunkId, ChunkOffset, ColumnId, PosList, RowId};
pub use value::{ScanValue, Value};
