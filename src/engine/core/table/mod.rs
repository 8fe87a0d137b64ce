pub mod chunk;
pub mod table;

pub use chunk::{Chunk, SortDescriptor};
pub use table::{ColumnDefinition, Table};

#[cfg(test)]
mod chunk_test;
#[cfg(test)]
mod table_test;
