pub mod chunk_factory;
pub mod segment_factory;
pub mod table_factory;

pub use chunk_factory::ChunkFactory;
pub use segment_factory::SegmentFactory;
pub use table_factory::TableFactory;

#[cfg(test)]
mod chunk_factory_test;
#[cfg(test)]
mod segment_factory_test;
#[cfg(test)]
mod table_factory_test;
