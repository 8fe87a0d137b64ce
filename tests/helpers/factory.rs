pub use super::factories::{ChunkFactory, SegmentFactory, TableFactory};

pub struct Factory;

impl Factory {
    pub fn table() -> TableFactory {
        TableFactory::new()
    }

    pub fn chunk() -> ChunkFactory {
        ChunkFactory::new()
    }

    pub fn segment() -> SegmentFactory {
        SegmentFactory::new()
    }
}
