pub mod cancellation;
pub mod sorted_search;
pub mod table_scan;
pub mod vectorized;

pub use cancellation::CancellationToken;
pub use sorted_search::SortedSegmentSearch;
pub use table_scan::TableScan;
pub use vectorized::{BLOCK_SIZE, scan_with_iterator, scan_with_iterators_binary};

#[cfg(test)]
mod vectorized_test;
