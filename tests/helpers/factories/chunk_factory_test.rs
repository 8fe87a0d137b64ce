use crate::engine::core::types::OrderByMode;
use crate::test_helpers::Factory;

#[test]
fn creates_unsorted_chunk_by_default() {
    let chunk = Factory::chunk().create();
    assert_eq!(chunk.row_count(), 3);
    assert!(chunk.sort_descriptor().is_none());
}

#[test]
fn records_sort_order_on_column_zero() {
    let chunk = Factory::chunk()
        .with_rows(vec![Some(1), Some(2), Some(3)])
        .with_order_by(OrderByMode::Ascending)
        .create();
    assert_eq!(chunk.sort_order_of(0), Some(OrderByMode::Ascending));
}
