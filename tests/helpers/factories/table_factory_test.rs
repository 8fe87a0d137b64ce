use crate::engine::core::types::{DataType, OrderByMode};
use crate::test_helpers::Factory;

#[test]
fn creates_single_column_table_with_chunks() {
    let table = Factory::table()
        .with_rows(vec![Some(1), Some(2)])
        .with_rows(vec![Some(3)])
        .create();
    assert_eq!(table.columns().len(), 1);
    assert_eq!(table.chunks().len(), 2);
    assert_eq!(table.row_count(), 3);
}

#[test]
fn column_override_applies() {
    let table = Factory::table()
        .with_column("amount", DataType::Int32, false)
        .with_rows(vec![Some(7)])
        .create();
    assert_eq!(table.column(0).unwrap().name, "amount");
    assert!(!table.column(0).unwrap().nullable);
}

#[test]
fn sorted_rows_carry_their_order() {
    let table = Factory::table()
        .with_sorted_rows(vec![Some(3), Some(2), Some(1)], OrderByMode::Descending)
        .create();
    assert_eq!(
        table.chunks()[0].sort_order_of(0),
        Some(OrderByMode::Descending)
    );
}
