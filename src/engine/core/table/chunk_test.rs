use crate::engine::core::segment::{EncodingType, Segment, encode_values};
use crate::engine::core::table::{Chunk, SortDescriptor};
use crate::engine::core::types::OrderByMode;
use crate::engine::errors::ScanError;

fn int_segment(rows: &[Option<i32>]) -> Segment {
    Segment::from(encode_values(rows, EncodingType::Unencoded).unwrap())
}

#[test]
fn chunk_derives_row_count_from_segments() {
    let chunk = Chunk::new(
        vec![
            int_segment(&[Some(1), Some(2), Some(3)]),
            int_segment(&[Some(4), None, Some(6)]),
        ],
        None,
    )
    .unwrap();
    assert_eq!(chunk.row_count(), 3);
    assert_eq!(chunk.segments().len(), 2);
}

#[test]
fn chunk_rejects_segment_length_mismatch() {
    let result = Chunk::new(
        vec![
            int_segment(&[Some(1), Some(2)]),
            int_segment(&[Some(3)]),
        ],
        None,
    );
    assert!(matches!(result, Err(ScanError::InvariantViolation(_))));
}

#[test]
fn chunk_rejects_sort_descriptor_for_missing_column() {
    let result = Chunk::new(
        vec![int_segment(&[Some(1)])],
        Some(SortDescriptor {
            column_id: 3,
            order_by: OrderByMode::Ascending,
        }),
    );
    assert!(matches!(result, Err(ScanError::InvariantViolation(_))));
}

#[test]
fn sort_order_of_matches_only_the_named_column() {
    let chunk = Chunk::new(
        vec![
            int_segment(&[Some(1), Some(2)]),
            int_segment(&[Some(9), Some(8)]),
        ],
        Some(SortDescriptor {
            column_id: 1,
            order_by: OrderByMode::DescendingNullsLast,
        }),
    )
    .unwrap();
    assert_eq!(chunk.sort_order_of(0), None);
    assert_eq!(
        chunk.sort_order_of(1),
        Some(OrderByMode::DescendingNullsLast)
    );
}
