use crate::engine::core::segment::{EncodingType, Segment, encode_values};
use crate::engine::core::table::{Chunk, ColumnDefinition, Table};
use crate::engine::core::types::DataType;
use crate::engine::errors::ScanError;

fn two_column_table() -> Table {
    Table::new(vec![
        ColumnDefinition::new("id", DataType::Int32, false),
        ColumnDefinition::new("label", DataType::String, true),
    ])
}

#[test]
fn append_chunk_accepts_matching_segments() {
    let mut table = two_column_table();
    let chunk = Chunk::new(
        vec![
            Segment::from(encode_values(&[Some(1), Some(2)], EncodingType::Unencoded).unwrap()),
            Segment::from(
                encode_values(
                    &[Some("a".to_string()), None],
                    EncodingType::Dictionary,
                )
                .unwrap(),
            ),
        ],
        None,
    )
    .unwrap();
    table.append_chunk(chunk).unwrap();
    assert_eq!(table.chunks().len(), 1);
    assert_eq!(table.row_count(), 2);
}

#[test]
fn append_chunk_rejects_wrong_column_count() {
    let mut table = two_column_table();
    let chunk = Chunk::new(
        vec![Segment::from(
            encode_values(&[Some(1)], EncodingType::Unencoded).unwrap(),
        )],
        None,
    )
    .unwrap();
    assert!(matches!(
        table.append_chunk(chunk),
        Err(ScanError::InvariantViolation(_))
    ));
}

#[test]
fn append_chunk_rejects_type_mismatch() {
    let mut table = two_column_table();
    let chunk = Chunk::new(
        vec![
            Segment::from(encode_values(&[Some(1i64)], EncodingType::Unencoded).unwrap()),
            Segment::from(
                encode_values(&[Some("x".to_string())], EncodingType::Unencoded).unwrap(),
            ),
        ],
        None,
    )
    .unwrap();
    assert!(matches!(
        table.append_chunk(chunk),
        Err(ScanError::InvariantViolation(_))
    ));
}

#[test]
fn column_lookup_by_id() {
    let table = two_column_table();
    assert_eq!(table.column(0).unwrap().name, "id");
    assert!(table.column(1).unwrap().nullable);
    assert!(table.column(2).is_none());
}
