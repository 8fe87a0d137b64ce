use crate::engine::core::segment::EncodingType;
use crate::test_helpers::Factory;

#[test]
fn creates_unencoded_segment_by_default() {
    let segment = Factory::segment().create();
    assert_eq!(segment.len(), 3);
    assert_eq!(segment.encoding_type(), EncodingType::Unencoded);
}

#[test]
fn respects_rows_and_encoding() {
    let segment = Factory::segment()
        .with_rows(vec![Some(5), Some(5), None, Some(6)])
        .with_encoding(EncodingType::RunLength)
        .create();
    assert_eq!(segment.len(), 4);
    assert_eq!(segment.encoding_type(), EncodingType::RunLength);
}
