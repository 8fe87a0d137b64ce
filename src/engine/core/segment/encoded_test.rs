use crate::engine::core::segment::{
    EncodedSegment, EncodingType, Segment, SegmentIterable, encode_values,
};
use crate::engine::core::types::DataType;
use crate::engine::errors::ScanError;

fn decode<T: crate::engine::core::types::ScanValue>(segment: &EncodedSegment<T>) -> Vec<Option<T>> {
    fn rows<'a, T, A>(iterable: A) -> Vec<Option<T>>
    where
        T: crate::engine::core::types::ScanValue,
        A: SegmentIterable<'a, T>,
    {
        iterable
            .iter()
            .map(|position| {
                if position.is_null() {
                    None
                } else {
                    Some(position.value().clone())
                }
            })
            .collect()
    }

    match segment {
        EncodedSegment::Value(inner) => rows(inner.iterable()),
        EncodedSegment::Dictionary(inner) => rows(inner.iterable()),
        EncodedSegment::RunLength(inner) => rows(inner.iterable()),
    }
}

#[test]
fn all_encodings_round_trip_the_same_rows() {
    let rows = vec![Some(3), None, Some(3), Some(1), None, Some(2), Some(2)];
    for encoding in [
        EncodingType::Unencoded,
        EncodingType::Dictionary,
        EncodingType::RunLength,
    ] {
        let segment = encode_values(&rows, encoding).unwrap();
        assert_eq!(segment.encoding_type(), encoding);
        assert_eq!(segment.len(), rows.len());
        assert_eq!(decode(&segment), rows, "{} round trip", encoding.name());
    }
}

#[test]
fn unregistered_encoding_is_rejected() {
    let result = encode_values(&[Some(1)], EncodingType::FrameOfReference);
    assert_eq!(
        result,
        Err(ScanError::EncodingUnsupported("frame-of-reference"))
    );
}

#[test]
fn segment_sum_reports_type_and_encoding() {
    let encoded = encode_values(&[Some(1i64), Some(2)], EncodingType::Dictionary).unwrap();
    let segment = Segment::from(encoded);
    assert_eq!(segment.data_type(), DataType::Int64);
    assert_eq!(segment.encoding_type(), EncodingType::Dictionary);
    assert_eq!(segment.len(), 2);
}

#[test]
fn string_rows_encode_under_every_registered_encoding() {
    let rows = vec![
        Some("b".to_string()),
        Some("a".to_string()),
        None,
        Some("b".to_string()),
    ];
    for encoding in [
        EncodingType::Unencoded,
        EncodingType::Dictionary,
        EncodingType::RunLength,
    ] {
        let segment = encode_values(&rows, encoding).unwrap();
        assert_eq!(decode(&segment), rows, "{}", encoding.name());
    }
}
