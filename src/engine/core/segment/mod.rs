pub mod any_iterable;
pub mod dictionary_segment;
pub mod encoded;
pub mod iterable;
pub mod position;
pub mod run_length_segment;
pub mod value_segment;

pub use any_iterable::AnySegmentIterator;
pub use dictionary_segment::DictionarySegment;
pub use encoded::{EncodedSegment, EncodingType, Segment, encode_values};
pub use iterable::{
    DictionarySegmentIterable, PositionalIterator, RunLengthSegmentIterable, SegmentIterable,
    SegmentIterator, ValueSegmentIterable,
};
pub use position::SegmentPosition;
pub use run_length_segment::RunLengthSegment;
pub use value_segment::ValueSegment;

#[cfg(test)]
mod encoded_test;
