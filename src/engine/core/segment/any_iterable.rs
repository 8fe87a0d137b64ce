use crate::engine::core::segment::iterable::{SegmentIterable, SegmentIterator};
use crate::engine::core::segment::position::SegmentPosition;
use crate::engine::core::types::ScanValue;

/// Type-erased position stream for debug builds and code-size-sensitive
/// callers. Virtual dispatch per step; forfeits vectorization.
pub struct AnySegmentIterator<'a, T: ScanValue> {
    inner: Box<dyn Iterator<Item = SegmentPosition<'a, T>> + 'a>,
    remaining: usize,
}

impl<'a, T: ScanValue> AnySegmentIterator<'a, T> {
    pub fn new<A>(iterable: A) -> Self
    where
        A: SegmentIterable<'a, T>,
        A::Iter: 'a,
    {
        let remaining = iterable.len();
        Self {
            inner: Box::new(iterable.iter()),
            remaining,
        }
    }
}

impl<'a, T: ScanValue> Iterator for AnySegmentIterator<'a, T> {
    type Item = SegmentPosition<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.inner.next()?;
        self.remaining -= 1;
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: ScanValue> SegmentIterator<'a, T> for AnySegmentIterator<'a, T> {
    const IS_VECTORIZABLE: bool = false;

    fn remaining(&self) -> usize {
        self.remaining
    }
}
