use crate::engine::core::segment::position::SegmentPosition;
use crate::engine::core::types::{ChunkOffset, ScanValue};

/// Uniform read access over one segment encoding.
///
/// `IS_VECTORIZABLE` is set only when `position_at`/`next` are pure loads
/// from contiguous storage with no hidden state mutation; the blockwise scan
/// loop relies on that. `IS_POINT_ACCESSIBLE` is set when random access by
/// chunk offset is O(1) or O(log n), which the sorted-segment search needs.
pub trait SegmentIterable<'a, T: ScanValue + 'a>: Copy {
    type Iter: SegmentIterator<'a, T>;

    const IS_VECTORIZABLE: bool;
    const IS_POINT_ACCESSIBLE: bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full scan over offsets `0..len`.
    fn iter(&self) -> Self::Iter;

    /// Random access by chunk offset. Callers must stay within `0..len`.
    fn position_at(&self, offset: ChunkOffset) -> SegmentPosition<'a, T>;

    /// Positional traversal driven by a caller-supplied offset list, yielding
    /// positions in the order given.
    fn iter_positions<'p>(&self, offsets: &'p [ChunkOffset]) -> PositionalIterator<'a, 'p, T, Self>
    where
        Self: Sized,
    {
        PositionalIterator {
            iterable: *self,
            offsets: offsets.iter(),
            _marker: std::marker::PhantomData,
        }
    }
}

/// Iterator side of the contract: a position stream that also knows how many
/// positions remain, so the blockwise loop can bound its blocks.
pub trait SegmentIterator<'a, T: ScanValue + 'a>: Iterator<Item = SegmentPosition<'a, T>> {
    const IS_VECTORIZABLE: bool;

    fn remaining(&self) -> usize;
}

/* ------------------------------ unencoded ------------------------------ */

/// Thin view over a value slice and, when nullable, a null-flag slice.
#[derive(Debug)]
pub struct ValueSegmentIterable<'a, T: ScanValue> {
    values: &'a [T],
    null_flags: Option<&'a [bool]>,
}

// Derived Copy would demand T: Copy; the view holds only references.
impl<T: ScanValue> Clone for ValueSegmentIterable<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ScanValue> Copy for ValueSegmentIterable<'_, T> {}

impl<'a, T: ScanValue> ValueSegmentIterable<'a, T> {
    pub fn new(values: &'a [T], null_flags: Option<&'a [bool]>) -> Self {
        Self { values, null_flags }
    }
}

impl<'a, T: ScanValue> SegmentIterable<'a, T> for ValueSegmentIterable<'a, T> {
    type Iter = ValueSegmentIterator<'a, T>;

    const IS_VECTORIZABLE: bool = true;
    const IS_POINT_ACCESSIBLE: bool = true;

    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }

    fn iter(&self) -> Self::Iter {
        ValueSegmentIterator {
            values: self.values,
            null_flags: self.null_flags,
            offset: 0,
        }
    }

    #[inline]
    fn position_at(&self, offset: ChunkOffset) -> SegmentPosition<'a, T> {
        let index = offset as usize;
        let is_null = self.null_flags.map_or(false, |flags| flags[index]);
        SegmentPosition::new(&self.values[index], is_null, offset)
    }
}

#[derive(Debug, Clone)]
pub struct ValueSegmentIterator<'a, T: ScanValue> {
    values: &'a [T],
    null_flags: Option<&'a [bool]>,
    offset: usize,
}

impl<'a, T: ScanValue> Iterator for ValueSegmentIterator<'a, T> {
    type Item = SegmentPosition<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.values.len() {
            return None;
        }
        let index = self.offset;
        self.offset += 1;
        let is_null = self.null_flags.map_or(false, |flags| flags[index]);
        Some(SegmentPosition::new(
            &self.values[index],
            is_null,
            index as ChunkOffset,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<'a, T: ScanValue> SegmentIterator<'a, T> for ValueSegmentIterator<'a, T> {
    const IS_VECTORIZABLE: bool = true;

    #[inline]
    fn remaining(&self) -> usize {
        self.values.len() - self.offset
    }
}

/* ------------------------------ dictionary ----------------------------- */

/// Materializes `dictionary[codes[i]]` on access. The dictionary slice is
/// padded with a stand-in when empty so the clamped index stays a pure load.
#[derive(Debug)]
pub struct DictionarySegmentIterable<'a, T: ScanValue> {
    dictionary: &'a [T],
    codes: &'a [u32],
    null_code: u32,
}

impl<T: ScanValue> Clone for DictionarySegmentIterable<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ScanValue> Copy for DictionarySegmentIterable<'_, T> {}

impl<'a, T: ScanValue> DictionarySegmentIterable<'a, T> {
    pub fn new(dictionary: &'a [T], codes: &'a [u32]) -> Self {
        let null_code = dictionary.len() as u32;
        let dictionary = if dictionary.is_empty() {
            std::slice::from_ref(T::stand_in())
        } else {
            dictionary
        };
        Self {
            dictionary,
            codes,
            null_code,
        }
    }

    #[inline]
    fn decode(&self, code: u32) -> (&'a T, bool) {
        // Clamping keeps the load unconditional; the null flag is carried
        // separately so the stand-in value is never interpreted.
        let index = (code as usize).min(self.dictionary.len() - 1);
        (&self.dictionary[index], code == self.null_code)
    }
}

impl<'a, T: ScanValue> SegmentIterable<'a, T> for DictionarySegmentIterable<'a, T> {
    type Iter = DictionarySegmentIterator<'a, T>;

    const IS_VECTORIZABLE: bool = true;
    const IS_POINT_ACCESSIBLE: bool = true;

    #[inline]
    fn len(&self) -> usize {
        self.codes.len()
    }

    fn iter(&self) -> Self::Iter {
        DictionarySegmentIterator {
            iterable: *self,
            offset: 0,
        }
    }

    #[inline]
    fn position_at(&self, offset: ChunkOffset) -> SegmentPosition<'a, T> {
        let (value, is_null) = self.decode(self.codes[offset as usize]);
        SegmentPosition::new(value, is_null, offset)
    }
}

#[derive(Debug, Clone)]
pub struct DictionarySegmentIterator<'a, T: ScanValue> {
    iterable: DictionarySegmentIterable<'a, T>,
    offset: usize,
}

impl<'a, T: ScanValue> Iterator for DictionarySegmentIterator<'a, T> {
    type Item = SegmentPosition<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.iterable.codes.len() {
            return None;
        }
        let offset = self.offset as ChunkOffset;
        self.offset += 1;
        Some(self.iterable.position_at(offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<'a, T: ScanValue> SegmentIterator<'a, T> for DictionarySegmentIterator<'a, T> {
    const IS_VECTORIZABLE: bool = true;

    #[inline]
    fn remaining(&self) -> usize {
        self.iterable.codes.len() - self.offset
    }
}

/* ------------------------------ run-length ----------------------------- */

/// Sequential access keeps a run cursor and only advances it when crossing a
/// run boundary; point access binary-searches the end-offset list.
#[derive(Debug)]
pub struct RunLengthSegmentIterable<'a, T: ScanValue> {
    values: &'a [T],
    null_flags: &'a [bool],
    end_offsets: &'a [ChunkOffset],
}

impl<T: ScanValue> Clone for RunLengthSegmentIterable<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ScanValue> Copy for RunLengthSegmentIterable<'_, T> {}

impl<'a, T: ScanValue> RunLengthSegmentIterable<'a, T> {
    pub fn new(values: &'a [T], null_flags: &'a [bool], end_offsets: &'a [ChunkOffset]) -> Self {
        Self {
            values,
            null_flags,
            end_offsets,
        }
    }
}

impl<'a, T: ScanValue> SegmentIterable<'a, T> for RunLengthSegmentIterable<'a, T> {
    type Iter = RunLengthSegmentIterator<'a, T>;

    const IS_VECTORIZABLE: bool = false;
    const IS_POINT_ACCESSIBLE: bool = true;

    #[inline]
    fn len(&self) -> usize {
        self.end_offsets.last().copied().unwrap_or(0) as usize
    }

    fn iter(&self) -> Self::Iter {
        RunLengthSegmentIterator {
            iterable: *self,
            run_index: 0,
            offset: 0,
            len: self.len() as ChunkOffset,
        }
    }

    fn position_at(&self, offset: ChunkOffset) -> SegmentPosition<'a, T> {
        let run_index = self.end_offsets.partition_point(|&end| end <= offset);
        SegmentPosition::new(&self.values[run_index], self.null_flags[run_index], offset)
    }
}

#[derive(Debug, Clone)]
pub struct RunLengthSegmentIterator<'a, T: ScanValue> {
    iterable: RunLengthSegmentIterable<'a, T>,
    run_index: usize,
    offset: ChunkOffset,
    len: ChunkOffset,
}

impl<'a, T: ScanValue> Iterator for RunLengthSegmentIterator<'a, T> {
    type Item = SegmentPosition<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.len {
            return None;
        }
        if self.offset >= self.iterable.end_offsets[self.run_index] {
            self.run_index += 1;
        }
        let position = SegmentPosition::new(
            &self.iterable.values[self.run_index],
            self.iterable.null_flags[self.run_index],
            self.offset,
        );
        self.offset += 1;
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<'a, T: ScanValue> SegmentIterator<'a, T> for RunLengthSegmentIterator<'a, T> {
    const IS_VECTORIZABLE: bool = false;

    #[inline]
    fn remaining(&self) -> usize {
        (self.len - self.offset) as usize
    }
}

/* ------------------------------ positional ----------------------------- */

/// Traversal driven by an externally supplied offset list.
#[derive(Debug, Clone)]
pub struct PositionalIterator<'a, 'p, T: ScanValue, A: SegmentIterable<'a, T>> {
    iterable: A,
    offsets: std::slice::Iter<'p, ChunkOffset>,
    _marker: std::marker::PhantomData<&'a T>,
}

impl<'a, 'p, T: ScanValue, A: SegmentIterable<'a, T>> Iterator for PositionalIterator<'a, 'p, T, A> {
    type Item = SegmentPosition<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let offset = *self.offsets.next()?;
        Some(self.iterable.position_at(offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.offsets.size_hint()
    }
}

impl<'a, 'p, T: ScanValue, A: SegmentIterable<'a, T>> SegmentIterator<'a, T>
    for PositionalIterator<'a, 'p, T, A>
{
    // Arbitrary access order breaks the contiguous-load guarantee.
    const IS_VECTORIZABLE: bool = false;

    #[inline]
    fn remaining(&self) -> usize {
        self.offsets.len()
    }
}
