use std::ops::Range;

use crate::engine::core::segment::{SegmentIterable, SegmentPosition};
use crate::engine::core::types::{ChunkOffset, OrderByMode, PredicateCondition, ScanValue};
use crate::engine::errors::ScanError;

/// Predicate-aware range reduction over a sorted segment.
///
/// Instead of scanning linearly, the search trims the null prefix or suffix,
/// binary-searches the equal-range boundaries of the search value and hands
/// the resulting offset range(s) to a functor. `first_bound` always returns
/// the smaller offset and `last_bound` the larger one, independent of sort
/// direction; on a descending segment `first_bound` is therefore an upper
/// bound in value terms.
pub struct SortedSegmentSearch<'a, T: ScanValue, A: SegmentIterable<'a, T>> {
    iterable: A,
    begin: ChunkOffset,
    end: ChunkOffset,
    predicate: PredicateCondition,
    search_value: &'a T,
    is_ascending: bool,
    is_nulls_first: bool,
}

impl<'a, T: ScanValue, A: SegmentIterable<'a, T>> SortedSegmentSearch<'a, T, A> {
    pub fn new(
        iterable: A,
        order_by: OrderByMode,
        predicate: PredicateCondition,
        search_value: &'a T,
    ) -> Self {
        let end = iterable.len() as ChunkOffset;
        Self {
            iterable,
            begin: 0,
            end,
            predicate,
            search_value,
            is_ascending: order_by.is_ascending(),
            is_nulls_first: order_by.is_nulls_first(),
        }
    }

    /// First offset in `[begin, end)` for which `pred` turns false.
    /// `pred` must be monotone over the range.
    fn partition_point(
        &self,
        mut low: ChunkOffset,
        mut high: ChunkOffset,
        pred: impl Fn(&SegmentPosition<'a, T>) -> bool,
    ) -> ChunkOffset {
        while low < high {
            let mid = low + (high - low) / 2;
            if pred(&self.iterable.position_at(mid)) {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        low
    }

    fn first_bound(&self) -> ChunkOffset {
        if self.is_ascending {
            self.partition_point(self.begin, self.end, |position| {
                position.value() < self.search_value
            })
        } else {
            self.partition_point(self.begin, self.end, |position| {
                position.value() > self.search_value
            })
        }
    }

    fn last_bound(&self) -> ChunkOffset {
        if self.is_ascending {
            self.partition_point(self.begin, self.end, |position| {
                position.value() <= self.search_value
            })
        } else {
            self.partition_point(self.begin, self.end, |position| {
                position.value() >= self.search_value
            })
        }
    }

    /// Narrows `[begin, end)` to the rows matching the predicate.
    fn set_begin_and_end(&mut self) -> Result<(), ScanError> {
        if self.predicate == PredicateCondition::Equals {
            self.begin = self.first_bound();
            self.end = self.last_bound();
            return Ok(());
        }

        if self.is_ascending {
            match self.predicate {
                PredicateCondition::GreaterThanEquals => self.begin = self.first_bound(),
                PredicateCondition::GreaterThan => self.begin = self.last_bound(),
                PredicateCondition::LessThanEquals => self.end = self.last_bound(),
                PredicateCondition::LessThan => self.end = self.first_bound(),
                predicate => return Err(ScanError::UnsupportedPredicate(predicate)),
            }
        } else {
            match self.predicate {
                PredicateCondition::LessThanEquals => self.begin = self.first_bound(),
                PredicateCondition::LessThan => self.begin = self.last_bound(),
                PredicateCondition::GreaterThanEquals => self.end = self.last_bound(),
                PredicateCondition::GreaterThan => self.end = self.first_bound(),
                predicate => return Err(ScanError::UnsupportedPredicate(predicate)),
            }
        }
        Ok(())
    }

    /// NotEquals can match two ranges, one below and one above the search
    /// value. The early exits compare against the null-trimmed `begin`/`end`
    /// and only skip work; removing them would not change the result.
    fn handle_not_equals(&self, functor: &mut impl FnMut(Range<ChunkOffset>)) {
        let first_occurrence = self.first_bound();
        if first_occurrence == self.end {
            // Value absent: the whole trimmed range matches.
            functor(self.begin..self.end);
            return;
        }

        let last_occurrence = self.last_bound();
        if last_occurrence == self.end {
            // Value runs to the end: only the low range remains.
            functor(self.begin..first_occurrence);
            return;
        }

        if first_occurrence == self.begin {
            // Value starts at the beginning: only the high range remains.
            functor(last_occurrence..self.end);
            return;
        }

        functor(self.begin..first_occurrence);
        functor(last_occurrence..self.end);
    }

    /// Resolves the matching offset range(s) and passes them to `functor`
    /// in ascending offset order.
    pub fn scan_sorted_segment(
        mut self,
        mut functor: impl FnMut(Range<ChunkOffset>),
    ) -> Result<(), ScanError> {
        // Nulls sit contiguously at one end; shrink the effective range first.
        if self.is_nulls_first {
            self.begin = self.partition_point(self.begin, self.end, |position| position.is_null());
        } else {
            self.end = self.partition_point(self.begin, self.end, |position| !position.is_null());
        }

        if self.predicate == PredicateCondition::NotEquals {
            self.handle_not_equals(&mut functor);
            return Ok(());
        }

        self.set_begin_and_end()?;
        functor(self.begin..self.end);
        Ok(())
    }
}
