use rayon::prelude::*;
use tracing::{debug, trace};

use crate::engine::core::scan::cancellation::CancellationToken;
use crate::engine::core::scan::sorted_search::SortedSegmentSearch;
use crate::engine::core::scan::vectorized::scan_with_iterator;
use crate::engine::core::segment::{EncodedSegment, Segment, SegmentIterable, SegmentIterator};
use crate::engine::core::table::{Chunk, Table};
use crate::engine::core::types::{
    ChunkId, ColumnId, OrderByMode, PosList, PredicateCondition, RowId, ScanValue, Value,
};
use crate::engine::errors::ScanError;
use crate::shared::config::CONFIG;

/// Evaluates a single column-vs-value comparison over a table and produces
/// the position list of matching rows.
///
/// Data type and encoding are resolved once per chunk; everything below the
/// dispatch runs monomorphized. Chunks are independent and scanned in
/// parallel, with per-chunk results reassembled in chunk order.
pub struct TableScan<'t> {
    table: &'t Table,
    column_id: ColumnId,
    predicate: PredicateCondition,
    search_value: Value,
}

impl<'t> TableScan<'t> {
    pub fn new(
        table: &'t Table,
        column_id: ColumnId,
        predicate: PredicateCondition,
        search_value: Value,
    ) -> Self {
        Self {
            table,
            column_id,
            predicate,
            search_value,
        }
    }

    pub fn execute(&self) -> Result<PosList, ScanError> {
        self.execute_cancellable(&CancellationToken::new())
    }

    /// Runs the scan, checking `token` before each chunk. Cancellation
    /// surfaces as an error; no partial result is exposed.
    pub fn execute_cancellable(&self, token: &CancellationToken) -> Result<PosList, ScanError> {
        if !self.predicate.is_scannable() {
            return Err(ScanError::UnsupportedPredicate(self.predicate));
        }
        let column = self
            .table
            .column(self.column_id)
            .ok_or(ScanError::ColumnOutOfRange(self.column_id))?;

        // Comparing anything against NULL yields no match; IS [NOT] NULL is
        // decomposed by the caller before reaching this operator.
        let Some(value_type) = self.search_value.data_type() else {
            debug!(column = %column.name, "search value is NULL, scan yields no rows");
            return Ok(PosList::new());
        };
        if value_type != column.data_type {
            return Err(ScanError::TypeMismatch {
                column_type: column.data_type,
                value: self.search_value.clone(),
            });
        }

        debug!(
            column = %column.name,
            predicate = %self.predicate,
            value = %self.search_value,
            chunks = self.table.chunks().len(),
            "starting table scan"
        );

        let chunks = self.table.chunks();
        let per_chunk: Result<Vec<PosList>, ScanError> = if CONFIG.scan.parallel_chunks {
            chunks
                .par_iter()
                .enumerate()
                .map(|(chunk_id, chunk)| self.scan_chunk(chunk_id as ChunkId, chunk, token))
                .collect()
        } else {
            chunks
                .iter()
                .enumerate()
                .map(|(chunk_id, chunk)| self.scan_chunk(chunk_id as ChunkId, chunk, token))
                .collect()
        };

        let mut result = PosList::new();
        for matches in per_chunk? {
            result.extend(matches);
        }
        Ok(result)
    }

    fn scan_chunk(
        &self,
        chunk_id: ChunkId,
        chunk: &Chunk,
        token: &CancellationToken,
    ) -> Result<PosList, ScanError> {
        if token.is_cancelled() {
            return Err(ScanError::Cancelled);
        }
        let segment = chunk.segment(self.column_id).ok_or_else(|| {
            ScanError::InvariantViolation(format!(
                "chunk {chunk_id} has no segment for column {}",
                self.column_id
            ))
        })?;

        let mut matches = PosList::new();
        match segment {
            Segment::Int32(encoded) => self.scan_encoded(encoded, chunk, chunk_id, &mut matches)?,
            Segment::Int64(encoded) => self.scan_encoded(encoded, chunk, chunk_id, &mut matches)?,
            Segment::Float(encoded) => self.scan_encoded(encoded, chunk, chunk_id, &mut matches)?,
            Segment::Double(encoded) => self.scan_encoded(encoded, chunk, chunk_id, &mut matches)?,
            Segment::String(encoded) => self.scan_encoded(encoded, chunk, chunk_id, &mut matches)?,
        }
        trace!(chunk_id, matches = matches.len(), "chunk scanned");
        Ok(matches)
    }

    fn scan_encoded<T: ScanValue>(
        &self,
        segment: &EncodedSegment<T>,
        chunk: &Chunk,
        chunk_id: ChunkId,
        matches: &mut PosList,
    ) -> Result<(), ScanError> {
        let search_value = T::from_value(&self.search_value).ok_or(ScanError::TypeMismatch {
            column_type: T::DATA_TYPE,
            value: self.search_value.clone(),
        })?;

        match chunk.sort_order_of(self.column_id) {
            Some(order_by) => {
                self.scan_sorted(segment, order_by, &search_value, chunk_id, matches)
            }
            None => {
                let nullable = self
                    .table
                    .column(self.column_id)
                    .map_or(true, |column| column.nullable);
                self.scan_unsorted(segment, &search_value, chunk_id, nullable, matches)
            }
        }
    }

    fn scan_sorted<T: ScanValue>(
        &self,
        segment: &EncodedSegment<T>,
        order_by: OrderByMode,
        search_value: &T,
        chunk_id: ChunkId,
        matches: &mut PosList,
    ) -> Result<(), ScanError> {
        match segment {
            EncodedSegment::Value(inner) => sorted_scan_on(
                inner.iterable(),
                order_by,
                self.predicate,
                search_value,
                chunk_id,
                matches,
            ),
            EncodedSegment::Dictionary(inner) => sorted_scan_on(
                inner.iterable(),
                order_by,
                self.predicate,
                search_value,
                chunk_id,
                matches,
            ),
            EncodedSegment::RunLength(inner) => sorted_scan_on(
                inner.iterable(),
                order_by,
                self.predicate,
                search_value,
                chunk_id,
                matches,
            ),
        }
    }

    fn scan_unsorted<T: ScanValue>(
        &self,
        segment: &EncodedSegment<T>,
        search_value: &T,
        chunk_id: ChunkId,
        nullable: bool,
        matches: &mut PosList,
    ) -> Result<(), ScanError> {
        // One monomorphized inner loop per predicate; the comparator is
        // resolved here, once per chunk, never per row.
        match self.predicate {
            PredicateCondition::Equals => {
                unsorted_scan_on(segment, |l, r| l == r, search_value, chunk_id, nullable, matches)
            }
            PredicateCondition::NotEquals => {
                unsorted_scan_on(segment, |l, r| l != r, search_value, chunk_id, nullable, matches)
            }
            PredicateCondition::LessThan => {
                unsorted_scan_on(segment, |l, r| l < r, search_value, chunk_id, nullable, matches)
            }
            PredicateCondition::LessThanEquals => {
                unsorted_scan_on(segment, |l, r| l <= r, search_value, chunk_id, nullable, matches)
            }
            PredicateCondition::GreaterThan => {
                unsorted_scan_on(segment, |l, r| l > r, search_value, chunk_id, nullable, matches)
            }
            PredicateCondition::GreaterThanEquals => {
                unsorted_scan_on(segment, |l, r| l >= r, search_value, chunk_id, nullable, matches)
            }
            predicate => return Err(ScanError::UnsupportedPredicate(predicate)),
        }
        Ok(())
    }
}

/// Sorted-path dispatch for one concrete iterable. Emits matching offsets in
/// ascending order straight from the resolved range(s).
fn sorted_scan_on<'a, T, A>(
    iterable: A,
    order_by: OrderByMode,
    predicate: PredicateCondition,
    search_value: &'a T,
    chunk_id: ChunkId,
    matches: &mut PosList,
) -> Result<(), ScanError>
where
    T: ScanValue,
    A: SegmentIterable<'a, T>,
{
    if !A::IS_POINT_ACCESSIBLE {
        return Err(ScanError::EncodingUnsupported(
            "sorted search requires point access",
        ));
    }
    let search = SortedSegmentSearch::new(iterable, order_by, predicate, search_value);
    search.scan_sorted_segment(|range| {
        for offset in range {
            matches.push(RowId::new(chunk_id, offset));
        }
    })
}

/// Unsorted-path dispatch: one call per encoding, nullability folded into a
/// compile-time flag so the non-nullable loop carries no null checks.
fn unsorted_scan_on<T, F>(
    segment: &EncodedSegment<T>,
    func: F,
    search_value: &T,
    chunk_id: ChunkId,
    nullable: bool,
    matches: &mut PosList,
) where
    T: ScanValue,
    F: Fn(&T, &T) -> bool + Copy,
{
    let comparator = move |left: &T| func(left, search_value);
    match segment {
        EncodedSegment::Value(inner) => {
            dispatch_nullable(inner.iterable().iter(), comparator, chunk_id, nullable, matches)
        }
        EncodedSegment::Dictionary(inner) => {
            dispatch_nullable(inner.iterable().iter(), comparator, chunk_id, nullable, matches)
        }
        EncodedSegment::RunLength(inner) => {
            dispatch_nullable(inner.iterable().iter(), comparator, chunk_id, nullable, matches)
        }
    }
}

fn dispatch_nullable<'a, T, I, F>(
    iter: I,
    func: F,
    chunk_id: ChunkId,
    nullable: bool,
    matches: &mut PosList,
) where
    T: ScanValue,
    I: SegmentIterator<'a, T>,
    F: Fn(&T) -> bool,
{
    if nullable {
        scan_with_iterator::<T, I, F, true>(func, iter, chunk_id, matches);
    } else {
        scan_with_iterator::<T, I, F, false>(func, iter, chunk_id, matches);
    }
}
