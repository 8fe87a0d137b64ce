use crate::engine::core::segment::SegmentIterator;
use crate::engine::core::types::{ChunkId, ChunkOffset, PosList, RowId, ScanValue};

/// Nominal SIMD register width in bytes; smaller registers just unroll the
/// block loop more than once.
pub const SIMD_SIZE: usize = 64;

/// Positions per block of the vectorized scan.
pub const BLOCK_SIZE: usize = SIMD_SIZE / std::mem::size_of::<ChunkOffset>();

#[repr(align(64))]
struct OffsetBlock([ChunkOffset; BLOCK_SIZE]);

/// The hot loop of the table scan: emits a `RowId` for every position whose
/// non-null value satisfies `func`.
///
/// When the iterator guarantees pure loads from contiguous storage the bulk
/// of the input runs through the blockwise path; the scalar tail below it is
/// the ground truth and the only path in debug builds and for
/// non-vectorizable iterators. `CHECK_NULL` is resolved at compile time so
/// the non-nullable instantiation carries no null handling at all.
pub fn scan_with_iterator<'a, T, I, F, const CHECK_NULL: bool>(
    func: F,
    mut iter: I,
    chunk_id: ChunkId,
    matches_out: &mut PosList,
) where
    T: ScanValue + 'a,
    I: SegmentIterator<'a, T>,
    F: Fn(&T) -> bool,
{
    if I::IS_VECTORIZABLE && !cfg!(debug_assertions) {
        scan_blockwise::<T, I, F, CHECK_NULL>(&func, &mut iter, chunk_id, matches_out);
    }

    // Scalar tail; covers the whole input when the block path did not run.
    for position in iter {
        if (!CHECK_NULL || !position.is_null()) && func(position.value()) {
            matches_out.push(RowId::new(chunk_id, position.chunk_offset()));
        }
    }
}

/// Blockwise match loop. For each position the block stores `offset + 1` on a
/// match and `0` otherwise, keeping the body free of branches so the compiler
/// can vectorize it; the `+ 1` disambiguates a match at offset 0. A bitmap
/// sweep then appends the matching offsets.
///
/// Iterators routed here must not mutate hidden state in `next`; that is what
/// `IS_VECTORIZABLE` asserts.
pub(crate) fn scan_blockwise<'a, T, I, F, const CHECK_NULL: bool>(
    func: &F,
    iter: &mut I,
    chunk_id: ChunkId,
    matches_out: &mut PosList,
) where
    T: ScanValue + 'a,
    I: SegmentIterator<'a, T>,
    F: Fn(&T) -> bool,
{
    let mut block = OffsetBlock([0; BLOCK_SIZE]);

    // An exactly-full final block goes through here too; the tail only sees
    // the sub-block remainder.
    while iter.remaining() >= BLOCK_SIZE {
        for slot in block.0.iter_mut() {
            let position = iter.next().expect("block is bounded by remaining()");
            let matches =
                ((!CHECK_NULL | !position.is_null()) & func(position.value())) as ChunkOffset;
            *slot = matches * (position.chunk_offset() + 1);
        }

        let mut bitmap: u16 = 0;
        for (bit, &slot) in block.0.iter().enumerate() {
            bitmap |= ((slot != 0) as u16) << bit;
        }
        while bitmap != 0 {
            let bit = bitmap.trailing_zeros() as usize;
            matches_out.push(RowId::new(chunk_id, block.0[bit] - 1));
            bitmap &= bitmap - 1;
        }
    }
}

/// Column-vs-column variant: both sides advance in lockstep and a row only
/// matches when neither side is null. Plain scalar loop; the two-iterator
/// body is too entangled to vectorize profitably.
pub fn scan_with_iterators_binary<'a, 'b, T, L, R, F, const CHECK_NULL: bool>(
    func: F,
    left: L,
    right: R,
    chunk_id: ChunkId,
    matches_out: &mut PosList,
) where
    T: ScanValue + 'a + 'b,
    L: SegmentIterator<'a, T>,
    R: SegmentIterator<'b, T>,
    F: Fn(&T, &T) -> bool,
{
    for (left_position, right_position) in left.zip(right) {
        let non_null =
            !CHECK_NULL || (!left_position.is_null() && !right_position.is_null());
        if non_null && func(left_position.value(), right_position.value()) {
            matches_out.push(RowId::new(chunk_id, left_position.chunk_offset()));
        }
    }
}
