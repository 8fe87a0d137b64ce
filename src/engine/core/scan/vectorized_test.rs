use crate::engine::core::scan::vectorized::{
    BLOCK_SIZE, scan_blockwise, scan_with_iterator, scan_with_iterators_binary,
};
use crate::engine::core::segment::{SegmentIterable, SegmentIterator, ValueSegment};
use crate::engine::core::types::{ChunkOffset, PosList};

fn rows_of_len(len: usize) -> Vec<Option<i32>> {
    // Every third row null, values cycle so matches land in every block.
    (0..len)
        .map(|i| {
            if i % 3 == 2 {
                None
            } else {
                Some((i % 7) as i32)
            }
        })
        .collect()
}

fn scalar_reference(rows: &[Option<i32>], func: impl Fn(&i32) -> bool) -> Vec<ChunkOffset> {
    rows.iter()
        .enumerate()
        .filter_map(|(offset, row)| match row {
            Some(value) if func(value) => Some(offset as ChunkOffset),
            _ => None,
        })
        .collect()
}

fn offsets(matches: &PosList) -> Vec<ChunkOffset> {
    matches.iter().map(|row_id| row_id.chunk_offset).collect()
}

#[test]
fn blockwise_and_scalar_agree_around_block_boundaries() {
    for len in [
        0,
        1,
        BLOCK_SIZE - 1,
        BLOCK_SIZE,
        BLOCK_SIZE + 1,
        2 * BLOCK_SIZE + 1,
        5 * BLOCK_SIZE + 3,
    ] {
        let rows = rows_of_len(len);
        let segment = ValueSegment::from_nullable_values(rows.clone());
        let func = |value: &i32| *value >= 3;

        let mut blockwise = PosList::new();
        let mut iter = segment.iterable().iter();
        scan_blockwise::<i32, _, _, true>(&func, &mut iter, 0, &mut blockwise);
        // The tail that the block loop leaves behind.
        for position in iter {
            if !position.is_null() && func(position.value()) {
                blockwise.push(crate::engine::core::types::RowId::new(
                    0,
                    position.chunk_offset(),
                ));
            }
        }

        assert_eq!(offsets(&blockwise), scalar_reference(&rows, func), "len {len}");
    }
}

#[test]
fn exactly_full_final_block_is_consumed_blockwise() {
    let rows = rows_of_len(BLOCK_SIZE);
    let segment = ValueSegment::from_nullable_values(rows.clone());
    let func = |value: &i32| *value >= 3;

    let mut matches = PosList::new();
    let mut iter = segment.iterable().iter();
    scan_blockwise::<i32, _, _, true>(&func, &mut iter, 0, &mut matches);

    assert_eq!(iter.remaining(), 0, "no tail left behind");
    assert_eq!(offsets(&matches), scalar_reference(&rows, func));
}

#[test]
fn match_at_offset_zero_is_not_lost() {
    // Regression guard for the offset + 1 disambiguation in the block store.
    let mut rows = rows_of_len(3 * BLOCK_SIZE);
    rows[0] = Some(100);
    let segment = ValueSegment::from_nullable_values(rows);
    let func = |value: &i32| *value == 100;

    let mut matches = PosList::new();
    let mut iter = segment.iterable().iter();
    scan_blockwise::<i32, _, _, true>(&func, &mut iter, 0, &mut matches);
    assert_eq!(offsets(&matches), vec![0]);
}

#[test]
fn scalar_path_skips_nulls_when_checked() {
    let segment = ValueSegment::from_nullable_values(vec![Some(5), None, Some(7), None]);
    let mut matches = PosList::new();
    scan_with_iterator::<i32, _, _, true>(
        |value| *value >= 5,
        segment.iterable().iter(),
        2,
        &mut matches,
    );
    assert_eq!(offsets(&matches), vec![0, 2]);
    assert!(matches.iter().all(|row_id| row_id.chunk_id == 2));
}

#[test]
fn unchecked_path_treats_stand_ins_as_values() {
    // With CHECK_NULL off the null flag is ignored; only non-nullable
    // columns are routed this way.
    let segment = ValueSegment::from_values(vec![1, 8, 3, 9]);
    let mut matches = PosList::new();
    scan_with_iterator::<i32, _, _, false>(
        |value| *value > 5,
        segment.iterable().iter(),
        0,
        &mut matches,
    );
    assert_eq!(offsets(&matches), vec![1, 3]);
}

#[test]
fn results_are_in_ascending_offset_order() {
    let rows = rows_of_len(4 * BLOCK_SIZE + 7);
    let segment = ValueSegment::from_nullable_values(rows);
    let mut matches = PosList::new();
    let mut iter = segment.iterable().iter();
    scan_blockwise::<i32, _, _, true>(&|value: &i32| *value != 3, &mut iter, 0, &mut matches);
    let got = offsets(&matches);
    assert!(got.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn binary_scan_skips_rows_where_either_side_is_null() {
    let left = ValueSegment::from_nullable_values(vec![Some(1), None, Some(3), Some(4)]);
    let right = ValueSegment::from_nullable_values(vec![Some(1), Some(2), None, Some(3)]);
    let mut matches = PosList::new();
    scan_with_iterators_binary::<i32, _, _, _, true>(
        |l, r| l >= r,
        left.iterable().iter(),
        right.iterable().iter(),
        0,
        &mut matches,
    );
    assert_eq!(offsets(&matches), vec![0, 3]);
}
