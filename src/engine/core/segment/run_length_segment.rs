use crate::engine::core::segment::iterable::RunLengthSegmentIterable;
use crate::engine::core::types::{ChunkOffset, ScanValue};
use crate::engine::errors::ScanError;

/// Run-length-encoded segment: one value and null flag per run, plus a
/// strictly increasing list of exclusive run end offsets. The last end offset
/// equals the segment length.
#[derive(Debug, Clone, PartialEq)]
pub struct RunLengthSegment<T: ScanValue> {
    values: Vec<T>,
    null_flags: Vec<bool>,
    end_offsets: Vec<ChunkOffset>,
}

impl<T: ScanValue> RunLengthSegment<T> {
    pub fn new(
        values: Vec<T>,
        null_flags: Vec<bool>,
        end_offsets: Vec<ChunkOffset>,
    ) -> Result<Self, ScanError> {
        if values.len() != null_flags.len() || values.len() != end_offsets.len() {
            return Err(ScanError::InvariantViolation(format!(
                "run-length arrays disagree: {} values, {} null flags, {} end offsets",
                values.len(),
                null_flags.len(),
                end_offsets.len()
            )));
        }
        let mut previous = 0;
        for &end in &end_offsets {
            if end <= previous {
                return Err(ScanError::InvariantViolation(format!(
                    "run end offset {end} does not increase past {previous}"
                )));
            }
            previous = end;
        }
        Ok(Self {
            values,
            null_flags,
            end_offsets,
        })
    }

    /// Encodes a row slice into runs; consecutive equal rows share a run.
    pub fn from_values(rows: &[Option<T>]) -> Self {
        let mut values: Vec<T> = Vec::new();
        let mut null_flags: Vec<bool> = Vec::new();
        let mut end_offsets: Vec<ChunkOffset> = Vec::new();

        for (index, row) in rows.iter().enumerate() {
            let extends_last_run = match (values.last(), null_flags.last()) {
                (Some(last_value), Some(&last_null)) => match row {
                    Some(value) => !last_null && last_value == value,
                    None => last_null,
                },
                _ => false,
            };
            if extends_last_run {
                *end_offsets.last_mut().expect("run exists") = index as ChunkOffset + 1;
            } else {
                match row {
                    Some(value) => {
                        values.push(value.clone());
                        null_flags.push(false);
                    }
                    None => {
                        values.push(T::stand_in().clone());
                        null_flags.push(true);
                    }
                }
                end_offsets.push(index as ChunkOffset + 1);
            }
        }

        Self {
            values,
            null_flags,
            end_offsets,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end_offsets.last().copied().unwrap_or(0) as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end_offsets.is_empty()
    }

    #[inline]
    pub fn run_count(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[inline]
    pub fn null_flags(&self) -> &[bool] {
        &self.null_flags
    }

    #[inline]
    pub fn end_offsets(&self) -> &[ChunkOffset] {
        &self.end_offsets
    }

    pub fn iterable(&self) -> RunLengthSegmentIterable<'_, T> {
        RunLengthSegmentIterable::new(&self.values, &self.null_flags, &self.end_offsets)
    }
}
