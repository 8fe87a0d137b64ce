use crate::engine::core::segment::iterable::ValueSegmentIterable;
use crate::engine::core::types::ScanValue;
use crate::engine::errors::ScanError;

/// Unencoded segment: contiguous value vec plus an optional null-flag vec.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSegment<T: ScanValue> {
    values: Vec<T>,
    null_flags: Option<Vec<bool>>,
}

impl<T: ScanValue> ValueSegment<T> {
    pub fn new(values: Vec<T>, null_flags: Option<Vec<bool>>) -> Result<Self, ScanError> {
        if let Some(flags) = &null_flags {
            if flags.len() != values.len() {
                return Err(ScanError::InvariantViolation(format!(
                    "value segment has {} values but {} null flags",
                    values.len(),
                    flags.len()
                )));
            }
        }
        Ok(Self { values, null_flags })
    }

    /// Non-nullable segment from plain values.
    pub fn from_values(values: Vec<T>) -> Self {
        Self {
            values,
            null_flags: None,
        }
    }

    /// Nullable segment; null rows keep a stand-in value behind the flag.
    pub fn from_nullable_values(rows: Vec<Option<T>>) -> Self {
        let mut values = Vec::with_capacity(rows.len());
        let mut null_flags = Vec::with_capacity(rows.len());
        for row in rows {
            match row {
                Some(value) => {
                    values.push(value);
                    null_flags.push(false);
                }
                None => {
                    values.push(T::stand_in().clone());
                    null_flags.push(true);
                }
            }
        }
        Self {
            values,
            null_flags: Some(null_flags),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn is_nullable(&self) -> bool {
        self.null_flags.is_some()
    }

    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[inline]
    pub fn null_flags(&self) -> Option<&[bool]> {
        self.null_flags.as_deref()
    }

    pub fn iterable(&self) -> ValueSegmentIterable<'_, T> {
        ValueSegmentIterable::new(&self.values, self.null_flags.as_deref())
    }
}
