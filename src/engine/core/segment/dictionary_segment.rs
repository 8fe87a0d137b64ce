use std::cmp::Ordering;

use crate::engine::core::segment::iterable::DictionarySegmentIterable;
use crate::engine::core::types::ScanValue;
use crate::engine::errors::ScanError;

/// Dictionary-encoded segment: a strictly ascending table of distinct values
/// and one code per row. The reserved code `dictionary.len()` denotes NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct DictionarySegment<T: ScanValue> {
    dictionary: Vec<T>,
    codes: Vec<u32>,
}

impl<T: ScanValue> DictionarySegment<T> {
    pub fn new(dictionary: Vec<T>, codes: Vec<u32>) -> Result<Self, ScanError> {
        for pair in dictionary.windows(2) {
            if pair[0].partial_cmp(&pair[1]) != Some(Ordering::Less) {
                return Err(ScanError::InvariantViolation(
                    "dictionary values are not strictly ascending".to_string(),
                ));
            }
        }
        let null_code = dictionary.len() as u32;
        if let Some(code) = codes.iter().find(|&&code| code > null_code) {
            return Err(ScanError::InvariantViolation(format!(
                "dictionary code {code} exceeds null code {null_code}"
            )));
        }
        Ok(Self { dictionary, codes })
    }

    /// Encodes a row slice: builds the sorted distinct-value table and maps
    /// each row to its code, nulls to the reserved code.
    pub fn from_values(rows: &[Option<T>]) -> Self {
        let mut dictionary: Vec<T> = rows.iter().flatten().cloned().collect();
        dictionary.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        dictionary.dedup();

        let null_code = dictionary.len() as u32;
        let codes = rows
            .iter()
            .map(|row| match row {
                Some(value) => dictionary.partition_point(|d| {
                    d.partial_cmp(value) == Some(Ordering::Less)
                }) as u32,
                None => null_code,
            })
            .collect();
        Self { dictionary, codes }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    #[inline]
    pub fn null_code(&self) -> u32 {
        self.dictionary.len() as u32
    }

    #[inline]
    pub fn unique_values_count(&self) -> usize {
        self.dictionary.len()
    }

    #[inline]
    pub fn dictionary(&self) -> &[T] {
        &self.dictionary
    }

    #[inline]
    pub fn codes(&self) -> &[u32] {
        &self.codes
    }

    /// First code whose dictionary value is not less than `value`.
    pub fn lower_bound_value_id(&self, value: &T) -> u32 {
        self.dictionary
            .partition_point(|d| d.partial_cmp(value) == Some(Ordering::Less)) as u32
    }

    /// First code whose dictionary value is greater than `value`.
    pub fn upper_bound_value_id(&self, value: &T) -> u32 {
        self.dictionary
            .partition_point(|d| d.partial_cmp(value) != Some(Ordering::Greater))
            as u32
    }

    pub fn iterable(&self) -> DictionarySegmentIterable<'_, T> {
        DictionarySegmentIterable::new(&self.dictionary, &self.codes)
    }
}
