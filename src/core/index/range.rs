//! Inclusive ranges of index identifiers

use super::identifier::IndexIdentifier;
use crate::utils::error::{MaintenanceError, Result};
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

/// Inclusive `start..=end` range sharing one prefix
///
/// Endpoints with different prefixes are rejected rather than silently taking
/// the start prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRange {
    start: IndexIdentifier,
    end: IndexIdentifier,
}

impl IndexRange {
    pub fn new(start: IndexIdentifier, end: IndexIdentifier) -> Result<Self> {
        if start.prefix() != end.prefix() {
            return Err(MaintenanceError::range(format!(
                "prefixes differ: '{}' vs '{}'",
                start.prefix(),
                end.prefix()
            )));
        }
        if end.sequence() < start.sequence() {
            return Err(MaintenanceError::range("start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Parse both endpoints, then build the range
    pub fn parse(start_raw: &str, end_raw: &str) -> Result<Self> {
        let start = IndexIdentifier::parse(start_raw)?;
        let end = IndexIdentifier::parse(end_raw)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> &IndexIdentifier {
        &self.start
    }

    pub fn end(&self) -> &IndexIdentifier {
        &self.end
    }

    pub fn prefix(&self) -> &str {
        self.start.prefix()
    }

    pub fn len(&self) -> usize {
        (self.end.sequence() - self.start.sequence()) as usize + 1
    }

    /// Never true, a range holds at least its start
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Ascending iterator over every identifier; can be called any number of times
    pub fn iter(&self) -> IndexRangeIter<'_> {
        IndexRangeIter {
            base: &self.start,
            sequences: self.start.sequence()..=self.end.sequence(),
        }
    }
}

impl<'a> IntoIterator for &'a IndexRange {
    type Item = IndexIdentifier;
    type IntoIter = IndexRangeIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator produced by [`IndexRange::iter`]
#[derive(Debug, Clone)]
pub struct IndexRangeIter<'a> {
    base: &'a IndexIdentifier,
    sequences: RangeInclusive<u32>,
}

impl Iterator for IndexRangeIter<'_> {
    type Item = IndexIdentifier;

    fn next(&mut self) -> Option<Self::Item> {
        self.sequences.next().map(|n| self.base.with_sequence(n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sequences.size_hint()
    }
}

impl DoubleEndedIterator for IndexRangeIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.sequences.next_back().map(|n| self.base.with_sequence(n))
    }
}

impl ExactSizeIterator for IndexRangeIter<'_> {}

impl FusedIterator for IndexRangeIter<'_> {}

/// Expand two raw endpoints into the ordered list of identifiers between them
pub fn expand(start_raw: &str, end_raw: &str) -> Result<Vec<IndexIdentifier>> {
    Ok(IndexRange::parse(start_raw, end_raw)?.iter().collect())
}
