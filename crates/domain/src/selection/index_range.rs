// crates/domain/src/selection/index_range.rs
use std::fmt;

use row_index_filter_shared_kernel::{DomainError, DomainResult, RowIndex};

/// Inclusive range of row positions.
///
/// A bare index `n` is the range `n..=n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexRange {
    start: RowIndex,
    end: RowIndex,
}

impl IndexRange {
    pub fn new(start: RowIndex, end: RowIndex) -> DomainResult<Self> {
        if start > end {
            return Err(DomainError::DescendingRange {
                start: start.value(),
                end: end.value(),
            });
        }
        Ok(Self { start, end })
    }

    pub const fn single(index: RowIndex) -> Self {
        Self { start: index, end: index }
    }

    #[inline]
    pub fn contains(&self, row: RowIndex) -> bool {
        row >= self.start && row <= self.end
    }

    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Yields every row of the range in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = RowIndex> + '_ {
        (self.start.value()..=self.end.value()).filter_map(RowIndex::new)
    }
}

impl From<RowIndex> for IndexRange {
    fn from(index: RowIndex) -> Self {
        Self::single(index)
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}
