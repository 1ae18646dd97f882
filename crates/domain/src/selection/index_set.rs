// crates/domain/src/selection/index_set.rs
use std::fmt;

use row_index_filter_shared_kernel::RowIndex;

use super::IndexRange;

/// Row positions described by an index specification.
///
/// Ranges are kept in specification order, overlaps and duplicates included.
/// Membership is answered by scanning the ranges, so lookups never index
/// into the underlying storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexSet {
    ranges: Vec<IndexRange>,
}

impl IndexSet {
    pub fn from_ranges(ranges: impl IntoIterator<Item = IndexRange>) -> Self {
        Self {
            ranges: ranges.into_iter().collect(),
        }
    }

    #[inline]
    pub fn contains(&self, row: RowIndex) -> bool {
        self.ranges.iter().any(|range| range.contains(row))
    }

    /// Every listed row in specification order, e.g. `1,3,5-7` yields 1, 3, 5, 6, 7.
    pub fn iter(&self) -> impl Iterator<Item = RowIndex> + '_ {
        self.ranges.iter().flat_map(|range| range.iter())
    }
}

impl FromIterator<IndexRange> for IndexSet {
    fn from_iter<I: IntoIterator<Item = IndexRange>>(iter: I) -> Self {
        Self::from_ranges(iter)
    }
}

impl fmt::Display for IndexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{range}")?;
        }
        Ok(())
    }
}
