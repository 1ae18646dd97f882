// crates/shared-kernel/src/value_objects/row_index.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// One-based ordinal position of a data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct RowIndex(pub(crate) usize);

impl RowIndex {
    pub const FIRST: Self = Self(1);

    /// Returns `None` for `0`, which is never a valid row position.
    #[inline]
    pub const fn new(value: usize) -> Option<Self> {
        if value == 0 { None } else { Some(Self(value)) }
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for RowIndex {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| "row index must be at least 1".to_string())
    }
}

impl From<RowIndex> for usize {
    fn from(value: RowIndex) -> Self {
        value.0
    }
}

impl PartialEq<usize> for RowIndex {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for RowIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
