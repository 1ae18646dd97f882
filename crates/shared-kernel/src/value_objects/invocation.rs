// crates/shared-kernel/src/value_objects/invocation.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use super::RowIndex;

/// Number of times a filter has been evaluated.
///
/// Only ever moves forward: the value after N calls to [`advance`](Self::advance)
/// is N, and the returned [`RowIndex`] is the ordinal of the row being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvocationCount(usize);

impl InvocationCount {
    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn advance(&mut self) -> RowIndex {
        self.0 += 1;
        RowIndex(self.0)
    }
}

impl From<InvocationCount> for usize {
    fn from(value: InvocationCount) -> Self {
        value.0
    }
}

impl PartialEq<usize> for InvocationCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for InvocationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
