// crates/domain/src/selection/spec.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw index specification text, e.g. `"1,3,5-7,10,12-14"`.
///
/// Kept exactly as supplied; interpreting it is the job of an index parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexSpec(String);

impl IndexSpec {
    pub fn new(spec: impl Into<String>) -> Self {
        Self(spec.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IndexSpec {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for IndexSpec {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for IndexSpec {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IndexSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
