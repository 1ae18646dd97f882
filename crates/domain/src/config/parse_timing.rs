// crates/domain/src/config/parse_timing.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// When a filter interprets its index specification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseTiming {
    /// Parse on the first evaluation; malformed specs fail that call.
    #[default]
    Lazy,
    /// Parse while constructing the filter; malformed specs fail construction.
    Eager,
}

impl FromStr for ParseTiming {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lazy" => Ok(Self::Lazy),
            "eager" => Ok(Self::Eager),
            other => Err(format!("Unknown parse timing: {other}")),
        }
    }
}

impl fmt::Display for ParseTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lazy => f.write_str("lazy"),
            Self::Eager => f.write_str("eager"),
        }
    }
}
