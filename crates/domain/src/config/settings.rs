// crates/domain/src/config/settings.rs
use serde::{Deserialize, Serialize};

use super::ParseTiming;

/// Filter configuration as read from a settings file or assembled by the CLI.
///
/// `indexes` stays optional so a missing specification can be reported as a
/// construction failure instead of a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSettings {
    #[serde(default)]
    pub indexes: Option<String>,
    #[serde(default)]
    pub parse_timing: ParseTiming,
}

impl FilterSettings {
    pub fn new(indexes: impl Into<String>) -> Self {
        Self {
            indexes: Some(indexes.into()),
            parse_timing: ParseTiming::default(),
        }
    }

    #[must_use]
    pub fn with_parse_timing(mut self, parse_timing: ParseTiming) -> Self {
        self.parse_timing = parse_timing;
        self
    }

    /// Supplied values win over the ones already held.
    #[must_use]
    pub fn merged_with(self, indexes: Option<String>, parse_timing: Option<ParseTiming>) -> Self {
        Self {
            indexes: indexes.or(self.indexes),
            parse_timing: parse_timing.unwrap_or(self.parse_timing),
        }
    }
}
