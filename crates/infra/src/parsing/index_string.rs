// crates/infra/src/parsing/index_string.rs
use log::debug;
use row_index_filter_domain::{IndexRange, IndexSet};
use row_index_filter_ports::parsing::IndexParser;
use row_index_filter_shared_kernel::{DomainError, DomainResult, RowIndex};

/// Parses index strings such as `"1, 3, 5-7, 10, 12-14"`.
///
/// Entries are separated by `,`; an entry is either a single index or two
/// indexes joined by `-` (split at its first occurrence). Whitespace around
/// entries and bounds is ignored. Indexes are one-based, so `0` is rejected,
/// and ranges must not descend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DelimitedIndexParser;

const LIST_SEPARATOR: char = ',';
const RANGE_SEPARATOR: char = '-';

impl DelimitedIndexParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_entry(&self, entry: &str) -> DomainResult<IndexRange> {
        let token = entry.trim();
        if token.is_empty() {
            return Err(invalid(entry, "empty entry"));
        }
        match token.split_once(RANGE_SEPARATOR) {
            Some((start, end)) => IndexRange::new(parse_bound(token, start)?, parse_bound(token, end)?),
            None => parse_bound(token, token).map(IndexRange::single),
        }
    }
}

impl IndexParser for DelimitedIndexParser {
    fn parse(&self, spec: &str) -> DomainResult<IndexSet> {
        if spec.trim().is_empty() {
            return Err(DomainError::EmptyIndexSpecification);
        }
        let indexes = spec
            .split(LIST_SEPARATOR)
            .map(|entry| self.parse_entry(entry))
            .collect::<DomainResult<IndexSet>>()?;
        debug!("parsed index specification '{spec}' into [{indexes}]");
        Ok(indexes)
    }
}

fn parse_bound(token: &str, bound: &str) -> DomainResult<RowIndex> {
    let bound = bound.trim();
    if bound.is_empty() {
        return Err(invalid(token, "missing bound"));
    }
    if !bound.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(token, format!("'{bound}' is not a number")));
    }
    // Only digits remain, so the sole possible failure is overflow.
    let value = bound.parse::<usize>().map_err(|_| DomainError::IndexOverflow {
        token: token.to_string(),
    })?;
    RowIndex::new(value).ok_or_else(|| DomainError::ZeroIndex {
        token: token.to_string(),
    })
}

fn invalid(token: &str, details: impl Into<String>) -> DomainError {
    DomainError::InvalidIndexToken {
        token: token.to_string(),
        details: details.into(),
    }
}
