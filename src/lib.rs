//! Positional row selection for data-driven tests.
//!
//! An [`IndexInclusionFilter`] is consulted once per candidate row and keeps
//! the rows whose ordinal position appears in an index specification such as
//! `"1,3,5-7,10,12-14"`.
//!
//! ```
//! use row_index_filter::{index_inclusion_filter, DataProviderFilter};
//!
//! let mut filter = index_inclusion_filter("1,3-4");
//! let kept: Vec<bool> = ["a", "b", "c", "d", "e"]
//!     .iter()
//!     .map(|row| filter.filter(*row).unwrap())
//!     .collect();
//! assert_eq!(kept, [true, false, true, true, false]);
//! ```

#![allow(clippy::multiple_crate_versions)]

use std::sync::Arc;

pub mod app;
pub mod cli;
pub mod output;

pub use row_index_filter_domain::{FilterSettings, IndexRange, IndexSet, IndexSpec, ParseTiming};
pub use row_index_filter_infra::{DelimitedIndexParser, SettingsReader, TextRowSource};
pub use row_index_filter_ports::{
    filter::DataProviderFilter,
    parsing::IndexParser,
    rows::{RowInput, RowSource},
};
pub use row_index_filter_shared_kernel::{
    DataProviderError, DomainError, ErrorContext, InvocationCount, Result, RowIndex,
};
pub use row_index_filter_usecase::{
    EvaluationContext, IndexInclusionFilter, SelectRows, SelectedRow, SelectionOutput, select_rows,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lazy filter using the default `,`/`-` index grammar.
pub fn index_inclusion_filter(spec: impl Into<IndexSpec>) -> IndexInclusionFilter {
    IndexInclusionFilter::new(spec, default_parser())
}

/// Builds a filter from settings, using the default index grammar.
pub fn filter_from_settings(settings: &FilterSettings) -> Result<IndexInclusionFilter> {
    IndexInclusionFilter::from_settings(settings, default_parser())
}

fn default_parser() -> Arc<dyn IndexParser> {
    Arc::new(DelimitedIndexParser::default())
}
