//! # Use Cases
//!
//! Application-level row filtering.
//!
//! - [`context`]: per-filter evaluation state (the invocation counter)
//! - [`inclusion`]: the index inclusion filter
//! - [`select`]: drives a filter over rows read from a [`RowSource`](row_index_filter_ports::rows::RowSource)
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod context;
pub mod dto;
pub mod inclusion;
pub mod select;

pub use context::EvaluationContext;
pub use dto::{SelectedRow, SelectionOutput};
pub use inclusion::IndexInclusionFilter;
pub use select::{SelectRows, select_rows};
