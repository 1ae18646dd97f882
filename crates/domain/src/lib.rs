#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod selection;

pub use config::{FilterSettings, ParseTiming};
pub use selection::{IndexRange, IndexSet, IndexSpec};
