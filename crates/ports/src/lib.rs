//! # Ports
//!
//! Interface definitions for the collaborators of a row filter.
//!
//! - [`filter`]: the capability a data provider expects from a row filter
//! - [`parsing`]: turning index specification text into an index set
//! - [`rows`]: reading candidate rows from an input
//!
//! These ports keep the use cases independent of concrete parsers and
//! input adapters.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filter;
pub mod parsing;
pub mod rows;
