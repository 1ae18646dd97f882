// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod parsing;
pub mod persistence;
pub mod rows;

pub use parsing::DelimitedIndexParser;
pub use persistence::SettingsReader;
pub use rows::TextRowSource;
