// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DataProviderError, DomainError, DomainResult, ErrorContext, InfraResult, InfrastructureError,
    PresentationError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{InvocationCount, RowIndex};
