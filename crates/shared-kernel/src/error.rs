// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
///
/// This is the failure surfaced by a data provider filter; callers are
/// expected to abort or report the row that produced it.
#[derive(Debug, Error)]
pub enum DataProviderError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<DataProviderError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// The index specification could not be applied to the row being evaluated.
    #[error("Row {row} could not be evaluated against indexes '{spec}': {source}")]
    RowEvaluation {
        row: usize,
        spec: String,
        #[source]
        source: DomainError,
    },

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, DataProviderError>;

/// Errors raised while building or interpreting an index specification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Please provide valid indexes for filtering")]
    MissingIndexSpecification,

    #[error("Index specification is empty")]
    EmptyIndexSpecification,

    #[error(
        "Index '{token}' is invalid: {details}. Provide individual numbers or ranges de-marked by '-'"
    )]
    InvalidIndexToken { token: String, details: String },

    #[error("Index '{token}' is invalid: row indexes start at 1")]
    ZeroIndex { token: String },

    #[error("Index '{token}' is too large")]
    IndexOverflow { token: String },

    #[error("Range {start}-{end} is descending")]
    DescendingRange { start: usize, end: usize },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read standard input: {source}")]
    StdinRead {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} settings: {details}")]
    SerializationError { format: String, details: String },

    #[error("Unsupported settings format for '{path}'")]
    UnsupportedSettingsFormat { path: PathBuf },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Failed to write selected rows: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DataProviderError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for DataProviderError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<DataProviderError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| DataProviderError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| DataProviderError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
