// crates/shared-kernel/tests/error_context.rs
use std::io;

use row_index_filter_shared_kernel::{DataProviderError, DomainError, ErrorContext, InfrastructureError};

fn boom() -> std::result::Result<(), InfrastructureError> {
    Err(InfrastructureError::StdinRead {
        source: io::Error::other("root-io"),
    })
}

#[test]
fn context_wraps_and_formats() {
    let err = boom().context("reading rows").unwrap_err();

    let display = err.to_string();
    assert!(display.contains("reading rows"));
    assert!(display.contains("Failed to read standard input"));
}

#[test]
fn with_context_is_lazy_and_keeps_source() {
    let err = Err::<(), _>(DomainError::EmptyIndexSpecification)
        .with_context(|| format!("building filter #{}", 2))
        .unwrap_err();

    match err {
        DataProviderError::Context { context, source } => {
            assert_eq!(context, "building filter #2");
            assert!(matches!(*source, DataProviderError::Domain(DomainError::EmptyIndexSpecification)));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn json_errors_become_infrastructure_errors() {
    let err: DataProviderError = serde_json::from_str::<u8>("nope").unwrap_err().into();
    assert!(err.to_string().contains("Failed to parse JSON settings"));
}
