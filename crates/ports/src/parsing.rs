// crates/ports/src/parsing.rs
use row_index_filter_domain::IndexSet;
use row_index_filter_shared_kernel::DomainResult;

/// Port for interpreting index specification text such as `"1,3,5-7"`.
pub trait IndexParser: Send + Sync {
    fn parse(&self, spec: &str) -> DomainResult<IndexSet>;
}
