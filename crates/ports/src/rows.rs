// crates/ports/src/rows.rs
use std::path::PathBuf;

use row_index_filter_shared_kernel::Result;

/// Where candidate rows come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowInput {
    Path(PathBuf),
    Stdin,
}

/// Port for reading candidate rows, in order.
pub trait RowSource: Send + Sync {
    fn read_rows(&self, input: &RowInput) -> Result<Vec<String>>;
}
