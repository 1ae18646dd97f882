// crates/usecase/src/dto.rs
use row_index_filter_shared_kernel::RowIndex;
use serde::Serialize;

/// A row kept by the filter, with its one-based position in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedRow {
    pub index: RowIndex,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionOutput {
    /// Number of rows handed to the filter.
    pub evaluated: usize,
    pub rows: Vec<SelectedRow>,
}
