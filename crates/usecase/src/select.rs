// crates/usecase/src/select.rs
use log::debug;
use row_index_filter_ports::{
    filter::DataProviderFilter,
    rows::{RowInput, RowSource},
};
use row_index_filter_shared_kernel::{ErrorContext, InvocationCount, Result};

use crate::dto::{SelectedRow, SelectionOutput};

/// Reads rows from a [`RowSource`] and keeps the ones a filter accepts.
pub struct SelectRows<'a> {
    source: &'a dyn RowSource,
}

impl<'a> SelectRows<'a> {
    pub fn new(source: &'a dyn RowSource) -> Self {
        Self { source }
    }

    pub fn run(&self, input: &RowInput, filter: &mut dyn DataProviderFilter<str>) -> Result<SelectionOutput> {
        let rows = self.source.read_rows(input)?;
        select_rows(rows, filter)
    }
}

/// Evaluates `filter` once per row, in order. The first filter failure aborts the run.
pub fn select_rows<I, S>(rows: I, filter: &mut dyn DataProviderFilter<str>) -> Result<SelectionOutput>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut position = InvocationCount::zero();
    let mut selected = Vec::new();

    for row in rows {
        let value = row.into();
        let index = position.advance();
        let keep = filter
            .filter(value.as_str())
            .with_context(|| format!("applying [{filter}] to row {index}"))?;
        if keep {
            selected.push(SelectedRow { index, value });
        }
    }

    debug!("selected {} of {} rows with [{filter}]", selected.len(), position);
    Ok(SelectionOutput {
        evaluated: position.value(),
        rows: selected,
    })
}
