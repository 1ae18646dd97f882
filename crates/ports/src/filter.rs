// crates/ports/src/filter.rs
use std::fmt;

use row_index_filter_shared_kernel::Result;

/// Row filter consulted once per candidate row by a data provider.
///
/// Filters may keep state between calls (for example the ordinal of the
/// row being evaluated), so evaluation needs exclusive access. `Display`
/// gives a human-readable description for diagnostics.
pub trait DataProviderFilter<T: ?Sized>: fmt::Display {
    /// Returns `true` when `data` should be kept.
    fn filter(&mut self, data: &T) -> Result<bool>;
}

impl<T: ?Sized, F: DataProviderFilter<T> + ?Sized> DataProviderFilter<T> for Box<F> {
    fn filter(&mut self, data: &T) -> Result<bool> {
        (**self).filter(data)
    }
}
