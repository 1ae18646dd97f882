pub mod index_range;
pub mod index_set;
pub mod spec;

pub use index_range::IndexRange;
pub use index_set::IndexSet;
pub use spec::IndexSpec;
