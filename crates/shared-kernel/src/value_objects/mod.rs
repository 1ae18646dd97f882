// crates/shared-kernel/src/value_objects/mod.rs
pub mod invocation;
pub mod row_index;

pub use invocation::InvocationCount;
pub use row_index::RowIndex;
