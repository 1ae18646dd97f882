// crates/usecase/src/context.rs
use row_index_filter_shared_kernel::{InvocationCount, RowIndex};

/// Evaluation state owned by a single filter instance.
///
/// Each filter gets its own context; counters are never shared between
/// filters and never reset.
#[derive(Debug, Default)]
pub struct EvaluationContext {
    invocations: InvocationCount,
}

impl EvaluationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one more evaluation and returns the ordinal of the row being evaluated.
    pub fn advance(&mut self) -> RowIndex {
        self.invocations.advance()
    }

    pub fn invocations(&self) -> InvocationCount {
        self.invocations
    }
}
