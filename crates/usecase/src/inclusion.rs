// crates/usecase/src/inclusion.rs
use std::{fmt, sync::Arc};

use log::{debug, trace};
use row_index_filter_domain::{FilterSettings, IndexSet, IndexSpec, ParseTiming};
use row_index_filter_ports::{filter::DataProviderFilter, parsing::IndexParser};
use row_index_filter_shared_kernel::{
    DataProviderError, DomainError, DomainResult, InvocationCount, Result,
};

use crate::context::EvaluationContext;

/// Keeps the rows whose ordinal position is listed in an index specification.
///
/// Specifications are written as `"1, 2, 3"` for individual indexes,
/// `"1-4, 6-8"` for ranges, or any mix such as `"1, 3, 5-7, 10, 12-14"`.
/// The row value itself is never inspected: the filter counts how many
/// times it has been asked and treats that count as the row's position.
///
/// The specification is parsed once and the outcome is reused. With
/// [`ParseTiming::Lazy`] (the default) a malformed specification surfaces on
/// the first evaluation and on every evaluation after it.
pub struct IndexInclusionFilter {
    spec: IndexSpec,
    parser: Arc<dyn IndexParser>,
    context: EvaluationContext,
    parsed: Option<DomainResult<IndexSet>>,
}

impl IndexInclusionFilter {
    /// Lazy filter; the specification is not looked at until the first evaluation.
    pub fn new(spec: impl Into<IndexSpec>, parser: Arc<dyn IndexParser>) -> Self {
        Self {
            spec: spec.into(),
            parser,
            context: EvaluationContext::new(),
            parsed: None,
        }
    }

    /// Fails with [`DomainError::MissingIndexSpecification`] when no specification is given.
    pub fn from_optional<S: Into<IndexSpec>>(spec: Option<S>, parser: Arc<dyn IndexParser>) -> Result<Self> {
        let spec = spec.ok_or(DomainError::MissingIndexSpecification)?;
        Ok(Self::new(spec, parser))
    }

    /// Parses the specification right away and fails construction if it is malformed.
    pub fn eager(spec: impl Into<IndexSpec>, parser: Arc<dyn IndexParser>) -> Result<Self> {
        let mut filter = Self::new(spec, parser);
        let indexes = filter.parser.parse(filter.spec.as_str())?;
        filter.parsed = Some(Ok(indexes));
        Ok(filter)
    }

    pub fn with_timing(
        spec: impl Into<IndexSpec>,
        parser: Arc<dyn IndexParser>,
        timing: ParseTiming,
    ) -> Result<Self> {
        match timing {
            ParseTiming::Lazy => Ok(Self::new(spec, parser)),
            ParseTiming::Eager => Self::eager(spec, parser),
        }
    }

    pub fn from_settings(settings: &FilterSettings, parser: Arc<dyn IndexParser>) -> Result<Self> {
        let spec = settings
            .indexes
            .clone()
            .ok_or(DomainError::MissingIndexSpecification)?;
        Self::with_timing(spec, parser, settings.parse_timing)
    }

    pub fn spec(&self) -> &IndexSpec {
        &self.spec
    }

    /// How many rows have been evaluated so far.
    pub fn invocations(&self) -> InvocationCount {
        self.context.invocations()
    }
}

impl<T: ?Sized> DataProviderFilter<T> for IndexInclusionFilter {
    fn filter(&mut self, _data: &T) -> Result<bool> {
        let row = self.context.advance();
        trace!("entering index inclusion filter: row={row}, indexes='{}'", self.spec);

        let Self { spec, parser, parsed, .. } = self;
        let indexes = parsed
            .get_or_insert_with(|| parser.parse(spec.as_str()))
            .as_ref()
            .map_err(|source| {
                debug!("index specification '{spec}' rejected at row {row}: {source}");
                trace!("exiting index inclusion filter: row={row}, failed");
                DataProviderError::RowEvaluation {
                    row: row.value(),
                    spec: spec.to_string(),
                    source: source.clone(),
                }
            })?;

        let included = indexes.contains(row);
        trace!("exiting index inclusion filter: row={row}, included={included}");
        Ok(included)
    }
}

impl fmt::Display for IndexInclusionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Filter Indexes :{}", self.spec)
    }
}

impl fmt::Debug for IndexInclusionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexInclusionFilter")
            .field("spec", &self.spec)
            .field("context", &self.context)
            .field("parsed", &self.parsed)
            .finish_non_exhaustive()
    }
}
