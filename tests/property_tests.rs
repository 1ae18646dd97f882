use proptest::prelude::*;
use row_index_filter::{DataProviderFilter, index_inclusion_filter};

/// Entries of a specification: `(start, extra)` renders `start` or `start-(start+extra)`.
fn entries() -> impl Strategy<Value = Vec<(usize, Option<usize>)>> {
    prop::collection::vec((1usize..40, prop::option::of(0usize..6)), 1..8)
}

fn render(entries: &[(usize, Option<usize>)]) -> String {
    entries
        .iter()
        .map(|&(start, extra)| match extra {
            Some(extra) => format!("{start}-{}", start + extra),
            None => start.to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn naive_contains(entries: &[(usize, Option<usize>)], row: usize) -> bool {
    entries
        .iter()
        .any(|&(start, extra)| row >= start && row <= start + extra.unwrap_or(0))
}

proptest! {
    #[test]
    fn membership_matches_naive_expansion(entries in entries()) {
        let spec = render(&entries);
        let mut filter = index_inclusion_filter(spec.as_str());
        for row in 1..=50usize {
            let kept = filter.filter("row").unwrap();
            prop_assert_eq!(kept, naive_contains(&entries, row), "row {} of '{}'", row, spec);
        }
    }

    #[test]
    fn nth_call_observes_n(calls in 0usize..200) {
        let mut filter = index_inclusion_filter("1");
        for _ in 0..calls {
            filter.filter(&()).unwrap();
        }
        prop_assert_eq!(filter.invocations().value(), calls);
    }

    #[test]
    fn same_spec_same_sequence(entries in entries(), calls in 1usize..60) {
        let spec = render(&entries);
        let mut a = index_inclusion_filter(spec.as_str());
        let mut b = index_inclusion_filter(spec.as_str());
        let first: Vec<bool> = (0..calls).map(|_| a.filter("x").unwrap()).collect();
        let second: Vec<bool> = (0..calls).map(|_| b.filter("y").unwrap()).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn display_never_moves_the_counter(entries in entries()) {
        let spec = render(&entries);
        let filter = index_inclusion_filter(spec.as_str());
        let expected = format!("Filter Indexes :{spec}");
        prop_assert_eq!(filter.to_string(), expected.clone());
        prop_assert_eq!(filter.to_string(), expected);
        prop_assert!(filter.invocations().is_zero());
    }
}
