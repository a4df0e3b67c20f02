// Tests for the strict boundary and bulk application.

use std::cell::Cell;
use std::collections::{BTreeMap, HashMap, VecDeque};

use trifilter_test::{is_lowercase, mixed_case_map, numbers, CallCounter};

use crate::error::FilterError;
use crate::filter::{accepts_all, accepts_none, from_predicate, supports_none, TernaryFilter};
use crate::tri::Tri;

// ============================================================================
// to_predicate
// ============================================================================

#[test]
fn test_predicate_follows_decided_answers() {
    let accept = accepts_all::<i32>().to_predicate();
    let reject = accepts_none::<i32>().to_predicate();
    for n in numbers() {
        assert!(accept.test(&n).unwrap());
        assert!(!reject.test(&n).unwrap());
    }
}

#[test]
fn test_predicate_fails_on_unsupported() {
    let predicate = supports_none().plus(1).to_predicate();
    assert!(predicate.test(&1).unwrap());

    let error = predicate.test(&2).unwrap_err();
    assert!(error.is_unsupported());
    assert_eq!(error.element(), Some(&2));
    assert_eq!(
        error.to_string(),
        "Filter supports_none().plus(..) does not support element 2"
    );
}

#[test]
fn test_predicate_evaluates_per_call() {
    let counter = CallCounter::new();
    let predicate = from_predicate(counter.predicate(true)).to_predicate();
    assert_eq!(counter.calls(), 0);

    assert!(predicate.test(&1).unwrap());
    assert!(predicate.test(&1).unwrap());
    assert_eq!(counter.calls(), 2);
}

#[test]
fn test_predicate_into_fn() {
    let check = accepts_none().plus(3).to_predicate().into_fn();
    let decided: Result<Vec<bool>, _> = [1, 3].iter().map(check).collect();
    assert_eq!(decided.unwrap(), [false, true]);
}

#[test]
fn test_predicate_into_inner() {
    let filter = supports_none().plus(5).to_predicate().into_inner();
    assert_eq!(filter.evaluate(&5), Tri::Accept);
}

// ============================================================================
// apply_to_sequence
// ============================================================================

#[test]
fn test_sequence_accepts_all_keeps_order() {
    let kept: Vec<i32> = accepts_all().apply_to_sequence(numbers()).unwrap();
    assert_eq!(kept, [1, 2, 3, 4, 5]);
}

#[test]
fn test_sequence_accepts_none_is_empty() {
    let kept: Vec<i32> = accepts_none().apply_to_sequence(numbers()).unwrap();
    assert!(kept.is_empty());
}

#[test]
fn test_sequence_supports_none_fails() {
    let result: Result<Vec<i32>, _> = supports_none().apply_to_sequence(numbers());
    match result {
        Err(FilterError::UnsupportedElement { element, chain }) => {
            assert_eq!(element, 1);
            assert_eq!(chain, "supports_none()");
        }
        other => panic!("expected UnsupportedElement, got {:?}", other),
    }
}

#[test]
fn test_sequence_keeps_relative_order() {
    let filter = accepts_none().plus_all([5, 1, 3]);
    let kept: VecDeque<i32> = filter.apply_to_sequence(vec![5, 4, 3, 2, 1]).unwrap();
    assert_eq!(kept, [5, 3, 1]);
}

#[test]
fn test_sequence_reports_first_unsupported() {
    let filter = accepts_all().ignore_all([4, 2]);
    let result: Result<Vec<i32>, _> = filter.apply_to_sequence(numbers());
    assert_eq!(result.unwrap_err().into_element(), Some(2));
}

#[test]
fn test_sequence_stops_at_failure() {
    let counter = CallCounter::new();
    let filter = supports_none().plus(1).before(from_predicates_counting(&counter));
    let result: Result<Vec<i32>, _> = filter.apply_to_sequence(vec![1, 2, 3]);
    assert!(result.is_err());
    // 1 is decided by the override; 2 reaches the fallback and fails there.
    assert_eq!(counter.calls(), 1);
}

fn from_predicates_counting(counter: &CallCounter) -> impl TernaryFilter<i32> {
    crate::filter::from_predicates(counter.predicate(false), |_: &i32| true)
}

// ============================================================================
// apply_to_map_keys / apply_to_map_values
// ============================================================================

#[test]
fn test_map_keys_keeps_lowercase_entries() {
    let filter = from_predicate(is_lowercase);
    let kept: HashMap<String, i32> = filter.apply_to_map_keys(mixed_case_map()).unwrap();

    let expected = HashMap::from([("a".to_string(), 1), ("c".to_string(), 3)]);
    assert_eq!(kept, expected);
}

#[test]
fn test_map_keys_into_ordered_map() {
    let filter = accepts_none().plus_all(["a".to_string(), "B".to_string()]);
    let kept: BTreeMap<String, i32> = filter.apply_to_map_keys(mixed_case_map()).unwrap();
    assert_eq!(kept.len(), 2);
    assert_eq!(kept["a"], 1);
    assert_eq!(kept["B"], 20);
}

#[test]
fn test_map_keys_fails_on_unsupported_key() {
    let filter = accepts_all().ignore("B".to_string());
    let result: Result<HashMap<String, i32>, _> = filter.apply_to_map_keys(mixed_case_map());
    let error = result.unwrap_err();
    assert_eq!(error.element().map(String::as_str), Some("B"));
}

#[test]
fn test_map_values_keeps_small_values() {
    let filter = from_predicate(|value: &i32| *value < 10);
    let kept: BTreeMap<String, i32> = filter.apply_to_map_values(mixed_case_map()).unwrap();
    assert_eq!(
        kept.into_iter().collect::<Vec<_>>(),
        [("a".to_string(), 1), ("c".to_string(), 3)]
    );
}

#[test]
fn test_map_values_fails_on_unsupported_value() {
    let filter = supports_none().plus(1).plus(3);
    let result: Result<HashMap<String, i32>, _> = filter.apply_to_map_values(mixed_case_map());
    assert_eq!(result.unwrap_err().into_element(), Some(20));
}

// ============================================================================
// apply_to_iter
// ============================================================================

#[test]
fn test_iter_is_lazy() {
    let pulled = Cell::new(0);
    let source = (1..=5).inspect(|_| pulled.set(pulled.get() + 1));
    let filter = accepts_none().plus(2).plus(4);

    let mut filtered = filter.apply_to_iter(source);
    assert_eq!(pulled.get(), 0);

    assert_eq!(filtered.next().unwrap().unwrap(), 2);
    assert_eq!(pulled.get(), 2);
    assert_eq!(filtered.next().unwrap().unwrap(), 4);
    assert_eq!(pulled.get(), 4);
    assert!(filtered.next().is_none());
    assert_eq!(pulled.get(), 5);
}

#[test]
fn test_iter_evaluates_once_per_element() {
    let counter = CallCounter::new();
    let filter = from_predicate(counter.wrap(|n: &i32| n % 2 == 1));
    let kept: Vec<i32> = filter
        .apply_to_iter(numbers())
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(kept, [1, 3, 5]);
    assert_eq!(counter.calls(), 5);
}

#[test]
fn test_iter_fails_after_yielding_accepted() {
    let filter = supports_none().plus(1).minus(2).plus(4);
    let pulled = Cell::new(0);
    let source = vec![1, 2, 3, 4].into_iter().inspect(|_| pulled.set(pulled.get() + 1));

    let mut filtered = filter.apply_to_iter(source);
    assert_eq!(filtered.next().unwrap().unwrap(), 1);

    let error = filtered.next().unwrap().unwrap_err();
    assert_eq!(error.into_element(), Some(3));
    assert_eq!(pulled.get(), 3);

    // Terminal: the source is not pulled again.
    assert!(filtered.next().is_none());
    assert_eq!(pulled.get(), 3);
    assert_eq!(filtered.size_hint(), (0, Some(0)));
}

#[test]
fn test_iter_collect_surfaces_failure() {
    let filter = supports_none().plus(1);
    let result: Result<Vec<i32>, _> = filter.apply_to_iter(numbers()).collect();
    assert!(matches!(
        result,
        Err(FilterError::UnsupportedElement { element: 2, .. })
    ));
}

#[test]
fn test_iter_through_boxed_filter() {
    let filter = accepts_all::<i32>().minus(3).boxed();
    let kept: Vec<i32> = filter
        .apply_to_iter(numbers())
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(kept, [1, 2, 4, 5]);
}
