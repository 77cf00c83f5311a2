use readable_compare::compare::{cmp_any, compare};
use readable_compare::{
    by_key, AbsentSide, BoundMode, Comparator, ErrorKind, Natural, NullPolicy, Operator,
};
use std::cmp::Ordering;

const ABSENT: Option<&i32> = None;

#[test]
fn test_operator_scenarios() {
    let cmp = Comparator::<i32>::NULL_THROW;
    assert!(cmp.compare(Some(&3), Operator::Less, Some(&5)).unwrap());
    assert!(!cmp.compare(Some(&5), Operator::Less, Some(&3)).unwrap());
    assert!(cmp.compare(Some(&5), Operator::LessEq, Some(&5)).unwrap());
}

#[test]
fn test_null_lower_scenarios() {
    let policy = NullPolicy::NullLower;
    assert_eq!(cmp_any(None, Some(&0), &Natural, policy).unwrap(), Ordering::Less);
    assert_eq!(cmp_any(Some(&0), None, &Natural, policy).unwrap(), Ordering::Greater);
    assert_eq!(cmp_any(ABSENT, None, &Natural, policy).unwrap(), Ordering::Equal);
}

#[test]
fn test_null_higher_greater_scenario() {
    let actual = compare(None, Operator::Greater, Some(&100), &Natural, NullPolicy::NullHigher);
    assert!(actual.unwrap());
}

#[test]
fn test_null_throw_scenario() {
    let err = Comparator::<i32>::NULL_THROW
        .compare(None, Operator::Eq, Some(&0))
        .unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::NullOperand {
            side: AbsentSide::First
        }
    );
}

#[test]
fn test_range_scenarios() {
    let cmp = Comparator::<i32>::NULL_THROW;
    assert!(!cmp.inside(BoundMode::IncExc, Some(&0), Some(&10), Some(&10)).unwrap());
    assert!(cmp.inside(BoundMode::IncInc, Some(&0), Some(&10), Some(&10)).unwrap());
    assert!(cmp.outside(BoundMode::ExcExc, Some(&0), Some(&0), Some(&10)).unwrap());
}

#[test]
fn test_clamp_scenarios() {
    let cmp = Comparator::<i32>::NULL_THROW;
    assert_eq!(cmp.clamp(Some(&0), Some(&-5), Some(&10)).unwrap(), Some(&0));
    assert_eq!(cmp.clamp(Some(&0), Some(&5), Some(&10)).unwrap(), Some(&5));
    assert_eq!(cmp.clamp(Some(&0), Some(&15), Some(&10)).unwrap(), Some(&10));
}

#[test]
fn test_clamp_inverted_range_returns_min() {
    let cmp = Comparator::<i32>::NULL_THROW;
    for value in [-100, 0, 3, 5, 10, 100].iter() {
        assert_eq!(cmp.clamp(Some(&5), Some(value), Some(&3)).unwrap(), Some(&5));
    }
}

#[test]
fn test_reversed_null_lower_scenario() {
    let reversed = Comparator::<i32>::NULL_LOWER.reversed();
    assert_eq!(reversed.cmp(None, Some(&1)).unwrap(), Ordering::Greater);
}

#[test]
fn test_chaining_scenario() {
    let cmp = Comparator::<(i32, i32), _>::of(by_key(|x: &(i32, i32)| x.0))
        .then_comparing(by_key(|x: &(i32, i32)| x.1));
    assert_eq!(cmp.cmp(Some(&(1, 9)), Some(&(1, 2))).unwrap(), Ordering::Greater);
}

#[test]
fn test_custom_order_with_strings() {
    let cmp = Comparator::<String, _>::from_fn(NullPolicy::NullHigher, |a, b| {
        a.to_lowercase().cmp(&b.to_lowercase())
    });

    let apple = String::from("Apple");
    let banana = String::from("banana");
    assert!(cmp.compare(Some(&apple), Operator::Less, Some(&banana)).unwrap());
    assert!(cmp.compare(None, Operator::Greater, Some(&banana)).unwrap());
    assert_eq!(cmp.max(Some(&apple), None).unwrap(), None);
}

#[test]
fn test_sort_with_free_function() {
    let mut data = vec![Some(4), None, Some(-1), None, Some(2)];
    data.sort_by(|a, b| readable_compare::cmp_null_lower(a.as_ref(), b.as_ref()));
    assert_eq!(data, vec![None, None, Some(-1), Some(2), Some(4)]);

    let cmp = Comparator::<i32>::NULL_LOWER;
    assert!(cmp.is_sorted(data.iter().map(Option::as_ref)).unwrap());
    assert!(!cmp.reversed().is_sorted(data.iter().map(Option::as_ref)).unwrap());
}

#[test]
fn test_comparators_shared_across_threads() {
    let cmp = Comparator::<u64>::NULL_HIGHER.reversed();
    let handles: Vec<_> = (0..4u64)
        .map(|i| {
            std::thread::spawn(move || {
                cmp.compare(Some(&i), Operator::GreaterEq, Some(&2)).unwrap()
            })
        })
        .collect();

    let actual: Vec<bool> = handles.into_iter().map(|x| x.join().unwrap()).collect();
    assert_eq!(actual, vec![true, true, true, false]);
}
