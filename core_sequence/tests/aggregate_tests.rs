use approx::assert_relative_eq;
use core_sequence::{sequence, Sequence, SequenceError, SingleMatch};

#[test]
fn test_all() {
    let empty: Sequence<i32> = sequence![];
    assert!(empty.all(|_| false));
    assert!(sequence![2, 4, 6].all(|n| n % 2 == 0));
    assert!(!sequence![2, 3, 6].all(|n| n % 2 == 0));
}

#[test]
fn test_any_and_any_by() {
    let empty: Sequence<i32> = sequence![];
    assert!(!empty.any(|_| true));
    assert!(!empty.any_by(|_| true));
    assert!(sequence![1, 3, 4].any(|n| n % 2 == 0));
    assert!(!sequence![1, 3, 5].any_by(|n| n % 2 == 0));
}

#[test]
fn test_first() {
    assert_eq!(sequence![7, 8].first(), Ok(7));
    let empty: Sequence<i32> = sequence![];
    assert_eq!(empty.first(), Err(SequenceError::EmptySequence));
}

#[test]
fn test_first_by() {
    let seq = sequence![1, 2, 3, 4];
    assert_eq!(seq.first_by(|n| *n > 2), Some(3));
    assert_eq!(seq.first_by(|n| *n > 10), None);
}

#[test]
fn test_single_not_found() {
    let empty: Sequence<i32> = sequence![];
    let outcome = empty.single(|_| true);
    assert_eq!(outcome, SingleMatch::NotFound);
    assert!(!outcome.is_found());
    assert_eq!(outcome.value(), None);
    assert_eq!(outcome.error(), None);
    assert_eq!(outcome.into_result(), Ok(None));

    assert_eq!(sequence![1, 2].single(|n| *n == 5), SingleMatch::NotFound);
}

#[test]
fn test_single_found() {
    let outcome = sequence![1, 2, 3, 4].single(|n| *n == 4);
    assert_eq!(outcome, SingleMatch::Found(4));
    assert!(outcome.is_found());
    assert_eq!(outcome.value(), Some(&4));
    assert_eq!(outcome.error(), None);
    assert_eq!(outcome.into_value(), Some(4));
}

#[test]
fn test_single_multiple_returns_first_match_with_error() {
    let seq = sequence![(1, 'a'), (2, 'b'), (2, 'c'), (3, 'd')];
    let outcome = seq.single(|p| p.0 == 2);

    assert!(outcome.is_found());
    assert_eq!(outcome.value(), Some(&(2, 'b')));
    assert_eq!(
        outcome.error(),
        Some(SequenceError::MultipleMatches { count: 2 })
    );
    assert_eq!(
        outcome.clone().into_result(),
        Err(SequenceError::MultipleMatches { count: 2 })
    );
    match outcome {
        SingleMatch::Multiple { first, count } => {
            assert_eq!(first, (2, 'b'));
            assert_eq!(count, 2);
        }
        other => panic!("Expected SingleMatch::Multiple, got {other:?}"),
    }
}

#[test]
fn test_average() {
    let seq = sequence![1.0, 2.0, 4.5];
    assert_relative_eq!(seq.average(|n| *n).unwrap(), 2.5);

    let empty: Sequence<f64> = sequence![];
    assert_eq!(empty.average(|n| *n), Err(SequenceError::EmptySequence));
}

#[test]
fn test_average_nullable() {
    let seq = sequence![Some(1.0), None, Some(4.0)];
    let avg = seq.average_nullable(|n| *n).unwrap();
    assert_relative_eq!(avg.unwrap(), 2.5);

    // Нет ни одного значения: это не ошибка пустой последовательности.
    let all_missing: Sequence<Option<f64>> = sequence![None, None];
    assert_eq!(all_missing.average_nullable(|n| *n), Ok(None));

    let empty: Sequence<Option<f64>> = sequence![];
    assert_eq!(
        empty.average_nullable(|n| *n),
        Err(SequenceError::EmptySequence)
    );
}

#[test]
fn test_average_int_variants() {
    let seq = sequence![1, 2, 4];
    assert_relative_eq!(seq.average_int(|n| *n).unwrap(), 7.0 / 3.0);
    assert_relative_eq!(seq.average_int64(|n| *n as i64).unwrap(), 7.0 / 3.0);

    let large = sequence![i64::MAX, i64::MAX];
    assert_relative_eq!(large.average_int64(|n| *n).unwrap(), i64::MAX as f64);

    let empty: Sequence<isize> = sequence![];
    assert_eq!(empty.average_int(|n| *n), Err(SequenceError::EmptySequence));
    assert_eq!(empty.average_int64(|n| *n as i64), Err(SequenceError::EmptySequence));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        SequenceError::EmptySequence.to_string(),
        "sequence contains no elements"
    );
    assert_eq!(
        SequenceError::MultipleMatches { count: 3 }.to_string(),
        "found more than one element matches (3 matches)"
    );
}
