use core_sequence::{sequence, Sequence, Value};

#[test]
fn test_len_of_various_constructors() {
    assert_eq!(sequence![1, 2, 3].len(), 3);
    assert_eq!(Sequence::new(vec!["a"]).len(), 1);
    assert_eq!(Sequence::from_slice(&[1.0, 2.0]).len(), 2);
    assert_eq!(Sequence::<u8>::default().len(), 0);
    assert_eq!(Sequence::from(vec![1, 2]).len(), 2);
    assert_eq!(Sequence::from(&[7, 8, 9][..]).len(), 3);
}

#[test]
fn test_empty_sequence_behaves_as_empty_everywhere() {
    let empty: Sequence<i32> = sequence![];
    assert_eq!(empty.len(), 0);
    assert!(empty.where_by(|_| true).is_empty());
    assert!(empty.select_as(|n| n + 1).is_empty());
    assert!(empty.order_by(|a, b| a < b).is_empty());
    assert!(empty.reverse().is_empty());
    assert!(empty.skip(1).is_empty());
    assert!(empty.take(1).is_empty());
    assert!(empty.chunk(3).is_empty());
    assert!(empty.all(|_| false));
    assert!(!empty.any(|_| true));
    assert_eq!(empty.first_by(|_| true), None);
}

#[test]
fn test_iterator_conversions() {
    let seq: Sequence<i32> = (1..=4).collect();
    assert_eq!(seq.to_vec(), vec![1, 2, 3, 4]);

    let borrowed: Vec<i32> = (&seq).into_iter().copied().collect();
    assert_eq!(borrowed, vec![1, 2, 3, 4]);
    assert_eq!(seq.iter().sum::<i32>(), 10);

    let owned: Vec<i32> = seq.into_iter().rev().collect();
    assert_eq!(owned, vec![4, 3, 2, 1]);
}

#[test]
fn test_for_each_visits_in_order() {
    let seq = sequence!["a", "b", "c"];
    let mut visited = Vec::new();
    seq.for_each(|s| visited.push(s.to_string()));
    assert_eq!(visited, vec!["a", "b", "c"]);
}

#[test]
fn test_from_values_with_casts_every_element() {
    let values = vec![Value::Int(1), Value::Int64(2), Value::from("3")];
    let seq = Sequence::from_values_with(&values, |v| v.to_string());
    assert_eq!(seq.to_vec(), vec!["1", "2", "3"]);

    let empty = Sequence::<String>::from_values_with(&[], |v| v.to_string());
    assert!(empty.is_empty());
}
