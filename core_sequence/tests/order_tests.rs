use core_sequence::sequence;

#[test]
fn test_order_by_ascending() {
    let seq = sequence![5, 4, 6, 8, 7, 9, 6];
    assert_eq!(seq.order_by(|a, b| a < b).to_vec(), vec![4, 5, 6, 6, 7, 8, 9]);
}

#[test]
fn test_order_by_always_equal_relation_keeps_input() {
    // Отношение `a == b` никогда не упорядочивает разные элементы,
    // поэтому стабильная сортировка обязана вернуть вход без изменений.
    let seq = sequence![5, 4, 6, 8, 7, 9, 6];
    assert_eq!(seq.order_by(|a, b| a == b).to_vec(), vec![5, 4, 6, 8, 7, 9, 6]);
}

#[test]
fn test_order_by_descending() {
    let seq = sequence![5, 4, 6, 8, 7, 9, 6];
    assert_eq!(
        seq.order_by_descending(|a, b| a < b).to_vec(),
        vec![9, 8, 7, 6, 6, 5, 4]
    );
}

#[test]
fn test_order_by_is_stable_for_ties() {
    let seq = sequence![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
    assert_eq!(
        seq.order_by(|a, b| a.0 < b.0).to_vec(),
        vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]
    );
}

#[test]
fn test_order_by_descending_is_not_reversed_ascending() {
    let seq = sequence![(6, "first"), (5, "x"), (6, "second"), (9, "y")];

    let descending = seq.order_by_descending(|a, b| a.0 < b.0).to_vec();
    assert_eq!(
        descending,
        vec![(9, "y"), (6, "first"), (6, "second"), (5, "x")]
    );

    // Наивная реализация переворачивает порядок равных элементов.
    let naive = seq.order_by(|a, b| a.0 < b.0).reverse().to_vec();
    assert_eq!(naive, vec![(9, "y"), (6, "second"), (6, "first"), (5, "x")]);
    assert_ne!(descending, naive);
}

#[test]
fn test_reverse() {
    assert_eq!(sequence![1, 2, 3].reverse().to_vec(), vec![3, 2, 1]);
    assert_eq!(sequence![1].reverse().to_vec(), vec![1]);
    assert!(sequence![1].skip(1).reverse().is_empty());
}

#[test]
fn test_order_by_less_may_be_called_more_than_once_per_compare() {
    let seq = sequence![3, 1, 2];
    let mut calls = 0;
    let sorted = seq.order_by(|a, b| {
        calls += 1;
        a < b
    });
    assert_eq!(sorted.to_vec(), vec![1, 2, 3]);
    assert!(calls >= seq.len() - 1);
}
