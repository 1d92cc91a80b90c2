//! Упорядочивание: `order_by`, `order_by_descending`, `reverse`.
//!
//! Сортировка стабильна: элементы, равные с точки зрения `less`
//! (`less` ложно в обе стороны), сохраняют исходный относительный порядок.

use std::cmp::Ordering;

use crate::sequence::Sequence;

// Строгое отношение `less` -> Ordering для sort_by. Для стабильной сортировки
// важно только то, что `Less` возвращается ровно тогда, когда less(a, b).
// На одно сравнение `less` вызывается один или два раза.
fn ordering_from_less<T, F>(less: &mut F, a: &T, b: &T) -> Ordering
where
    F: FnMut(&T, &T) -> bool,
{
    if less(a, b) {
        Ordering::Less
    } else if less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

impl<T: Clone> Sequence<T> {
    /// Возвращает новую последовательность, отсортированную стабильно по `less`.
    ///
    /// # Аргументы
    /// * `less` - Строгое отношение "меньше": `less(a, b)` истинно, если `a` должен идти раньше `b`.
    ///
    /// Число вызовов `less` не определено: на одно сравнение пары он может
    /// вызываться дважды (`less(a, b)`, затем `less(b, a)`).
    #[must_use]
    pub fn order_by<F>(&self, mut less: F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut copied = self.to_vec();
        copied.sort_by(|a, b| ordering_from_less(&mut less, a, b));
        Self::new(copied)
    }

    /// То же, что [`Sequence::order_by`], но с переставленными аргументами `less`.
    ///
    /// Это не `order_by(..).reverse()`: равные элементы сохраняют
    /// исходный относительный порядок, а не переворачиваются.
    #[must_use]
    pub fn order_by_descending<F>(&self, mut less: F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut copied = self.to_vec();
        copied.sort_by(|a, b| ordering_from_less(&mut less, b, a));
        Self::new(copied)
    }

    /// Возвращает новую последовательность с элементами в обратном порядке.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.data.iter().rev().cloned().collect()
    }
}
