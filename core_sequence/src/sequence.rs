//! Тип `Sequence<T>`: создание, размер и извлечение данных.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Неизменяемая упорядоченная последовательность элементов `T`.
///
/// Пустая последовательность и последовательность, созданная из пустой
/// коллекции, неразличимы: `len()` равен `0`, все операторы работают
/// как с пустым набором.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Sequence<T> {
    pub(crate) data: Vec<T>,
}

impl<T> Sequence<T> {
    /// Создает последовательность, забирая владение вектором.
    ///
    /// Вектор перемещается внутрь, поэтому вызывающая сторона больше
    /// не может его изменить.
    #[must_use]
    pub const fn new(elements: Vec<T>) -> Self {
        Self { data: elements }
    }

    /// Количество элементов, `0` для пустой последовательности.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true`, если элементов нет.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Итератор по элементам в текущем порядке (только чтение).
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Вызывает `action` для каждого элемента по порядку.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.data.iter().for_each(action);
    }
}

impl<T: Clone> Sequence<T> {
    /// Создает последовательность из копии среза.
    #[must_use]
    pub fn from_slice(elements: &[T]) -> Self {
        Self {
            data: elements.to_vec(),
        }
    }

    /// Возвращает независимую копию элементов в текущем порядке.
    ///
    /// Каждый вызов выдает новый вектор; его изменение не влияет
    /// на последовательность.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Синоним [`Sequence::to_vec`].
    #[must_use]
    pub fn to_array(&self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(elements: &[T]) -> Self {
        Self::from_slice(elements)
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_constructors_are_equivalent() {
        let from_macro: Sequence<i32> = crate::sequence![];
        let from_vec = Sequence::<i32>::new(Vec::new());
        let from_slice = Sequence::<i32>::from_slice(&[]);
        assert_eq!(from_macro, from_vec);
        assert_eq!(from_vec, from_slice);
        assert_eq!(Sequence::<i32>::default().len(), 0);
        assert!(from_macro.is_empty());
    }

    #[test]
    fn from_slice_copies_input() {
        let mut source = vec![1, 2, 3];
        let seq = Sequence::from_slice(&source);
        source[0] = 100;
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    }
}
