//! Комбинирование последовательностей: `concat`/`append` и `except`.

use std::collections::HashSet;
use std::hash::Hash;

use tracing::trace;

use crate::sequence::Sequence;

impl<T: Clone> Sequence<T> {
    /// Элементы `self`, за которыми следуют элементы `other`.
    ///
    /// Любой из операндов может быть пустым.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut data = Vec::with_capacity(self.len() + other.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&other.data);
        Self::new(data)
    }

    /// Синоним [`Sequence::concat`].
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        self.concat(other)
    }

    /// Элементы `self`, для которых в `other` нет ни одного элемента,
    /// равного по `equals`. Порядок `self` сохраняется.
    ///
    /// Сложность O(|self| × |other|): `equals` задается вызывающей стороной
    /// и не обязан быть согласован с хешированием. Для `T: Eq + Hash`
    /// есть [`Sequence::except_hashed`].
    #[must_use]
    pub fn except<F>(&self, other: &Self, mut equals: F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        if other.is_empty() {
            return self.clone();
        }
        let result: Self = self
            .data
            .iter()
            .filter(|d| !other.data.iter().any(|t| equals(*d, t)))
            .cloned()
            .collect();
        trace!(
            kept = result.len(),
            source = self.len(),
            excluded = other.len(),
            "except completed"
        );
        result
    }
}

impl<T: Clone + Eq + Hash> Sequence<T> {
    /// Вариант [`Sequence::except`] с равенством по значению и хешированием, O(|self| + |other|).
    #[must_use]
    pub fn except_hashed(&self, other: &Self) -> Self {
        let excluded: HashSet<&T> = other.data.iter().collect();
        self.where_by(|d| !excluded.contains(d))
    }
}
