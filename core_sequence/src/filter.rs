//! Фильтрация и проекция: `where_by`, `select` и его типизированные варианты.

use crate::sequence::Sequence;
use crate::value::Value;

impl<T: Clone> Sequence<T> {
    /// Возвращает новую последовательность из элементов, для которых
    /// `predicate` вернул `true`, в исходном относительном порядке.
    ///
    /// `predicate` вызывается ровно один раз для каждого элемента, по порядку.
    #[must_use]
    pub fn where_by<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.data
            .iter()
            .filter(|t| predicate(*t))
            .cloned()
            .collect()
    }
}

impl<T> Sequence<T> {
    /// Проецирует каждый элемент в произвольный тип `R`, сохраняя порядок и количество.
    #[must_use]
    pub fn select_as<R, F>(&self, transform: F) -> Sequence<R>
    where
        F: FnMut(&T) -> R,
    {
        self.data.iter().map(transform).collect()
    }

    /// Общая проекция в динамическое значение [`Value`].
    ///
    /// Результат можно вернуть к конкретному типу через
    /// [`Sequence::unbox`](crate::Sequence::unbox).
    #[must_use]
    pub fn select<F>(&self, transform: F) -> Sequence<Value>
    where
        F: FnMut(&T) -> Value,
    {
        self.select_as(transform)
    }

    /// Проекция в `bool`.
    #[must_use]
    pub fn select_bool<F>(&self, transform: F) -> Sequence<bool>
    where
        F: FnMut(&T) -> bool,
    {
        self.select_as(transform)
    }

    /// Проекция в `u8`.
    #[must_use]
    pub fn select_byte<F>(&self, transform: F) -> Sequence<u8>
    where
        F: FnMut(&T) -> u8,
    {
        self.select_as(transform)
    }

    /// Проекция в `isize`.
    #[must_use]
    pub fn select_int<F>(&self, transform: F) -> Sequence<isize>
    where
        F: FnMut(&T) -> isize,
    {
        self.select_as(transform)
    }

    /// Проекция в `i64`.
    #[must_use]
    pub fn select_int64<F>(&self, transform: F) -> Sequence<i64>
    where
        F: FnMut(&T) -> i64,
    {
        self.select_as(transform)
    }

    /// Проекция в `f64`.
    #[must_use]
    pub fn select_float64<F>(&self, transform: F) -> Sequence<f64>
    where
        F: FnMut(&T) -> f64,
    {
        self.select_as(transform)
    }

    /// Проекция в `String`.
    #[must_use]
    pub fn select_string<F>(&self, transform: F) -> Sequence<String>
    where
        F: FnMut(&T) -> String,
    {
        self.select_as(transform)
    }
}
