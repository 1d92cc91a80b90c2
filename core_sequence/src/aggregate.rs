//! Агрегация и запросы одного элемента: `all`, `any`, `first`, `single`, `average`.

use tracing::debug;

use crate::error::SequenceError;
use crate::sequence::Sequence;

/// Результат [`Sequence::single`].
///
/// Три исхода: совпадений нет (это не ошибка), ровно одно совпадение,
/// или несколько совпадений. В последнем случае первое совпадение
/// все равно возвращается вместе с ошибкой.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingleMatch<T> {
    /// Ни один элемент не удовлетворил предикату.
    NotFound,
    /// Ровно один элемент удовлетворил предикату.
    Found(T),
    /// Предикату удовлетворило несколько элементов.
    Multiple {
        /// Первый подходящий элемент.
        first: T,
        /// Общее количество подходящих элементов (не меньше 2).
        count: usize,
    },
}

impl<T> SingleMatch<T> {
    /// `true` для `Found` и `Multiple`.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }

    /// Найденный элемент (первый при нескольких совпадениях).
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::NotFound => None,
            Self::Found(v) | Self::Multiple { first: v, .. } => Some(v),
        }
    }

    /// Ошибка `MultipleMatches`, если совпадений больше одного.
    #[must_use]
    pub fn error(&self) -> Option<SequenceError> {
        match self {
            Self::Multiple { count, .. } => Some(SequenceError::MultipleMatches { count: *count }),
            _ => None,
        }
    }

    /// Забирает найденный элемент (первый при нескольких совпадениях).
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::NotFound => None,
            Self::Found(v) | Self::Multiple { first: v, .. } => Some(v),
        }
    }

    /// Сворачивает исход в `Result`, отбрасывая первый элемент при ошибке.
    ///
    /// # Errors
    /// `SequenceError::MultipleMatches` при нескольких совпадениях.
    pub fn into_result(self) -> Result<Option<T>, SequenceError> {
        match self {
            Self::NotFound => Ok(None),
            Self::Found(v) => Ok(Some(v)),
            Self::Multiple { count, .. } => Err(SequenceError::MultipleMatches { count }),
        }
    }
}

impl<T> Sequence<T> {
    /// `true`, если каждый элемент удовлетворяет `accept`. Для пустой последовательности `true`.
    pub fn all<F>(&self, accept: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.data.iter().all(accept)
    }

    /// `true`, если хотя бы один элемент удовлетворяет `accept`. Для пустой последовательности `false`.
    pub fn any<F>(&self, accept: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.data.iter().any(accept)
    }

    /// Синоним [`Sequence::any`].
    pub fn any_by<F>(&self, accept: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.any(accept)
    }

    /// Среднее арифметическое выбранных значений.
    ///
    /// # Errors
    /// `SequenceError::EmptySequence`, если элементов нет.
    #[allow(clippy::cast_precision_loss)]
    pub fn average<F>(&self, select: F) -> Result<f64, SequenceError>
    where
        F: FnMut(&T) -> f64,
    {
        self.ensure_not_empty("average")?;
        let sum: f64 = self.data.iter().map(select).sum();
        Ok(sum / self.len() as f64)
    }

    /// Среднее по элементам, для которых `select` вернул `Some`.
    ///
    /// Если ни одного значения нет, возвращает `Ok(None)`: это не то же самое,
    /// что пустая последовательность.
    ///
    /// # Errors
    /// `SequenceError::EmptySequence`, если элементов нет.
    #[allow(clippy::cast_precision_loss)]
    pub fn average_nullable<F>(&self, select: F) -> Result<Option<f64>, SequenceError>
    where
        F: FnMut(&T) -> Option<f64>,
    {
        self.ensure_not_empty("average_nullable")?;
        let (sum, present) = self
            .data
            .iter()
            .filter_map(select)
            .fold((0.0_f64, 0_usize), |(sum, n), v| (sum + v, n + 1));
        if present < 1 {
            return Ok(None);
        }
        Ok(Some(sum / present as f64))
    }

    /// Среднее по целочисленному селектору; накопление целочисленное,
    /// деление на количество элементов выполняется один раз в конце.
    ///
    /// # Errors
    /// `SequenceError::EmptySequence`, если элементов нет.
    #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
    pub fn average_int<F>(&self, mut select: F) -> Result<f64, SequenceError>
    where
        F: FnMut(&T) -> isize,
    {
        self.ensure_not_empty("average_int")?;
        let sum: i128 = self.data.iter().map(|t| select(t) as i128).sum();
        Ok(sum as f64 / self.len() as f64)
    }

    /// То же, что [`Sequence::average_int`], для селектора `i64`.
    ///
    /// # Errors
    /// `SequenceError::EmptySequence`, если элементов нет.
    #[allow(clippy::cast_precision_loss)]
    pub fn average_int64<F>(&self, mut select: F) -> Result<f64, SequenceError>
    where
        F: FnMut(&T) -> i64,
    {
        self.ensure_not_empty("average_int64")?;
        let sum: i128 = self.data.iter().map(|t| i128::from(select(t))).sum();
        Ok(sum as f64 / self.len() as f64)
    }

    fn ensure_not_empty(&self, operation: &'static str) -> Result<(), SequenceError> {
        if self.is_empty() {
            debug!(operation, "aggregation requested on an empty sequence");
            return Err(SequenceError::EmptySequence);
        }
        Ok(())
    }
}

impl<T: Clone> Sequence<T> {
    /// Первый элемент.
    ///
    /// # Errors
    /// `SequenceError::EmptySequence`, если элементов нет.
    pub fn first(&self) -> Result<T, SequenceError> {
        self.ensure_not_empty("first")?;
        Ok(self.data[0].clone())
    }

    /// Первый элемент, удовлетворяющий `accept`, или `None`.
    ///
    /// В отличие от [`Sequence::first`], отсутствие элемента здесь ожидаемый исход.
    pub fn first_by<F>(&self, mut accept: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.data.iter().find(|t| accept(*t)).cloned()
    }

    /// Ищет единственный элемент, удовлетворяющий `accept`.
    ///
    /// `accept` вызывается для всех элементов, чтобы подсчитать совпадения.
    pub fn single<F>(&self, mut accept: F) -> SingleMatch<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut first = None;
        let mut count = 0_usize;
        for t in &self.data {
            if accept(t) {
                if first.is_none() {
                    first = Some(t);
                }
                count += 1;
            }
        }
        match first {
            None => SingleMatch::NotFound,
            Some(t) if count == 1 => SingleMatch::Found(t.clone()),
            Some(t) => {
                debug!(count, "single matched more than one element");
                SingleMatch::Multiple {
                    first: t.clone(),
                    count,
                }
            }
        }
    }
}
