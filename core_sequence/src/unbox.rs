//! Распаковка `Sequence<Value>` в последовательность конкретного типа.
//!
//! Все варианты сводятся к [`Sequence::unbox_with`]: безопасные возвращают
//! ошибку, `force_unbox` превращает ее в панику.

use tracing::error;

use crate::error::SequenceError;
use crate::sequence::Sequence;
use crate::value::{FromValue, Value};

impl<T> Sequence<T> {
    /// Строит последовательность из динамических значений через
    /// безошибочную функцию приведения `cast`.
    #[must_use]
    pub fn from_values_with<F>(values: &[Value], cast: F) -> Self
    where
        F: FnMut(&Value) -> T,
    {
        values.iter().map(cast).collect()
    }
}

impl Sequence<Value> {
    /// Приводит каждый элемент функцией `convert`, останавливаясь на первой ошибке.
    ///
    /// # Errors
    /// Первая ошибка, которую вернул `convert`.
    pub fn unbox_with<R, F>(&self, convert: F) -> Result<Sequence<R>, SequenceError>
    where
        F: FnMut(&Value) -> Result<R, SequenceError>,
    {
        self.data
            .iter()
            .map(convert)
            .collect::<Result<Vec<R>, SequenceError>>()
            .map(Sequence::new)
    }

    /// Приводит каждый элемент к типу `R`, сохраняя порядок.
    ///
    /// # Errors
    /// `SequenceError::TypeMismatch` с первым значением, которое не хранит `R`.
    pub fn unbox<R: FromValue>(&self) -> Result<Sequence<R>, SequenceError> {
        self.unbox_with(|v| R::from_value(v).ok_or_else(|| SequenceError::type_mismatch(v, R::TYPE_NAME)))
    }

    /// То же, что [`Sequence::unbox`], для случаев, когда типы уже гарантированы выше по цепочке.
    ///
    /// # Паника
    /// Паникует при `SequenceError::TypeMismatch`.
    #[must_use]
    pub fn force_unbox<R: FromValue>(&self) -> Sequence<R> {
        match self.unbox() {
            Ok(result) => result,
            Err(e) => {
                error!(error = %e, "forced unbox failed");
                panic!("{e}");
            }
        }
    }

    /// Распаковка в `bool`.
    ///
    /// # Errors
    /// `SequenceError::TypeMismatch`, см. [`Sequence::unbox`].
    pub fn unbox_bool(&self) -> Result<Sequence<bool>, SequenceError> {
        self.unbox()
    }

    /// Распаковка в `u8`.
    ///
    /// # Errors
    /// `SequenceError::TypeMismatch`, см. [`Sequence::unbox`].
    pub fn unbox_byte(&self) -> Result<Sequence<u8>, SequenceError> {
        self.unbox()
    }

    /// Распаковка в `isize`.
    ///
    /// # Errors
    /// `SequenceError::TypeMismatch`, см. [`Sequence::unbox`].
    pub fn unbox_int(&self) -> Result<Sequence<isize>, SequenceError> {
        self.unbox()
    }

    /// Распаковка в `i64`.
    ///
    /// # Errors
    /// `SequenceError::TypeMismatch`, см. [`Sequence::unbox`].
    pub fn unbox_int64(&self) -> Result<Sequence<i64>, SequenceError> {
        self.unbox()
    }

    /// Распаковка в `f64`.
    ///
    /// # Errors
    /// `SequenceError::TypeMismatch`, см. [`Sequence::unbox`].
    pub fn unbox_float64(&self) -> Result<Sequence<f64>, SequenceError> {
        self.unbox()
    }

    /// Распаковка в `String`.
    ///
    /// # Errors
    /// `SequenceError::TypeMismatch`, см. [`Sequence::unbox`].
    pub fn unbox_string(&self) -> Result<Sequence<String>, SequenceError> {
        self.unbox()
    }

    /// Принудительная распаковка в `bool`.
    ///
    /// # Паника
    /// См. [`Sequence::force_unbox`].
    #[must_use]
    pub fn force_unbox_bool(&self) -> Sequence<bool> {
        self.force_unbox()
    }

    /// Принудительная распаковка в `u8`.
    ///
    /// # Паника
    /// См. [`Sequence::force_unbox`].
    #[must_use]
    pub fn force_unbox_byte(&self) -> Sequence<u8> {
        self.force_unbox()
    }

    /// Принудительная распаковка в `isize`.
    ///
    /// # Паника
    /// См. [`Sequence::force_unbox`].
    #[must_use]
    pub fn force_unbox_int(&self) -> Sequence<isize> {
        self.force_unbox()
    }

    /// Принудительная распаковка в `i64`.
    ///
    /// # Паника
    /// См. [`Sequence::force_unbox`].
    #[must_use]
    pub fn force_unbox_int64(&self) -> Sequence<i64> {
        self.force_unbox()
    }

    /// Принудительная распаковка в `f64`.
    ///
    /// # Паника
    /// См. [`Sequence::force_unbox`].
    #[must_use]
    pub fn force_unbox_float64(&self) -> Sequence<f64> {
        self.force_unbox()
    }

    /// Принудительная распаковка в `String`.
    ///
    /// # Паника
    /// См. [`Sequence::force_unbox`].
    #[must_use]
    pub fn force_unbox_string(&self) -> Sequence<String> {
        self.force_unbox()
    }
}
