//! Тип ошибки `SequenceError` для агрегаций и распаковки.

use thiserror::Error;

use crate::value::Value;

/// Ошибки операторов агрегации и распаковки `Sequence`.
///
/// Операторы фильтрации, проекции, сортировки и комбинирования (`where_by`,
/// `select`, `order_by`, `reverse`, `concat`, `except`, `skip`, `take`)
/// тотальны и никогда не возвращают ошибку. Нарушения контракта вызывающей
/// стороной (например, `chunk(0)`) приводят к панике, а не к этому типу.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Операция требует хотя бы один элемент, а последовательность пуста.
    #[error("sequence contains no elements")]
    EmptySequence,

    /// Предикату `single` удовлетворяет более одного элемента.
    #[error("found more than one element matches ({count} matches)")]
    MultipleMatches {
        /// Сколько элементов удовлетворило предикату.
        count: usize,
    },

    /// Элемент не может быть приведен к запрошенному типу.
    #[error("{value} can not be casted to {target}")]
    TypeMismatch {
        /// Текстовое представление проблемного значения.
        value: String,
        /// Имя целевого типа.
        target: &'static str,
    },
}

impl SequenceError {
    /// Вспомогательный конструктор для `SequenceError::TypeMismatch`.
    ///
    /// # Аргументы
    ///
    /// * `value` - Значение, которое не удалось привести.
    /// * `target` - Имя целевого типа (`"bool"`, `"int64"` и т.д.).
    pub fn type_mismatch(value: &Value, target: &'static str) -> Self {
        Self::TypeMismatch {
            value: value.to_string(),
            target,
        }
    }
}

// Конвертация в общий тип ошибки воркспейса, если включена фича `with_utils_crate_errors`.
#[cfg(feature = "with_utils_crate_errors")]
impl From<SequenceError> for utils_crate::UtilsError {
    fn from(err: SequenceError) -> Self {
        Self::Generic(format!("Sequence error: {err}"))
    }
}
