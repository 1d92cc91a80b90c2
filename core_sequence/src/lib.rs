#![warn(
    missing_docs, // Предупреждать, если публичные элементы не документированы.
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used, // Предупреждать об использовании .unwrap()
    clippy::expect_used  // Предупреждать об использовании .expect()
)]
#![deny(
    unsafe_code,        // Запретить использование unsafe блоков.
    unused_mut,         // Запретить неиспользуемые изменяемые переменные.
    unused_imports,     // Запретить неиспользуемые импорты.
    unused_attributes   // Запретить неиспользуемые атрибуты.
)]

//! `core_sequence` предоставляет `Sequence<T>`: неизменяемую типизированную
//! последовательность с цепочкой операторов запросов в стиле `IEnumerable`.
//!
//! Главный контракт крейта: исходная последовательность никогда не меняется.
//! Каждый оператор, возвращающий новую `Sequence`, работает с независимой
//! копией буфера, а каждая точка входа и выхода (`from_slice`, `to_vec`)
//! тоже копирует данные.
//!
//! # Основные модули:
//!
//! - [`sequence`]: Тип `Sequence`, создание и извлечение данных.
//! - [`filter`]: `where_by`, `select` и его типизированные варианты.
//! - [`order`]: Стабильная сортировка и разворот.
//! - [`set_ops`]: `concat`/`append` и `except`.
//! - [`window`]: `chunk`, `skip`, `take`.
//! - [`aggregate`]: `all`, `any`, `first`, `single`, `average`.
//! - [`unbox`]: Распаковка `Sequence<Value>` в конкретный тип.
//! - [`value`]: Динамическое значение `Value` и типаж `FromValue`.
//! - [`error`]: Тип ошибки `SequenceError`.
//!
//! ```
//! use core_sequence::sequence;
//!
//! let evens = sequence![5, 4, 6, 8, 7, 9, 6]
//!     .where_by(|n| n % 2 == 0)
//!     .order_by(|a, b| a < b);
//! assert_eq!(evens.to_vec(), vec![4, 6, 6, 8]);
//! ```
//!
//! # Использование фич (Features)
//!
//! - `serde`: (де)сериализация `Sequence<T>` как обычного списка и `Value`.
//! - `with_utils_crate_errors`: конвертация `SequenceError` в `utils_crate::UtilsError`.

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod order;
pub mod sequence;
pub mod set_ops;
pub mod unbox;
pub mod value;
pub mod window;

pub use aggregate::SingleMatch;
pub use error::SequenceError; // Реэкспорт для удобства использования.
pub use sequence::Sequence;
pub use value::{FromValue, Value};

/// Создает `Sequence` из перечисленных элементов.
///
/// `sequence![]` эквивалентен пустой последовательности; тип элемента
/// в этом случае выводится из контекста.
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::Sequence::new(::std::vec::Vec::new())
    };
    ($($element:expr),+ $(,)?) => {
        $crate::Sequence::new(::std::vec![$($element),+])
    };
}
