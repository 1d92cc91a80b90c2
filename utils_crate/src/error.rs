//! Общий тип ошибки `UtilsError`.

use thiserror::Error;

/// Общий тип ошибки для утилит `utils_crate` и потенциально для всего воркспейса.
///
/// Другие крейты (например, `core_sequence` с фичей `with_utils_crate_errors`)
/// конвертируют свои ошибки в этот тип.
#[derive(Error, Debug)]
pub enum UtilsError {
    /// Ошибка ввода-вывода (I/O).
    ///
    /// Содержит исходную ошибку `std::io::Error` и опционально путь к файлу/директории,
    /// с которым возникла проблема.
    #[error("I/O error: {source}")]
    Io {
        /// Исходная ошибка I/O.
        #[source]
        source: std::io::Error,
        /// Опциональный путь, связанный с ошибкой I/O.
        path: Option<String>,
    },

    /// Ошибка конфигурации: неверный уровень или формат логов, невалидный файл.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Общая ошибка утилиты для случаев, не покрытых другими вариантами.
    #[error("A generic utility error occurred: {0}")]
    Generic(String),
}

impl UtilsError {
    /// Вспомогательный конструктор для создания `UtilsError::Io` с указанием пути.
    ///
    /// # Аргументы
    ///
    /// * `source` - Исходная ошибка `std::io::Error`.
    /// * `path` - Строка или любой тип, который можно преобразовать в `String`, представляющий путь.
    pub fn io_with_path(source: std::io::Error, path: impl Into<String>) -> Self {
        Self::Io {
            source,
            path: Some(path.into()),
        }
    }
}

/// Позволяет автоматически конвертировать `std::io::Error` в `UtilsError::Io` (без пути).
impl From<std::io::Error> for UtilsError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source, path: None }
    }
}
