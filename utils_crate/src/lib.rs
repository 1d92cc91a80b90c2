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

//! `utils_crate` предоставляет общий тип ошибки, конфигурацию логирования
//! и инициализацию `tracing` для крейтов воркспейса.
//!
//! # Основные модули:
//!
//! - [`error`]: Определяет общий тип ошибки `UtilsError`.
//! - [`config`]: `LoggingConfig` (уровень и формат логов) с валидацией и
//!   `AppConfig` для загрузки из TOML (фича `config_toml`).
//! - [`logger`]: (активируется фичей `logger_utils_feature`) Инициализация
//!   глобального подписчика `tracing` по `LoggingConfig`.
//!
//! # Использование фич (Features)
//!
//! ```toml
//! # В Cargo.toml вашего проекта
//! # utils_crate = { path = "path/to/utils_crate", default-features = false, features = ["config_toml"] }
//! ```
//!
//! Фича `default` включает логгер и загрузку TOML.

// --- Модуль для общих ошибок ---
pub mod error;
pub use error::UtilsError; // Реэкспорт для удобства использования. Тип ошибки UtilsError.

// --- Конфигурация логирования ---
pub mod config;
pub use config::{AppConfig, LogFormat, LoggingConfig}; // Реэкспорт.

/// Модуль с утилитами для инициализации логирования.
///
/// Активируется фичей `logger_utils_feature`.
#[cfg(feature = "logger_utils_feature")]
pub mod logger;
#[cfg(feature = "logger_utils_feature")]
pub use logger::init_tracing_logger; // Реэкспорт.
