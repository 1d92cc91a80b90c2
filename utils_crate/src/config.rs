//! Конфигурация логирования и ее загрузка из TOML.

use std::fmt;

#[cfg(feature = "config_toml")]
use serde::Deserialize;
#[cfg(feature = "config_toml")]
use std::path::Path;
use tracing::Level;
#[cfg(feature = "config_toml")]
use tracing::warn;

use crate::error::UtilsError;

/// Уровень логирования `debug`.
pub const LOG_LEVEL_DEBUG: &str = "debug";
/// Уровень логирования `info`.
pub const LOG_LEVEL_INFO: &str = "info";
/// Уровень логирования `error`.
pub const LOG_LEVEL_ERROR: &str = "error";
/// Уровень по умолчанию, если в конфигурации он пуст.
pub const LOG_LEVEL_DEFAULT: &str = LOG_LEVEL_INFO;

/// Текстовый формат вывода логов.
pub const LOG_FORMAT_TEXT: &str = "text";
/// JSON-формат вывода логов.
pub const LOG_FORMAT_JSON: &str = "json";
/// Формат по умолчанию, если в конфигурации он пуст.
pub const LOG_FORMAT_DEFAULT: &str = LOG_FORMAT_JSON;

/// Формат вывода логов.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Человекочитаемый текст.
    Text,
    /// Одна JSON-запись на строку.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str(LOG_FORMAT_TEXT),
            Self::Json => f.write_str(LOG_FORMAT_JSON),
        }
    }
}

/// Конфигурация логирования.
///
/// Пустые строки допустимы и означают значения по умолчанию
/// (`LOG_LEVEL_DEFAULT`, `LOG_FORMAT_DEFAULT`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config_toml", derive(Deserialize))]
pub struct LoggingConfig {
    /// Уровень: `debug`, `info`, `error` или пусто.
    #[cfg_attr(feature = "config_toml", serde(default))]
    pub level: String,
    /// Формат: `text`, `json` или пусто.
    #[cfg_attr(feature = "config_toml", serde(default))]
    pub format: String,
}

impl LoggingConfig {
    /// Создает конфигурацию с явными уровнем и форматом.
    pub fn new(level: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            format: format.into(),
        }
    }

    /// Проверяет уровень и формат.
    ///
    /// # Errors
    /// Возвращает `UtilsError::Config` с сообщением `invalid log level ...`
    /// или `invalid log format ...`.
    pub fn validate(&self) -> Result<(), UtilsError> {
        self.tracing_level()?;
        self.log_format()?;
        Ok(())
    }

    /// Уровень `tracing`, соответствующий `level`.
    ///
    /// # Errors
    /// `UtilsError::Config`, если уровень не распознан.
    pub fn tracing_level(&self) -> Result<Level, UtilsError> {
        let level = if self.level.is_empty() {
            LOG_LEVEL_DEFAULT
        } else {
            self.level.as_str()
        };
        match level {
            LOG_LEVEL_DEBUG => Ok(Level::DEBUG),
            LOG_LEVEL_INFO => Ok(Level::INFO),
            LOG_LEVEL_ERROR => Ok(Level::ERROR),
            other => Err(UtilsError::Config(format!("invalid log level {other}"))),
        }
    }

    /// Формат вывода, соответствующий `format`.
    ///
    /// # Errors
    /// `UtilsError::Config`, если формат не распознан.
    pub fn log_format(&self) -> Result<LogFormat, UtilsError> {
        let format = if self.format.is_empty() {
            LOG_FORMAT_DEFAULT
        } else {
            self.format.as_str()
        };
        match format {
            LOG_FORMAT_TEXT => Ok(LogFormat::Text),
            LOG_FORMAT_JSON => Ok(LogFormat::Json),
            other => Err(UtilsError::Config(format!("invalid log format {other}"))),
        }
    }
}

/// Глобальная конфигурация приложения.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config_toml", derive(Deserialize))]
pub struct AppConfig {
    /// Конфигурация логирования, таблица `[logging]`.
    #[cfg_attr(feature = "config_toml", serde(default))]
    pub logging: LoggingConfig,
}

#[cfg(feature = "config_toml")]
impl AppConfig {
    /// Разбирает и валидирует конфигурацию из строки TOML.
    ///
    /// # Errors
    /// `UtilsError::Config` при ошибке разбора или невалидных значениях.
    pub fn from_toml_str(content: &str) -> Result<Self, UtilsError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| UtilsError::Config(format!("Failed to parse AppConfig from TOML: {e}")))?;
        config.logging.validate()?;
        Ok(config)
    }

    /// Загружает конфигурацию приложения из TOML файла.
    /// Если файл не найден, возвращается конфигурация по умолчанию.
    ///
    /// # Arguments
    /// * `file_path` - Путь к TOML файлу конфигурации.
    ///
    /// # Errors
    /// Возвращает `UtilsError::Io` при ошибках чтения файла или `UtilsError::Config`
    /// при ошибках парсинга TOML и невалидных значениях.
    pub fn load_from_toml(file_path: &Path) -> Result<Self, UtilsError> {
        if !file_path.exists() {
            warn!(
                "AppConfig file not found at {:?}, using default configuration.",
                file_path
            );
            return Ok(Self::default());
        }
        let config_str = std::fs::read_to_string(file_path)
            .map_err(|e| UtilsError::io_with_path(e, file_path.to_string_lossy().into_owned()))?;
        Self::from_toml_str(&config_str)
    }
}
