//! Модуль для инициализации глобального логгера на основе `tracing`.
//!
//! Функциональность этого модуля активируется фичей `logger_utils_feature`.

use std::{fs, io, path::Path};

use tracing_subscriber::{
    filter::Directive, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
    Registry,
};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::UtilsError;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Директива `EnvFilter` вида `app_name=level` для текущего приложения.
fn app_directive(app_name: &str, config: &LoggingConfig) -> Result<Directive, UtilsError> {
    // EnvFilter ожидает имя цели, а не имя пакета: дефисы заменяются на подчеркивания.
    let sanitized_app_name = app_name.replace('-', "_");
    let level = config.tracing_level()?;
    format!("{sanitized_app_name}={level}")
        .parse::<Directive>()
        .map_err(|e| {
            UtilsError::Config(format!(
                "Invalid log directive for application '{app_name}': {e}"
            ))
        })
}

/// Инициализирует глобальный подписчик `tracing` по `LoggingConfig`.
///
/// Настраивает вывод в stderr и, опционально, в файл с ежедневной ротацией.
/// Фильтрует по `RUST_LOG` (по умолчанию `info`) плюс директива уровня из
/// конфигурации для `app_name`.
///
/// # Аргументы
/// * `app_name` - Имя приложения (цель для фильтра и префикс имени файла лога).
/// * `config` - Уровень и формат логов. Валидируется до установки подписчика.
/// * `log_dir` - Опциональная директория для файлов логов.
///
/// # Ошибки
/// Возвращает `UtilsError::Config`, если конфигурация невалидна, и
/// `UtilsError::Generic`, если глобальный подписчик уже установлен.
/// Проблемы с созданием директории логов не приводят к ошибке:
/// логирование продолжается только в консоль.
#[allow(clippy::module_name_repetitions)] // Имя функции init_tracing_logger в модуле logger - это нормально
pub fn init_tracing_logger(
    app_name: &str,
    config: &LoggingConfig,
    log_dir: Option<&Path>,
) -> Result<(), UtilsError> {
    config.validate()?;
    let format = config.log_format()?;
    let level = config.tracing_level()?;

    let base_env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Слой для вывода в консоль (stderr).
    let console_filter = base_env_filter.clone().add_directive(app_directive(app_name, config)?);
    let console_layer: BoxedLayer = match format {
        LogFormat::Text => fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(true)
            .pretty()
            .with_filter(console_filter)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .with_writer(io::stderr)
            .json()
            .with_filter(console_filter)
            .boxed(),
    };

    let mut layers: Vec<BoxedLayer> = vec![console_layer];

    // Настройка логирования в файл, если указана директория.
    let mut file_logging_failed = false;
    if let Some(dir) = log_dir {
        if let Err(e) = fs::create_dir_all(dir) {
            // tracing еще не инициализирован, поэтому eprintln!.
            eprintln!(
                "[WARNING] Failed to create log directory {dir:?}: {e}. File logging is disabled."
            );
            file_logging_failed = true;
        } else {
            let file_appender = tracing_appender::rolling::daily(dir, format!("{app_name}.log"));
            let file_filter = base_env_filter.add_directive(app_directive(app_name, config)?);
            let file_layer: BoxedLayer = match format {
                LogFormat::Text => fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_filter(file_filter)
                    .boxed(),
                LogFormat::Json => fmt::layer()
                    .with_writer(file_appender)
                    .json()
                    .with_filter(file_filter)
                    .boxed(),
            };
            layers.push(file_layer);
        }
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| UtilsError::Generic(format!("Failed to initialize logger: {e}")))?;

    match log_dir {
        Some(dir) if !file_logging_failed => tracing::info!(
            %level,
            %format,
            log_dir = ?dir,
            "Logger initialized with console and file output."
        ),
        Some(dir) => tracing::warn!(
            %level,
            %format,
            log_dir = ?dir,
            "Logger initialized, file output is unavailable."
        ),
        None => tracing::info!(%level, %format, "Logger initialized, console output only."),
    }
    Ok(())
}
