#![cfg(feature = "logger_utils_feature")]

use std::fs::File;
use tempfile::tempdir;
use utils_crate::config::LoggingConfig;
use utils_crate::logger::init_tracing_logger;

#[test]
fn test_logger_file_creation_failure_does_not_fail_init() {
    // Файл на месте директории: create_dir_all гарантированно завершится ошибкой.
    let base_dir = tempdir().unwrap();
    let blocked = base_dir.path().join("not_a_dir");
    File::create(&blocked).unwrap();
    let log_dir = blocked.join("logs");

    let config = LoggingConfig::new("info", "text");
    let result = init_tracing_logger("logger_fallback_tests", &config, Some(&log_dir));

    assert!(result.is_ok(), "got {:?}", result);
    assert!(!log_dir.exists());
    tracing::info!("Логгер инициализирован, несмотря на ошибку создания директории для файла.");
}
