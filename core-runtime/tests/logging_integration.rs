//! Integration tests for logging system

use core_runtime::logging::{init_logging, strip_path, LogFormat, LogLevel, LoggingConfig};
use core_runtime::Error;

#[test]
fn test_logging_initialization() {
    // The global subscriber can only be installed once per process, so this is
    // the only test in this binary that calls init_logging.
    let config = LoggingConfig::default()
        .with_format(LogFormat::Json)
        .with_level(LogLevel::Debug)
        .with_target(true);

    init_logging(config.clone()).expect("first initialization succeeds");
    tracing::info!(file = %strip_path("/music/a.mp3"), "Logging initialized");

    let second = init_logging(config);
    assert!(matches!(second, Err(Error::Config(_))));
}

#[test]
fn test_invalid_filter_is_rejected_before_install() {
    let config = LoggingConfig::default().with_filter("core_sync=notalevel");

    let result = init_logging(config);
    match result {
        Err(Error::Config(msg)) => assert!(msg.contains("Invalid log filter")),
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn test_path_stripping() {
    // Unix paths
    assert_eq!(strip_path("/home/user/music/song.mp3"), "song.mp3");
    assert_eq!(strip_path("/srv/library/b.flac"), "b.flac");

    // Windows paths
    assert_eq!(strip_path("C:\\Users\\John\\Music\\song.mp3"), "song.mp3");

    // Already basename
    assert_eq!(strip_path("a.mp3"), "a.mp3");

    // Edge cases
    assert_eq!(strip_path("/var/log/"), "");
    assert_eq!(strip_path(""), "");
}

#[test]
fn test_cli_default_format() {
    let config = LoggingConfig::default();
    assert_eq!(config.format, LogFormat::Compact);
    assert!(!config.display_target);
}

#[test]
fn test_config_chaining() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Pretty)
        .with_level(LogLevel::Warn)
        .with_filter("core_metadata=debug,core_sync=trace")
        .with_target(false);

    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.level, LogLevel::Warn);
    assert_eq!(
        config.filter,
        Some("core_metadata=debug,core_sync=trace".to_string())
    );
    assert!(!config.display_target);
}
