// Configuration loading tests
// Author: kelexine (https://github.com/kelexine)

use http_lambda::config::AppConfig;
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[server]
port = 9191

[logging]
level = "info"
format = "json"

[gateway]
request_id_header = "X-Req-Id"

[backend]
endpoint = "http://lambda.local:9001"
timeout_seconds = 30

[stats]
report_url = "http://stats.local/push"
report_interval_seconds = 10
"#
    )
    .unwrap();

    let config = AppConfig::load(Some(file.path())).unwrap();

    assert_eq!(config.server.port, 9191);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.gateway.request_id_header.as_deref(), Some("X-Req-Id"));
    assert_eq!(config.backend.endpoint, "http://lambda.local:9001");
    assert_eq!(config.backend.timeout_seconds, 30);
    assert!(config.stats.recorder_enabled());
    assert_eq!(config.stats.report_interval_seconds, 10);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[server]\nhost = \"127.0.0.1\"").unwrap();

    let config = AppConfig::load(Some(file.path())).unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8090);
    assert_eq!(config.logging.level, "debug");
    assert!(config.gateway.request_id_header.is_none());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    assert!(AppConfig::load(Some(&missing)).is_err());
}
