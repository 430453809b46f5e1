//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables should be run with --test-threads=1
//! to avoid interference between tests.

use docsmith::config::{load_config, load_config_unvalidated};
use docsmith::core::enumerate::enumerate_targets;
use docsmith::domain::{DocsmithError, GroupBy};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("DOCSMITH_APPLICATION_LOG_LEVEL");
    std::env::remove_var("DOCSMITH_SERVICE_HOST");
    std::env::remove_var("DOCSMITH_SERVICE_PORTS");
    std::env::remove_var("DOCSMITH_SERVICE_TIMEOUT_SECONDS");
    std::env::remove_var("DOCSMITH_OUTPUT_DIRECTORY");
    std::env::remove_var("DOCSMITH_OUTPUT_MAX_CONCURRENCY");
    std::env::remove_var("TEST_DOCSMITH_HOST");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"

[service]
host = "api.internal"
ports = "8080;8081;8082"
timeout_seconds = 15
connect_timeout_seconds = 5

[output]
directory = "/srv/docs"
max_concurrency = 4
group_by = "as_is"

[logging]
local_enabled = true
local_path = "/var/log/docsmith"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.service.host, "api.internal");
    assert_eq!(config.service.ports.as_deref(), Some("8080;8081;8082"));
    assert_eq!(config.service.timeout_seconds, 15);
    assert_eq!(config.service.connect_timeout_seconds, 5);
    assert_eq!(config.output.directory, PathBuf::from("/srv/docs"));
    assert_eq!(config.output.max_concurrency, 4);
    assert_eq!(config.output.group_by, GroupBy::AsIs);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[service]
host = "localhost"
ports = "8080"

[output]
directory = "docs"
"#,
    );

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.service.timeout_seconds, 30);
    assert_eq!(config.output.max_concurrency, 1);
    assert_eq!(config.output.group_by, GroupBy::Tags);
    assert!(config.output.stylesheet.is_none());
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_DOCSMITH_HOST", "gateway.example.com");

    let file = write_config(
        r#"
[service]
host = "${TEST_DOCSMITH_HOST}"
ports = "9000"

[output]
directory = "docs"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.service.host, "gateway.example.com");

    cleanup_env_vars();
}

#[test]
fn test_missing_substituted_variable_is_configuration_error() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[service]
host = "${TEST_DOCSMITH_HOST}"
ports = "9000"

[output]
directory = "docs"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, DocsmithError::Configuration(_)));
    assert!(err.to_string().contains("TEST_DOCSMITH_HOST"));
}

#[test]
fn test_env_overrides_take_precedence() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("DOCSMITH_SERVICE_PORTS", "7000;7001");
    std::env::set_var("DOCSMITH_OUTPUT_MAX_CONCURRENCY", "2");

    let file = write_config(
        r#"
[service]
host = "localhost"
ports = "8080"

[output]
directory = "docs"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.service.ports.as_deref(), Some("7000;7001"));
    assert_eq!(config.output.max_concurrency, 2);

    cleanup_env_vars();
}

#[test]
fn test_invalid_numeric_override_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("DOCSMITH_OUTPUT_MAX_CONCURRENCY", "many");

    let file = write_config(
        r#"
[service]
host = "localhost"
ports = "8080"

[output]
directory = "docs"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("DOCSMITH_OUTPUT_MAX_CONCURRENCY"));

    cleanup_env_vars();
}

#[test]
fn test_missing_host_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[service]
ports = "8080"

[output]
directory = "docs"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, DocsmithError::Configuration(_)));
    assert!(err.to_string().contains("service.host"));
}

#[test]
fn test_missing_ports_key_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[service]
host = "localhost"

[output]
directory = "docs"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("service.ports"));
}

#[test]
fn test_empty_ports_value_is_valid_and_yields_no_targets() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[service]
host = "localhost"
ports = ""

[output]
directory = "docs"
"#,
    );

    let config = load_config(file.path()).unwrap();
    let targets = enumerate_targets(
        &config.service.host,
        config.service.ports.as_deref().unwrap_or_default(),
        &config.output.directory,
    )
    .unwrap();

    assert!(targets.is_empty());
}

#[test]
fn test_host_with_scheme_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[service]
host = "http://localhost"
ports = "8080"

[output]
directory = "docs"
"#,
    );

    assert!(load_config(file.path()).is_err());
    // The unvalidated loader still returns the parsed values
    let config = load_config_unvalidated(file.path()).unwrap();
    assert_eq!(config.service.host, "http://localhost");
}

#[test]
fn test_missing_file_is_configuration_error() {
    let err = load_config("/nonexistent/docsmith.toml").unwrap_err();
    assert!(matches!(err, DocsmithError::Configuration(_)));
}

#[test]
fn test_invalid_toml_is_configuration_error() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("[service\nhost = ");
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse TOML"));
}
