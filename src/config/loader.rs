//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::DocsmithConfig;
use crate::domain::errors::DocsmithError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into DocsmithConfig
/// 4. Applies environment variable overrides (DOCSMITH_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Every failure is reported as [`DocsmithError::Configuration`]: the run
/// must not start with an unreadable or invalid configuration.
///
/// # Examples
///
/// ```no_run
/// use docsmith::config::loader::load_config;
///
/// let config = load_config("docsmith.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<DocsmithConfig> {
    let config = load_config_unvalidated(path)?;

    config.validate().map_err(|e| {
        DocsmithError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Loads configuration without running validation
///
/// Used by commands that apply CLI overrides before validating.
pub fn load_config_unvalidated(path: impl AsRef<Path>) -> Result<DocsmithConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DocsmithError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        DocsmithError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: DocsmithConfig = toml::from_str(&contents)
        .map_err(|e| DocsmithError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| DocsmithError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        // Placeholders in comments are left alone
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(DocsmithError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using DOCSMITH_* prefix
///
/// Environment variables follow the pattern: DOCSMITH_<SECTION>_<KEY>
/// For example: DOCSMITH_SERVICE_HOST, DOCSMITH_OUTPUT_DIRECTORY
fn apply_env_overrides(config: &mut DocsmithConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("DOCSMITH_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Service overrides
    if let Ok(val) = std::env::var("DOCSMITH_SERVICE_HOST") {
        config.service.host = val;
    }
    if let Ok(val) = std::env::var("DOCSMITH_SERVICE_PORTS") {
        config.service.ports = Some(val);
    }
    if let Ok(val) = std::env::var("DOCSMITH_SERVICE_TIMEOUT_SECONDS") {
        config.service.timeout_seconds = parse_override("DOCSMITH_SERVICE_TIMEOUT_SECONDS", &val)?;
    }

    // Output overrides
    if let Ok(val) = std::env::var("DOCSMITH_OUTPUT_DIRECTORY") {
        config.output.directory = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("DOCSMITH_OUTPUT_MAX_CONCURRENCY") {
        config.output.max_concurrency = parse_override("DOCSMITH_OUTPUT_MAX_CONCURRENCY", &val)?;
    }
    if let Ok(val) = std::env::var("DOCSMITH_OUTPUT_STYLESHEET") {
        config.output.stylesheet = Some(PathBuf::from(val));
    }

    // Logging overrides
    if let Ok(val) = std::env::var("DOCSMITH_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("DOCSMITH_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

fn parse_override<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        DocsmithError::Configuration(format!("{name} has an invalid value: '{value}'"))
    })
}
