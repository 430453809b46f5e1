//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the docsmith configuration file.

use crate::config::load_config_unvalidated;
use crate::core::enumerate::enumerate_targets;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Load configuration
        let config = match load_config_unvalidated(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Validate configuration
        if let Err(e) = config.validate() {
            println!("❌ Configuration validation failed");
            println!("   Error: {e}");
            println!();
            return Ok(2); // Configuration error exit code
        }

        let ports = config.service.ports.as_deref().unwrap_or_default();
        let targets =
            match enumerate_targets(&config.service.host, ports, &config.output.directory) {
                Ok(t) => t,
                Err(e) => {
                    println!("❌ Configuration validation failed");
                    println!("   Error: {e}");
                    return Ok(2);
                }
            };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Host: {}", config.service.host);
        println!(
            "  Targets: {}",
            if targets.is_empty() {
                "none".to_string()
            } else {
                targets
                    .iter()
                    .map(|t| t.port.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        );
        println!("  Timeout: {}s", config.service.timeout_seconds);
        println!("  Output Directory: {}", config.output.directory.display());
        println!("  Max Concurrency: {}", config.output.max_concurrency);
        println!(
            "  Stylesheet: {}",
            config
                .output
                .stylesheet
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in".to_string())
        );
        println!();
        Ok(0)
    }
}
