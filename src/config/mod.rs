//! Configuration management for docsmith.
//!
//! # Overview
//!
//! docsmith uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `DOCSMITH_<SECTION>_<KEY>` environment overrides
//! - Default values for optional settings
//! - Validation before any target is attempted
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use docsmith::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("docsmith.toml")?;
//!
//! println!("Host: {}", config.service.host);
//! println!("Output: {}", config.output.directory.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`ServiceConfig`] - Host, `;`-separated ports and fetch timeouts
//! - [`OutputConfig`] - Output directory, concurrency, stylesheet, grouping
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [service]
//! host = "api.internal.example.com"
//! ports = "8080;8081;8082"
//! timeout_seconds = 30
//!
//! [output]
//! directory = "./api-docs"
//! max_concurrency = 1
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_unvalidated};
pub use schema::{ApplicationConfig, DocsmithConfig, LoggingConfig, OutputConfig, ServiceConfig};
