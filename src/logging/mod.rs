//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human-readable console output
//! - JSON-formatted log files with rotation
//! - Configurable log levels
//!
//! # Example
//!
//! ```no_run
//! use docsmith::logging::init_logging;
//! use docsmith::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! tracing::warn!(port = "8080", "Service unreachable");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of an export for one target
///
/// # Example
///
/// ```no_run
/// use docsmith::log_export_start;
/// use docsmith::domain::{ExportTarget, PortId};
///
/// let target = ExportTarget::new("localhost", PortId::from(8080u16), "docs");
/// log_export_start!(&target);
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($target:expr) => {
        tracing::info!(
            host = %$target.host,
            port = %$target.port,
            "Starting export"
        );
    };
}

/// Log the completion of an export for one target
///
/// # Example
///
/// ```no_run
/// use docsmith::log_export_complete;
/// use std::time::Duration;
///
/// log_export_complete!("8080", "docs/8080.html", Duration::from_millis(250));
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($port:expr, $path:expr, $duration:expr) => {
        tracing::info!(
            port = %$port,
            path = %$path,
            duration_ms = $duration.as_millis() as u64,
            "Export completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use docsmith::log_error_with_context;
/// use docsmith::domain::DocsmithError;
///
/// let error = DocsmithError::Configuration("service.host cannot be empty".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
