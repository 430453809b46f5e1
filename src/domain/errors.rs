//! Domain error types
//!
//! This module defines the error hierarchy for docsmith. Fatal errors abort the
//! run before any target is attempted; per-target errors are absorbed by the
//! batch runner and recorded as failed outcomes.
//! All errors are domain-specific and don't expose third-party types.

use super::ids::PortId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main docsmith error type
///
/// Only [`DocsmithError::Configuration`] is expected to terminate a run; the
/// other variants surface from helpers such as report writing.
#[derive(Debug, Error)]
pub enum DocsmithError {
    /// Missing or invalid required configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Per-target export failure
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Failure of a single pipeline invocation
///
/// Every variant carries the port of the target that failed, so that the
/// batch runner can attribute the error without extra bookkeeping.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The target cannot be turned into a valid request or file name
    #[error("Malformed target for port {port}: {reason}")]
    MalformedTarget { port: PortId, reason: String },

    /// The API description could not be retrieved
    #[error("Failed to fetch API description for port {port}: {source}")]
    Fetch {
        port: PortId,
        #[source]
        source: SourceError,
    },

    /// The structured document could not be produced
    #[error("Failed to render document for port {port}: {source}")]
    Render {
        port: PortId,
        #[source]
        source: RenderError,
    },

    /// The structured document could not be converted to HTML
    #[error("Failed to convert document for port {port}: {source}")]
    Convert {
        port: PortId,
        #[source]
        source: ConvertError,
    },
}

impl ExportError {
    /// Port of the target that failed
    pub fn port(&self) -> &PortId {
        match self {
            ExportError::MalformedTarget { port, .. }
            | ExportError::Fetch { port, .. }
            | ExportError::Render { port, .. }
            | ExportError::Convert { port, .. } => port,
        }
    }

    /// Classification used in outcomes and reports
    pub fn kind(&self) -> ExportErrorKind {
        match self {
            ExportError::MalformedTarget { .. } => ExportErrorKind::MalformedTarget,
            ExportError::Fetch { .. } => ExportErrorKind::Fetch,
            ExportError::Render { .. } => ExportErrorKind::Render,
            ExportError::Convert { .. } => ExportErrorKind::Convert,
        }
    }
}

/// Kind of per-target failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportErrorKind {
    /// Target could not be turned into a request
    MalformedTarget,
    /// Network or HTTP failure
    Fetch,
    /// Structured document generation failed
    Render,
    /// HTML conversion failed
    Convert,
    /// The pipeline task itself aborted
    Aborted,
}

impl fmt::Display for ExportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExportErrorKind::MalformedTarget => "malformed target",
            ExportErrorKind::Fetch => "fetch",
            ExportErrorKind::Render => "render",
            ExportErrorKind::Convert => "convert",
            ExportErrorKind::Aborted => "aborted",
        };
        f.write_str(label)
    }
}

/// Errors raised while retrieving an API description
///
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Failed to connect to the service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request did not complete in time
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Service answered with a non-2xx status
    #[error("Unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body could not be read
    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Errors raised while producing the structured document
#[derive(Debug, Error)]
pub enum RenderError {
    /// Body is not valid JSON or not shaped like an API description
    #[error("Invalid API description: {0}")]
    InvalidDescription(String),

    /// Description declares a version this renderer does not handle
    #[error("Unsupported API description version: {0}")]
    UnsupportedVersion(String),

    /// Rendered document could not be written
    #[error("Failed to write rendered document {path}: {message}")]
    Write { path: String, message: String },
}

/// Errors raised while converting a rendered document to HTML
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Rendered document could not be read
    #[error("Failed to read document {path}: {message}")]
    Read { path: String, message: String },

    /// HTML output could not be written
    #[error("Failed to write HTML document {path}: {message}")]
    Write { path: String, message: String },

    /// Stylesheet could not be loaded
    #[error("Failed to load stylesheet {path}: {message}")]
    Stylesheet { path: String, message: String },

    /// Requested option is not permitted by the configured safe mode
    #[error("Not permitted in safe mode: {0}")]
    SafeMode(String),

    /// Markdown formatting failed
    #[error("Failed to format HTML: {0}")]
    Format(String),

    /// The blocking conversion task panicked or was cancelled
    #[error("Conversion task failed: {0}")]
    Task(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for DocsmithError {
    fn from(err: std::io::Error) -> Self {
        DocsmithError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for DocsmithError {
    fn from(err: serde_json::Error) -> Self {
        DocsmithError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for DocsmithError {
    fn from(err: toml::de::Error) -> Self {
        DocsmithError::Configuration(format!("TOML parse error: {err}"))
    }
}
