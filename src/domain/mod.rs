//! Domain models and types for docsmith.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`PortId`])
//! - **Work items and shared settings** ([`ExportTarget`], [`ExportConfig`])
//! - **Error types** ([`DocsmithError`], [`ExportError`] and the per-stage errors)
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! Fatal operations return [`Result<T, DocsmithError>`]; a single pipeline run
//! returns [`ExportError`], which always names the port that failed:
//!
//! ```rust
//! use docsmith::domain::{ExportError, ExportErrorKind, PortId};
//!
//! let err = ExportError::MalformedTarget {
//!     port: PortId::new("http").unwrap(),
//!     reason: "invalid port number".to_string(),
//! };
//! assert_eq!(err.kind(), ExportErrorKind::MalformedTarget);
//! assert_eq!(err.port().as_str(), "http");
//! ```

pub mod errors;
pub mod ids;
pub mod result;
pub mod target;

// Re-export commonly used types for convenience
pub use errors::{
    ConvertError, DocsmithError, ExportError, ExportErrorKind, RenderError, SourceError,
};
pub use ids::PortId;
pub use result::Result;
pub use target::{ExportConfig, ExportTarget, GroupBy, MarkupLanguage, API_DOCS_PATH};
