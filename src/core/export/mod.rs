//! Export orchestration and batch processing
//!
//! This module provides the core export logic for docsmith, including:
//! - The per-target pipeline (fetch, render, convert, clean up)
//! - The batch runner isolating failures between targets
//! - Summary and reporting

pub mod pipeline;
pub mod runner;
pub mod summary;

pub use pipeline::ExportPipeline;
pub use runner::{BatchRunner, DEFAULT_MAX_CONCURRENCY};
pub use summary::{ExportSummary, Outcome, OutcomeError};
