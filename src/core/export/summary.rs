//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting export results.

use crate::domain::{ExportError, ExportErrorKind, ExportTarget, PortId, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Why a target failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeError {
    pub kind: ExportErrorKind,
    pub message: String,
}

/// Result of the pipeline for one target
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub target: ExportTarget,

    pub success: bool,

    /// Set only on failure
    pub error: Option<OutcomeError>,

    /// HTML page written, set only on success
    pub document: Option<PathBuf>,

    pub duration_ms: u64,
}

impl Outcome {
    pub fn succeeded(target: ExportTarget, document: PathBuf, duration: Duration) -> Self {
        Self {
            target,
            success: true,
            error: None,
            document: Some(document),
            duration_ms: duration.as_millis() as u64,
        }
    }

    pub fn failed(target: ExportTarget, error: &ExportError, duration: Duration) -> Self {
        Self {
            target,
            success: false,
            error: Some(OutcomeError {
                kind: error.kind(),
                message: error.to_string(),
            }),
            document: None,
            duration_ms: duration.as_millis() as u64,
        }
    }

    /// The pipeline task ended without producing a result
    pub fn aborted(target: ExportTarget, message: impl Into<String>, duration: Duration) -> Self {
        Self {
            target,
            success: false,
            error: Some(OutcomeError {
                kind: ExportErrorKind::Aborted,
                message: message.into(),
            }),
            document: None,
            duration_ms: duration.as_millis() as u64,
        }
    }

    pub fn port(&self) -> &PortId {
        &self.target.port
    }
}

/// Summary of a batch run, one outcome per target in enumeration order
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub started_at: DateTime<Utc>,

    pub duration: Duration,

    pub outcomes: Vec<Outcome>,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            duration: Duration::from_secs(0),
            outcomes: Vec::new(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn push(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn successful(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.successful()
    }

    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.success)
    }

    /// Check if every target succeeded
    pub fn is_successful(&self) -> bool {
        self.failed() == 0
    }

    /// Get success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 100.0;
        }
        (self.successful() as f64 / self.total() as f64) * 100.0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total = self.total(),
            successful = self.successful(),
            failed = self.failed(),
            duration_ms = self.duration.as_millis() as u64,
            success_rate = format!("{:.2}%", self.success_rate()),
            "Batch export completed"
        );

        if !self.is_successful() {
            tracing::warn!(
                failed = self.failed(),
                "Batch export completed with failures"
            );
            for outcome in self.failures() {
                if let Some(ref error) = outcome.error {
                    tracing::warn!(
                        port = %outcome.port(),
                        kind = %error.kind,
                        message = %error.message,
                        "Export failure"
                    );
                }
            }
        }
    }

    /// Machine-readable form of the summary
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "started_at": self.started_at.to_rfc3339(),
            "duration_ms": self.duration.as_millis() as u64,
            "total": self.total(),
            "successful": self.successful(),
            "failed": self.failed(),
            "outcomes": self.outcomes,
        })
    }

    /// Writes the JSON report, creating parent directories as needed
    pub async fn write_report(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(&self.to_json())?;
        tokio::fs::write(path, json).await?;

        tracing::info!(path = %path.display(), "Wrote export report");
        Ok(())
    }
}
