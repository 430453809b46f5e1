//! Batch runner
//!
//! Drives the pipeline over every enumerated target. The runner itself never
//! fails: each target ends as exactly one [`Outcome`], and a panic inside one
//! pipeline invocation is contained to that target.

use crate::core::export::pipeline::ExportPipeline;
use crate::core::export::summary::{ExportSummary, Outcome};
use crate::domain::ExportTarget;
use chrono::Utc;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;

/// Concurrency used when none is configured
pub const DEFAULT_MAX_CONCURRENCY: usize = 1;

/// Runs the export pipeline for a list of targets
pub struct BatchRunner {
    pipeline: Arc<ExportPipeline>,
    max_concurrency: usize,
}

impl BatchRunner {
    /// `max_concurrency` below 1 is treated as 1
    pub fn new(pipeline: Arc<ExportPipeline>, max_concurrency: usize) -> Self {
        Self {
            pipeline,
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Exports every target and collects their outcomes in input order
    ///
    /// With a concurrency of 1 targets are processed strictly one after the
    /// other. Higher values overlap pipeline runs but keep the order of the
    /// returned outcomes.
    pub async fn run(&self, targets: Vec<ExportTarget>) -> ExportSummary {
        let start = Instant::now();
        let mut summary = ExportSummary::new(Utc::now());

        tracing::info!(
            targets = targets.len(),
            max_concurrency = self.max_concurrency,
            "Starting batch export"
        );

        let outcomes: Vec<Outcome> = stream::iter(targets)
            .map(|target| {
                let pipeline = Arc::clone(&self.pipeline);
                async move { run_isolated(pipeline, target).await }
            })
            .buffered(self.max_concurrency)
            .collect()
            .await;

        for outcome in outcomes {
            summary.push(outcome);
        }

        let summary = summary.with_duration(start.elapsed());
        summary.log_summary();
        summary
    }
}

async fn run_isolated(pipeline: Arc<ExportPipeline>, target: ExportTarget) -> Outcome {
    let start = Instant::now();

    let task_target = target.clone();
    let handle = tokio::spawn(async move { pipeline.run(&task_target).await });

    match handle.await {
        Ok(Ok(document)) => Outcome::succeeded(target, document, start.elapsed()),
        Ok(Err(e)) => {
            tracing::error!(
                port = %e.port(),
                kind = %e.kind(),
                error = %e,
                "Export failed"
            );
            Outcome::failed(target, &e, start.elapsed())
        }
        Err(e) => {
            tracing::error!(
                port = %target.port,
                error = %e,
                "Export task aborted"
            );
            Outcome::aborted(target, format!("export task aborted: {e}"), start.elapsed())
        }
    }
}
