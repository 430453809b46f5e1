//! Export command implementation
//!
//! This module implements the `export` command, which exports the API
//! documentation of every configured service to HTML.

use crate::adapters::swagger::HttpDescriptionSource;
use crate::config::{load_config_unvalidated, DocsmithConfig};
use crate::core::convert::{ConvertOptions, HtmlConverter};
use crate::core::enumerate::enumerate_targets;
use crate::core::export::{BatchRunner, ExportPipeline, ExportSummary};
use crate::domain::ExportConfig;
use crate::log_error_with_context;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Arguments for the export command
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Override the host serving every service
    #[arg(long)]
    pub host: Option<String>,

    /// Override the port list (semicolon-separated)
    #[arg(long)]
    pub ports: Option<String>,

    /// Override the output directory
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Override how many services are exported at once
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Write a JSON report of the run to this file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        // Load configuration
        let mut config = match load_config_unvalidated(config_path) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        self.apply_overrides(&mut config);

        // Validate configuration
        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2); // Configuration error exit code
        }

        let ports = config.service.ports.clone().unwrap_or_default();
        let targets =
            match enumerate_targets(&config.service.host, &ports, &config.output.directory) {
                Ok(t) => t,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to enumerate targets");
                    eprintln!("{e}");
                    return Ok(2);
                }
            };

        let source = HttpDescriptionSource::new(
            Duration::from_secs(config.service.timeout_seconds),
            Duration::from_secs(config.service.connect_timeout_seconds),
        )?;

        let converter = match HtmlConverter::new(ConvertOptions {
            stylesheet: config.output.stylesheet.clone(),
            ..Default::default()
        }) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to prepare HTML converter");
                eprintln!("Configuration validation failed: {e}");
                return Ok(2);
            }
        };

        let pipeline = ExportPipeline::new(
            Arc::new(source),
            converter,
            ExportConfig::with_group_by(config.output.group_by),
        );
        let runner = BatchRunner::new(Arc::new(pipeline), config.output.max_concurrency);

        println!(
            "🚀 Exporting API documentation for {} service(s) on {}",
            targets.len(),
            config.service.host
        );
        println!();

        let summary = runner.run(targets).await;
        print_report(&summary);

        if let Some(ref report_path) = self.report {
            if let Err(e) = summary.write_report(report_path).await {
                tracing::error!(error = %e, path = %report_path.display(), "Failed to write report");
                eprintln!("Failed to write report: {e}");
                return Ok(5); // Fatal error exit code
            }
            println!("📝 Report written to {}", report_path.display());
        }

        // A completed run exits 0 even when some services failed
        Ok(0)
    }

    fn apply_overrides(&self, config: &mut DocsmithConfig) {
        if let Some(ref host) = self.host {
            tracing::info!(host = %host, "Overriding host from CLI");
            config.service.host = host.clone();
        }

        if let Some(ref ports) = self.ports {
            tracing::info!(ports = %ports, "Overriding ports from CLI");
            config.service.ports = Some(ports.clone());
        }

        if let Some(ref dir) = self.output_dir {
            tracing::info!(directory = %dir.display(), "Overriding output directory from CLI");
            config.output.directory = dir.clone();
        }

        if let Some(concurrency) = self.concurrency {
            tracing::info!(concurrency, "Overriding concurrency from CLI");
            config.output.max_concurrency = concurrency;
        }
    }
}

fn print_report(summary: &ExportSummary) {
    for outcome in &summary.outcomes {
        match (&outcome.document, &outcome.error) {
            (Some(document), _) => {
                println!("  ✅ {} → {}", outcome.port(), document.display());
            }
            (None, Some(error)) => {
                println!("  ❌ {} [{}] {}", outcome.port(), error.kind, error.message);
            }
            (None, None) => {
                println!("  ❌ {}", outcome.port());
            }
        }
    }

    println!();
    println!("📊 Export Summary:");
    println!("  Total Services: {}", summary.total());
    println!("  Successful: {}", summary.successful());
    println!("  Failed: {}", summary.failed());
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!("  Success Rate: {:.2}%", summary.success_rate());
    println!();

    if summary.total() == 0 {
        println!("ℹ️  No ports configured, nothing exported");
    } else if summary.is_successful() {
        println!("✅ Export completed successfully!");
    } else {
        println!("⚠️  Export completed with failures");
    }
}
