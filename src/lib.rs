// Docsmith - Swagger to HTML documentation exporter
// Copyright (c) 2025 Docsmith Contributors
// Licensed under the MIT License

//! # Docsmith - Swagger to HTML documentation exporter
//!
//! Docsmith visits a set of services running on one host, downloads the
//! Swagger 2.0 description each one publishes at `/v2/api-docs`, and turns it
//! into a standalone HTML page with a table of contents.
//!
//! ## Overview
//!
//! For every configured port the export pipeline:
//! - **Fetches** `http://{host}:{port}/v2/api-docs`
//! - **Renders** the description into `{port}.md`, operations grouped by tag
//! - **Converts** that document into `{port}.html`
//! - **Removes** `{port}.md`, whatever happened to the conversion
//!
//! A failing service only fails its own target; the batch always finishes and
//! reports one outcome per port.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Enumeration, rendering, conversion and the batch runner
//! - [`adapters`] - HTTP retrieval and Swagger models
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docsmith::adapters::swagger::HttpDescriptionSource;
//! use docsmith::config::load_config;
//! use docsmith::core::convert::{ConvertOptions, HtmlConverter};
//! use docsmith::core::enumerate::enumerate_targets;
//! use docsmith::core::export::{BatchRunner, ExportPipeline};
//! use docsmith::domain::ExportConfig;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("docsmith.toml")?;
//!     let targets = enumerate_targets(
//!         &config.service.host,
//!         config.service.ports.as_deref().unwrap_or_default(),
//!         &config.output.directory,
//!     )?;
//!
//!     let source = HttpDescriptionSource::new(
//!         Duration::from_secs(config.service.timeout_seconds),
//!         Duration::from_secs(config.service.connect_timeout_seconds),
//!     )?;
//!     let converter = HtmlConverter::new(ConvertOptions::default())?;
//!     let pipeline = ExportPipeline::new(
//!         Arc::new(source),
//!         converter,
//!         ExportConfig::with_group_by(config.output.group_by),
//!     );
//!
//!     let summary = BatchRunner::new(Arc::new(pipeline), config.output.max_concurrency)
//!         .run(targets)
//!         .await;
//!
//!     println!("Exported {} of {} services", summary.successful(), summary.total());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fatal problems, such as a missing host, surface as
//! [`domain::DocsmithError::Configuration`] before any target is attempted.
//! Per-target problems are [`domain::ExportError`] values that end up in the
//! run's [`core::export::ExportSummary`].
//!
//! ## Logging
//!
//! Docsmith uses structured logging with the `tracing` crate; every per-target
//! event carries the port:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(port = "8080", "Starting export");
//! warn!(port = "8081", error = "connection refused", "Export failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
