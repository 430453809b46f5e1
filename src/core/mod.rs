//! Core business logic for docsmith.
//!
//! # Modules
//!
//! - [`enumerate`] - Turns the configured port list into export targets
//! - [`render`] - Swagger description to Markdown document
//! - [`convert`] - Markdown document to standalone HTML page
//! - [`export`] - Per-target pipeline, batch runner and summary
//!
//! # Export Workflow
//!
//! 1. **Enumerate**: Split the port list into one target per service
//! 2. **Fetch**: `GET http://{host}:{port}/v2/api-docs`
//! 3. **Render**: Write `{port}.md`, grouped by tag
//! 4. **Convert**: Write `{port}.html` with a table of contents
//! 5. **Clean up**: Remove `{port}.md`
//! 6. **Report**: One outcome per target
//!
//! # Example
//!
//! ```rust,no_run
//! use docsmith::adapters::swagger::HttpDescriptionSource;
//! use docsmith::core::convert::{ConvertOptions, HtmlConverter};
//! use docsmith::core::enumerate::enumerate_targets;
//! use docsmith::core::export::{BatchRunner, ExportPipeline};
//! use docsmith::domain::ExportConfig;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let targets = enumerate_targets("localhost", "8080;8081", "docs")?;
//!
//! let source = HttpDescriptionSource::new(Duration::from_secs(30), Duration::from_secs(10))?;
//! let converter = HtmlConverter::new(ConvertOptions::default())?;
//! let pipeline = ExportPipeline::new(Arc::new(source), converter, ExportConfig::default());
//!
//! let summary = BatchRunner::new(Arc::new(pipeline), 1).run(targets).await;
//! println!("Successful: {}", summary.successful());
//! println!("Failed: {}", summary.failed());
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod enumerate;
pub mod export;
pub mod render;
