//! Per-target export pipeline
//!
//! Fetch, render, convert, clean up. A failure at any stage skips the
//! remaining stages for that target only; the intermediate document is
//! removed on every path once it exists.

use crate::adapters::swagger::ApiDescriptionSource;
use crate::core::convert::HtmlConverter;
use crate::core::render::DocumentRenderer;
use crate::domain::{ConvertError, ExportConfig, ExportError, ExportTarget};
use crate::{log_export_complete, log_export_start};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Runs the full export for one target at a time
pub struct ExportPipeline {
    source: Arc<dyn ApiDescriptionSource>,
    renderer: DocumentRenderer,
    converter: Arc<HtmlConverter>,
}

impl ExportPipeline {
    pub fn new(
        source: Arc<dyn ApiDescriptionSource>,
        converter: HtmlConverter,
        config: ExportConfig,
    ) -> Self {
        Self {
            source,
            renderer: DocumentRenderer::new(config),
            converter: Arc::new(converter),
        }
    }

    /// Exports one target, returning the path of the HTML page
    ///
    /// # Errors
    ///
    /// Returns an [`ExportError`] naming the stage that failed. Nothing is
    /// retried.
    pub async fn run(&self, target: &ExportTarget) -> Result<PathBuf, ExportError> {
        let start = Instant::now();
        log_export_start!(target);

        let port = target.port.clone();
        port.validate_file_stem()
            .map_err(|reason| ExportError::MalformedTarget {
                port: port.clone(),
                reason,
            })?;

        let url = target
            .source_url()
            .map_err(|reason| ExportError::MalformedTarget {
                port: port.clone(),
                reason,
            })?;

        let body = self
            .source
            .fetch(&url)
            .await
            .map_err(|source| ExportError::Fetch {
                port: port.clone(),
                source,
            })?;

        let document = self
            .renderer
            .render_to_file(&body, target)
            .await
            .map_err(|source| ExportError::Render {
                port: port.clone(),
                source,
            })?;

        // The document moves into the blocking task and back so that its
        // removal happens after conversion, or during unwinding on panic.
        let converter = Arc::clone(&self.converter);
        let (document, converted) = tokio::task::spawn_blocking(move || {
            let converted = converter.convert(&document);
            (document, converted)
        })
        .await
        .map_err(|e| ExportError::Convert {
            port: port.clone(),
            source: ConvertError::Task(e.to_string()),
        })?;
        drop(document);

        let output = converted.map_err(|source| ExportError::Convert {
            port: port.clone(),
            source,
        })?;

        log_export_complete!(port, output.display(), start.elapsed());
        Ok(output)
    }
}
