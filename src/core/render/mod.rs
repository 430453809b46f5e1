//! Rendering of API descriptions into structured documents
//!
//! A [`RenderedDocument`] can only be produced here. It stands for a file
//! in which every remote string has had `&`, `<` and `>` escaped, so the only
//! raw HTML it holds is what this module emits. Markdown links in remote text
//! survive; the converter drops those with non-web targets.

mod markdown;

use crate::adapters::swagger::SwaggerDocument;
use crate::domain::{ExportConfig, ExportTarget, PortId, RenderError};
use std::path::{Path, PathBuf};

pub(crate) use markdown::escape_html;

/// Intermediate document on disk
///
/// The file is removed when the value is dropped, whatever happened to the
/// export in between. Removal failures are logged and never surface as errors.
#[derive(Debug)]
pub struct RenderedDocument {
    path: PathBuf,
    port: PortId,
}

impl RenderedDocument {
    pub(crate) fn new(path: PathBuf, port: PortId) -> Self {
        Self { path, port }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn port(&self) -> &PortId {
        &self.port
    }
}

impl Drop for RenderedDocument {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(
                    port = %self.port,
                    path = %self.path.display(),
                    "Removed intermediate document"
                );
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(
                    port = %self.port,
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove intermediate document"
                );
            }
        }
    }
}

/// Renders API descriptions into Markdown documents
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRenderer {
    config: ExportConfig,
}

impl DocumentRenderer {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Renders a parsed description to Markdown text
    pub fn render(&self, description: &SwaggerDocument) -> String {
        markdown::render_markdown(description, self.config.group_by)
    }

    /// Parses `body`, renders it and writes `<dir>/<port>.md`
    ///
    /// The output directory is created if needed. If the write fails part way
    /// the partial file is still removed.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] when the body is not a supported description
    /// or the file cannot be written.
    pub async fn render_to_file(
        &self,
        body: &str,
        target: &ExportTarget,
    ) -> Result<RenderedDocument, RenderError> {
        let description = SwaggerDocument::from_json(body)?;
        let content = self.render(&description);

        let write_error = |path: &Path, e: std::io::Error| RenderError::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        tokio::fs::create_dir_all(&target.output_directory)
            .await
            .map_err(|e| write_error(target.output_directory.as_path(), e))?;

        let path = target.document_path(self.config.markup_language.extension());
        let document = RenderedDocument::new(path, target.port.clone());

        tokio::fs::write(document.path(), content.as_bytes())
            .await
            .map_err(|e| write_error(document.path(), e))?;

        tracing::debug!(
            port = %target.port,
            path = %document.path().display(),
            bytes = content.len(),
            "Rendered intermediate document"
        );

        Ok(document)
    }
}
