//! Export targets and the shared export configuration

use super::ids::PortId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use url::Url;

/// Well-known path under which services publish their Swagger description
pub const API_DOCS_PATH: &str = "/v2/api-docs";

/// One service whose API description is to be exported
///
/// Targets are produced by the port enumerator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportTarget {
    /// Host serving every configured port
    pub host: String,

    /// Port of this service
    pub port: PortId,

    /// Directory receiving the generated documents
    pub output_directory: PathBuf,
}

impl ExportTarget {
    /// Creates a new target
    pub fn new(host: impl Into<String>, port: PortId, output_directory: impl AsRef<Path>) -> Self {
        Self {
            host: host.into(),
            port,
            output_directory: output_directory.as_ref().to_path_buf(),
        }
    }

    /// URL of the API description published by this target
    ///
    /// The port token must be a decimal port number, and the configured host
    /// must come out of URL parsing unchanged. Anything else, such as
    /// `8080@other.host` or `8080#x`, is rejected instead of being spliced
    /// into the URL.
    ///
    /// # Errors
    ///
    /// Returns the reason the target cannot be turned into a request.
    pub fn source_url(&self) -> Result<Url, String> {
        let token = self.port.as_str();
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("'{token}' is not a port number"));
        }
        let port: u16 = token
            .parse()
            .map_err(|_| format!("'{token}' is out of the port range"))?;

        let mut url = Url::parse(&format!("http://{}/", self.host))
            .map_err(|e| format!("invalid host '{}': {e}", self.host))?;
        let host_kept = url
            .host_str()
            .is_some_and(|h| h.eq_ignore_ascii_case(&self.host));
        if !host_kept || url.port().is_some() || url.path() != "/" {
            return Err(format!("'{}' is not a bare host name", self.host));
        }

        url.set_port(Some(port))
            .map_err(|_| format!("cannot use port {port} with host '{}'", self.host))?;
        url.set_path(API_DOCS_PATH);
        Ok(url)
    }

    /// Path of a document for this target with the given extension
    pub fn document_path(&self, extension: &str) -> PathBuf {
        self.output_directory
            .join(format!("{}.{}", self.port, extension))
    }
}

impl fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Markup language of the intermediate structured document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkupLanguage {
    /// CommonMark with GitHub table extensions
    #[default]
    Markdown,
}

impl MarkupLanguage {
    /// Canonical file extension, without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            MarkupLanguage::Markdown => "md",
        }
    }
}

/// How operations are grouped in the rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    /// One section per API tag
    #[default]
    Tags,
    /// Operations listed in path order without grouping
    AsIs,
}

/// Process-wide export settings, shared read-only by every pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Intermediate document format
    pub markup_language: MarkupLanguage,

    /// Operation grouping strategy
    pub group_by: GroupBy,
}

impl ExportConfig {
    /// Creates a configuration with the given grouping
    pub fn with_group_by(group_by: GroupBy) -> Self {
        Self {
            markup_language: MarkupLanguage::Markdown,
            group_by,
        }
    }
}
