//! Port enumeration
//!
//! Turns the raw service configuration into the ordered list of work items.

use crate::domain::{DocsmithError, ExportTarget, PortId, Result};
use std::path::Path;

/// Separator between ports in the configured list
pub const PORT_DELIMITER: char = ';';

/// Builds one [`ExportTarget`] per configured port, in configuration order
///
/// Tokens are trimmed and empty tokens are skipped, so `"8080;;9090;"` yields
/// two targets and an empty or blank list yields none. Tokens are otherwise
/// kept as-is; whether they form a valid port is decided when the request URL
/// is built.
///
/// # Errors
///
/// Returns [`DocsmithError::Configuration`] if `host` or `output_directory`
/// is empty.
///
/// # Example
///
/// ```
/// use docsmith::core::enumerate::enumerate_targets;
///
/// let targets = enumerate_targets("localhost", "8080;9090", "docs").unwrap();
/// assert_eq!(targets.len(), 2);
/// assert_eq!(targets[1].port.as_str(), "9090");
/// ```
pub fn enumerate_targets(
    host: &str,
    ports: &str,
    output_directory: impl AsRef<Path>,
) -> Result<Vec<ExportTarget>> {
    let host = host.trim();
    if host.is_empty() {
        return Err(DocsmithError::Configuration(
            "service.host cannot be empty".to_string(),
        ));
    }

    let output_directory = output_directory.as_ref();
    if output_directory.as_os_str().is_empty() {
        return Err(DocsmithError::Configuration(
            "output.directory cannot be empty".to_string(),
        ));
    }

    let targets: Vec<ExportTarget> = ports
        .split(PORT_DELIMITER)
        .filter_map(|token| PortId::new(token).ok())
        .map(|port| ExportTarget::new(host, port, output_directory))
        .collect();

    tracing::debug!(
        host = %host,
        count = targets.len(),
        "Enumerated export targets"
    );

    Ok(targets)
}
