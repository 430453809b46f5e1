//! Result type alias for docsmith
//!
//! This module provides a convenient Result type alias that uses
//! DocsmithError as the error type.

use super::errors::DocsmithError;

/// Result type alias for docsmith operations
///
/// # Examples
///
/// ```
/// use docsmith::domain::result::Result;
/// use docsmith::domain::errors::DocsmithError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(DocsmithError::Configuration("service.host cannot be empty".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, DocsmithError>;
