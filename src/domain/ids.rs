//! Domain identifier types with validation
//!
//! A service port is never used for arithmetic: it only ever appears as the
//! port segment of a URL and as the stem of output file names. [`PortId`]
//! therefore keeps the original token as an opaque string, whether it was
//! configured as text or as an integer.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Port identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use docsmith::domain::ids::PortId;
/// use std::str::FromStr;
///
/// let port = PortId::from_str("8080").unwrap();
/// assert_eq!(port.as_str(), "8080");
///
/// let port = PortId::from(9090u16);
/// assert_eq!(port.to_string(), "9090");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortId(String);

impl PortId {
    /// Creates a new PortId, trimming surrounding whitespace
    ///
    /// Returns `Err` when the token is empty after trimming.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err("Port cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the port as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Checks that the identifier can be used as a file name stem
    pub fn validate_file_stem(&self) -> Result<(), String> {
        if self.0 == "." || self.0 == ".." {
            return Err(format!("'{}' is not a usable file name", self.0));
        }
        if let Some(ch) = self
            .0
            .chars()
            .find(|c| matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') || c.is_control())
        {
            return Err(format!(
                "'{}' contains '{}' which cannot appear in a file name",
                self.0,
                ch.escape_default()
            ));
        }
        Ok(())
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PortId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for PortId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<u16> for PortId {
    fn from(port: u16) -> Self {
        Self(port.to_string())
    }
}

impl Serialize for PortId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PortId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawPort {
            Number(u64),
            Text(String),
        }

        let raw = match RawPort::deserialize(deserializer)? {
            RawPort::Number(n) => n.to_string(),
            RawPort::Text(s) => s,
        };
        PortId::new(raw).map_err(serde::de::Error::custom)
    }
}
