use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// App names are lowercase alphanumeric segments joined by single dashes.
pub static APP_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern — cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid regex")
});

/// Errors produced while turning raw input into pod identifiers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("UUID is missing or malformed: {0:?}")]
    MalformedUuid(String),

    #[error("app name is empty")]
    EmptyAppName,

    #[error("invalid app name {0:?}: must be lowercase alphanumeric segments separated by single dashes")]
    InvalidAppName(String),
}

/// Identifier of a pod.
///
/// Accepts 32 hex digits with or without hyphens; always displayed in the
/// lowercase hyphenated form used for pod directory names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PodUuid(Uuid);

impl PodUuid {
    /// Parse a pod UUID.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::MalformedUuid`] if `raw` is not 16 bytes of
    /// hex, optionally hyphenated.
    pub fn new(raw: &str) -> Result<Self, IdentityError> {
        let malformed = || IdentityError::MalformedUuid(raw.to_string());
        let hex: String = raw.chars().filter(|c| *c != '-').collect();
        if hex.len() != 32 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(malformed());
        }
        Uuid::try_parse(&hex).map(Self).map_err(|_| malformed())
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for PodUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for PodUuid {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Name of an application inside a pod.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AppName(String);

impl AppName {
    /// Validate and wrap an app name.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::EmptyAppName`] for an empty string and
    /// [`IdentityError::InvalidAppName`] if the grammar is not met.
    pub fn new(raw: &str) -> Result<Self, IdentityError> {
        if raw.is_empty() {
            return Err(IdentityError::EmptyAppName);
        }
        if !APP_NAME_RE.is_match(raw) {
            return Err(IdentityError::InvalidAppName(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AppName {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AppName {
    type Error = IdentityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<AppName> for String {
    fn from(value: AppName) -> Self {
        value.0
    }
}

impl AsRef<str> for AppName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
