//! Identity resolution: raw positional inputs to validated identifiers.
//!
//! Pure functions only. Validation order follows the positional order so the
//! first bad argument is the one reported.

use std::fmt;
use std::path::PathBuf;

use anyhow::Result;
use stage1_common::{AppName, PodUuid};

use crate::domain::error::InputError;

/// PID of the pod's supervisor, used as the namespace-entry target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetPid(u32);

impl TargetPid {
    /// Parse a PID.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidPid`] unless `raw` is a positive decimal integer.
    pub fn new(raw: &str) -> Result<Self, InputError> {
        let invalid = || InputError::InvalidPid(raw.to_string());
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        match raw.parse::<u32>() {
            Ok(0) | Err(_) => Err(invalid()),
            Ok(pid) => Ok(Self(pid)),
        }
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// The flag handed to the enter executable.
    #[must_use]
    pub fn enter_flag(self) -> String {
        format!("--pid={}", self.0)
    }
}

impl fmt::Display for TargetPid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the removal needs to know about who and where.
#[derive(Debug, Clone)]
pub struct Identity {
    pub uuid: PodUuid,
    pub app: AppName,
    pub enter_path: PathBuf,
    pub pid: TargetPid,
}

/// Validate the four positional inputs.
///
/// # Errors
///
/// Returns an [`stage1_common::IdentityError`] or [`InputError`] for the first missing or
/// malformed input.
pub fn resolve(
    uuid: Option<&str>,
    app: Option<&str>,
    enter: Option<&str>,
    pid: Option<&str>,
) -> Result<Identity> {
    let uuid = PodUuid::new(uuid.unwrap_or_default())?;
    let app = AppName::new(app.unwrap_or_default())?;
    let enter_path = match enter {
        Some(p) if !p.is_empty() => PathBuf::from(p),
        _ => return Err(InputError::MissingEnterPath.into()),
    };
    let pid = match pid {
        Some(raw) if !raw.is_empty() => TargetPid::new(raw)?,
        _ => return Err(InputError::MissingPid.into()),
    };
    Ok(Identity {
        uuid,
        app,
        enter_path,
        pid,
    })
}
