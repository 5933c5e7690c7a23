//! Supervisor unit naming and the status-query contract.
//!
//! Pure data in, data out. The inactive sentinel lives here and nowhere else.

use std::path::{Path, PathBuf};

use stage1_common::AppName;

/// Supervisor control tool inside the stage1 rootfs.
pub const SYSTEMCTL: &str = "/usr/bin/systemctl";

/// Exact output of `systemctl is-active` for a unit that is not running.
///
/// `is-active` exits non-zero in that case, so the exit status carries no
/// information; only this text does.
pub const INACTIVE_SENTINEL: &[u8] = b"inactive\n";

/// Liveness of an app as judged from the status query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Liveness {
    Inactive,
    Running,
}

impl Liveness {
    /// Anything other than the exact sentinel counts as running, including
    /// empty output and error text.
    #[must_use]
    pub fn from_status_output(stdout: &[u8]) -> Self {
        if stdout == INACTIVE_SENTINEL {
            Self::Inactive
        } else {
            Self::Running
        }
    }
}

#[must_use]
pub fn service_unit_name(app: &AppName) -> String {
    format!("{app}.service")
}

#[must_use]
pub fn reaper_unit_name(app: &AppName) -> String {
    format!("reaper-{app}.service")
}

/// The two unit files owned by an app, primary first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitPaths {
    pub service: PathBuf,
    pub reaper: PathBuf,
}

impl UnitPaths {
    #[must_use]
    pub fn new(unit_dir: &Path, app: &AppName) -> Self {
        Self {
            service: unit_dir.join(service_unit_name(app)),
            reaper: unit_dir.join(reaper_unit_name(app)),
        }
    }

    /// Removal order: primary unit, then reaper.
    #[must_use]
    pub fn in_order(&self) -> [&Path; 2] {
        [&self.service, &self.reaper]
    }
}

/// `systemctl is-active <app>`
#[must_use]
pub fn is_active_argv(app: &AppName) -> Vec<String> {
    vec![
        SYSTEMCTL.to_string(),
        "is-active".to_string(),
        app.to_string(),
    ]
}

/// `systemctl daemon-reload`
#[must_use]
pub fn daemon_reload_argv() -> Vec<String> {
    vec![SYSTEMCTL.to_string(), "daemon-reload".to_string()]
}
