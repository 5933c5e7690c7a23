//! On-disk layout of a pod directory.
//!
//! ```text
//! <pod>/pod                                   pod manifest
//! <pod>/appsinfo/<app>/manifest               image manifest per app
//! <pod>/stage1/rootfs/usr/lib/systemd/system  supervisor unit directory
//! ```

use std::path::{Path, PathBuf};

use crate::types::AppName;

/// Unit directory, relative to the stage1 rootfs.
pub const UNIT_DIR: &[&str] = &["usr", "lib", "systemd", "system"];

#[must_use]
pub fn pod_manifest_path(root: &Path) -> PathBuf {
    root.join("pod")
}

#[must_use]
pub fn appsinfo_dir(root: &Path) -> PathBuf {
    root.join("appsinfo")
}

#[must_use]
pub fn image_manifest_path(root: &Path, app: &AppName) -> PathBuf {
    appsinfo_dir(root).join(app.as_str()).join("manifest")
}

#[must_use]
pub fn stage1_rootfs_path(root: &Path) -> PathBuf {
    root.join("stage1").join("rootfs")
}

/// Directory holding the supervisor's unit files for this pod.
#[must_use]
pub fn unit_dir(root: &Path) -> PathBuf {
    UNIT_DIR
        .iter()
        .fold(stage1_rootfs_path(root), |dir, part| dir.join(part))
}
