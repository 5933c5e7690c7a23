//! Loaded pod handle.

use std::collections::BTreeMap;
use std::path::PathBuf;

use stage1_common::{AppName, ImageManifest, PodManifest, PodUuid, paths};

use crate::domain::units::UnitPaths;

/// A pod whose manifests have been read and checked.
///
/// Read-only: nothing here mutates the pod directory.
#[derive(Debug, Clone)]
pub struct Pod {
    pub root: PathBuf,
    pub uuid: PodUuid,
    pub manifest: PodManifest,
    pub images: BTreeMap<AppName, ImageManifest>,
}

impl Pod {
    #[must_use]
    pub fn stage1_rootfs(&self) -> PathBuf {
        paths::stage1_rootfs_path(&self.root)
    }

    #[must_use]
    pub fn unit_dir(&self) -> PathBuf {
        paths::unit_dir(&self.root)
    }

    #[must_use]
    pub fn unit_paths(&self, app: &AppName) -> UnitPaths {
        UnitPaths::new(&self.unit_dir(), app)
    }

    #[must_use]
    pub fn has_app(&self, app: &AppName) -> bool {
        self.manifest.app(app).is_some()
    }
}
