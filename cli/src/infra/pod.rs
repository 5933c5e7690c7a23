//! Pod infrastructure — implements `PodLoader` by reading the manifests in
//! a pod directory.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use serde::de::DeserializeOwned;
use stage1_common::manifest::{IMAGE_MANIFEST_KIND, POD_MANIFEST_KIND};
use stage1_common::{ImageManifest, PodManifest, PodUuid, paths};

use crate::application::ports::PodLoader;
use crate::domain::{Pod, PodError};

/// Loads pods from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManifestPodLoader;

impl PodLoader for ManifestPodLoader {
    fn load(&self, root: &Path, uuid: &PodUuid) -> Result<Pod> {
        check_dir_uuid(root, uuid)?;

        let pod_path = paths::pod_manifest_path(root);
        let manifest: PodManifest = read_manifest(&pod_path)?;
        expect_kind(&pod_path, POD_MANIFEST_KIND, &manifest.ac_kind)?;

        let mut images = BTreeMap::new();
        for app in &manifest.apps {
            let image_path = paths::image_manifest_path(root, &app.name);
            let image: ImageManifest = read_manifest(&image_path)?;
            expect_kind(&image_path, IMAGE_MANIFEST_KIND, &image.ac_kind)?;
            images.insert(app.name.clone(), image);
        }

        Ok(Pod {
            root: root.to_path_buf(),
            uuid: *uuid,
            manifest,
            images,
        })
    }
}

fn read_manifest<T: DeserializeOwned>(path: &Path) -> Result<T, PodError> {
    let buf = std::fs::read(path).map_err(|source| PodError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&buf).map_err(|source| PodError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

fn expect_kind(path: &Path, expected: &'static str, found: &str) -> Result<(), PodError> {
    if found == expected {
        Ok(())
    } else {
        Err(PodError::WrongKind {
            path: path.to_path_buf(),
            expected,
            found: found.to_string(),
        })
    }
}

/// Pod directories are named after their UUID. Only a directory whose name
/// parses as a UUID can mismatch; any other name is accepted.
fn check_dir_uuid(root: &Path, uuid: &PodUuid) -> Result<(), PodError> {
    let Ok(canonical) = root.canonicalize() else {
        return Ok(());
    };
    let Some(name) = canonical.file_name().and_then(|n| n.to_str()) else {
        return Ok(());
    };
    match PodUuid::new(name) {
        Ok(found) if found != *uuid => Err(PodError::UuidMismatch {
            requested: uuid.to_string(),
            found: found.to_string(),
        }),
        _ => Ok(()),
    }
}
