//! Serde models of the manifests stored in a pod directory.
//!
//! Only the fields stage1 entrypoints read are modelled; unknown fields are
//! ignored so newer manifests still load.

use serde::{Deserialize, Serialize};

use crate::types::AppName;

pub const POD_MANIFEST_KIND: &str = "PodManifest";
pub const IMAGE_MANIFEST_KIND: &str = "ImageManifest";

/// The pod manifest (`<pod>/pod`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodManifest {
    pub ac_kind: String,
    pub ac_version: String,
    #[serde(default)]
    pub apps: Vec<RuntimeApp>,
}

impl PodManifest {
    /// Look up an app entry by name.
    #[must_use]
    pub fn app(&self, name: &AppName) -> Option<&RuntimeApp> {
        self.apps.iter().find(|a| &a.name == name)
    }
}

/// One app entry in the pod manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeApp {
    pub name: AppName,
    pub image: RuntimeImage,
}

/// Image reference of a runtime app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub id: String,
}

/// Image manifest of one app (`<pod>/appsinfo/<app>/manifest`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageManifest {
    pub ac_kind: String,
    pub ac_version: String,
    pub name: String,
}
