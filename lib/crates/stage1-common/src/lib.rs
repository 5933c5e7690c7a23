//! Shared pod-level types for stage1 entrypoints: validated identifiers,
//! the on-disk pod layout, and the pod/image manifest models.

pub mod manifest;
pub mod paths;
pub mod types;

pub use manifest::{ImageManifest, PodManifest, RuntimeApp, RuntimeImage};
pub use types::{AppName, IdentityError, PodUuid};
