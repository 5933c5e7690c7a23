//! Filesystem infrastructure — implements `UnitFs`.

use std::path::Path;

use crate::application::ports::UnitFs;

/// Production filesystem implementation of `UnitFs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl UnitFs for LocalFs {
    fn remove_file(&self, path: &Path) -> std::io::Result<()> {
        std::fs::remove_file(path)
    }
}
