//! Unit cleaner — deletes the app's service and reaper unit files.

use std::io::ErrorKind;

use anyhow::Result;

use crate::application::ports::{Reporter, UnitFs};
use crate::domain::{UnitError, UnitPaths};

/// Remove both unit files, primary first.
///
/// A file that is already gone counts as removed. Any other failure stops
/// immediately; a unit removed before the failure stays removed.
///
/// # Errors
///
/// Returns [`UnitError::Remove`] for the first removal that fails with
/// anything other than `NotFound`.
pub fn remove_units(fs: &impl UnitFs, units: &UnitPaths, reporter: &impl Reporter) -> Result<()> {
    for path in units.in_order() {
        match fs.remove_file(path) {
            Ok(()) => reporter.diag(&format!("removed {}", path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                reporter.diag(&format!("{} already absent", path.display()));
            }
            Err(source) => {
                return Err(UnitError::Remove {
                    path: path.to_path_buf(),
                    source,
                }
                .into());
            }
        }
    }
    Ok(())
}
