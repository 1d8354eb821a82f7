//! Recursive merge-copy
//!
//! Copies a source tree onto a destination tree: destination directories are
//! created as needed, same-named destination files are overwritten, and
//! destination entries with no source counterpart are left untouched. This is
//! a merge, not a mirror; nothing is ever deleted.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{InstallFilesError, Result};

/// Merge-copy the contents of `source` into `destination`.
///
/// Overwriting is intentional: re-running an install after the source package
/// is upgraded must push the newer files over any previously installed copies.
///
/// The first filesystem error aborts the walk and is surfaced as a single
/// [`InstallFilesError::CopyFailed`]; files copied before the failure are left
/// in place (no rollback).
pub fn merge_copy_dir(source: &Path, destination: &Path) -> Result<()> {
    if !source.is_dir() {
        return Err(InstallFilesError::SourceNotFound {
            path: source.display().to_string(),
        });
    }

    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source).to_path_buf();
            InstallFilesError::CopyFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        let relative = entry.path().strip_prefix(source).unwrap_or(entry.path());
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .map_err(|e| InstallFilesError::copy_failed(&target, &e))?;
        } else {
            fs::copy(entry.path(), &target)
                .map_err(|e| InstallFilesError::copy_failed(&target, &e))?;
        }
    }

    Ok(())
}
