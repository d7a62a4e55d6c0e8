//! Fixture archive extraction
//!
//! The archive stores its sample files under one subdirectory. After
//! extraction that subdirectory's entries are moved up to the target root and
//! the emptied subdirectory is removed.

use crate::error::{HarnessError, HarnessResult};
use std::fs::{self, File};
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Extract every entry of `archive_path` into `target`.
///
/// Entries whose names would land outside `target` are rejected. Returns the
/// number of files written.
pub fn extract_fixture(archive_path: &Path, target: &Path) -> HarnessResult<usize> {
    let file = File::open(archive_path).map_err(|e| HarnessError::io("open", archive_path, e))?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| HarnessError::archive(archive_path, e))?;

    let mut written = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| HarnessError::archive(archive_path, e))?;

        // Path traversal protection
        let Some(relative) = entry.enclosed_name().map(Path::to_path_buf) else {
            return Err(HarnessError::archive(
                archive_path,
                format!("unsafe entry name '{}'", entry.name()),
            ));
        };
        let out_path = target.join(&relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(|e| HarnessError::io("create", &out_path, e))?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|e| HarnessError::io("create", parent, e))?;
        }
        let mut outfile =
            File::create(&out_path).map_err(|e| HarnessError::io("create", &out_path, e))?;
        io::copy(&mut entry, &mut outfile).map_err(|e| HarnessError::io("write", &out_path, e))?;

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;

            fs::set_permissions(&out_path, fs::Permissions::from_mode(mode & 0o777))
                .map_err(|e| HarnessError::io("set permissions on", &out_path, e))?;
        }

        debug!("Extracted {}", relative.display());
        written += 1;
    }

    info!(
        "Extracted {} files from {} into {}",
        written,
        archive_path.display(),
        target.display()
    );
    Ok(written)
}

/// Move the entries of `target/<nested>` to `target` and remove the subdirectory.
///
/// A missing subdirectory is not an error. An entry that would replace
/// something already at the root fails with [`HarnessError::FlattenConflict`].
pub fn flatten_nested(target: &Path, nested: &str) -> HarnessResult<()> {
    let nested_dir = target.join(nested);
    if !nested_dir.is_dir() {
        debug!("No {} directory to flatten", nested_dir.display());
        return Ok(());
    }

    let entries = fs::read_dir(&nested_dir)
        .and_then(|entries| entries.collect::<io::Result<Vec<_>>>())
        .map_err(|e| HarnessError::io("read", &nested_dir, e))?;

    for entry in entries {
        let destination = target.join(entry.file_name());
        if fs::symlink_metadata(&destination).is_ok() {
            return Err(HarnessError::FlattenConflict { path: destination });
        }
        fs::rename(entry.path(), &destination)
            .map_err(|e| HarnessError::io("move", entry.path(), e))?;
    }

    fs::remove_dir(&nested_dir).map_err(|e| HarnessError::io("remove", &nested_dir, e))?;
    debug!("Flattened {} into {}", nested_dir.display(), target.display());
    Ok(())
}
