//! Executable lookup
//!
//! [`ToolLocator`] resolves program names to executable paths, either on the
//! ambient `PATH` or on an explicit list of directories. Names that already
//! contain a path separator are checked directly.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Resolves executables on a search path
#[derive(Debug, Clone, Default)]
pub struct ToolLocator {
    /// Explicit search path; `None` means the process `PATH`
    search_path: Option<OsString>,
    /// Base directory for relative program paths when a search path is explicit
    base_dir: PathBuf,
}

impl ToolLocator {
    /// Locator backed by the process `PATH`
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Locator restricted to the given directories, in order.
    ///
    /// Returns `None` when a directory cannot be represented in a search path
    /// (for example it contains the platform path separator).
    pub fn in_dirs<I, P>(dirs: I) -> Option<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let dirs: Vec<PathBuf> = dirs.into_iter().map(|d| d.as_ref().to_path_buf()).collect();
        let base_dir = dirs.first().cloned().unwrap_or_default();
        let search_path = env::join_paths(&dirs).ok()?;
        Some(Self {
            search_path: Some(search_path),
            base_dir,
        })
    }

    /// Resolve `program` to an executable path
    pub fn locate(&self, program: &str) -> Option<PathBuf> {
        let found = match &self.search_path {
            None => which::which(program),
            Some(paths) => which::which_in(program, Some(paths), &self.base_dir),
        };

        match found {
            Ok(path) => {
                trace!("Resolved {} to {}", program, path.display());
                Some(path)
            }
            Err(e) => {
                debug!("{} not found on search path: {}", program, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn write_executable(dir: &Path, name: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn test_locate_in_explicit_dirs() {
        let bin = TempDir::new().unwrap();
        let expected = write_executable(bin.path(), "fake-tool");

        let locator = ToolLocator::in_dirs([bin.path()]).unwrap();

        assert_eq!(locator.locate("fake-tool"), Some(expected));
        assert!(locator.locate("other-tool").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_executable_file_is_not_located() {
        let bin = TempDir::new().unwrap();
        std::fs::write(bin.path().join("plain"), "data").unwrap();

        let locator = ToolLocator::in_dirs([bin.path()]).unwrap();

        assert!(locator.locate("plain").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_program_path_is_checked_directly() {
        let bin = TempDir::new().unwrap();
        let tool = write_executable(bin.path(), "runner");
        let empty = TempDir::new().unwrap();

        let locator = ToolLocator::in_dirs([empty.path()]).unwrap();

        assert_eq!(locator.locate(&tool.to_string_lossy()), Some(tool));
    }

    #[cfg(unix)]
    #[test]
    fn test_first_directory_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let expected = write_executable(first.path(), "ruff");
        write_executable(second.path(), "ruff");

        let locator = ToolLocator::in_dirs([first.path(), second.path()]).unwrap();

        assert_eq!(locator.locate("ruff"), Some(expected));
    }

    #[test]
    fn test_empty_dirs_find_nothing() {
        let empty = TempDir::new().unwrap();
        let locator = ToolLocator::in_dirs([empty.path()]).unwrap();
        assert!(locator.locate("git").is_none());
    }
}
