//! Location of the project root and the fixture archive
//!
//! Paths are derived from where the harness lives, never from the caller's
//! working directory, so `hookbench` behaves the same from any directory.

use std::path::{Path, PathBuf};

/// Fixture archive location relative to the `hookbench-cli` crate
pub const FIXTURE_RELATIVE_PATH: &str = "fixtures/example_files.zip";

/// Resolved inputs of one harness run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessPaths {
    project_root: PathBuf,
    fixture: PathBuf,
}

impl HarnessPaths {
    pub fn new(project_root: impl Into<PathBuf>, fixture: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            fixture: fixture.into(),
        }
    }

    /// Paths relative to the crate directory recorded at build time.
    ///
    /// The project root is the parent of the crate directory. These defaults
    /// only exist while the source checkout the binary was built from is still
    /// in place; a binary installed elsewhere needs `--project-root` and
    /// `--fixture`.
    pub fn from_install_location() -> Self {
        let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let project_root = crate_dir.parent().unwrap_or(crate_dir);
        Self::new(project_root, crate_dir.join(FIXTURE_RELATIVE_PATH))
    }

    /// Replace either path when an override is given
    pub fn with_overrides(self, project_root: Option<PathBuf>, fixture: Option<PathBuf>) -> Self {
        Self {
            project_root: project_root.unwrap_or(self.project_root),
            fixture: fixture.unwrap_or(self.fixture),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn fixture(&self) -> &Path {
        &self.fixture
    }
}
