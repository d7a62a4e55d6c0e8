//! Temporary workspace lifecycle and population

use crate::archive::{extract_fixture, flatten_nested};
use crate::console::Console;
use crate::error::{HarnessError, HarnessResult};
use crate::paths::HarnessPaths;
use hookbench_config::WorkspaceConfig;
use hookbench_git::{GitCli, GitWorkspace, SYNTHETIC_IDENTITY};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

const TEMP_PREFIX: &str = "hookbench-";

/// A workspace directory inside a temporary directory.
///
/// The temporary directory is removed when this value is dropped, on every
/// exit path including unwinding.
#[derive(Debug)]
pub struct Workspace {
    temp: TempDir,
    root: PathBuf,
}

impl Workspace {
    /// Create a fresh temporary directory and the workspace directory inside it
    pub fn create(layout: &WorkspaceConfig) -> HarnessResult<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(TEMP_PREFIX);
        let temp = match &layout.temp_root {
            Some(parent) => builder
                .tempdir_in(parent)
                .map_err(|e| HarnessError::io("create temporary directory in", parent, e))?,
            None => builder
                .tempdir()
                .map_err(|e| HarnessError::io("create temporary directory in", std::env::temp_dir(), e))?,
        };

        let root = temp.path().join(&layout.dir_name);
        fs::create_dir(&root).map_err(|e| HarnessError::io("create", &root, e))?;
        debug!("Created workspace at {}", root.display());

        Ok(Self { temp, root })
    }

    /// The workspace directory
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Remove the temporary directory now, logging instead of failing
    pub fn close(self) {
        let location = self.temp.path().to_path_buf();
        match self.temp.close() {
            Ok(()) => debug!("Removed {}", location.display()),
            Err(e) => warn!("Failed to remove {}: {}", location.display(), e),
        }
    }
}

/// Fills a workspace with the hook configuration and the fixture files
pub struct WorkspaceBuilder<'a> {
    git: &'a GitCli,
    paths: &'a HarnessPaths,
    layout: &'a WorkspaceConfig,
}

impl<'a> WorkspaceBuilder<'a> {
    pub fn new(git: &'a GitCli, paths: &'a HarnessPaths, layout: &'a WorkspaceConfig) -> Self {
        Self { git, paths, layout }
    }

    /// Initialize `target` as a repository and populate it.
    ///
    /// Order: `git init`, local identity, descriptor, rule directory, helper
    /// directory when present, fixture extraction and flattening. The project
    /// root is only read.
    pub fn populate(&self, target: &Path, console: &mut Console<'_>) -> HarnessResult<GitWorkspace> {
        let repo = self.git.init(target)?;
        repo.set_local_identity(&SYNTHETIC_IDENTITY)?;

        let project_root = self.paths.project_root();
        copy_file(
            &project_root.join(&self.layout.descriptor),
            &target.join(&self.layout.descriptor),
        )?;
        copy_tree(
            &project_root.join(&self.layout.rules_dir),
            &target.join(&self.layout.rules_dir),
        )?;

        let helpers = project_root.join(&self.layout.helpers_dir);
        if helpers.is_dir() {
            copy_tree(&helpers, &target.join(&self.layout.helpers_dir))?;
        } else {
            debug!("No helper directory at {}", helpers.display());
        }

        let fixture = self.paths.fixture();
        console.line(format_args!(
            "📦 Extracting test files from {}...",
            fixture.display()
        ));
        extract_fixture(fixture, target)?;
        flatten_nested(target, &self.layout.nested_dir)?;
        console.line(format_args!("✅ Test files extracted to {}", target.display()));

        info!("Workspace populated at {}", target.display());
        Ok(repo)
    }
}

/// Copy a single file, creating parent directories
fn copy_file(source: &Path, destination: &Path) -> HarnessResult<()> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(|e| HarnessError::io("create", parent, e))?;
    }
    fs::copy(source, destination).map_err(|e| HarnessError::io("copy", source, e))?;
    Ok(())
}

/// Recursively copy a directory tree, preserving file contents and permissions
fn copy_tree(source: &Path, destination: &Path) -> HarnessResult<()> {
    if !source.is_dir() {
        return Err(HarnessError::io(
            "copy",
            source,
            std::io::Error::new(std::io::ErrorKind::NotFound, "directory not found"),
        ));
    }

    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source).to_path_buf();
            HarnessError::io("read", path, e.into())
        })?;
        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| HarnessError::io("create", &target, e))?;
        } else {
            fs::copy(entry.path(), &target)
                .map_err(|e| HarnessError::io("copy", entry.path(), e))?;
        }
    }

    debug!("Copied {} to {}", source.display(), destination.display());
    Ok(())
}
