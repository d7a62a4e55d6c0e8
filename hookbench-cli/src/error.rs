//! Error handling for the harness
//!
//! Every fatal condition is a [`HarnessError`]. Errors travel up with `?` to
//! [`crate::run_cli`], which prints [`HarnessError::headline`] and
//! [`HarnessError::remediation`] and turns them into an exit code.

use hookbench_config::ConfigError;
use hookbench_git::GitError;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Fatal harness errors
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The hook runner does not resolve on the search path
    #[error("{program} is not installed")]
    HookRunnerNotFound {
        program: String,
        install_hints: Vec<String>,
    },

    /// git does not resolve on the search path
    #[error("git is not installed")]
    GitNotFound,

    /// The fixture archive does not exist
    #[error("Test files zip not found: {}", path.display())]
    FixtureNotFound { path: PathBuf },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Git(#[from] GitError),

    /// Filesystem operation on a specific path
    #[error("Failed to {operation} '{}': {source}", path.display())]
    Io {
        operation: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Unreadable or unsafe fixture archive
    #[error("Invalid archive '{}': {details}", path.display())]
    Archive { path: PathBuf, details: String },

    /// Flattening would replace an existing workspace entry
    #[error("Cannot move '{}' to the workspace root: an entry with that name already exists", path.display())]
    FlattenConflict { path: PathBuf },

    /// The hook runner could not be started
    #[error("Failed to run {program}: {source}")]
    HookRunnerSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// `install` exited unsuccessfully
    #[error("{program} install failed (exit code {exit_code}): {output}")]
    HookInstallFailed {
        program: String,
        exit_code: String,
        output: String,
    },
}

impl HarnessError {
    /// Create a filesystem error
    pub fn io(operation: &str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation: operation.to_string(),
            path: path.into(),
            source,
        }
    }

    /// Create an archive error
    pub fn archive(path: impl Into<PathBuf>, details: impl fmt::Display) -> Self {
        Self::Archive {
            path: path.into(),
            details: details.to_string(),
        }
    }

    /// Status line printed for this error
    pub fn headline(&self) -> String {
        match self {
            Self::HookRunnerNotFound { .. }
            | Self::GitNotFound
            | Self::FixtureNotFound { .. }
            | Self::Config(_) => format!("❌ {self}"),
            _ => format!("❌ Test failed with error: {self}"),
        }
    }

    /// Follow-up lines telling the user how to fix the problem
    pub fn remediation(&self) -> Vec<String> {
        match self {
            Self::HookRunnerNotFound { install_hints, .. } if !install_hints.is_empty() => {
                let mut lines = vec!["Install with:".to_string()];
                for (i, hint) in install_hints.iter().enumerate() {
                    if i > 0 {
                        lines.push("  # or".to_string());
                    }
                    lines.push(format!("  {hint}"));
                }
                lines
            }
            Self::GitNotFound => vec!["Install git: https://git-scm.com/downloads".to_string()],
            _ => Vec::new(),
        }
    }
}
