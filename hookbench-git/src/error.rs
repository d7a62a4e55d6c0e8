//! Git-specific error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type for Git operations
pub type GitResult<T> = Result<T, GitError>;

/// Git error types
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GitError {
    /// The git executable is not on the search path
    #[error("git executable not found on PATH")]
    ExecutableNotFound,

    /// git could not be started
    #[error("Failed to run git for '{operation}' in '{path}': {source}")]
    SpawnFailed {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// git ran and exited unsuccessfully
    #[error("Git operation '{operation}' failed in '{path}' (exit code {exit_code}): {stderr}")]
    CommandFailed {
        operation: String,
        path: PathBuf,
        exit_code: String,
        stderr: String,
    },
}

impl GitError {
    /// Create a spawn failure error
    pub fn spawn_failed(operation: &str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SpawnFailed {
            operation: operation.to_string(),
            path: path.into(),
            source,
        }
    }

    /// Create a command failure error
    pub fn command_failed(
        operation: &str,
        path: impl Into<PathBuf>,
        exit_code: String,
        stderr: &str,
    ) -> Self {
        Self::CommandFailed {
            operation: operation.to_string(),
            path: path.into(),
            exit_code,
            stderr: stderr.trim().to_string(),
        }
    }
}
