//! hookbench git operations
//!
//! A thin, typed interface over the `git` executable for the handful of
//! operations the harness performs on its throwaway workspaces:
//!
//! - **Setup**: `init` and repository-local identity configuration
//! - **Staging**: `add -A` and an optional baseline commit
//! - **Inspection**: staged and unstaged diffs as raw text
//!
//! Setup failures are [`GitError`]s. Diff output is consumed as plain text and
//! never parsed.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use hookbench_common::ToolLocator;
//! use hookbench_git::{GitCli, SYNTHETIC_IDENTITY};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let git = GitCli::locate_with(&ToolLocator::from_env())?;
//! let repo = git.init(Path::new("/tmp/workspace"))?;
//! repo.set_local_identity(&SYNTHETIC_IDENTITY)?;
//! repo.add_all()?;
//! println!("{}", repo.diff_staged()?);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod repository;
pub mod types;

pub use error::{GitError, GitResult};
pub use repository::{isolate, GitCli, GitWorkspace};
pub use types::{DiffSnapshot, Identity, SYNTHETIC_IDENTITY};
