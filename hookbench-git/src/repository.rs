//! Git executable wrapper
//!
//! [`GitCli`] owns the resolved path of the `git` executable. [`GitWorkspace`]
//! binds it to one repository directory and exposes the operations the harness
//! needs. Every command runs with the repository as working directory and with
//! the git environment variables that could redirect it removed.

use crate::error::{GitError, GitResult};
use crate::types::{DiffSnapshot, Identity};
use hookbench_common::{capture, CommandOutput, ToolLocator};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info, warn};

/// Variables that would point git at another repository or index
const REDIRECTING_ENV: [&str; 3] = ["GIT_DIR", "GIT_WORK_TREE", "GIT_INDEX_FILE"];

/// Run `command` in `dir`, detached from any enclosing git invocation.
///
/// Also used for the hook runner, which calls git itself.
pub fn isolate(command: &mut Command, dir: &Path) {
    command.current_dir(dir);
    for var in REDIRECTING_ENV {
        command.env_remove(var);
    }
}

/// Handle on the `git` executable
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
}

impl GitCli {
    /// Resolve `git` with the given locator
    pub fn locate_with(locator: &ToolLocator) -> GitResult<Self> {
        locator
            .locate("git")
            .map(Self::with_program)
            .ok_or(GitError::ExecutableNotFound)
    }

    /// Use a specific git executable
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Path of the git executable
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Initialize a new repository in `dir`
    pub fn init(&self, dir: &Path) -> GitResult<GitWorkspace> {
        debug!("Initializing git repository at: {}", dir.display());
        self.run_checked(dir, "init", &["init", "--quiet"])?;
        info!("Initialized git repository at {}", dir.display());

        Ok(GitWorkspace {
            git: self.clone(),
            root: dir.to_path_buf(),
        })
    }

    fn command(&self, dir: &Path, args: &[&str]) -> Command {
        let mut command = Command::new(&self.program);
        command.args(args);
        isolate(&mut command, dir);
        command
    }

    /// Run git; a non-zero exit is returned as data
    fn run(&self, dir: &Path, operation: &str, args: &[&str]) -> GitResult<CommandOutput> {
        capture(&mut self.command(dir, args))
            .map_err(|e| GitError::spawn_failed(operation, dir, e))
    }

    /// Run git; a non-zero exit is an error
    fn run_checked(&self, dir: &Path, operation: &str, args: &[&str]) -> GitResult<CommandOutput> {
        let output = self.run(dir, operation, args)?;
        if output.success() {
            Ok(output)
        } else {
            Err(GitError::command_failed(
                operation,
                dir,
                output.exit_code_display(),
                &output.stderr,
            ))
        }
    }
}

/// A repository created by [`GitCli::init`]
#[derive(Debug, Clone)]
pub struct GitWorkspace {
    git: GitCli,
    root: PathBuf,
}

impl GitWorkspace {
    /// Repository root (the working tree)
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `user.name` and `user.email` to the repository's local config only
    pub fn set_local_identity(&self, identity: &Identity) -> GitResult<()> {
        self.run_checked(
            "config user.email",
            &["config", "--local", "user.email", identity.email],
        )?;
        self.run_checked(
            "config user.name",
            &["config", "--local", "user.name", identity.name],
        )?;
        debug!(
            "Set local identity {} <{}> in {}",
            identity.name,
            identity.email,
            self.root.display()
        );
        Ok(())
    }

    /// Stage every file in the working tree
    pub fn add_all(&self) -> GitResult<()> {
        self.run_checked("add", &["add", "-A"])?;
        Ok(())
    }

    /// Commit the index without running hooks or signing.
    ///
    /// Allowed to be empty so a fixture without files still gets a baseline.
    pub fn commit_baseline(&self, message: &str) -> GitResult<()> {
        self.run_checked(
            "commit",
            &[
                "-c",
                "commit.gpgsign=false",
                "commit",
                "--no-verify",
                "--allow-empty",
                "--quiet",
                "-m",
                message,
            ],
        )?;
        info!("Recorded baseline commit in {}", self.root.display());
        Ok(())
    }

    /// `git diff --cached` as raw text
    pub fn diff_staged(&self) -> GitResult<String> {
        self.diff("diff --cached", &["diff", "--cached", "--no-color", "--no-ext-diff"])
    }

    /// `git diff` as raw text
    pub fn diff_unstaged(&self) -> GitResult<String> {
        self.diff("diff", &["diff", "--no-color", "--no-ext-diff"])
    }

    /// Staged and unstaged diffs together
    pub fn snapshot(&self) -> GitResult<DiffSnapshot> {
        Ok(DiffSnapshot {
            staged: self.diff_staged()?,
            unstaged: self.diff_unstaged()?,
        })
    }

    fn diff(&self, operation: &str, args: &[&str]) -> GitResult<String> {
        let output = self.run(operation, args)?;
        if !output.success() {
            warn!(
                "git {} exited with {}: {}",
                operation,
                output.exit_code_display(),
                output.stderr.trim()
            );
        }
        Ok(output.stdout)
    }

    fn run(&self, operation: &str, args: &[&str]) -> GitResult<CommandOutput> {
        self.git.run(&self.root, operation, args)
    }

    fn run_checked(&self, operation: &str, args: &[&str]) -> GitResult<CommandOutput> {
        self.git.run_checked(&self.root, operation, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SYNTHETIC_IDENTITY;
    use std::fs;
    use tempfile::TempDir;

    fn system_git() -> GitCli {
        GitCli::locate_with(&ToolLocator::from_env())
            .expect("git must be installed to run these tests")
    }

    /// Value of `key` at the local config level, `None` when unset
    fn local_config(repo: &GitWorkspace, key: &str) -> Option<String> {
        let output = repo
            .run("config --get", &["config", "--local", "--get", key])
            .unwrap();
        match output.exit_code {
            Some(0) => Some(output.stdout.trim_end().to_string()),
            // git config exits 1 for a missing key
            Some(1) => None,
            other => panic!("git config failed with {other:?}: {}", output.stderr),
        }
    }

    fn init_repo() -> (TempDir, GitWorkspace) {
        let dir = TempDir::new().unwrap();
        let git = system_git();
        let repo = git.init(dir.path()).unwrap();
        repo.set_local_identity(&SYNTHETIC_IDENTITY).unwrap();
        (dir, repo)
    }

    #[test]
    fn test_init_creates_repository() {
        let (dir, repo) = init_repo();
        assert!(dir.path().join(".git").is_dir());
        assert_eq!(repo.root(), dir.path());
    }

    #[test]
    fn test_identity_is_written_to_local_scope() {
        let (dir, repo) = init_repo();

        assert_eq!(
            local_config(&repo, "user.name").as_deref(),
            Some("Test User")
        );
        assert_eq!(
            local_config(&repo, "user.email").as_deref(),
            Some("test@example.com")
        );

        let inspected = git2::Repository::open(dir.path()).unwrap();
        let local = inspected
            .config()
            .unwrap()
            .open_level(git2::ConfigLevel::Local)
            .unwrap();
        assert_eq!(local.get_string("user.name").unwrap(), "Test User");
        assert_eq!(local.get_string("user.email").unwrap(), "test@example.com");
    }

    #[test]
    fn test_local_config_missing_key_is_none() {
        let (_dir, repo) = init_repo();
        assert_eq!(local_config(&repo, "hookbench.unset"), None);
    }

    #[test]
    fn test_staged_diff_shows_added_files_without_baseline() {
        let (dir, repo) = init_repo();
        fs::write(dir.path().join("sample.py"), "print('hi')\n").unwrap();

        repo.add_all().unwrap();

        let staged = repo.diff_staged().unwrap();
        assert!(staged.contains("sample.py"));
        assert!(staged.contains("+print('hi')"));
    }

    #[test]
    fn test_baseline_commit_empties_staged_diff() {
        let (dir, repo) = init_repo();
        fs::write(dir.path().join("sample.py"), "print('hi')\n").unwrap();
        repo.add_all().unwrap();

        repo.commit_baseline("fixture baseline").unwrap();

        let snapshot = repo.snapshot().unwrap();
        assert!(!snapshot.has_staged());
        assert!(!snapshot.has_unstaged());
    }

    #[test]
    fn test_baseline_commit_with_no_files() {
        let (_dir, repo) = init_repo();
        repo.add_all().unwrap();
        repo.commit_baseline("empty baseline").unwrap();
    }

    #[test]
    fn test_snapshot_separates_staged_and_unstaged() {
        let (dir, repo) = init_repo();
        fs::write(dir.path().join("staged.txt"), "one\n").unwrap();
        fs::write(dir.path().join("unstaged.txt"), "one\n").unwrap();
        repo.add_all().unwrap();
        repo.commit_baseline("fixture baseline").unwrap();

        fs::write(dir.path().join("staged.txt"), "two\n").unwrap();
        repo.add_all().unwrap();
        fs::write(dir.path().join("unstaged.txt"), "two\n").unwrap();

        let snapshot = repo.snapshot().unwrap();
        assert!(snapshot.staged.contains("staged.txt"));
        assert!(!snapshot.staged.contains("unstaged.txt"));
        assert!(snapshot.unstaged.contains("unstaged.txt"));
        assert!(snapshot.unstaged.contains("+two"));
    }

    #[test]
    fn test_command_in_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        let git = system_git();

        let err = git.init(&missing).unwrap_err();
        assert!(matches!(err, GitError::SpawnFailed { .. }));
    }

    #[test]
    fn test_locate_with_empty_search_path() {
        let empty = TempDir::new().unwrap();
        let locator = ToolLocator::in_dirs([empty.path()]).unwrap();
        assert!(matches!(
            GitCli::locate_with(&locator),
            Err(GitError::ExecutableNotFound)
        ));
    }

    #[test]
    fn test_isolate_sets_working_directory() {
        let mut command = Command::new("git");
        isolate(&mut command, Path::new("/tmp"));
        assert_eq!(command.get_current_dir(), Some(Path::new("/tmp")));
        assert!(command
            .get_envs()
            .any(|(key, value)| key == "GIT_DIR" && value.is_none()));
    }
}
