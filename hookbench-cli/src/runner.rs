//! Hook runner invocation
//!
//! `install` is a setup step: a non-zero exit is fatal. The check step is
//! expected to fail whenever a hook rewrites or rejects a file, so its exit
//! code is returned as an [`ExecutionResult`] instead.

use crate::console::Console;
use crate::error::{HarnessError, HarnessResult};
use hookbench_common::{capture, CommandOutput};
use hookbench_git::isolate;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Outcome of the check step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionResult {
    /// Whether every hook passed
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Print the exit code and any captured output
    pub fn report(&self, runner_name: &str, console: &mut Console<'_>) {
        console.line(format_args!("📋 {} execution completed", capitalize(runner_name)));
        match self.exit_code {
            Some(code) => console.line(format_args!("Exit code: {code}")),
            None => console.line("Exit code: none (terminated by signal)"),
        }

        if !self.stdout.is_empty() {
            console.line("Standard output:");
            console.block(&self.stdout);
        }
        if !self.stderr.is_empty() {
            console.line("Standard error:");
            console.block(&self.stderr);
        }
    }
}

impl From<CommandOutput> for ExecutionResult {
    fn from(output: CommandOutput) -> Self {
        Self {
            exit_code: output.exit_code,
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }
}

/// The external hook runner, resolved to an executable
#[derive(Debug, Clone)]
pub struct HookRunner {
    program: PathBuf,
    hookset: String,
}

impl HookRunner {
    pub fn new(program: impl Into<PathBuf>, hookset: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            hookset: hookset.into(),
        }
    }

    /// Short name used in report lines, e.g. `lefthook`
    pub fn display_name(&self) -> String {
        display_name(&self.program)
    }

    /// Install the runner's git hooks into the workspace repository
    pub fn install(&self, workspace: &Path) -> HarnessResult<()> {
        let output = self.execute(workspace, &["install"])?;
        if !output.success() {
            let details = if output.stderr.trim().is_empty() {
                output.stdout.trim()
            } else {
                output.stderr.trim()
            };
            return Err(HarnessError::HookInstallFailed {
                program: self.display_name(),
                exit_code: output.exit_code_display(),
                output: details.to_string(),
            });
        }
        info!("Installed {} hooks in {}", self.display_name(), workspace.display());
        Ok(())
    }

    /// Run the hookset over every file in the workspace
    pub fn run_all_files(&self, workspace: &Path) -> HarnessResult<ExecutionResult> {
        let output = self.execute(workspace, &["run", self.hookset.as_str(), "--all-files"])?;
        debug!(
            "{} run {} exited with {}",
            self.display_name(),
            self.hookset,
            output.exit_code_display()
        );
        Ok(output.into())
    }

    fn execute(&self, workspace: &Path, args: &[&str]) -> HarnessResult<CommandOutput> {
        let mut command = Command::new(&self.program);
        command.args(args);
        isolate(&mut command, workspace);
        capture(&mut command).map_err(|source| HarnessError::HookRunnerSpawn {
            program: self.display_name(),
            source,
        })
    }
}

/// File stem of a program path: `/usr/local/bin/lefthook` -> `lefthook`
pub fn display_name(program: &Path) -> String {
    program
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.display().to_string())
}

/// `lefthook` -> `Lefthook`
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
