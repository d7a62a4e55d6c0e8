//! Diff reporting

use crate::console::{Console, NARROW_RULE, WIDE_RULE};
use crate::error::HarnessResult;
use crate::runner::capitalize;
use hookbench_git::{DiffSnapshot, GitWorkspace};
use tracing::debug;

/// Prints what the hooks changed in the workspace
pub struct DiffReporter {
    verbose: bool,
    runner_name: String,
}

impl DiffReporter {
    pub fn new(verbose: bool, runner_name: impl Into<String>) -> Self {
        Self {
            verbose,
            runner_name: runner_name.into(),
        }
    }

    /// Collect and print the diffs, or the suppression notice when not verbose
    pub fn report(&self, repo: &GitWorkspace, console: &mut Console<'_>) -> HarnessResult<()> {
        if !self.verbose {
            console.blank();
            console.line("📊 Diff output suppressed. Re-run with --verbose to include full diff.");
            return Ok(());
        }

        let snapshot = repo.snapshot()?;
        debug!(
            staged_bytes = snapshot.staged.len(),
            unstaged_bytes = snapshot.unstaged.len(),
            "Collected workspace diffs"
        );
        self.render(&snapshot, console);
        Ok(())
    }

    /// Print the verbose diff section for `snapshot`
    pub fn render(&self, snapshot: &DiffSnapshot, console: &mut Console<'_>) {
        console.blank();
        console.rule('=', WIDE_RULE);
        console.line(format_args!(
            "📊 DIFF: Changes made by {} hooks",
            self.runner_name
        ));
        console.rule('=', WIDE_RULE);

        if snapshot.has_staged() {
            console.block(&snapshot.staged);
        } else {
            console.line("No changes detected in staged files.");
        }

        if snapshot.has_unstaged() {
            console.blank();
            console.rule('-', NARROW_RULE);
            console.line("📝 Additional unstaged changes:");
            console.rule('-', NARROW_RULE);
            console.block(&snapshot.unstaged);
        }

        console.rule('=', WIDE_RULE);
    }
}

/// Print the closing summary and manual review instructions
pub fn print_summary(console: &mut Console<'_>, runner_name: &str, hooks_passed: bool) {
    let name = capitalize(runner_name);

    console.blank();
    console.rule('=', WIDE_RULE);
    if hooks_passed {
        console.line(format_args!("✅ {name} run completed successfully!"));
    } else {
        console.line(format_args!(
            "⚠️  {name} run completed with issues (this is expected for formatting)"
        ));
    }

    console.blank();
    console.line("📖 Instructions for manual review:");
    console.line("1. Review the diff above to see what changes were made");
    console.line("2. Check that formatting improvements look correct");
    console.line("3. Verify that linting issues were properly identified");
    console.line("4. The temporary workspace will be cleaned up automatically");
    console.rule('=', WIDE_RULE);
}
