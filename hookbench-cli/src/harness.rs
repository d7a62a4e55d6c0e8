//! Run orchestration
//!
//! One linear pass: prerequisites, workspace creation, population, hook
//! installation, staging, the check step, diff report, summary. Every step
//! receives the paths and configuration it needs explicitly.

use crate::cli::Cli;
use crate::console::Console;
use crate::error::{HarnessError, HarnessResult};
use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS};
use crate::paths::HarnessPaths;
use crate::prerequisites::{print_missing_tools, PrerequisiteChecker, RequiredTools};
use crate::report::{print_summary, DiffReporter};
use crate::runner::{capitalize, display_name, HookRunner};
use crate::workspace::{Workspace, WorkspaceBuilder};
use hookbench_common::ToolLocator;
use hookbench_config::{ConfigProvider, HarnessConfig};
use hookbench_doctor::DoctorRunner;
use std::io::Write;
use std::path::Path;
use tracing::{error, info};

/// Message of the commit recording the untouched fixture set
pub const BASELINE_MESSAGE: &str = "hookbench: fixture baseline";

/// How a completed run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarnessOutcome {
    /// The check step exited 0
    Clean,
    /// The check step exited non-zero; its output and the diff were reported
    IssuesReported,
}

/// A configured harness run
pub struct Harness {
    paths: HarnessPaths,
    config: HarnessConfig,
    locator: ToolLocator,
    verbose: bool,
}

impl Harness {
    pub fn new(paths: HarnessPaths, config: HarnessConfig, verbose: bool) -> Self {
        Self {
            paths,
            config,
            locator: ToolLocator::from_env(),
            verbose,
        }
    }

    /// Resolve executables with `locator` instead of the process `PATH`
    pub fn with_locator(mut self, locator: ToolLocator) -> Self {
        self.locator = locator;
        self
    }

    /// Execute the run.
    ///
    /// The temporary workspace is removed before this returns, whether the
    /// run completed or failed.
    pub fn run(&self, console: &mut Console<'_>) -> HarnessResult<HarnessOutcome> {
        self.print_header(console);

        let mut checker = PrerequisiteChecker::new(&self.locator, &self.config);
        let required = checker.check_required()?;
        console.blank();
        let missing = checker.check_catalog();
        print_missing_tools(console, &missing);
        if self.verbose {
            console.blank();
            console.line(checker.render_table(true));
            console.line(checker.summary());
        }
        console.blank();

        let fixture = self.paths.fixture();
        if !fixture.is_file() {
            return Err(HarnessError::FixtureNotFound {
                path: fixture.to_path_buf(),
            });
        }

        let workspace = Workspace::create(&self.config.workspace)?;
        console.line(format_args!(
            "🏗️  Created temporary workspace: {}",
            workspace.path().display()
        ));

        let outcome = self.exercise(&required, &workspace, console);
        workspace.close();
        outcome
    }

    fn print_header(&self, console: &mut Console<'_>) {
        let name = display_name(Path::new(&self.config.hook_runner.program));
        console.line(format_args!("🧪 {} hooks test script", capitalize(&name)));
        if !self.verbose {
            console.line("🔕 Diff output is disabled by default; pass --verbose to show it.");
        }
        console.line(format_args!(
            "Project root: {}",
            self.paths.project_root().display()
        ));
        console.line(format_args!("Test files zip: {}", self.paths.fixture().display()));
    }

    fn exercise(
        &self,
        required: &RequiredTools,
        workspace: &Workspace,
        console: &mut Console<'_>,
    ) -> HarnessResult<HarnessOutcome> {
        let layout = &self.config.workspace;
        let repo = WorkspaceBuilder::new(&required.git, &self.paths, layout)
            .populate(workspace.path(), console)?;

        let runner = HookRunner::new(&required.hook_runner, &self.config.hook_runner.hookset);
        let name = runner.display_name();

        console.line(format_args!("⚙️  Installing {name} hooks..."));
        runner.install(repo.root())?;

        console.line(format_args!("🔧 Running {name} on all files..."));
        repo.add_all()?;
        if layout.baseline_commit {
            repo.commit_baseline(BASELINE_MESSAGE)?;
        }
        let result = runner.run_all_files(repo.root())?;
        result.report(&name, console);

        DiffReporter::new(self.verbose, &name).report(&repo, console)?;

        let outcome = if result.succeeded() {
            HarnessOutcome::Clean
        } else {
            HarnessOutcome::IssuesReported
        };
        print_summary(console, &name, outcome == HarnessOutcome::Clean);
        Ok(outcome)
    }
}

/// Run the harness for parsed arguments, writing the report to `out`.
///
/// Returns the process exit code. Errors are printed here and go no further.
pub fn run_cli(cli: &Cli, out: &mut dyn Write) -> i32 {
    let paths = HarnessPaths::from_install_location()
        .with_overrides(cli.project_root.clone(), cli.fixture.clone());
    let mut console = Console::new(out);

    let result = ConfigProvider::new(paths.project_root())
        .load()
        .map_err(HarnessError::from)
        .and_then(|config| Harness::new(paths, config, cli.verbose).run(&mut console));

    let code = match result {
        Ok(outcome) => {
            info!("Harness run finished: {:?}", outcome);
            EXIT_SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            console.line(e.headline());
            for line in e.remediation() {
                console.line(line);
            }
            EXIT_ERROR
        }
    };
    console.flush();
    code
}
