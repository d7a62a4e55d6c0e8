//! Prerequisite checks
//!
//! The hook runner and git are required: a missing one stops the run. Tools
//! from the configured catalog are optional; missing ones are reported grouped
//! by category and the run continues.

use crate::console::Console;
use crate::error::{HarnessError, HarnessResult};
use crate::runner::display_name;
use hookbench_common::ToolLocator;
use hookbench_config::HarnessConfig;
use hookbench_doctor::{Check, DoctorRunner};
use hookbench_git::GitCli;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const REQUIRED_CATEGORY: &str = "Required";

/// Executables every run needs, resolved
#[derive(Debug, Clone)]
pub struct RequiredTools {
    pub hook_runner: PathBuf,
    pub git: GitCli,
}

/// Tools of one catalog category that did not resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTools {
    pub category: String,
    pub tools: Vec<String>,
}

/// Runs prerequisite checks and records each one as a [`Check`]
pub struct PrerequisiteChecker<'a> {
    locator: &'a ToolLocator,
    config: &'a HarnessConfig,
    checks: Vec<Check>,
}

impl DoctorRunner for PrerequisiteChecker<'_> {
    fn checks(&self) -> &[Check] {
        &self.checks
    }

    fn checks_mut(&mut self) -> &mut Vec<Check> {
        &mut self.checks
    }
}

impl<'a> PrerequisiteChecker<'a> {
    pub fn new(locator: &'a ToolLocator, config: &'a HarnessConfig) -> Self {
        Self {
            locator,
            config,
            checks: Vec::new(),
        }
    }

    /// Resolve the hook runner, then git. Either one missing is fatal.
    pub fn check_required(&mut self) -> HarnessResult<RequiredTools> {
        let hook_runner = self.check_hook_runner()?;
        let git = self.check_git()?;
        Ok(RequiredTools { hook_runner, git })
    }

    fn check_hook_runner(&mut self) -> HarnessResult<PathBuf> {
        let config = self.config;
        let runner = &config.hook_runner;
        match self.locator.locate(&runner.program) {
            Some(path) => {
                info!("Hook runner resolved to {}", path.display());
                self.add_check(Check::ok(
                    &runner.program,
                    REQUIRED_CATEGORY,
                    format!("Found at {}", path.display()),
                ));
                Ok(path)
            }
            None => {
                self.add_check(Check::error(
                    &runner.program,
                    REQUIRED_CATEGORY,
                    "Not found on PATH",
                    runner.install_hints.join(" or "),
                ));
                Err(HarnessError::HookRunnerNotFound {
                    program: display_name(Path::new(&runner.program)),
                    install_hints: runner.install_hints.clone(),
                })
            }
        }
    }

    fn check_git(&mut self) -> HarnessResult<GitCli> {
        match GitCli::locate_with(self.locator) {
            Ok(git) => {
                self.add_check(Check::ok(
                    "git",
                    REQUIRED_CATEGORY,
                    format!("Found at {}", git.program().display()),
                ));
                Ok(git)
            }
            Err(e) => {
                debug!("git lookup failed: {}", e);
                self.add_check(Check::error(
                    "git",
                    REQUIRED_CATEGORY,
                    "Not found on PATH",
                    "Install git from https://git-scm.com/downloads",
                ));
                Err(HarnessError::GitNotFound)
            }
        }
    }

    /// Check every catalog tool; returns the missing ones grouped in catalog order
    pub fn check_catalog(&mut self) -> Vec<MissingTools> {
        let config = self.config;
        let mut missing = Vec::new();

        for entry in &config.tools {
            let mut absent = Vec::new();
            for tool in &entry.tools {
                match self.locator.locate(tool) {
                    Some(path) => self.checks.push(Check::ok(
                        tool,
                        &entry.category,
                        format!("Found at {}", path.display()),
                    )),
                    None => {
                        self.checks.push(Check::warning(
                            tool,
                            &entry.category,
                            "Not found on PATH",
                            format!("Install {tool} to run the {} hooks", entry.category),
                        ));
                        absent.push(tool.clone());
                    }
                }
            }

            if !absent.is_empty() {
                warn!("Missing {} tools: {}", entry.category, absent.join(", "));
                missing.push(MissingTools {
                    category: entry.category.clone(),
                    tools: absent,
                });
            }
        }

        missing
    }
}

/// Print the grouped summary of missing catalog tools
pub fn print_missing_tools(console: &mut Console<'_>, missing: &[MissingTools]) {
    if missing.is_empty() {
        console.line("✅ All required tools are installed");
        return;
    }

    console.line("⚠️  Some tools are missing:");
    for group in missing {
        console.line(format_args!("  {}: {}", group.category, group.tools.join(", ")));
    }
    console.blank();
    console.line("Some hooks may fail. See README for installation instructions.");
}
