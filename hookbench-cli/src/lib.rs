//! hookbench - pre-commit hook test harness
//!
//! Builds a throwaway git repository from the project's lefthook
//! configuration and a bundle of sample files, runs the hooks over every file
//! and prints the result for manual review:
//!
//! 1. [`prerequisites`]: hook runner and git must resolve; catalog tools are optional
//! 2. [`workspace`]: temporary directory, `git init`, configuration copy, fixture
//! 3. [`runner`]: `install`, then the hookset over all files
//! 4. [`report`]: staged and unstaged diffs, summary
//!
//! [`harness::run_cli`] ties the steps together for the binary.

pub mod archive;
pub mod cli;
pub mod console;
pub mod error;
pub mod exit_codes;
pub mod harness;
pub mod paths;
pub mod prerequisites;
pub mod report;
pub mod runner;
pub mod workspace;

pub use cli::Cli;
pub use console::Console;
pub use error::{HarnessError, HarnessResult};
pub use harness::{run_cli, Harness, HarnessOutcome};
pub use paths::HarnessPaths;
