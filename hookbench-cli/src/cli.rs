//! CLI definition for hookbench.
//!
//! Depends only on `clap` and `std`.

use std::path::PathBuf;

use clap::Parser;

/// hookbench - exercise pre-commit hooks against sample files
///
/// Builds a throwaway git repository from the project's hook configuration and
/// the bundled sample files, runs the hook runner over every file and reports
/// what changed.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "hookbench")]
#[command(version)]
#[command(about = "Test lefthook hooks against sample files")]
pub struct Cli {
    /// Display the full git diff after hooks run
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug output to stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Project root holding the hook configuration [default: the source checkout hookbench was built from]
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Zip archive of sample files [default: the fixture in the source checkout]
    #[arg(long, value_name = "FILE")]
    pub fixture: Option<PathBuf>,
}
