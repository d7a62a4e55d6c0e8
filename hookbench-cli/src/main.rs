//! hookbench CLI - run the lefthook hooks against the bundled sample files.
//!
//! Exit codes:
//! - 0: The harness completed (hook failures are reported, not fatal)
//! - 1: Missing prerequisite, missing fixture, bad configuration or setup failure

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hookbench::{run_cli, Cli};

const DEBUG_FILTER: &str = "hookbench=debug,hookbench_git=debug,hookbench_config=debug,hookbench_common=debug";

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new(DEBUG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(io::stderr)
        .init();

    let exit_code = {
        let mut stdout = io::stdout().lock();
        run_cli(&cli, &mut stdout)
    };
    std::process::exit(exit_code);
}
