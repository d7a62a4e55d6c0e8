//! # hookbench configuration
//!
//! Typed configuration for the hook test harness, loaded with Figment.
//!
//! Sources, later overriding earlier:
//! 1. Built-in defaults ([`HarnessConfig::default`])
//! 2. `hookbench.toml` in the project root, when present
//!
//! Environment variables are not a configuration source.
//!
//! ```no_run
//! use hookbench_config::ConfigProvider;
//! use std::path::Path;
//!
//! let config = ConfigProvider::new(Path::new("/path/to/project")).load()?;
//! assert_eq!(config.hook_runner.hookset, "pre-commit");
//! # Ok::<(), hookbench_config::ConfigError>(())
//! ```

pub mod defaults;
pub mod error;
pub mod provider;
pub mod types;

pub use error::{ConfigError, ConfigResult};
pub use provider::{ConfigProvider, CONFIG_FILE_NAME};
pub use types::{HarnessConfig, HookRunnerConfig, ToolCategory, WorkspaceConfig};
