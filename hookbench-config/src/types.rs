//! Configuration types

use crate::defaults;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete harness configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub hook_runner: HookRunnerConfig,
    pub workspace: WorkspaceConfig,
    /// Auxiliary tool catalog, checked in order
    pub tools: Vec<ToolCategory>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            hook_runner: HookRunnerConfig::default(),
            workspace: WorkspaceConfig::default(),
            tools: defaults::tool_catalog(),
        }
    }
}

/// The external hook runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookRunnerConfig {
    /// Program name or path of the hook runner
    pub program: String,
    /// Hookset passed to `run`
    pub hookset: String,
    /// Installation commands shown when the runner is missing
    pub install_hints: Vec<String>,
}

impl Default for HookRunnerConfig {
    fn default() -> Self {
        Self {
            program: defaults::HOOK_RUNNER.to_string(),
            hookset: defaults::HOOKSET.to_string(),
            install_hints: defaults::install_hints(),
        }
    }
}

/// Layout of the hook configuration and the temporary workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Name of the workspace directory created inside the temporary directory
    pub dir_name: String,
    /// Hook runner descriptor file at the project root
    pub descriptor: String,
    /// Directory of per-tool rule files at the project root
    pub rules_dir: String,
    /// Optional helper-script directory at the project root
    pub helpers_dir: String,
    /// Archive subdirectory flattened into the workspace root
    pub nested_dir: String,
    /// Commit the staged fixture set before running hooks
    pub baseline_commit: bool,
    /// Parent for the temporary directory; the system temp dir when unset
    pub temp_root: Option<PathBuf>,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            dir_name: defaults::WORKSPACE_DIR.to_string(),
            descriptor: defaults::DESCRIPTOR.to_string(),
            rules_dir: defaults::RULES_DIR.to_string(),
            helpers_dir: defaults::HELPERS_DIR.to_string(),
            nested_dir: defaults::NESTED_DIR.to_string(),
            baseline_commit: true,
            temp_root: None,
        }
    }
}

/// One catalog entry: a category label and the tools it needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCategory {
    pub category: String,
    pub tools: Vec<String>,
}

impl ToolCategory {
    pub fn new(category: &str, tools: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            tools: tools.iter().map(|t| t.to_string()).collect(),
        }
    }
}
