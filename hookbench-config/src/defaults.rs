//! Built-in configuration values

use crate::types::ToolCategory;

pub const HOOK_RUNNER: &str = "lefthook";
pub const HOOKSET: &str = "pre-commit";

pub const WORKSPACE_DIR: &str = "test_workspace";
pub const DESCRIPTOR: &str = "lefthook.yml";
pub const RULES_DIR: &str = ".pre-commit";
pub const HELPERS_DIR: &str = "hooks";
pub const NESTED_DIR: &str = "test_files";

/// Install commands for the hook runner, one per package manager
pub fn install_hints() -> Vec<String> {
    vec![
        "brew install lefthook".to_string(),
        "npm install -g lefthook".to_string(),
    ]
}

/// Tools referenced by the shipped rule files, grouped by toolchain
pub fn tool_catalog() -> Vec<ToolCategory> {
    vec![
        ToolCategory::new("Python", &["pycln", "isort", "ruff", "pyright", "ty"]),
        ToolCategory::new("JavaScript", &["npx"]),
        ToolCategory::new("Rust", &["rustfmt", "cargo"]),
        ToolCategory::new("Markdown", &["markdownlint"]),
        ToolCategory::new("YAML", &["yamlfix"]),
        ToolCategory::new("TOML", &["taplo"]),
        ToolCategory::new("SQL", &["sqlfluff"]),
        ToolCategory::new("Shell", &["shfmt"]),
    ]
}
