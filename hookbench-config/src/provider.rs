//! Configuration provider using Figment

use crate::{
    error::ConfigError,
    types::{HarnessConfig, WorkspaceConfig},
    ConfigResult,
};
use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Name of the optional configuration file at the project root
pub const CONFIG_FILE_NAME: &str = "hookbench.toml";

/// Loads [`HarnessConfig`] for one project root
///
/// No caching is performed; every call to [`ConfigProvider::load`] reads the file again.
pub struct ConfigProvider {
    project_root: PathBuf,
}

impl ConfigProvider {
    /// Create a provider for the given project root
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }

    /// Path of the configuration file, whether or not it exists
    pub fn config_path(&self) -> PathBuf {
        self.project_root.join(CONFIG_FILE_NAME)
    }

    /// Load and validate the configuration.
    ///
    /// A relative `workspace.temp_root` is resolved against the project root,
    /// never against the current directory.
    pub fn load(&self) -> ConfigResult<HarnessConfig> {
        let path = self.config_path();
        if path.is_file() {
            info!("Loading configuration from {}", path.display());
        } else {
            debug!("No {} found, using defaults", path.display());
        }

        let mut config: HarnessConfig = self
            .build_figment()
            .extract()
            .map_err(|e| ConfigError::parse_error(&path, e))?;

        validate(&config)?;
        if let Some(temp_root) = config.workspace.temp_root.take() {
            config.workspace.temp_root = Some(self.resolve(temp_root));
        }
        Ok(config)
    }

    fn resolve(&self, path: PathBuf) -> PathBuf {
        if path.is_absolute() {
            path
        } else {
            debug!("Resolving {} against {}", path.display(), self.project_root.display());
            self.project_root.join(path)
        }
    }

    /// Defaults first, then the project file
    fn build_figment(&self) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(HarnessConfig::default()))
            .merge(Toml::file(self.config_path()))
    }
}

fn validate(config: &HarnessConfig) -> ConfigResult<()> {
    if config.hook_runner.program.trim().is_empty() {
        return Err(ConfigError::validation("hook_runner.program must not be empty"));
    }
    if config.hook_runner.hookset.trim().is_empty() {
        return Err(ConfigError::validation("hook_runner.hookset must not be empty"));
    }

    validate_workspace(&config.workspace)?;

    for entry in &config.tools {
        if entry.category.trim().is_empty() {
            return Err(ConfigError::validation("tools.category must not be empty"));
        }
    }
    Ok(())
}

fn validate_workspace(workspace: &WorkspaceConfig) -> ConfigResult<()> {
    let single_names = [
        ("workspace.dir_name", &workspace.dir_name),
        ("workspace.nested_dir", &workspace.nested_dir),
    ];
    for (key, value) in single_names {
        if !is_single_component(value) {
            return Err(ConfigError::validation(format!(
                "{key} must be a single directory name, got '{value}'"
            )));
        }
    }

    let relative_paths = [
        ("workspace.descriptor", &workspace.descriptor),
        ("workspace.rules_dir", &workspace.rules_dir),
        ("workspace.helpers_dir", &workspace.helpers_dir),
    ];
    for (key, value) in relative_paths {
        if !is_contained_relative(value) {
            return Err(ConfigError::validation(format!(
                "{key} must be a relative path inside the project root, got '{value}'"
            )));
        }
    }
    Ok(())
}

fn is_single_component(value: &str) -> bool {
    let mut components = Path::new(value).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn is_contained_relative(value: &str) -> bool {
    !value.is_empty()
        && Path::new(value)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
