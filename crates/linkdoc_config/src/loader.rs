//! Configuration file discovery, loading, and validation.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "linkdoc.toml";

/// Loads and validates a `linkdoc.toml` configuration from a project directory.
///
/// Reads `<project_dir>/linkdoc.toml`, parses it, and validates its values.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    load_config_file(&project_dir.join(CONFIG_FILE))
}

/// Loads and validates a configuration file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_from_str(&content)
}

/// Loads `linkdoc.toml` if the project has one, otherwise returns defaults.
///
/// A present but invalid file is still an error.
pub fn load_config_or_default(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    if project_dir.join(CONFIG_FILE).is_file() {
        load_config(project_dir)
    } else {
        Ok(ProjectConfig::default())
    }
}

/// Parses and validates a `linkdoc.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Walks up from `start` looking for the nearest directory containing `linkdoc.toml`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(CONFIG_FILE).is_file() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Validates that required values are present and consistent.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.scan.extensions.is_empty() {
        return Err(ConfigError::MissingField("scan.extensions".to_string()));
    }
    if config.index.output.trim().is_empty() {
        return Err(ConfigError::MissingField("index.output".to_string()));
    }
    if config.cache.path.trim().is_empty() {
        return Err(ConfigError::MissingField("cache.path".to_string()));
    }
    if config.validate.max_description_len == 0 {
        return Err(ConfigError::ValidationError(
            "validate.max_description_len must be positive".to_string(),
        ));
    }
    if let Some(rule) = config
        .validate
        .deny
        .iter()
        .find(|rule| config.validate.allow.contains(rule))
    {
        return Err(ConfigError::ValidationError(format!(
            "rule '{rule}' is listed in both validate.deny and validate.allow"
        )));
    }
    Ok(())
}
