use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::WizardConfig;
use crate::{Result, WizardError};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "hni-wizard.yaml";

/// Platform config file, e.g. `~/.config/hni-wizard/config.yaml`
pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("dev", "hni", "hni-wizard")
        .map(|dirs| dirs.config_dir().join("config.yaml"))
}

/// Load configuration.
///
/// An explicit path must exist. Otherwise `./hni-wizard.yaml` and then the
/// user config file are tried, falling back to built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<WizardConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(WizardError::Config(format!(
                "config file {} does not exist",
                path.display()
            )));
        }
        return load_config_file(path);
    }

    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        return load_config_file(local);
    }

    if let Some(user) = user_config_path() {
        if user.exists() {
            return load_config_file(&user);
        }
    }

    debug!("No config file found, using defaults");
    Ok(WizardConfig::default())
}

/// Parse a single YAML config file
pub fn load_config_file(path: &Path) -> Result<WizardConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        WizardError::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;

    // an empty file is valid and means "all defaults"
    if contents.trim().is_empty() {
        return Ok(WizardConfig::default());
    }

    let config: WizardConfig = serde_yaml_ng::from_str(&contents)?;
    debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}
