//! Configuration types and YAML loading

pub mod loader;
pub mod types;

pub use loader::{load_config, load_config_file, user_config_path, LOCAL_CONFIG_FILE};
pub use types::{LoggingConfig, SubmitConfig, UiConfig, WizardConfig};
