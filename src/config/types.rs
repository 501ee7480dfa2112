use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::form::FormValues;

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    pub submit: SubmitConfig,
    pub logging: LoggingConfig,
    pub ui: UiConfig,
    /// Values the form starts with
    pub initial_values: FormValues,
}

/// Behaviour of the simulated final submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitConfig {
    pub delay_ms: u64,
    /// Reject this many attempts before accepting
    pub fail_attempts: u32,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            delay_ms: 3000,
            fail_attempts: 0,
        }
    }
}

impl SubmitConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `hni_wizard=debug`
    pub level: String,
    /// Log destination; nothing is logged when unset
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Redraw interval for the spinner while idle
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 50 }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}
