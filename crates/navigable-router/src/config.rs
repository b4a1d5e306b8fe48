//! Router configuration

use navigable_core::ModalOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Router configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterConfig {
    /// Resource group used by screens that do not declare one
    #[serde(default = "default_resource_group")]
    pub default_resource_group: String,

    /// Animation flag used by the `*_default` calls
    #[serde(default = "default_true")]
    pub animated_by_default: bool,

    /// Drop records of dead screens before every `show`
    #[serde(default = "default_true")]
    pub prune_stale_on_show: bool,

    /// Options used for default modal presentations
    #[serde(default)]
    pub default_transition: ModalOptions,
}

fn default_resource_group() -> String {
    "Main".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            default_resource_group: default_resource_group(),
            animated_by_default: true,
            prune_stale_on_show: true,
            default_transition: ModalOptions::default(),
        }
    }
}

impl RouterConfig {
    /// Create a configuration with a custom default resource group
    pub fn new(default_resource_group: impl Into<String>) -> Self {
        Self { default_resource_group: default_resource_group.into(), ..Default::default() }
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for invalid values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_resource_group.trim().is_empty() {
            return Err(ConfigError::Invalid("default resource group is empty".to_string()));
        }
        Ok(())
    }

    /// Set the animation flag used by the `*_default` calls
    pub fn animated_by_default(mut self, animated: bool) -> Self {
        self.animated_by_default = animated;
        self
    }

    /// Enable or disable pruning before every `show`
    pub fn prune_stale_on_show(mut self, enabled: bool) -> Self {
        self.prune_stale_on_show = enabled;
        self
    }

    /// Set the options used for default modal presentations
    pub fn default_transition(mut self, options: ModalOptions) -> Self {
        self.default_transition = options;
        self
    }
}
