//! Tool configuration
//!
//! Loaded from an optional `cookbook.toml` in the working directory plus
//! `COOKBOOK__`-prefixed environment variables (double underscore as the
//! nesting separator, e.g. `COOKBOOK__STRICT_GROUPS=false`).

use config::{Config, ConfigError, Environment, File};
use cookbook_loader::{GroupPolicy, LoadOptions};
use serde::Deserialize;

/// Settings affecting the load pass
#[derive(Debug, Clone, Deserialize)]
pub struct CookbookConfig {
    /// Treat unknown group labels as load failures
    #[serde(default = "default_strict_groups")]
    pub strict_groups: bool,
    /// Companion image extensions, probed in priority order
    #[serde(default = "default_image_extensions")]
    pub image_extensions: Vec<String>,
}

impl Default for CookbookConfig {
    fn default() -> Self {
        CookbookConfig {
            strict_groups: default_strict_groups(),
            image_extensions: default_image_extensions(),
        }
    }
}

fn default_strict_groups() -> bool {
    true
}

fn default_image_extensions() -> Vec<String> {
    vec!["png".to_string(), "jpeg".to_string()]
}

impl CookbookConfig {
    /// Load configuration from file and environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("cookbook").required(false))
            .add_source(
                Environment::with_prefix("COOKBOOK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        settings.try_deserialize()
    }

    /// Translate the settings into loader options.
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            unknown_groups: if self.strict_groups {
                GroupPolicy::Deny
            } else {
                GroupPolicy::Ignore
            },
            image_extensions: self.image_extensions.clone(),
        }
    }
}
