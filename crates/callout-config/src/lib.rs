//! Configuration management for callout.
//!
//! Parses `callout.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [containers]
//! details = true
//! message = true
//!
//! [markdown]
//! gfm = true
//! ```

use std::path::{Path, PathBuf};

use callout_renderer::{ContainerRegistry, DetailsHandler, MessageHandler, RenderOptions};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override GitHub Flavored Markdown flag.
    pub gfm: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "callout.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Container handler selection.
    pub containers: ContainersConfig,
    /// Markdown parser configuration.
    pub markdown: MarkdownConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Which built-in container handlers are registered.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ContainersConfig {
    /// Register the `::: details Summary` handler.
    pub details: bool,
    /// Register the `::: message [alert]` handler.
    pub message: bool,
}

impl Default for ContainersConfig {
    fn default() -> Self {
        Self {
            details: true,
            message: true,
        }
    }
}

/// Markdown parser configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Enable GitHub Flavored Markdown extensions.
    pub gfm: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self { gfm: true }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `callout.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(gfm) = settings.gfm {
            self.markdown.gfm = gfm;
        }
    }

    /// Build the container registry for the enabled handlers.
    #[must_use]
    pub fn registry(&self) -> ContainerRegistry {
        let mut registry = ContainerRegistry::new();
        if self.containers.details {
            registry = registry.with_handler(DetailsHandler);
        }
        if self.containers.message {
            registry = registry.with_handler(MessageHandler);
        }
        registry
    }

    /// Build render options from this configuration.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::default()
            .with_registry(self.registry())
            .with_gfm(self.markdown.gfm)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading
        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if no container handler is enabled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.containers.details && !self.containers.message {
            return Err(ConfigError::Validation(
                "at least one of containers.details or containers.message must be enabled"
                    .to_owned(),
            ));
        }
        Ok(())
    }
}
