//! Configuration management for microdata rendering.
//!
//! Parses `microdata.toml` with serde and provides auto-discovery of the
//! config file in parent directories. The loaded [`MicrodataConfig`] converts
//! into [`RenderOptions`] for the renderer.
//!
//! ```toml
//! vocabulary_base = "${MICRODATA_VOCABULARY:-https://schema.org}"
//! image_gate = "photo-only"
//! empty_value = "reject"
//! attribute_order = "sorted"
//! compact_sole_paragraph = false
//! ```

use std::path::{Path, PathBuf};

use microdata_renderer::{
    AttributeOrder, DEFAULT_VOCABULARY_BASE, EmptyValuePolicy, ImageGate, RenderOptions,
};
use serde::Deserialize;

mod expand;

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "microdata.toml";

/// Microdata rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MicrodataConfig {
    /// Base URI that `itemscope` type names are appended to.
    pub vocabulary_base: String,
    /// Which properties the `img` rule applies to.
    pub image_gate: ImageGate,
    /// Whether `<name>` without a display value is accepted.
    pub empty_value: EmptyValuePolicy,
    /// Attribute order in start tags.
    pub attribute_order: AttributeOrder,
    /// Unwrap a paragraph that is the only child of a scope or property block.
    pub compact_sole_paragraph: bool,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for MicrodataConfig {
    fn default() -> Self {
        Self {
            vocabulary_base: DEFAULT_VOCABULARY_BASE.to_owned(),
            image_gate: ImageGate::default(),
            empty_value: EmptyValuePolicy::default(),
            attribute_order: AttributeOrder::default(),
            compact_sole_paragraph: true,
            config_path: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
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
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field name (e.g., "`vocabulary_base`").
        field: String,
        /// Error message (e.g., "${`MICRODATA_VOCABULARY`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl MicrodataConfig {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `microdata.toml` in the current directory and
    /// parents, falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// an environment variable is unset, or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        match Self::discover_config() {
            Some(discovered) => Self::load_from_file(&discovered),
            None => Ok(Self::default()),
        }
    }

    /// Search for the config file in the current directory and parents.
    #[must_use]
    pub fn discover_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::discover_config_from(&cwd)
    }

    /// Search for the config file in `start` and its parents.
    #[must_use]
    pub fn discover_config_from(start: &Path) -> Option<PathBuf> {
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

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.vocabulary_base, "vocabulary_base")?;
        require_http_url(&self.vocabulary_base, "vocabulary_base")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.vocabulary_base = expand::expand_env(&self.vocabulary_base, "vocabulary_base")?;
        Ok(())
    }

    /// Build renderer options from this configuration.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_vocabulary_base(self.vocabulary_base.as_str())
            .with_image_gate(self.image_gate)
            .with_empty_value(self.empty_value)
            .with_attribute_order(self.attribute_order)
            .with_compact_sole_paragraph(self.compact_sole_paragraph)
    }
}

impl From<&MicrodataConfig> for RenderOptions {
    fn from(config: &MicrodataConfig) -> Self {
        config.render_options()
    }
}

impl From<MicrodataConfig> for RenderOptions {
    fn from(config: MicrodataConfig) -> Self {
        config.render_options()
    }
}
