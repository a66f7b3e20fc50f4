//! Configuration types and loading for the cellform system.
//!
//! [`CellformConfig`] is assembled by [`load_config`] from built-in
//! defaults, the discovered YAML files, and `CELLFORM_*` environment
//! variables, in that order. Later sources win.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::discovery::ConfigSources;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration file could not be read or written.
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    /// The merged configuration could not be extracted.
    #[error("invalid configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    /// The configuration could not be serialized to YAML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml::Error),

    /// A config file named on the command line does not exist.
    #[error("config file not found: {0}")]
    NotFound(String),

    /// A configuration value was invalid.
    #[error("invalid configuration value for key '{key}': {reason}")]
    InvalidValue {
        /// The configuration key that had an invalid value.
        key: String,
        /// A description of why the value is invalid.
        reason: String,
    },
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Prefix of environment variables that override config values.
pub const ENV_PREFIX: &str = "CELLFORM_";

// ---------------------------------------------------------------------------
// Color mode
// ---------------------------------------------------------------------------

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal and the environment allows it.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(ConfigError::InvalidValue {
                key: "color".to_string(),
                reason: format!("expected auto, always or never (got '{}')", other),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Main config struct
// ---------------------------------------------------------------------------

/// The effective cellform configuration.
///
/// All fields use `serde` defaults so that a partially-specified YAML file
/// deserializes with sensible values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellformConfig {
    /// Output JSON instead of human-readable text.
    #[serde(default)]
    pub json: bool,

    /// When to use colored output.
    #[serde(default)]
    pub color: ColorMode,

    /// Print the canonical form of accepted formulas in `check`.
    #[serde(default = "default_true")]
    pub show_canonical: bool,

    /// Stop `check` at the first rejected formula.
    #[serde(default)]
    pub fail_fast: bool,
}

impl Default for CellformConfig {
    fn default() -> Self {
        Self {
            json: false,
            color: ColorMode::default(),
            show_canonical: true,
            fail_fast: false,
        }
    }
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the layered figment for the given sources.
///
/// Missing user and project files are skipped silently.
pub fn figment(sources: &ConfigSources) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(CellformConfig::default()));
    for path in sources.paths() {
        figment = figment.merge(Yaml::file(path));
    }
    figment.merge(Env::prefixed(ENV_PREFIX))
}

/// Load the effective configuration from `sources`.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if an explicit file is missing, and
/// [`ConfigError::Extract`] if a file contains invalid YAML or a value has
/// the wrong type.
pub fn load_config(sources: &ConfigSources) -> Result<CellformConfig> {
    if let Some(explicit) = &sources.explicit {
        if !explicit.is_file() {
            return Err(ConfigError::NotFound(explicit.display().to_string()));
        }
    }

    for path in sources.paths() {
        debug!(path = %path.display(), present = path.is_file(), "config source");
    }

    let config: CellformConfig = figment(sources).extract().map_err(Box::new)?;
    debug!(?config, "configuration loaded");
    Ok(config)
}

/// Render configuration as YAML.
pub fn to_yaml(config: &CellformConfig) -> Result<String> {
    Ok(serde_yaml::to_string(config)?)
}

/// Save configuration as YAML to `path`, creating parent directories.
pub fn save_config(path: &Path, config: &CellformConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let yaml = to_yaml(config)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
