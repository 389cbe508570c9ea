//! Configuration management and validation.
//!
//! Provides the parser settings that describe one menu export layout
//! (preamble size, per-field decimal conventions, empty-input policy)
//! together with the input limits and logging settings used by the CLI.
//! Configuration is layered: defaults, then an optional TOML file, then
//! environment variables, then command-line overrides.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL, DEFAULT_MAX_INPUT_BYTES,
    DEFAULT_PREAMBLE_ROWS, DEFAULT_PRICE_SCALE, DEFAULT_PRICE_SEPARATOR, DEFAULT_WEIGHT_SCALE,
    DEFAULT_WEIGHT_SEPARATOR, ENV_MAX_INPUT_BYTES, ENV_PREAMBLE_ROWS, LOG_LEVELS,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Decimal convention for one numeric column of the export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericFieldConfig {
    /// Character standing in for the decimal point; every occurrence becomes '.'
    pub decimal_separator: char,

    /// Multiplier applied after parsing (e.g. 1000 for kilograms to grams)
    pub scale: f64,
}

impl NumericFieldConfig {
    pub fn new(decimal_separator: char, scale: f64) -> Self {
        Self {
            decimal_separator,
            scale,
        }
    }

    /// Weight column: kilograms with comma decimals, reported in grams
    pub fn weight() -> Self {
        Self::new(DEFAULT_WEIGHT_SEPARATOR, DEFAULT_WEIGHT_SCALE)
    }

    /// Price column: hyphen decimals, no scaling
    pub fn price() -> Self {
        Self::new(DEFAULT_PRICE_SEPARATOR, DEFAULT_PRICE_SCALE)
    }

    fn validate(&self, field: &str) -> Result<()> {
        if self.decimal_separator.is_ascii_digit() || self.decimal_separator.is_whitespace() {
            return Err(Error::configuration(format!(
                "{} decimal separator cannot be a digit or whitespace (got {:?})",
                field, self.decimal_separator
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::configuration(format!(
                "{} scale must be a positive finite number (got {})",
                field, self.scale
            )));
        }
        Ok(())
    }
}

/// Settings describing the layout of one menu export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Leading rows skipped unconditionally before data rows begin
    pub preamble_rows: usize,

    pub weight: NumericFieldConfig,

    pub price: NumericFieldConfig,

    /// Fail with `Error::EmptyInput` when nothing follows the preamble
    /// instead of returning an empty menu
    pub reject_empty_input: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            preamble_rows: DEFAULT_PREAMBLE_ROWS,
            weight: NumericFieldConfig::weight(),
            price: NumericFieldConfig::price(),
            reject_empty_input: false,
        }
    }
}

impl ParserConfig {
    /// Create configuration with a custom preamble size
    pub fn with_preamble_rows(mut self, preamble_rows: usize) -> Self {
        self.preamble_rows = preamble_rows;
        self
    }

    pub fn with_weight(mut self, weight: NumericFieldConfig) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_price(mut self, price: NumericFieldConfig) -> Self {
        self.price = price;
        self
    }

    /// Treat an input with no data rows as an error
    pub fn with_reject_empty_input(mut self) -> Self {
        self.reject_empty_input = true;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.weight.validate("weight")?;
        self.price.validate("price")?;
        Ok(())
    }
}

/// Limits applied by the caller before text reaches the parser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Files larger than this are rejected without being read
    pub max_input_bytes: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

/// Logging settings; `-v`/`-q` on the command line take precedence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of error, warn, info, debug, trace
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.level.as_str()) {
            return Err(Error::configuration(format!(
                "logging level must be one of {} (got '{}')",
                LOG_LEVELS.join(", "),
                self.level
            )));
        }
        Ok(())
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserConfig,
    pub input: InputConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Default config file location: `<config_dir>/menu-csv/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a TOML file; missing keys take defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Configuration { message } => Error::configuration(format!(
                "{} (in {})",
                message,
                path.display()
            )),
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::configuration(format!("Invalid config file: {}", e)))
    }

    /// Load configuration using layered approach (defaults -> file -> env)
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading config file: {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Apply environment overrides using the given variable lookup
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_PREAMBLE_ROWS) {
            self.parser.preamble_rows = value.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a non-negative integer (got '{}')",
                    ENV_PREAMBLE_ROWS, value
                ))
            })?;
            debug!(
                "Preamble rows overridden from environment: {}",
                self.parser.preamble_rows
            );
        }

        if let Some(value) = lookup(ENV_MAX_INPUT_BYTES) {
            self.input.max_input_bytes = value.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a byte count (got '{}')",
                    ENV_MAX_INPUT_BYTES, value
                ))
            })?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.parser.validate()?;
        self.logging.validate()?;

        if self.input.max_input_bytes == 0 {
            return Err(Error::configuration("max_input_bytes must be greater than 0"));
        }

        Ok(())
    }
}
