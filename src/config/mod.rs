// Configuration module
// Scanner settings loaded from YAML with ${VAR} environment substitution

use crate::error::ConfigError;
use chrono::Datelike;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Earliest year accepted in a copyright statement by default
pub const DEFAULT_MIN_YEAR: i32 = 1960;

/// Number of leading lines inspected for a comment header by default
pub const DEFAULT_HEADER_MAX_LINES: usize = 200;

/// Top-level scanner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default)]
    pub copyrights: CopyrightConfig,

    #[serde(default)]
    pub emails: ClueConfig,

    #[serde(default)]
    pub urls: ClueConfig,

    #[serde(default)]
    pub header: HeaderConfig,

    #[serde(default)]
    pub license_hints: LicenseHintConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Copyright and author detection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyrightConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Years before this are not treated as copyright years
    #[serde(default = "default_min_year")]
    pub min_year: i32,

    /// Years after this are not treated as copyright years (defaults to next year)
    #[serde(default = "default_max_year")]
    pub max_year: i32,
}

impl Default for CopyrightConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_year: default_min_year(),
            max_year: default_max_year(),
        }
    }
}

/// Settings shared by email and URL finders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClueConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Report each distinct value once
    #[serde(default = "default_true")]
    pub unique: bool,

    /// Maximum clues reported per source (0 = unlimited)
    #[serde(default)]
    pub max: usize,
}

impl Default for ClueConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            unique: true,
            max: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_header_max_lines")]
    pub max_lines: usize,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_lines: DEFAULT_HEADER_MAX_LINES,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseHintConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Collect SPDX-License-Identifier tags
    #[serde(default = "default_true")]
    pub spdx: bool,
}

impl Default for LicenseHintConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            spdx: true,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_min_year() -> i32 {
    DEFAULT_MIN_YEAR
}

fn default_max_year() -> i32 {
    chrono::Utc::now().year() + 1
}

fn default_header_max_lines() -> usize {
    DEFAULT_HEADER_MAX_LINES
}

fn default_log_level() -> String {
    "info".to_string()
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

impl ScanConfig {
    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, ConfigError> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        // First, check that all referenced environment variables exist
        for caps in re.captures_iter(yaml) {
            let var_name = &caps[1];
            if std::env::var(var_name).is_err() {
                return Err(ConfigError::MissingEnvVar(var_name.to_string()));
            }
        }

        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        // An empty document means "all defaults"
        if substituted.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ScanConfig = serde_yaml::from_str(&substituted)?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_with_env(&yaml)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let copyrights = &self.copyrights;
        if copyrights.min_year > copyrights.max_year {
            return Err(ConfigError::Invalid(format!(
                "copyrights.min_year ({}) is after copyrights.max_year ({})",
                copyrights.min_year, copyrights.max_year
            )));
        }
        if !(1000..=9999).contains(&copyrights.min_year)
            || !(1000..=9999).contains(&copyrights.max_year)
        {
            return Err(ConfigError::Invalid(
                "copyright years must be four digit years".to_string(),
            ));
        }

        if self.header.max_lines == 0 {
            return Err(ConfigError::Invalid(
                "header.max_lines must be greater than 0".to_string(),
            ));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "logging.level '{}' is not one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
