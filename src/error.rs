// Error types module

use thiserror::Error;

/// Configuration loading and validation failures
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Environment variable '{0}' is referenced but not set")]
    MissingEnvVar(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Centralized error type for scanning
#[derive(Error, Debug)]
pub enum ScanError {
    /// Configuration errors (invalid YAML, missing env vars, bad ranges)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input looks like binary data rather than source text
    #[error("Binary content in '{0}' cannot be scanned")]
    BinaryContent(String),

    /// Tracing subscriber could not be installed
    #[error("Logging initialization failed: {0}")]
    Logging(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
