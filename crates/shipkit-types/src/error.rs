//! Error types for shipkit

use thiserror::Error;

/// Rejections raised before any packing work starts
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PackingError {
    /// Malformed or missing shipment fields
    #[error("Invalid shipment: {0}")]
    Validation(String),

    /// Capacity or threshold values outside their valid ranges
    #[error("Invalid packing limits: {0}")]
    Configuration(String),
}

/// Rate lookup errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RateError {
    #[error("No rate bracket covers a package of weight {weight}")]
    NoRate { weight: f64 },

    #[error("Invalid rate table: {0}")]
    InvalidTable(String),

    #[error("Cannot combine amounts in {left} and {right}")]
    CurrencyMismatch { left: String, right: String },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Packing(#[from] PackingError),

    #[error("Rate lookup failed: {0}")]
    Rate(#[from] RateError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported shipment file: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
