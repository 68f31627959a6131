//! Error types for parameter loading and strict catalog lookup.
//!
//! Estimation itself is total and never produces one of these.

use thiserror::Error;

/// Errors raised at the edges of the estimator.
#[derive(Error, Debug)]
pub enum EstimateError {
    /// Material name is not in the material catalog.
    #[error("unknown material: {0}")]
    UnknownMaterial(String),

    /// Printer name is not in the printer catalog.
    #[error("unknown printer: {0}")]
    UnknownPrinter(String),

    /// Parameter file is not valid TOML for [`crate::InputParameters`].
    #[error("invalid TOML parameters: {0}")]
    Toml(#[from] toml::de::Error),

    /// Parameter file is not valid JSON for [`crate::InputParameters`].
    #[error("invalid JSON parameters: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for estimator operations.
pub type Result<T> = std::result::Result<T, EstimateError>;
