//! Reference data error types.

use thiserror::Error;

/// Errors raised while loading or validating reference data.
#[derive(Debug, Error)]
pub enum RefdataError {
    /// The TOML document failed to parse or had the wrong shape.
    #[error("failed to parse reference data: {0}")]
    Parse(#[from] toml::de::Error),

    /// A calculation parameter is outside its valid range.
    #[error("invalid calculation parameter: {reason}")]
    InvalidParams {
        /// What was wrong with the parameter.
        reason: String,
    },
}
