//! Configuration errors.
//!
//! Geometry and cursor code never fail; only turning external configuration
//! into typed values can.

use thiserror::Error;

/// Errors raised while loading cursor or axis configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the expected shape.
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A radius string could not be parsed.
    #[error("invalid radius value `{0}`: expected pixels or a percentage such as \"50%\"")]
    InvalidRadius(String),
    /// An angle setting is not a finite number.
    #[error("angle `{name}` must be finite, got {value}")]
    InvalidAngle {
        /// Setting name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A numeric setting is outside its accepted range.
    #[error("`{name}` must be {expected}, got {value}")]
    OutOfRange {
        /// Setting name.
        name: &'static str,
        /// Human readable constraint.
        expected: &'static str,
        /// Offending value.
        value: f64,
    },
}
