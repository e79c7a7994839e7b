//! Error types for the labor cost engine.
//!
//! Business-rule violations (a wage under the minimum, a schedule over the
//! weekly cap, a budget that cannot be met) are never errors: they are
//! reported as fields and warnings on the returned records. The errors in
//! this module cover configuration problems and strict input parsing only.

use thiserror::Error;

/// The main error type for the labor cost engine.
///
/// # Example
///
/// ```
/// use labor_cost_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/regime.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/regime.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the rules cannot use.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A clock string was not in `HH:MM` form.
    #[error("Invalid clock time '{input}': expected HH:MM")]
    InvalidTime {
        /// The rejected input.
        input: String,
    },

    /// A probation discount outside the permitted set was requested.
    #[error("Invalid probation discount {percent}%: allowed values are 10, 15, 20, 25, 30")]
    InvalidProbationDiscount {
        /// The rejected percentage.
        percent: u8,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
