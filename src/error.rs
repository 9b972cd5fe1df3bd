//! Error types for the Shift Pay Engine.
//!
//! The pay calculations themselves never fail; unresolved references and empty
//! inputs degrade to zero. This module covers the fallible edges instead:
//! loading the pay configuration and validating records before they reach the
//! engine.

use thiserror::Error;

/// The main error type for the Shift Pay Engine.
///
/// # Example
///
/// ```
/// use shift_pay_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/pay.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/pay.yaml");
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

    /// Configuration parsed but holds a value the engine cannot use.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The configuration key that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A shift was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A store record was invalid.
    #[error("Invalid store '{store_id}': {message}")]
    InvalidStore {
        /// The ID of the invalid store.
        store_id: String,
        /// A description of what made the store invalid.
        message: String,
    },

    /// A user settings field was invalid.
    #[error("Invalid settings field '{field}': {message}")]
    InvalidSettings {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
