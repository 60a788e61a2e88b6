//! Error types for the Finiquito Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing a termination
//! settlement.

use thiserror::Error;

/// The main error type for the Finiquito Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use finiquito_engine::error::EngineError;
///
/// let error = EngineError::InvalidDate {
///     field: "start_date".to_string(),
///     value: "2020-13-45".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid date for 'start_date': 2020-13-45");
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

    /// A configuration value was parsed but is not usable.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The configuration field that was rejected.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A date string could not be parsed as a calendar date.
    #[error("Invalid date for '{field}': {value}")]
    InvalidDate {
        /// The input field holding the date.
        field: String,
        /// The raw value that failed to parse.
        value: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// The CSV export could not be rendered.
    #[error("Export error: {message}")]
    ExportError {
        /// A description of the export failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
