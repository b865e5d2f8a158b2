//! Error types for the Payslip Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payslip calculation.

use thiserror::Error;

/// The main error type for the Payslip Calculation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use holerite_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
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

    /// A statutory table was structurally invalid.
    #[error("Invalid statutory table '{table}': {message}")]
    InvalidTable {
        /// The name of the invalid table.
        table: String,
        /// A description of what made the table invalid.
        message: String,
    },

    /// A monetary string could not be interpreted as a Brazilian-locale value.
    ///
    /// The form layer re-invokes the parser on every keystroke, so this is
    /// always returned through the `Result` channel and never panics.
    #[error("Invalid monetary value: '{input}'")]
    InvalidMonetaryValue {
        /// The input text that failed to parse.
        input: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
