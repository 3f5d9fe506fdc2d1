//! Error types for the Payroll Computation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll computation.
//!
//! Missing optional data (no salary, no exchange rate, no employment start
//! date) is handled with defensive defaults inside the calculators and is
//! deliberately NOT represented here. Errors are reserved for structurally
//! invalid input and configuration problems.

use thiserror::Error;

/// The main error type for the Payroll Computation Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
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

    /// A shift was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A staff request was invalid or contained inconsistent data.
    #[error("Invalid request '{request_id}': {message}")]
    InvalidRequest {
        /// The ID of the invalid request.
        request_id: String,
        /// A description of what made the request invalid.
        message: String,
    },

    /// A payroll state transition was not permitted.
    #[error("Invalid payroll state transition: {from} -> {to}")]
    InvalidTransition {
        /// The state the transition started from.
        from: String,
        /// The state the transition attempted to reach.
        to: String,
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
