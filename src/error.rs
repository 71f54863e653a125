//! Error types for the Time & Earnings Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Errors only surface at the configuration boundary; the calculation entry
//! points themselves are infallible and degrade to zeroed outputs instead.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// The main error type for the Time & Earnings Calculation Engine.
///
/// # Example
///
/// ```
/// use earnings_engine::error::EngineError;
///
/// let error = EngineError::SettingsNotFound {
///     path: "/missing/worker.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Settings file not found: /missing/worker.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Settings file was not found at the specified path.
    #[error("Settings file not found: {path}")]
    SettingsNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse settings file '{path}': {message}")]
    SettingsParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A date range had its end before its start.
    #[error("Invalid date range: {start} to {end}")]
    InvalidDateRange {
        /// The start of the range.
        start: DateTime<Utc>,
        /// The end of the range.
        end: DateTime<Utc>,
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
