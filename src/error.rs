//! Error types for the payroll and alert engine.
//!
//! The calculators compute through any value, negative or otherwise. Errors
//! only arise when raw text cannot be interpreted at all, when a figure leaves
//! the range of a 96-bit decimal, when a pay period is inverted, or when
//! configuration cannot be loaded.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the engine.
///
/// # Example
///
/// ```
/// use site_payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "daily_rate".to_string(),
///     value: "eight hundred".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input for field 'daily_rate': could not interpret 'eight hundred'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A non-blank field could not be interpreted as the expected kind of value.
    #[error("Invalid input for field '{field}': could not interpret '{value}'")]
    InvalidInput {
        /// The name of the field that failed to parse.
        field: String,
        /// The raw text that was supplied.
        value: String,
    },

    /// A pay period whose start date falls after its end date.
    #[error("Invalid pay period: start date {start} is after end date {end}")]
    InvalidPayPeriod {
        /// The supplied start date.
        start: NaiveDate,
        /// The supplied end date.
        end: NaiveDate,
    },

    /// A payroll figure does not fit in a decimal.
    #[error("Arithmetic overflow while computing {step}")]
    ArithmeticOverflow {
        /// The computation step that overflowed, e.g. `basic_pay`.
        step: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or holds unusable values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path (or source name) of the configuration.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Builds an [`EngineError::InvalidInput`] for the given field and raw text.
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Builds an [`EngineError::ArithmeticOverflow`] for the given step.
    pub fn overflow(step: impl Into<String>) -> Self {
        EngineError::ArithmeticOverflow { step: step.into() }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
