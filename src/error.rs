//! Error types for the attendance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions that can surface from configuration, decoding,
//! and the persistence ports.

use thiserror::Error;

/// The main error type for the attendance engine.
///
/// Extraction itself never returns this type: malformed uploads are absorbed
/// into an empty result. It is used by configuration loading, the decoders,
/// input validation and the store ports.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/extraction.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/extraction.yaml");
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

    /// An uploaded file could not be decoded into a grid.
    #[error("Failed to decode '{file_name}': {message}")]
    GridDecode {
        /// The name of the uploaded file.
        file_name: String,
        /// A description of the decode failure.
        message: String,
    },

    /// A required input field was absent or blank.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// An input field was present but unusable.
    #[error("Invalid field '{field}': {message}")]
    InvalidField {
        /// The name of the invalid field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A persistence collaborator reported a failure.
    #[error("Store error: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
