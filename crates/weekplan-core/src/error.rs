//! Core error types for weekplan-core.
//!
//! One top-level [`CoreError`] with per-domain enums underneath, so callers
//! can match broadly or narrowly as needed.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for weekplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Wall-clock time parsing errors
    #[error("Time error: {0}")]
    Time(#[from] TimeError),

    /// Persisted-document errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Preference validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Wall-clock time parsing errors.
///
/// Malformed time strings are fatal for the field that carries them and
/// must be rejected before the placement pipeline runs; all downstream
/// arithmetic assumes minute values already in range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// Not parseable as an hour or an hour:minute pair
    #[error("Invalid time format: {0}")]
    InvalidFormat(String),

    /// Parsed, but the hour or minute is out of range
    #[error("Time out of range: {0}")]
    OutOfRange(String),
}

/// Errors around the persisted `{preferences, schedule}` document.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load the document
    #[error("Failed to load document from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save the document
    #[error("Failed to save document to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },
}

/// Preference validation errors.
///
/// Produced by [`crate::prefs::UserPreferences::validate`]; the engine
/// itself never raises these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Weekly commitments exceed the hours in a week
    #[error("Weekly commitments add up to {committed_hours:.1}h, more than the 168h in a week")]
    WeekOvercommitted { committed_hours: f64 },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
