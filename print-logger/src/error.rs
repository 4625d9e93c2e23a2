//! # Error Types
//!
//! Centralized error definitions for the print-logger crate.
//! All errors implement `std::error::Error` and `std::fmt::Display`.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for print-logger operations.
#[derive(Error, Debug)]
pub enum PrintLoggerError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Install(#[from] InstallError),

    #[error(transparent)]
    ParseSeverity(#[from] ParseSeverityError),
}

/// Failures raised while substituting arguments into a printf-style template.
///
/// These are never caught by the logger: a broken template surfaces to the
/// caller instead of producing a silently corrupted line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Unknown format conversion '{conversion}' at offset {offset}")]
    UnknownConversion { conversion: char, offset: usize },

    #[error("Incomplete format specifier at end of template (offset {offset})")]
    DanglingPercent { offset: usize },

    #[error("Missing argument for format specifier '{specifier}'")]
    MissingArgument { specifier: String },

    #[error("Illegal argument index in format specifier '{specifier}'")]
    IllegalIndex { specifier: String },

    /// Width is not a number in `1..=i32::MAX`, or was given to `%n`.
    #[error("Illegal width in format specifier '{specifier}'")]
    IllegalWidth { specifier: String },

    /// Precision is out of range or given to a conversion that takes none.
    #[error("Illegal precision in format specifier '{specifier}'")]
    IllegalPrecision { specifier: String },

    #[error("Illegal flag combination in format specifier '{specifier}'")]
    IllegalFlags { specifier: String },

    #[error("Format specifier '{specifier}' requires a width")]
    MissingWidth { specifier: String },

    #[error("Flag '{flag}' does not apply to conversion '{conversion}'")]
    FlagMismatch { flag: char, conversion: char },

    #[error("Conversion '{conversion}' cannot format argument {index} of type {found}")]
    TypeMismatch {
        conversion: char,
        index: usize,
        found: &'static str,
    },
}

/// Strict severity parsing failure.
///
/// The configuration surface never returns this; it falls back to `INFO`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized severity name: '{name}'")]
pub struct ParseSeverityError {
    pub name: String,
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read env file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenv::Error,
    },
}

/// Facade installation errors
#[derive(Error, Debug)]
pub enum InstallError {
    #[error("A logger is already registered with the log facade")]
    LogFacade(#[from] log::SetLoggerError),

    #[error("A global tracing subscriber is already set")]
    Tracing(#[from] tracing::subscriber::SetGlobalDefaultError),
}
