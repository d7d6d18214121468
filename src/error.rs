//! Error types for the payroll ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while loading, saving or querying a roster.

use std::io;

use thiserror::Error;

/// The main error type for the payroll ledger.
///
/// Roster file operations and configuration loading all return this error
/// type. Lookups by employee number return `Option` instead; the
/// [`PayrollError::EmployeeNotFound`] variant exists for callers that want to
/// turn a miss into a hard failure.
///
/// # Example
///
/// ```
/// use payroll_ledger::error::PayrollError;
///
/// let error = PayrollError::EmployeeNotFound {
///     id: "E42".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: E42");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A roster file could not be opened, read or written.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// The file being accessed.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A roster line is not valid UTF-8.
    #[error("Line {line} of '{path}' is not valid UTF-8")]
    Encoding {
        /// The file being read.
        path: String,
        /// 1-based line number of the undecodable line.
        line: usize,
    },

    /// A record had fewer fields than its category requires.
    #[error("Line {line}: missing field '{field}'")]
    MissingField {
        /// 1-based line number of the record.
        line: usize,
        /// Name of the first missing field.
        field: &'static str,
    },

    /// A numeric field could not be parsed.
    #[error("Line {line}: invalid number '{value}' for field '{field}'")]
    InvalidNumber {
        /// 1-based line number of the record.
        line: usize,
        /// Name of the offending field.
        field: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },

    /// A category other than `full-time`/`part-time` under strict parsing.
    #[error("Line {line}: unknown employment category '{category}'")]
    UnknownCategory {
        /// 1-based line number of the record.
        line: usize,
        /// The unrecognised category text.
        category: String,
    },

    /// No employee with the given number exists in the roster.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee number that was looked up.
        id: String,
    },

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
}

impl PayrollError {
    pub(crate) fn io(path: &std::path::Path, source: io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
