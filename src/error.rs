//! Error handling for menu CSV parsing.
//!
//! One error enum covers the parser's failure taxonomy as well as the
//! configuration and file-handling failures raised by the CLI layer.

use thiserror::Error;

/// Result type alias for menu CSV operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which numeric column of an item row failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Weight,
    Price,
}

impl std::fmt::Display for NumericField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericField::Weight => write!(f, "weight"),
            NumericField::Price => write!(f, "price"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    /// An item row appeared before any category header
    #[error("Malformed row {row}: item '{name}' appears before any category header")]
    MalformedRow { row: usize, name: String },

    /// Weight or price text is not a finite, non-negative number
    #[error("Invalid {field} value at row {row}: '{value}'")]
    InvalidNumericField {
        row: usize,
        field: NumericField,
        value: String,
    },

    /// No data rows remain after the preamble
    #[error("Empty input: no data rows after skipping {preamble_rows} preamble rows")]
    EmptyInput { preamble_rows: usize },

    /// The CSV tokenizer rejected the input
    #[error("CSV parsing error: {message}")]
    CsvParsing {
        message: String,
        #[source]
        source: csv::Error,
    },

    /// Input exceeds the configured size cap
    #[error("Input too large: {size} bytes exceeds limit of {limit} bytes")]
    InputTooLarge { size: u64, limit: u64 },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A report could not be rendered as JSON
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// One or more files of a batch failed to parse
    #[error("{failed} of {total} file(s) failed to parse")]
    FilesFailed { failed: usize, total: usize },
}

impl Error {
    /// Create a malformed row error
    pub fn malformed_row(row: usize, name: impl Into<String>) -> Self {
        Self::MalformedRow {
            row,
            name: name.into(),
        }
    }

    /// Create an invalid numeric field error
    pub fn invalid_numeric_field(row: usize, field: NumericField, value: impl Into<String>) -> Self {
        Self::InvalidNumericField {
            row,
            field,
            value: value.into(),
        }
    }

    /// Create an empty input error
    pub fn empty_input(preamble_rows: usize) -> Self {
        Self::EmptyInput { preamble_rows }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(message: impl Into<String>, source: csv::Error) -> Self {
        Self::CsvParsing {
            message: message.into(),
            source,
        }
    }

    /// Create an input too large error
    pub fn input_too_large(size: u64, limit: u64) -> Self {
        Self::InputTooLarge { size, limit }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a batch failure summary
    pub fn files_failed(failed: usize, total: usize) -> Self {
        Self::FilesFailed { failed, total }
    }

    /// True for failures caused by the content of the uploaded file
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedRow { .. }
                | Self::InvalidNumericField { .. }
                | Self::EmptyInput { .. }
                | Self::CsvParsing { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            message: "CSV tokenization failed".to_string(),
            source: error,
        }
    }
}
