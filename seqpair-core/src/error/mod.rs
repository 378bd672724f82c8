//! Core error types for seqpair

use thiserror::Error;

/// Main error type for seqpair operations
#[derive(Error, Debug)]
pub enum SeqpairError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A scoring-matrix source could not be parsed. `line` is 1-based.
    #[error("Malformed scoring matrix at line {line}{}: {message}", fmt_row(.row))]
    MalformedMatrix {
        line: usize,
        row: Option<char>,
        message: String,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Extension of seed (query {query_pos}, subject {subject_pos}) failed: {source}")]
    ExtensionFailed {
        query_pos: usize,
        subject_pos: usize,
        #[source]
        source: Box<SeqpairError>,
    },

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Other error: {0}")]
    Other(String),
}

fn fmt_row(row: &Option<char>) -> String {
    match row {
        Some(label) => format!(" (row '{}')", label),
        None => String::new(),
    }
}

/// Result type alias for seqpair operations
pub type SeqpairResult<T> = Result<T, SeqpairError>;

impl SeqpairError {
    pub fn malformed_matrix(line: usize, row: Option<char>, message: impl Into<String>) -> Self {
        SeqpairError::MalformedMatrix {
            line,
            row,
            message: message.into(),
        }
    }

    /// Wrap the error raised by a single extension task.
    pub fn extension_failed(query_pos: usize, subject_pos: usize, source: SeqpairError) -> Self {
        SeqpairError::ExtensionFailed {
            query_pos,
            subject_pos,
            source: Box::new(source),
        }
    }
}

// Conversion implementations for common error types
impl From<serde_json::Error> for SeqpairError {
    fn from(err: serde_json::Error) -> Self {
        SeqpairError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for SeqpairError {
    fn from(err: anyhow::Error) -> Self {
        SeqpairError::Other(err.to_string())
    }
}
