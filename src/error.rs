//! Error types for the plagiarism checker.

use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors that can occur while collecting input or running a check.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The submission text is blank.
    #[error("Please provide assignment text.")]
    MissingSubmission,

    /// No reference documents were added.
    #[error("Please add at least one reference.")]
    MissingReferences,

    /// An uploaded file is not valid UTF-8.
    #[error("Could not decode `{name}` as UTF-8: {source}")]
    MalformedUpload {
        /// Display name of the upload.
        name: String,
        /// The underlying decoding failure.
        #[source]
        source: FromUtf8Error,
    },

    /// A file could not be read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration validation error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CheckError {
    /// `true` for the blocking "missing input" warnings that stop a run
    /// before the pipeline starts.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, CheckError::MissingSubmission | CheckError::MissingReferences)
    }
}

/// A convenience result type for checker operations.
pub type Result<T> = std::result::Result<T, CheckError>;
