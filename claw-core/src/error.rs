//! Error types for claw-review

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Result type alias for claw-review operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for claw-review operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The working directory is not inside a git repository
    #[error("Not a git repository: {}", .0.display())]
    NotARepository(PathBuf),

    /// Any other git failure
    #[error("Git error: {0}")]
    Git(String),

    /// An external command could not be found on PATH
    #[error("Command not found: '{0}'")]
    CommandNotFound(String),

    /// An external command exited unsuccessfully
    #[error("'{command}' failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// An external command did not finish in time
    #[error("'{command}' timed out after {after:?}")]
    Timeout { command: String, after: Duration },

    /// The file to review does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The reviewer executable could not be found
    #[error("Reviewer executable not found at '{0}'. Is it installed and on PATH?")]
    ReviewerNotFound(String),

    /// The reviewer ran but reported failure
    #[error("{message}")]
    ReviewerFailed { status: String, message: String },

    /// The reviewer produced more output than allowed
    #[error("Reviewer output exceeded {limit} bytes")]
    OutputTooLarge { limit: usize },
}

impl From<git2::Error> for Error {
    fn from(e: git2::Error) -> Self {
        Error::Git(e.message().to_string())
    }
}
