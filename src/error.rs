//! Crate-wide error type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Validation errors, reported to the user and recovered from
    #[error("Select at least two character classes ({selected} selected).")]
    InsufficientSelection { selected: usize },

    #[error("Enter a valid number for the password length (got {0:?}).")]
    InvalidLength(String),

    // CLI usage
    #[error("{0}")]
    Usage(String),

    // System faults
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InsufficientSelection { .. } | Error::InvalidLength(_) => 1,
            Error::Usage(_) => 2,
            Error::Clipboard(_) | Error::Io(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
