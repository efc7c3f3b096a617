//! Global error handling for dirsnap
//!
//! Only a fundamentally invalid starting point is fatal; everything else
//! (unreadable files, permission errors, a missing ignore-file, a missing
//! clipboard) degrades locally and never reaches this type.

use std::io;
use thiserror::Error;

/// Global error type for dirsnap operations
#[derive(Error, Debug)]
pub enum DirsnapError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Start path missing or not a directory
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Specialized Result type for dirsnap operations
pub type Result<T> = std::result::Result<T, DirsnapError>;
