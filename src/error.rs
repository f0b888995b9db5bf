//! Error handling for the pyskel application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for pyskel operations.
///
/// This enum represents all possible errors that can occur while scaffolding a project.
/// It implements the standard Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The packaging manifest to patch does not exist
    #[error("Manifest '{path}' not found. Run 'poetry init' first.")]
    ManifestNotFound { path: String },

    /// The pattern used to rewrite manifest values failed to compile
    #[error("Regex error: {0}.")]
    RegexError(#[from] regex::Error),

    /// Represents errors that occur while reading interactive input
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),
}

/// Convenience type alias for Results with pyskel's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
