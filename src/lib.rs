//! pyskel lays out a new poetry project: package directory, optional
//! settings and logger modules, docker placeholders and a fresh entry point,
//! and fills in the project's `pyproject.toml`.

/// Command-line interface module for the pyskel application
pub mod cli;

/// File names and fixed values of the generated layout
pub mod constants;

/// Error types and handling for the pyskel application
pub mod error;

/// Directory and file generation steps
pub mod generator;

mod ioutils;

/// Logging setup for the binary
pub mod logger;

/// `pyproject.toml` rewriting
pub mod manifest;

pub mod options;

/// User input and interaction handling
pub mod prompt;

/// Orchestration of all generation steps
pub mod scaffold;

/// Python sources written verbatim into the project
pub mod templates;
