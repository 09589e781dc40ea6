// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Errors raised while loading patterns, reading inputs or scanning.
///
/// Matching itself has no error cases: an empty pattern set, empty text or
/// no occurrence are ordinary `Ok` results. The only scan failure is
/// [`Error::Stalled`], which signals broken trie bookkeeping.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// Reading a pattern file, config file or input failed
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input exceeds the configured size limit
    #[error("input too large: {input} ({size} bytes, max: {max_size} bytes)")]
    InputTooLarge {
        input: String,
        size: u64,
        max_size: u64,
    },

    /// A scan path could not be walked
    #[error("walk error: {}: {message}", .path.display())]
    Walk { path: PathBuf, message: String },

    /// The reference automaton rejected the pattern set
    #[error("reference matcher error: {0}")]
    Reference(#[from] aho_corasick::BuildError),

    /// The scan cursor failed to advance
    #[error("internal error: scan cursor stalled at offset {offset}")]
    Stalled { offset: usize },
}

/// Result type using branchscan Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// At least one input contained a pattern
    Success = 0,
    /// No input contained a pattern
    NoMatch = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// I/O failure or broken scan
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::Io { .. }
            | Error::InputTooLarge { .. }
            | Error::Walk { .. }
            | Error::Reference(_)
            | Error::Stalled { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
