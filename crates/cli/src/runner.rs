// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel scan runner with per-input error isolation.
//!
//! Inputs are read and scanned in parallel using rayon. A read failure on
//! one input is recorded in its report and does not stop the others; a
//! stalled scan aborts the whole run.

use std::path::PathBuf;

use memchr::{memchr_iter, memrchr};
use rayon::prelude::*;
use serde::Serialize;

use crate::error::{Error, ExitCode, Result};
use crate::patterns::PatternSet;
use crate::reader::{Input, InputReader, MAX_FILE_SIZE};
use crate::reference::Oracle;
use crate::trie::{Match, Trie};

/// Configuration for the scan runner.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Cross-check every scan against the reference matcher.
    pub verify: bool,
    /// Inputs larger than this are reported as errors.
    pub max_file_size: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            verify: false,
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

/// Location and bytes of the leftmost match in one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hit {
    /// Byte offset of the match.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based byte column within the line.
    pub column: usize,
    /// Matched bytes, lossily decoded.
    pub text: String,
}

impl Hit {
    fn from_match(text: &[u8], found: Match<'_>) -> Self {
        let (line, column) = locate(text, found.start());
        Self {
            offset: found.start(),
            line,
            column,
            text: String::from_utf8_lossy(found.as_bytes()).into_owned(),
        }
    }
}

/// Outcome of scanning one input.
#[derive(Debug, Clone, Serialize)]
pub struct InputReport {
    pub source: String,
    pub hit: Option<Hit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InputReport {
    pub fn matched(&self) -> bool {
        self.hit.is_some()
    }

    fn failed(source: String, err: &Error) -> Self {
        Self {
            source,
            hit: None,
            error: Some(err.to_string()),
        }
    }
}

/// Scans inputs against one pattern set.
pub struct ScanRunner {
    trie: Trie,
    oracle: Option<Oracle>,
    reader: InputReader,
}

impl ScanRunner {
    pub fn new(patterns: &PatternSet, config: RunnerConfig) -> Result<Self> {
        let oracle = if config.verify {
            Some(patterns.oracle()?)
        } else {
            None
        };
        Ok(Self {
            trie: patterns.build(),
            oracle,
            reader: InputReader::with_max_size(config.max_file_size),
        })
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Scan every file in parallel, preserving input order.
    pub fn run(&self, files: &[PathBuf]) -> Result<Vec<InputReport>> {
        files
            .par_iter()
            .map(|path| match self.reader.read_file(path) {
                Ok(input) => self.scan_input(&input),
                Err(err) => {
                    tracing::warn!(path = %path.display(), "skipping input: {}", err);
                    Ok(InputReport::failed(path.display().to_string(), &err))
                }
            })
            .collect()
    }

    /// Scan standard input.
    pub fn run_stdin(&self) -> Result<InputReport> {
        let input = self.reader.read_stdin()?;
        self.scan_input(&input)
    }

    /// Scan one loaded input.
    pub fn scan_input(&self, input: &Input) -> Result<InputReport> {
        let source = input.source.to_string();
        let found = self.trie.scan(&input.bytes)?;

        if let Some(oracle) = &self.oracle {
            oracle.verify(&source, &input.bytes, found.map(|m| m.range()));
        }

        Ok(InputReport {
            hit: found.map(|m| Hit::from_match(&input.bytes, m)),
            source,
            error: None,
        })
    }
}

/// Process exit code for a finished run: any input error is an internal
/// error, otherwise success if any input matched.
pub fn exit_code(reports: &[InputReport]) -> ExitCode {
    if reports.iter().any(|r| r.error.is_some()) {
        ExitCode::InternalError
    } else if reports.iter().any(InputReport::matched) {
        ExitCode::Success
    } else {
        ExitCode::NoMatch
    }
}

/// 1-based line and column of byte `offset`.
pub fn locate(text: &[u8], offset: usize) -> (usize, usize) {
    let before = &text[..offset.min(text.len())];
    let line = memchr_iter(b'\n', before).count() + 1;
    let line_start = memrchr(b'\n', before).map_or(0, |i| i + 1);
    (line, before.len() - line_start + 1)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
