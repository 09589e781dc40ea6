// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern collection from the command line, pattern files and config.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::reference::Oracle;
use crate::trie::Trie;

/// Ordered list of byte patterns.
#[derive(Debug, Default, Clone)]
pub struct PatternSet {
    patterns: Vec<Vec<u8>>,
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gather patterns in order: config list, config files, inline
    /// arguments, then pattern files named on the command line.
    pub fn collect(config: Option<&Config>, inline: &[String], files: &[PathBuf]) -> Result<Self> {
        let mut set = Self::new();
        if let Some(config) = config {
            set.extend(config.patterns.list.iter().map(String::as_bytes));
            for file in &config.patterns.files {
                set.load_file(file)?;
            }
        }
        set.extend(inline.iter().map(String::as_bytes));
        for file in files {
            set.load_file(file)?;
        }
        Ok(set)
    }

    pub fn push(&mut self, pattern: impl Into<Vec<u8>>) {
        self.patterns.push(pattern.into());
    }

    /// Add every pattern listed in `path`. Returns how many were added.
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let content = std::fs::read(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let before = self.patterns.len();
        self.extend(parse_lines(&content));
        let added = self.patterns.len() - before;
        tracing::debug!(path = %path.display(), added, "loaded pattern file");
        Ok(added)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.patterns.iter().map(Vec::as_slice)
    }

    pub fn build(&self) -> Trie {
        Trie::new(&self.patterns)
    }

    /// Reference matcher over the same patterns.
    pub fn oracle(&self) -> Result<Oracle> {
        Oracle::new(&self.patterns)
    }
}

impl<P: Into<Vec<u8>>> Extend<P> for PatternSet {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.patterns.extend(iter.into_iter().map(Into::into));
    }
}

/// Split pattern file content into patterns: one per line, `\r\n` endings
/// accepted, blank lines skipped.
pub fn parse_lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    content
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(|line| !line.is_empty())
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;
