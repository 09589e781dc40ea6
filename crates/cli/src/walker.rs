// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input discovery with gitignore support.
//!
//! Expands the paths given on the command line into the list of files to
//! scan. Files are passed through; directories are walked with the `ignore`
//! crate, which respects `.gitignore`, hidden-file rules and depth limits.

use std::path::PathBuf;

use ignore::WalkBuilder;

use crate::error::{Error, Result};

/// Default maximum directory depth.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Directories never descended into.
pub(crate) const SKIP_DIRECTORIES: &[&str] = &[".git"];

/// Walker configuration.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Maximum directory depth (default: 100).
    pub max_depth: Option<usize>,

    /// Whether to respect gitignore files.
    pub git_ignore: bool,

    /// Whether to skip hidden files.
    pub hidden: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            git_ignore: true,
            hidden: true,
        }
    }
}

/// Statistics from a walk operation.
#[derive(Debug, Default)]
pub struct WalkStats {
    /// Total files discovered.
    pub files_found: usize,

    /// Symlink loops detected.
    pub symlink_loops: usize,

    /// Errors encountered.
    pub errors: usize,
}

/// Helper to check if an ignore::Error is a symlink loop error.
fn is_loop_error(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. } => is_loop_error(err),
        ignore::Error::WithDepth { err, .. } => is_loop_error(err),
        ignore::Error::WithLineNumber { err, .. } => is_loop_error(err),
        _ => false,
    }
}

/// Expands scan paths into files.
pub struct FileWalker {
    config: WalkerConfig,
}

impl FileWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Collect every file under `paths`, sorted by name within each
    /// directory. Paths that do not exist are an error.
    pub fn collect(&self, paths: &[PathBuf]) -> Result<(Vec<PathBuf>, WalkStats)> {
        let Some((first, rest)) = paths.split_first() else {
            return Ok((Vec::new(), WalkStats::default()));
        };

        if let Some(missing) = paths.iter().find(|p| !p.exists()) {
            return Err(Error::Walk {
                path: missing.clone(),
                message: "no such file or directory".to_string(),
            });
        }

        let mut builder = WalkBuilder::new(first);
        for path in rest {
            builder.add(path);
        }
        builder
            .hidden(self.config.hidden)
            .git_ignore(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .git_global(self.config.git_ignore)
            .max_depth(self.config.max_depth)
            .follow_links(true)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(|entry| {
                !entry.file_type().is_some_and(|t| t.is_dir())
                    || !entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| SKIP_DIRECTORIES.contains(&name))
            });

        let mut files = Vec::new();
        let mut stats = WalkStats::default();
        for entry in builder.build() {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|t| t.is_file()) {
                        files.push(entry.into_path());
                    }
                }
                Err(err) if is_loop_error(&err) => {
                    tracing::warn!("Symlink loop detected: {}", err);
                    stats.symlink_loops += 1;
                }
                Err(err) => {
                    tracing::warn!("Walk error: {}", err);
                    stats.errors += 1;
                }
            }
        }
        stats.files_found = files.len();

        tracing::debug!(
            files = stats.files_found,
            errors = stats.errors,
            "collected inputs"
        );
        Ok((files, stats))
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
