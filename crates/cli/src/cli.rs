// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::walker::DEFAULT_MAX_DEPTH;

/// Find the leftmost occurrence of any of a set of byte patterns
#[derive(Parser)]
#[command(name = "branchscan")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "BRANCHSCAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan files or stdin for the leftmost pattern occurrence
    Scan(ScanArgs),
    /// Print the compressed trie built from the patterns
    Tree(TreeArgs),
}

/// Pattern sources shared by every subcommand.
#[derive(clap::Args, Default)]
pub struct PatternArgs {
    /// Pattern to search for (repeatable)
    #[arg(short = 'e', long = "pattern", value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Read patterns from a file, one per line (repeatable)
    #[arg(short = 'f', long = "patterns-file", value_name = "FILE")]
    pub pattern_files: Vec<PathBuf>,
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Files or directories to scan (default: stdin)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub patterns: PatternArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Cross-check every result against a reference matcher
    #[arg(long)]
    pub verify: bool,

    /// List inputs without a match
    #[arg(long)]
    pub show_misses: bool,

    /// Maximum directory depth to traverse
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct TreeArgs {
    #[command(flatten)]
    pub patterns: PatternArgs,
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
