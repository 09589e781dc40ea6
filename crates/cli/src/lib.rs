//! Compressed-trie multi-pattern scanner.
//!
//! The library half of `branchscan`: [`Trie`] and [`TrieBuilder`] hold the
//! matching core, the remaining modules serve the command-line tool.

pub mod chunk;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod env;
pub mod error;
pub mod output;
pub mod patterns;
pub mod reader;
pub mod reference;
pub mod runner;
pub mod trie;
pub mod walker;

pub use error::{Error, ExitCode, Result};
pub use patterns::PatternSet;
pub use trie::{Match, Trie, TrieBuilder};
