// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compressed-trie multi-pattern scanner.
//!
//! Patterns are inserted once through a [`TrieBuilder`], which finalizes the
//! tree into an immutable [`Trie`]. A trie can then scan any number of texts
//! for the leftmost occurrence of any pattern:
//!
//! ```
//! use branchscan::Trie;
//!
//! let trie = Trie::new(["card", "carry", "canary"]);
//! let found = trie.find("ananafcardio").unwrap();
//! assert_eq!(found, Some("card"));
//! ```
//!
//! When several patterns start at the leftmost offset, the longest one is
//! reported.

mod branch;
mod builder;
mod render;
mod scan;

use std::ops::Range;

use branch::Branch;
pub use builder::TrieBuilder;
use scan::ShiftTable;

/// Immutable multi-pattern matcher.
///
/// Holds no interior mutability, so a single trie can be shared between
/// threads and scanned concurrently.
#[derive(Debug)]
pub struct Trie {
    root: Branch,
    patterns: usize,
    shift: ShiftTable,
}

/// Leftmost occurrence of a pattern in a scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'t> {
    start: usize,
    bytes: &'t [u8],
}

impl Trie {
    /// Build a trie from a list of patterns.
    pub fn new<I, P>(patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let mut builder = TrieBuilder::new();
        builder.extend(patterns);
        builder.build()
    }

    pub fn builder() -> TrieBuilder {
        TrieBuilder::new()
    }

    /// Number of patterns inserted, duplicates included.
    pub fn len(&self) -> usize {
        self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns == 0
    }

    /// Number of branches, root and terminal markers included.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }
}

impl<P: AsRef<[u8]>> FromIterator<P> for Trie {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Trie::new(iter)
    }
}

impl<'t> Match<'t> {
    pub(crate) fn new(text: &'t [u8], start: usize, len: usize) -> Self {
        Self {
            start,
            bytes: &text[start..start + len],
        }
    }

    /// Byte offset of the match in the scanned text.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the end of the match.
    pub fn end(&self) -> usize {
        self.start + self.bytes.len()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True only for a match of the empty pattern.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// The matched pattern, borrowed from the scanned text.
    pub fn as_bytes(&self) -> &'t [u8] {
        self.bytes
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
