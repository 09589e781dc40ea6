// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Trie construction.

use super::branch::Branch;
use super::scan::ShiftTable;
use super::Trie;

/// Collects patterns and finalizes them into a [`Trie`].
///
/// Insertion never fails: duplicates and patterns that prefix one another
/// are folded into the tree. `build` consumes the builder, so a trie can
/// never be modified after it is finalized.
#[derive(Debug, Default)]
pub struct TrieBuilder {
    root: Branch,
    patterns: usize,
}

impl TrieBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one pattern.
    pub fn insert(&mut self, pattern: impl AsRef<[u8]>) -> &mut Self {
        self.root.insert(0, pattern.as_ref());
        self.patterns += 1;
        self
    }

    /// Number of patterns inserted so far.
    pub fn len(&self) -> usize {
        self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns == 0
    }

    /// Finalize the tree and precompute the scan tables.
    pub fn build(mut self) -> Trie {
        self.root.finalize();
        let shift = ShiftTable::new(&self.root.child_patterns());

        tracing::debug!(
            patterns = self.patterns,
            nodes = self.root.node_count(),
            window = shift.window(),
            "built trie"
        );

        Trie {
            root: self.root,
            patterns: self.patterns,
            shift,
        }
    }
}

impl<P: AsRef<[u8]>> Extend<P> for TrieBuilder {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for pattern in iter {
            self.insert(pattern);
        }
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
