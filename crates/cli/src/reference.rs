// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reference matchers for cross-checking trie results.
//!
//! - `naive`: one `memchr::memmem` search per pattern (brute force)
//! - `Oracle`: leftmost-longest Aho-Corasick automaton
//!
//! Both report the leftmost occurrence and, among patterns starting there,
//! the longest, which is the trie's contract.

use std::ops::Range;

use aho_corasick::{AhoCorasick, MatchKind};
use memchr::memmem;

use crate::error::Result;

/// Brute-force leftmost-longest search.
pub fn naive<P: AsRef<[u8]>>(patterns: &[P], text: &[u8]) -> Option<Range<usize>> {
    let mut best: Option<Range<usize>> = None;
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let Some(start) = memmem::find(text, pattern) else {
            continue;
        };
        let better = match &best {
            None => true,
            Some(b) => start < b.start || (start == b.start && pattern.len() > b.len()),
        };
        if better {
            best = Some(start..start + pattern.len());
        }
    }
    best
}

/// Automaton-backed reference matcher.
pub struct Oracle {
    automaton: AhoCorasick,
}

impl Oracle {
    pub fn new<I, P>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(patterns)?;
        Ok(Self { automaton })
    }

    /// Leftmost-longest occurrence in `text`.
    pub fn leftmost(&self, text: &[u8]) -> Option<Range<usize>> {
        self.automaton.find(text).map(|m| m.range())
    }

    /// Compare a trie result against the reference.
    ///
    /// Divergence is logged as a warning rather than treated as an error;
    /// returns whether both agree.
    pub fn verify(&self, source: &str, text: &[u8], found: Option<Range<usize>>) -> bool {
        let expected = self.leftmost(text);
        if expected == found {
            return true;
        }
        tracing::warn!(
            source,
            trie = ?found,
            reference = ?expected,
            "trie result diverges from reference matcher"
        );
        false
    }
}

#[cfg(test)]
#[path = "reference_tests.rs"]
mod tests;
