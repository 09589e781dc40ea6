// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compressed trie node.
//!
//! A branch owns a run of pattern bytes (`value`) and the children that
//! diverge from it. Children are grouped by selector key: the number of
//! value bytes that must match before the child's own value applies. A
//! branch with an empty value is a terminal marker: a pattern ends exactly
//! where it hangs.

use std::collections::BTreeMap;

use crate::chunk::{WORD_BYTES, chunk_word};

/// Outcome of matching text against the children stored under one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Descent {
    /// A pattern matched; the length is counted from the start of the
    /// parent's value.
    Hit(usize),
    /// Nothing matched; carries the smallest cached offset among the
    /// children that were tried (0 when there were none).
    Miss(usize),
}

#[derive(Debug, Default)]
pub(crate) struct Branch {
    value: Vec<u8>,
    children: BTreeMap<usize, Vec<Branch>>,
    /// Smallest child key, or `value.len()` for a leaf.
    offset: usize,
    /// Sorted child keys, filled by `finalize`.
    offsets: Vec<usize>,
    /// Word over the first `min(offset, 8)` bytes of `value`.
    offset_word: u64,
    /// One word per checkpoint: each entry of `offsets`, then `value.len()`.
    checkpoint_words: Vec<u64>,
}

impl Branch {
    pub(crate) fn new(value: &[u8]) -> Self {
        Self {
            value: value.to_vec(),
            offset: value.len(),
            ..Default::default()
        }
    }

    pub(crate) fn value(&self) -> &[u8] {
        &self.value
    }

    pub(crate) fn is_terminal(&self) -> bool {
        self.value.is_empty()
    }

    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Children grouped by selector key, in key order.
    pub(crate) fn children(&self) -> impl Iterator<Item = (usize, &[Branch])> {
        self.children.iter().map(|(&key, list)| (key, list.as_slice()))
    }

    /// Number of branches in this subtree, including `self`.
    pub(crate) fn node_count(&self) -> usize {
        1 + self
            .children
            .values()
            .flatten()
            .map(Branch::node_count)
            .sum::<usize>()
    }

    /// Length of the common prefix of `value` and `pattern`.
    pub(crate) fn shared_prefix(&self, pattern: &[u8]) -> usize {
        self.value
            .iter()
            .zip(pattern)
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// Insert `pattern` among the children stored under `key`.
    pub(crate) fn insert(&mut self, key: usize, pattern: &[u8]) {
        let siblings = self.children.entry(key).or_default();
        if pattern.is_empty() && siblings.iter().any(Branch::is_terminal) {
            return;
        }

        // Longest shared prefix wins; the first sibling wins a tie.
        let mut best: Option<(usize, usize)> = None;
        for (slot, sibling) in siblings.iter().enumerate() {
            let shared = sibling.shared_prefix(pattern);
            if shared > best.map_or(0, |(_, m)| m) {
                best = Some((slot, shared));
            }
        }

        let Some((slot, shared)) = best else {
            siblings.push(Branch::new(pattern));
            self.offset = self.offset.min(key);
            return;
        };

        if siblings[slot].value.len() >= pattern.len() {
            siblings[slot].insert(shared, &pattern[shared..]);
            return;
        }

        let mut existing = std::mem::replace(&mut siblings[slot], Branch::new(pattern));
        if existing.children.is_empty() {
            existing.value.drain(..shared);
            existing.offset = existing.value.len();
            let split = &mut siblings[slot];
            split.children.insert(shared, vec![existing]);
            split.offset = shared;
            return;
        }

        // The existing branch's child keys are relative to its full value,
        // so it cannot be truncated in place. Rebuild its patterns under the
        // new branch instead.
        for pattern in existing.patterns() {
            self.insert(key, &pattern);
        }
    }

    /// Every pattern suffix represented by this subtree, relative to the
    /// start of `value`.
    pub(crate) fn patterns(&self) -> Vec<Vec<u8>> {
        let mut out = Vec::new();
        let mut prefix = Vec::new();
        self.collect_patterns(&mut prefix, &mut out);
        out
    }

    fn collect_patterns(&self, prefix: &mut Vec<u8>, out: &mut Vec<Vec<u8>>) {
        let mut full = prefix.clone();
        full.extend_from_slice(&self.value);
        out.push(full);
        self.collect_child_patterns(prefix, out);
    }

    /// Like `patterns`, but without the branch's own value. Used for the
    /// root, whose empty value is not itself a pattern.
    pub(crate) fn child_patterns(&self) -> Vec<Vec<u8>> {
        let mut out = Vec::new();
        let mut prefix = Vec::new();
        self.collect_child_patterns(&mut prefix, &mut out);
        out
    }

    fn collect_child_patterns(&self, prefix: &mut Vec<u8>, out: &mut Vec<Vec<u8>>) {
        for (&key, list) in &self.children {
            let mark = prefix.len();
            prefix.extend_from_slice(&self.value[..key.min(self.value.len())]);
            for child in list {
                child.collect_patterns(prefix, out);
            }
            prefix.truncate(mark);
        }
    }

    /// Precompute offsets and comparison words for this subtree.
    pub(crate) fn finalize(&mut self) {
        self.offsets = self.children.keys().copied().collect();
        self.offset = self
            .offsets
            .first()
            .map_or(self.value.len(), |&key| key.min(self.value.len()));

        for child in self.children.values_mut().flatten() {
            child.finalize();
        }

        if self.value.is_empty() {
            return;
        }
        self.offset_word = chunk_word(&self.value, self.offset.min(WORD_BYTES));
        self.checkpoint_words = self
            .offsets
            .iter()
            .chain(std::iter::once(&self.value.len()))
            .map(|&n| chunk_word(&self.value, n.min(WORD_BYTES)))
            .collect();
    }

    /// Cheap rejection over the first `min(offset, 8)` bytes.
    #[inline]
    fn could_match(&self, text: &[u8]) -> bool {
        let n = self.offset.min(WORD_BYTES);
        if text.len() < n {
            return false;
        }
        match n {
            0 => true,
            1 => self.value[0] == text[0],
            _ => self.offset_word == chunk_word(text, n),
        }
    }

    /// Whether `text` starts with the first `n` value bytes, where `n` is
    /// checkpoint number `checkpoint`.
    #[inline]
    fn matches_checkpoint(&self, text: &[u8], checkpoint: usize, n: usize) -> bool {
        if n == 0 {
            return true;
        }
        if text.len() < n || n > self.value.len() {
            return false;
        }
        if n == 1 {
            return self.value[0] == text[0];
        }
        if self.checkpoint_words[checkpoint] != chunk_word(text, n.min(WORD_BYTES)) {
            return false;
        }
        n <= WORD_BYTES || text[WORD_BYTES..n] == self.value[WORD_BYTES..n]
    }

    /// Deepest checkpoint (child key or full value length) whose value
    /// prefix `text` starts with.
    fn match_prefix(&self, text: &[u8]) -> Option<usize> {
        let mut deepest = None;
        for (checkpoint, &key) in self.offsets.iter().enumerate() {
            if !self.matches_checkpoint(text, checkpoint, key) {
                return deepest;
            }
            deepest = Some(key);
        }
        if self.matches_checkpoint(text, self.offsets.len(), self.value.len()) {
            deepest = Some(self.value.len());
        }
        deepest
    }

    /// Longest pattern through this branch that `text` starts with,
    /// measured from the start of `value`.
    fn extend(&self, text: &[u8]) -> Option<usize> {
        let deepest = self.match_prefix(text)?;
        if deepest == self.value.len() {
            return Some(deepest);
        }
        for &key in self.offsets.iter().rev().filter(|&&key| key <= deepest) {
            if let Descent::Hit(len) = self.descend(key, &text[key..]) {
                return Some(len);
            }
        }
        None
    }

    /// Match `rest`, the text following `value[..key]`, against the
    /// children stored under `key`.
    pub(crate) fn descend(&self, key: usize, rest: &[u8]) -> Descent {
        let Some(children) = self.children.get(&key) else {
            return Descent::Miss(0);
        };

        let mut terminal = false;
        let mut min_offset: Option<usize> = None;
        for child in children {
            if child.is_terminal() {
                terminal = true;
                continue;
            }
            if child.could_match(rest)
                && let Some(len) = child.extend(rest)
            {
                return Descent::Hit(key + len);
            }
            min_offset = Some(min_offset.map_or(child.offset, |m| m.min(child.offset)));
        }

        if terminal {
            Descent::Hit(key)
        } else {
            Descent::Miss(min_offset.unwrap_or(0))
        }
    }
}

#[cfg(test)]
#[path = "branch_tests.rs"]
mod tests;
