// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Leftmost-match scanning.
//!
//! A cursor walks the text left to right. At each position the root is
//! descended; on a miss the cursor advances by the smaller of the trie's
//! offset hint and the bad-byte shift of the byte ending the current
//! shortest-pattern window. The shift guarantees that no occurrence starts
//! strictly between the old and the new cursor.

use super::branch::Descent;
use super::{Match, Trie};
use crate::error::{Error, Result};

/// Per-byte safe cursor advances.
#[derive(Debug, Clone)]
pub(crate) struct ShiftTable {
    /// Length of the shortest pattern.
    window: usize,
    shifts: [usize; 256],
}

impl ShiftTable {
    /// Derive the table from the full pattern list.
    ///
    /// With `L` the shortest pattern length, a byte seen at index `j < L - 1`
    /// of some pattern limits the shift to `L - 1 - j`; any other byte
    /// allows a shift of `L`.
    pub(crate) fn new(patterns: &[Vec<u8>]) -> Self {
        let window = patterns.iter().map(Vec::len).min().unwrap_or(0);
        let mut shifts = [window.max(1); 256];
        if window > 1 {
            for pattern in patterns {
                for (j, &byte) in pattern[..window - 1].iter().enumerate() {
                    let shift = &mut shifts[usize::from(byte)];
                    *shift = (*shift).min(window - 1 - j);
                }
            }
        }
        Self { window, shifts }
    }

    pub(crate) fn window(&self) -> usize {
        self.window
    }

    /// Shift for a window starting at `pos`; `pos + window <= text.len()`.
    #[inline]
    pub(crate) fn advance(&self, text: &[u8], pos: usize) -> usize {
        match self.window {
            0 => 1,
            w => self.shifts[usize::from(text[pos + w - 1])],
        }
    }
}

impl Trie {
    /// Find the leftmost occurrence of any pattern in `text`.
    ///
    /// Returns `Ok(None)` when no pattern occurs. Among patterns starting at
    /// the leftmost offset the longest is returned. An `Err` is only
    /// produced if the cursor fails to advance, which indicates corrupted
    /// offset bookkeeping.
    pub fn scan<'t>(&self, text: &'t [u8]) -> Result<Option<Match<'t>>> {
        if self.is_empty() {
            return Ok(None);
        }

        let window = self.shift.window();
        let mut pos = 0;
        while pos + window <= text.len() {
            match self.root.descend(0, &text[pos..]) {
                Descent::Hit(len) => {
                    tracing::trace!(offset = pos, len, "trie match");
                    return Ok(Some(Match::new(text, pos, len)));
                }
                Descent::Miss(hint) => {
                    let advance = hint.min(self.shift.advance(text, pos));
                    if advance == 0 {
                        return Err(Error::Stalled { offset: pos });
                    }
                    pos += advance;
                }
            }
        }

        tracing::trace!(len = text.len(), "no trie match");
        Ok(None)
    }

    /// String form of [`Trie::scan`].
    pub fn find<'t>(&self, text: &'t str) -> Result<Option<&'t str>> {
        let found = self.scan(text.as_bytes())?;
        Ok(found.and_then(|m| text.get(m.range())))
    }
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
