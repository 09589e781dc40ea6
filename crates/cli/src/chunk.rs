// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Word-sized prefix comparison.
//!
//! Packs the first `n` bytes (`n <= 8`) of a byte sequence into a `u64` with
//! every byte position past `n` cleared, so that two prefixes can be compared
//! with a single integer comparison instead of a byte loop.
//!
//! Words are little-endian: byte `i` of the input lands in bits
//! `8*i..8*i+8`. The byte order only has to be consistent between the words
//! being compared.

/// Number of bytes that fit in one comparison word.
pub const WORD_BYTES: usize = 8;

/// `MASKS[n]` keeps the low `n` bytes of a word.
const MASKS: [u64; WORD_BYTES + 1] = build_masks();

const fn build_masks() -> [u64; WORD_BYTES + 1] {
    let mut masks = [0u64; WORD_BYTES + 1];
    let mut n = 1;
    while n < WORD_BYTES {
        masks[n] = (1u64 << (8 * n)) - 1;
        n += 1;
    }
    masks[WORD_BYTES] = u64::MAX;
    masks
}

/// Canonical word for the first `n` bytes of `bytes`.
///
/// `n` is clamped to `WORD_BYTES` and to the length of `bytes`; callers
/// guarantee `1 <= n <= bytes.len()` on the hot path.
#[inline]
pub fn chunk_word(bytes: &[u8], n: usize) -> u64 {
    let take = n.min(WORD_BYTES).min(bytes.len());
    let mut buf = [0u8; WORD_BYTES];
    buf[..take].copy_from_slice(&bytes[..take]);
    u64::from_le_bytes(buf) & MASKS[take]
}

/// Whether `a` and `b` agree on their first `n` bytes (`n <= 8`).
#[inline]
pub fn chunks_equal(a: &[u8], b: &[u8], n: usize) -> bool {
    a.len() >= n && b.len() >= n && chunk_word(a, n) == chunk_word(b, n)
}

#[cfg(test)]
#[path = "chunk_tests.rs"]
mod tests;
