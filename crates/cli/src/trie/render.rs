// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Indented tree rendering for debugging.
//!
//! One line per branch. A child is indented by the cumulative selector key
//! of its ancestors, so its first byte lines up under the byte of the parent
//! it diverges from. Terminal markers print as `$`.

use std::fmt;

use super::Trie;
use super::branch::Branch;

const CONNECTOR: char = '└';
const TERMINAL: char = '$';

impl fmt::Display for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        draw_children(f, 0, &self.root)
    }
}

fn draw(f: &mut fmt::Formatter<'_>, depth: usize, branch: &Branch) -> fmt::Result {
    if depth >= 1 {
        write!(f, "{:width$}{CONNECTOR}", "", width = depth - 1)?;
    }
    if branch.is_terminal() {
        writeln!(f, "{TERMINAL}")?;
    } else {
        writeln!(f, "{}", branch.value().escape_ascii())?;
    }
    draw_children(f, depth, branch)
}

fn draw_children(f: &mut fmt::Formatter<'_>, depth: usize, branch: &Branch) -> fmt::Result {
    for (key, children) in branch.children() {
        for child in children {
            draw(f, depth + key, child)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
