// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. `--color` / `--no-color` flags
//! 2. NO_COLOR env var → no color
//! 3. COLOR env var → use color
//! 4. default:
//!    - If not stdout.is_tty() → no color
//!    - If CI is set → no color
//!    - Else → auto

use std::io::IsTerminal;

use termcolor::ColorChoice;

use crate::env::names;

/// Resolve color choice from flags and environment variables.
pub fn resolve_color(force: bool, disable: bool) -> ColorChoice {
    if disable {
        return ColorChoice::Never;
    }
    if force {
        return ColorChoice::Always;
    }
    // NO_COLOR: any value (including empty) disables color
    if std::env::var_os(names::NO_COLOR).is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os(names::COLOR).is_some() {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() || std::env::var_os(names::CI).is_some() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Color scheme for scan output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Cyan input path.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Yellow line and column.
    pub fn line_number() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Bold red matched bytes.
    pub fn matched() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Red per-input error.
    pub fn error() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
