// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use crate::runner::InputReport;

/// Complete scan output.
#[derive(Debug, Serialize)]
pub struct ScanOutput<'a> {
    pub timestamp: String,
    pub patterns: usize,
    pub matched: usize,
    pub inputs: &'a [InputReport],
}

impl<'a> ScanOutput<'a> {
    /// Output stamped with the current time.
    pub fn new(patterns: usize, inputs: &'a [InputReport]) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            patterns,
            matched: inputs.iter().filter(|r| r.matched()).count(),
            inputs,
        }
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON output.
    pub fn write(&mut self, output: &ScanOutput<'_>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(output).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
