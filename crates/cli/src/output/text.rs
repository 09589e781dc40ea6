//! Text output formatter.
//!
//! One line per matching input:
//! ```text
//! <source>:<line>:<column>: <matched text>
//! ```

use std::io::Write;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::FormatOptions;
use crate::color::scheme;
use crate::runner::{Hit, InputReport};

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
    options: FormatOptions,
    matched: usize,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self::new(StandardStream::stdout(color_choice), options)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W, options: FormatOptions) -> Self {
        Self {
            out,
            options,
            matched: 0,
        }
    }

    /// Write a single input report.
    pub fn write_report(&mut self, report: &InputReport) -> std::io::Result<()> {
        if let Some(err) = &report.error {
            self.out.set_color(&scheme::path())?;
            write!(self.out, "{}", report.source)?;
            self.out.reset()?;
            write!(self.out, ": ")?;
            self.out.set_color(&scheme::error())?;
            writeln!(self.out, "{}", err)?;
            self.out.reset()?;
            return Ok(());
        }

        match &report.hit {
            Some(hit) => {
                self.matched += 1;
                self.write_hit(&report.source, hit)
            }
            None if self.options.show_misses => {
                self.out.set_color(&scheme::path())?;
                write!(self.out, "{}", report.source)?;
                self.out.reset()?;
                writeln!(self.out, ": no match")
            }
            None => Ok(()),
        }
    }

    fn write_hit(&mut self, source: &str, hit: &Hit) -> std::io::Result<()> {
        self.out.set_color(&scheme::path())?;
        write!(self.out, "{}", source)?;
        self.out.reset()?;

        write!(self.out, ":")?;
        self.out.set_color(&scheme::line_number())?;
        write!(self.out, "{}:{}", hit.line, hit.column)?;
        self.out.reset()?;
        write!(self.out, ": ")?;

        self.out.set_color(&scheme::matched())?;
        write!(self.out, "{}", hit.text.escape_debug())?;
        self.out.reset()?;
        writeln!(self.out)
    }

    /// Number of matching inputs written so far.
    pub fn matched(&self) -> usize {
        self.matched
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
