//! Size-gated input reading.
//!
//! Inputs are files or stdin, read whole into memory:
//! - > 1MB: logged at info level
//! - > max size (default 10MB): rejected with `InputTooLarge`

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Size at which to log large inputs (1MB).
pub const LARGE_FILE_WARN: u64 = 1024 * 1024;

/// Default maximum input size (10MB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Where an input came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    fn path(&self) -> PathBuf {
        match self {
            InputSource::Stdin => PathBuf::from("<stdin>"),
            InputSource::File(path) => path.clone(),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// One input loaded into memory.
#[derive(Debug)]
pub struct Input {
    pub source: InputSource,
    pub bytes: Vec<u8>,
}

/// Size-gated reader for scan inputs.
pub struct InputReader {
    max_size: u64,
}

impl Default for InputReader {
    fn default() -> Self {
        Self {
            max_size: MAX_FILE_SIZE,
        }
    }
}

impl InputReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    /// Read a file, checking its size first.
    pub fn read_file(&self, path: &Path) -> Result<Input> {
        let io_error = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        let size = std::fs::metadata(path).map_err(io_error)?.len();
        if size > self.max_size {
            return Err(Error::InputTooLarge {
                input: path.display().to_string(),
                size,
                max_size: self.max_size,
            });
        }

        if size > LARGE_FILE_WARN {
            tracing::info!(
                path = %path.display(),
                size_mb = size as f64 / 1_000_000.0,
                "Reading large file"
            );
        }

        let file = File::open(path).map_err(io_error)?;
        self.read_from(InputSource::File(path.to_path_buf()), file)
    }

    /// Read all of stdin.
    pub fn read_stdin(&self) -> Result<Input> {
        self.read_from(InputSource::Stdin, std::io::stdin().lock())
    }

    /// Read an arbitrary stream, rejecting it once it exceeds the limit.
    pub fn read_from<R: Read>(&self, source: InputSource, reader: R) -> Result<Input> {
        let mut bytes = Vec::new();
        reader
            .take(self.max_size.saturating_add(1))
            .read_to_end(&mut bytes)
            .map_err(|e| Error::Io {
                path: source.path(),
                source: e,
            })?;

        if bytes.len() as u64 > self.max_size {
            return Err(Error::InputTooLarge {
                input: source.to_string(),
                size: bytes.len() as u64,
                max_size: self.max_size,
            });
        }

        Ok(Input { source, bytes })
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
