// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles branchscan.toml parsing with version validation and unknown key
//! warnings.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::reader::MAX_FILE_SIZE;

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Pattern sources.
    #[serde(default)]
    pub patterns: PatternsConfig,

    /// Scan behaviour.
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Patterns listed in the config file.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PatternsConfig {
    /// Inline patterns.
    #[serde(default)]
    pub list: Vec<String>,

    /// Pattern files, one pattern per line. Relative paths are resolved
    /// against the directory holding the config file.
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

/// Scan configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Largest input file to read, in bytes (default: 10MB).
    #[serde(default = "ScanConfig::default_max_file_size")]
    pub max_file_size: u64,

    /// Cross-check every scan against the reference matcher.
    #[serde(default)]
    pub verify: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_file_size: Self::default_max_file_size(),
            verify: false,
        }
    }
}

impl ScanConfig {
    fn default_max_file_size() -> u64 {
        MAX_FILE_SIZE
    }
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "patterns", "scan"];

/// Known keys per section.
const KNOWN_SECTION_KEYS: &[(&str, &[&str])] = &[
    ("patterns", &["list", "files"]),
    ("scan", &["max_file_size", "verify"]),
];

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = read(path)?;
    parse(&content, path).map(|config| config.resolved_against(path))
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = read(path)?;
    parse_with_warnings(&content, path).map(|config| config.resolved_against(path))
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| config_error(e, path))?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade branchscan to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    toml::from_str(content).map_err(|e| config_error(e, path))
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let config = parse(content, path)?;

    let table: toml::Table = toml::from_str(content).map_err(|e| config_error(e, path))?;
    for key in unknown_keys(&table) {
        warn_unknown_key(path, &key);
    }

    Ok(config)
}

/// Dotted names of keys the config format does not define.
pub fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let mut unknown = Vec::new();
    for (key, value) in table {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            unknown.push(key.clone());
            continue;
        }
        let Some((_, known)) = KNOWN_SECTION_KEYS.iter().find(|(name, _)| name == key) else {
            continue;
        };
        if let toml::Value::Table(section) = value {
            for field in section.keys() {
                if !known.contains(&field.as_str()) {
                    unknown.push(format!("{}.{}", key, field));
                }
            }
        }
    }
    unknown
}

impl Config {
    /// Resolve relative pattern file paths against the config's directory.
    fn resolved_against(mut self, path: &Path) -> Self {
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for file in &mut self.patterns.files {
            if file.is_relative() {
                *file = base.join(&*file);
            }
        }
        self
    }
}

fn config_error(err: toml::de::Error, path: &Path) -> Error {
    Error::Config {
        message: err.to_string(),
        path: Some(path.to_path_buf()),
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "branchscan: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
