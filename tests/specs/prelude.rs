//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing branchscan CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the branchscan binary
pub fn branchscan_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("branchscan"));
    cmd.env_remove("BRANCHSCAN_CONFIG")
        .env_remove("BRANCHSCAN_LOG")
        .env_remove("COLOR");
    cmd
}

/// Create a scan builder
pub fn scan() -> ScanBuilder<Text> {
    ScanBuilder::new()
}

/// Create a tree builder
pub fn tree() -> TreeBuilder {
    TreeBuilder::default()
}

/// Typestate markers for output mode
pub struct Text;
pub struct Json;

/// Fluent builder for `branchscan scan`
pub struct ScanBuilder<Mode = Text> {
    dir: Option<PathBuf>,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
    _mode: PhantomData<Mode>,
}

#[allow(dead_code)]
impl ScanBuilder<Text> {
    fn new() -> Self {
        Self {
            dir: None,
            args: Vec::new(),
            envs: Vec::new(),
            stdin: None,
            _mode: PhantomData,
        }
    }

    pub fn json(self) -> ScanBuilder<Json> {
        ScanBuilder {
            dir: self.dir,
            args: self.args,
            envs: self.envs,
            stdin: self.stdin,
            _mode: PhantomData,
        }
    }

    /// Expect exit code 0 (at least one match)
    pub fn matches(self) -> RunAssert {
        run_exits(self.command(), 0)
    }

    /// Expect exit code 1 (no match)
    pub fn misses(self) -> RunAssert {
        run_exits(self.command(), 1)
    }
}

#[allow(dead_code)]
impl ScanBuilder<Json> {
    pub fn matches(self) -> serde_json::Value {
        let output = run_exits(self.command(), 0);
        serde_json::from_slice(&output.output.stdout).expect("valid JSON")
    }

    pub fn misses(self) -> serde_json::Value {
        let output = run_exits(self.command(), 1);
        serde_json::from_slice(&output.output.stdout).expect("valid JSON")
    }
}

#[allow(dead_code)]
impl<Mode: 'static> ScanBuilder<Mode> {
    pub fn exits(self, code: i32) -> RunAssert {
        run_exits(self.command(), code)
    }

    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Add inline patterns (`-e`)
    pub fn patterns(mut self, patterns: &[&str]) -> Self {
        for pattern in patterns {
            self.args.push("-e".to_string());
            self.args.push(pattern.to_string());
        }
        self
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Feed `text` on stdin
    pub fn stdin(mut self, text: &str) -> Self {
        self.stdin = Some(text.to_string());
        self
    }

    fn command(self) -> assert_cmd::Command {
        let is_json = std::any::TypeId::of::<Mode>() == std::any::TypeId::of::<Json>();

        let mut cmd = branchscan_cmd();
        cmd.arg("scan");
        if is_json {
            cmd.args(["-o", "json"]);
        }
        cmd.args(&self.args);
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }

        let mut cmd = assert_cmd::Command::from_std(cmd);
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd
    }
}

/// Fluent builder for `branchscan tree`
#[derive(Default)]
pub struct TreeBuilder {
    dir: Option<PathBuf>,
    args: Vec<String>,
}

#[allow(dead_code)]
impl TreeBuilder {
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    pub fn patterns(mut self, patterns: &[&str]) -> Self {
        for pattern in patterns {
            self.args.push("-e".to_string());
            self.args.push(pattern.to_string());
        }
        self
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    pub fn runs(self) -> RunAssert {
        run_exits(self.command(), 0)
    }

    pub fn exits(self, code: i32) -> RunAssert {
        run_exits(self.command(), code)
    }

    fn command(self) -> assert_cmd::Command {
        let mut cmd = branchscan_cmd();
        cmd.arg("tree").args(&self.args);
        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }
        assert_cmd::Command::from_std(cmd)
    }
}

fn run_exits(mut cmd: assert_cmd::Command, code: i32) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
        code,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// Assertions over a finished run.
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals the expected text exactly.
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout matches predicate.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }
}

// =============================================================================
// Project
// =============================================================================

/// Temporary project directory with helper methods.
///
/// Holds an empty `.git` directory so config discovery stops at its root.
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write branchscan.toml (auto-prefixes with `version = 1` if not present)
    pub fn config(&self, content: &str) {
        let content = if content.contains("version") {
            content.to_string()
        } else {
            format!("version = 1\n{}", content)
        };
        std::fs::write(self.dir.path().join("branchscan.toml"), content).unwrap();
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }
}

/// Patterns used across scan specs.
pub const FRUIT: &[&str] = &[
    "ananas",
    "and",
    "banderole",
    "banana",
    "bandana",
    "card",
    "canary",
    "carry",
];
