// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variable names read by branchscan.

/// Generated by `build.rs`.
pub mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

/// Variable holding the tracing filter directive.
pub fn log_var() -> &'static str {
    names::BRANCHSCAN_LOG
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
