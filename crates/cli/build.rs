// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build script that generates env var name constants for `env.rs`.

// Build scripts should panic on failure; there is no meaningful recovery.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::env;
use std::fs;
use std::path::Path;

const VARS: &[(&str, &str)] = &[
    ("NO_COLOR", "disables color output (any value)."),
    ("COLOR", "forces color output (any value)."),
    ("CI", "indicates CI environment."),
    ("BRANCHSCAN_LOG", "configures tracing log filter."),
    ("BRANCHSCAN_CONFIG", "path to the config file."),
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest = Path::new(&out_dir).join("env_names.rs");

    let mut contents = String::new();
    for (name, doc) in VARS {
        contents.push_str(&format!(
            "/// Environment variable: {doc}\npub const {name}: &str = \"{name}\";\n"
        ));
    }

    fs::write(dest, contents).expect("failed to write env_names.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
