//! Behavioral specs for branchscan.toml and its discovery.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn discovers_config_in_working_directory() {
    let temp = Project::empty();
    temp.config("[patterns]\nlist = [\"card\", \"carry\"]\n");
    temp.file("input.txt", "a card");

    scan()
        .pwd(temp.path())
        .args(&["input.txt"])
        .matches()
        .stdout_eq("input.txt:1:3: card\n");
}

#[test]
fn discovers_config_in_parent_directory() {
    let temp = Project::empty();
    temp.config("[patterns]\nlist = [\"card\"]\n");
    temp.file("sub/input.txt", "card");

    scan()
        .pwd(temp.path().join("sub"))
        .args(&["input.txt"])
        .matches()
        .stdout_eq("input.txt:1:1: card\n");
}

#[test]
fn config_pattern_files_resolve_against_config_dir() {
    let temp = Project::empty();
    temp.config("[patterns]\nfiles = [\"fruit.txt\"]\n");
    temp.file("fruit.txt", "banana\n");
    temp.file("sub/input.txt", "bananas");

    scan()
        .pwd(temp.path().join("sub"))
        .args(&["input.txt"])
        .matches()
        .stdout_eq("input.txt:1:1: banana\n");
}

#[test]
fn config_and_inline_patterns_combine() {
    let temp = Project::empty();
    temp.config("[patterns]\nlist = [\"card\"]\n");

    scan()
        .pwd(temp.path())
        .patterns(&["an"])
        .stdin("bandana card")
        .matches()
        .stdout_eq("<stdin>:1:2: an\n");
}

#[test]
fn explicit_config_flag() {
    let temp = Project::empty();
    temp.file("custom.toml", "version = 1\n[patterns]\nlist = [\"zz\"]\n");

    scan()
        .pwd(temp.path())
        .args(&["-C", "custom.toml"])
        .stdin("azz")
        .matches()
        .stdout_eq("<stdin>:1:2: zz\n");
}

#[test]
fn config_env_var_sets_path() {
    let temp = Project::empty();
    temp.file("custom.toml", "version = 1\n[patterns]\nlist = [\"zz\"]\n");
    let path = temp.path().join("custom.toml");

    scan()
        .pwd(temp.path())
        .env("BRANCHSCAN_CONFIG", path.to_str().unwrap())
        .stdin("zz")
        .matches();
}

#[test]
fn missing_explicit_config_is_a_config_error() {
    let temp = Project::empty();
    scan()
        .pwd(temp.path())
        .args(&["-C", "nope.toml"])
        .patterns(&["x"])
        .exits(2)
        .stderr_has("config file not found");
}

#[test]
fn unsupported_version_is_a_config_error() {
    let temp = Project::empty();
    temp.config("version = 2\n");

    scan()
        .pwd(temp.path())
        .patterns(&["x"])
        .stdin("x")
        .exits(2)
        .stderr_has("unsupported config version 2");
}

#[test]
fn unknown_keys_warn_but_succeed() {
    let temp = Project::empty();
    temp.config("[patterns]\nlist = [\"x\"]\ncolour = true\n");

    scan()
        .pwd(temp.path())
        .stdin("x")
        .matches()
        .stderr_has("unrecognized field `patterns.colour`");
}

#[test]
fn config_can_enable_verify() {
    let temp = Project::empty();
    temp.config("[patterns]\nlist = [\"card\"]\n[scan]\nverify = true\n");

    scan().pwd(temp.path()).stdin("card").matches();
}
