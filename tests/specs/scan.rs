//! Behavioral specs for `branchscan scan`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn finds_leftmost_match_on_stdin() {
    scan()
        .patterns(FRUIT)
        .stdin("ananafcardio")
        .matches()
        .stdout_eq("<stdin>:1:7: card\n");
}

#[test]
fn truncated_candidates_do_not_match() {
    scan()
        .patterns(FRUIT)
        .stdin("ananafcario")
        .misses()
        .stdout_eq("");
}

#[test]
fn longest_pattern_wins_at_same_offset() {
    scan()
        .patterns(&["a", "ab"])
        .stdin("ab")
        .matches()
        .stdout_eq("<stdin>:1:1: ab\n");
}

#[test]
fn reports_line_and_column() {
    scan()
        .patterns(&["hello"])
        .stdin("first line\nsay hello\n")
        .matches()
        .stdout_eq("<stdin>:2:5: hello\n");
}

#[test]
fn scans_files_in_argument_order() {
    let temp = Project::empty();
    temp.file("b.txt", "a canary sings\n");
    temp.file("a.txt", "nothing here\n");

    scan()
        .pwd(temp.path())
        .patterns(FRUIT)
        .args(&["b.txt", "a.txt"])
        .matches()
        .stdout_eq("b.txt:1:3: canary\n");
}

#[test]
fn show_misses_lists_every_input() {
    let temp = Project::empty();
    temp.file("a.txt", "nothing here\n");
    temp.file("b.txt", "carry on\n");

    scan()
        .pwd(temp.path())
        .patterns(FRUIT)
        .args(&["--show-misses", "a.txt", "b.txt"])
        .matches()
        .stdout_eq("a.txt: no match\nb.txt:1:1: carry\n");
}

#[test]
fn walks_directories_respecting_gitignore() {
    let temp = Project::empty();
    temp.file(".gitignore", "ignored/\n");
    temp.file("src/fruit.txt", "bandana\n");
    temp.file("ignored/fruit.txt", "banana\n");

    scan()
        .pwd(temp.path())
        .patterns(FRUIT)
        .args(&["."])
        .matches()
        .stdout_has("fruit.txt:1:1: bandana")
        .stdout_lacks("banana");
}

#[test]
fn reads_patterns_from_file() {
    let temp = Project::empty();
    temp.file("patterns.txt", "card\r\n\ncarry\n");
    temp.file("input.txt", "a carry");

    scan()
        .pwd(temp.path())
        .args(&["-f", "patterns.txt", "input.txt"])
        .matches()
        .stdout_eq("input.txt:1:3: carry\n");
}

#[test]
fn no_patterns_is_an_argument_error() {
    scan()
        .stdin("text")
        .exits(2)
        .stderr_has("no patterns given");
}

#[test]
fn missing_pattern_file_is_an_internal_error() {
    let temp = Project::empty();
    scan()
        .pwd(temp.path())
        .args(&["-f", "missing.txt"])
        .exits(3)
        .stderr_has("missing.txt");
}

#[test]
fn missing_input_path_is_an_internal_error() {
    let temp = Project::empty();
    scan()
        .pwd(temp.path())
        .patterns(&["x"])
        .args(&["missing.txt"])
        .exits(3)
        .stderr_has("no such file");
}

#[test]
fn verify_agrees_silently() {
    scan()
        .patterns(FRUIT)
        .args(&["--verify"])
        .env("BRANCHSCAN_LOG", "warn")
        .stdin("xxbandanaxx")
        .matches()
        .stdout_eq("<stdin>:1:3: bandana\n");
}

#[test]
fn non_utf8_input_is_scanned_as_bytes() {
    let temp = Project::empty();
    std::fs::write(temp.path().join("bin.dat"), b"\xff\xfecard\x00").unwrap();

    scan()
        .pwd(temp.path())
        .patterns(&["card"])
        .args(&["bin.dat"])
        .matches()
        .stdout_eq("bin.dat:1:3: card\n");
}
