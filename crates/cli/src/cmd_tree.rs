// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tree command implementation.

use std::io::Write;

use branchscan::cli::{Cli, TreeArgs};
use branchscan::error::ExitCode;

/// Print the diagnostic render of the trie.
pub fn run(cli: &Cli, args: &TreeArgs) -> anyhow::Result<ExitCode> {
    let config = crate::load_config(cli)?;
    let patterns = crate::load_patterns(config.as_ref(), &args.patterns)?;
    let trie = patterns.build();

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", trie)?;
    Ok(ExitCode::Success)
}
