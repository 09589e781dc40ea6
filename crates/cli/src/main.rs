// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Branchscan CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use branchscan::cli::{Cli, Command, PatternArgs};
use branchscan::config::{self, Config};
use branchscan::discovery;
use branchscan::env;
use branchscan::error::{Error, ExitCode};
use branchscan::patterns::PatternSet;

mod cmd_scan;
mod cmd_tree;

fn init_logging() {
    let filter = EnvFilter::try_from_env(env::log_var()).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("branchscan: {}", e);
            match e.downcast_ref::<Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Scan(args)) => cmd_scan::run(&cli, args),
        Some(Command::Tree(args)) => cmd_tree::run(&cli, args),
    }
}

/// Load the explicit or discovered config, if any.
fn load_config(cli: &Cli) -> anyhow::Result<Option<Config>> {
    let cwd = std::env::current_dir()?;
    match discovery::resolve_config(cli.config.as_deref(), &cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            Ok(Some(config::load_with_warnings(&path)?))
        }
        None => {
            tracing::debug!("no config found, using command-line patterns only");
            Ok(None)
        }
    }
}

/// Gather patterns from the config and the command line.
fn load_patterns(config: Option<&Config>, args: &PatternArgs) -> anyhow::Result<PatternSet> {
    let patterns = PatternSet::collect(config, &args.patterns, &args.pattern_files)?;
    if patterns.is_empty() {
        return Err(Error::Argument(
            "no patterns given (use -e, -f or [patterns] in branchscan.toml)".to_string(),
        )
        .into());
    }
    tracing::debug!(patterns = patterns.len(), "collected patterns");
    Ok(patterns)
}
