// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan command implementation.

use branchscan::cli::{Cli, OutputFormat, ScanArgs};
use branchscan::color::resolve_color;
use branchscan::error::ExitCode;
use branchscan::output::FormatOptions;
use branchscan::output::json::{JsonFormatter, ScanOutput};
use branchscan::output::text::TextFormatter;
use branchscan::runner::{self, RunnerConfig, ScanRunner};
use branchscan::walker::{FileWalker, WalkerConfig};

/// Run the scan command.
pub fn run(cli: &Cli, args: &ScanArgs) -> anyhow::Result<ExitCode> {
    let config = crate::load_config(cli)?;
    let patterns = crate::load_patterns(config.as_ref(), &args.patterns)?;
    let scan_config = config.map(|c| c.scan).unwrap_or_default();

    let runner = ScanRunner::new(
        &patterns,
        RunnerConfig {
            verify: args.verify || scan_config.verify,
            max_file_size: scan_config.max_file_size,
        },
    )?;

    let reports = if args.paths.is_empty() {
        tracing::trace!("scanning stdin");
        vec![runner.run_stdin()?]
    } else {
        let walker = FileWalker::new(WalkerConfig {
            max_depth: Some(args.max_depth),
            ..WalkerConfig::default()
        });
        let (files, stats) = walker.collect(&args.paths)?;
        if stats.symlink_loops > 0 || stats.errors > 0 {
            tracing::debug!(
                symlink_loops = stats.symlink_loops,
                errors = stats.errors,
                "walk finished with problems"
            );
        }
        runner.run(&files)?
    };

    match args.output {
        OutputFormat::Text => {
            let options = FormatOptions {
                show_misses: args.show_misses,
            };
            let mut formatter =
                TextFormatter::stdout(resolve_color(args.color, args.no_color), options);
            for report in &reports {
                formatter.write_report(report)?;
            }
        }
        OutputFormat::Json => {
            let output = ScanOutput::new(patterns.len(), &reports);
            JsonFormatter::new(std::io::stdout().lock()).write(&output)?;
        }
    }

    Ok(runner::exit_code(&reports))
}
