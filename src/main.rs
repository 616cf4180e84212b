//! Sitecheck - post-build consistency checker for static content sites.
//!
//! Verifies that every content document has a correctly routed page in the
//! build output, an entry in the feed, and an entry in the sitemap, and that
//! internal links in content resolve to a known route.

mod check;
mod cli;
mod config;
mod content;
mod logger;
mod route;
mod scan;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::CheckConfig;
use utils::plural_count;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = CheckConfig::load(&cli)?;
    let report = check::run(&config)?;

    // Print detailed report, then the final summary line
    report.print();
    log!("check"; "{report}");

    print_summary(&report)
}

/// Return an error when the run failed, so the process exits nonzero.
fn print_summary(report: &check::report::CheckReport) -> Result<()> {
    let result = report.result();
    if result.success {
        Ok(())
    } else {
        anyhow::bail!("found {}", plural_count(result.recoverable, "error"));
    }
}
