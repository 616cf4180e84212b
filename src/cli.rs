//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Sitecheck post-build consistency checker CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Site root directory (default: search upward from the current directory)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Config file path (default: sitecheck.toml)
    #[arg(short = 'C', long, default_value = "sitecheck.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Check internal links in content documents
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub links: Option<bool>,

    /// Check generated page tree completeness
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub pages: Option<bool>,

    /// Check feed completeness
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub feed: Option<bool>,

    /// Check sitemap completeness
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["sitecheck"]);
        assert_eq!(cli.config, PathBuf::from("sitecheck.toml"));
        assert!(cli.root.is_none());
        assert!(cli.links.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_check_toggles() {
        let cli = Cli::parse_from(["sitecheck", "--links", "false", "--sitemap"]);
        assert_eq!(cli.links, Some(false));
        assert_eq!(cli.sitemap, Some(true));
        assert!(cli.feed.is_none());
    }
}
