//! Run configuration for `sitecheck.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                          |
//! |--------------|--------------------------------------------------|
//! | `[content]`  | Content dir candidates, markup extensions        |
//! | `[routes]`   | Locales, blog base, post prefix, tag index       |
//! | `[output]`   | Build output root, page marker filename          |
//! | `[feed]`     | Feed file location                               |
//! | `[sitemap]`  | Sitemap location, required/optional routes       |
//! | `[checks.*]` | Capability flags for the four checks             |
//!
//! The config file is optional; defaults describe the conventional layout.

mod error;
mod section;

pub use error::ConfigError;
pub use section::{
    ChecksConfig, ContentConfig, FeedConfig, LinksCheckConfig, OutputConfig, RoutesConfig,
    SitemapConfig,
};

use crate::cli::Cli;
use crate::log;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing sitecheck.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Site root directory (internal use only)
    #[serde(skip)]
    root: PathBuf,

    /// Content source settings
    pub content: ContentConfig,

    /// Route derivation settings
    pub routes: RoutesConfig,

    /// Build output settings
    pub output: OutputConfig,

    /// Feed artifact settings
    pub feed: FeedConfig,

    /// Sitemap artifact settings
    pub sitemap: SitemapConfig,

    /// Per-check capability flags
    pub checks: ChecksConfig,
}

impl CheckConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// The config file is searched upward from the start directory; when
    /// found, the site root defaults to the file's directory. An explicit
    /// `--root` always wins; with neither, the current directory is used.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current working directory")?;
        let start = cli.root.clone().unwrap_or(cwd);

        let found = find_config_file(&start, &cli.config);
        let mut config = match &found {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };

        config.root = match (&cli.root, &found) {
            (Some(root), _) => root.clone(),
            (None, Some(path)) => path.parent().map_or_else(|| start.clone(), Path::to_path_buf),
            (None, None) => start.clone(),
        };
        config.apply_cli(cli);

        crate::debug!("config"; "site root: {}", config.root.display());
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            log!("warning"; "unknown fields in {}, ignoring:", path.display());
            for field in &ignored {
                eprintln!("- {field}");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// CLI flags override per-check enable settings.
    fn apply_cli(&mut self, cli: &Cli) {
        update_option(&mut self.checks.links.enable, cli.links.as_ref());
        update_option(&mut self.checks.pages.enable, cli.pages.as_ref());
        update_option(&mut self.checks.feed.enable, cli.feed.as_ref());
        update_option(&mut self.checks.sitemap.enable, cli.sitemap.as_ref());
    }

    /// Get the site root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Set the site root directory
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Absolute path of the build output root.
    pub fn output_root(&self) -> PathBuf {
        self.root.join(&self.output.root)
    }

    /// Path relative to the site root, for reporting.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    /// Root-relative path as a forward-slash string, for diagnostics.
    pub fn relative_str(&self, path: &Path) -> String {
        self.relative(path).to_string_lossy().replace('\\', "/")
    }
}

/// Update config option if CLI value is provided.
fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
    if let Some(option) = cli_option {
        *config_option = option.clone();
    }
}

/// Search upward from `start` for the config file.
fn find_config_file(start: &Path, name: &Path) -> Option<PathBuf> {
    start.ancestors().map(|dir| dir.join(name)).find(|p| p.is_file())
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse config from TOML, panicking on unknown fields (to catch typos in
/// tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> CheckConfig {
    let (parsed, ignored) = CheckConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
