//! Content source discovery and document parsing.

pub mod frontmatter;
pub mod links;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jwalk::{Parallelism, WalkDir};

use crate::config::LinksCheckConfig;
use crate::utils::date::Date;
use frontmatter::Frontmatter;

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// One parsed content document. Immutable after construction, lives for a
/// single validation run.
#[derive(Debug)]
pub struct ContentDocument {
    /// Source file path.
    pub source: PathBuf,
    /// Effective slug: frontmatter `slug` if present and non-empty, else
    /// the filename with its extension stripped.
    pub slug: String,
    /// Parsed publication date. Absent when missing or malformed; such
    /// documents are excluded from output/feed/sitemap checks.
    pub date: Option<Date>,
    /// Raw frontmatter date value, kept for diagnostics.
    pub raw_date: Option<String>,
    /// Frontmatter tags.
    pub tags: Vec<String>,
    /// Internal hrefs harvested from the body (verbatim, deduplicated).
    pub links: Vec<String>,
}

impl ContentDocument {
    /// Read and parse a content file.
    pub fn from_file(path: &Path, links_config: &LinksCheckConfig) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Self::from_text(path, &text, links_config))
    }

    fn from_text(path: &Path, text: &str, links_config: &LinksCheckConfig) -> Self {
        let fm = Frontmatter::parse(text);
        let slug = fm
            .slug
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| file_stem(path));
        let date = fm.date.as_deref().and_then(Date::parse);
        let links = links::harvest(text, links_config);

        Self {
            source: path.to_path_buf(),
            slug,
            date,
            raw_date: fm.date,
            tags: fm.tags,
            links,
        }
    }
}

/// Probe the configured candidate directories under `root`; the first
/// existing directory wins.
pub fn find_content_dir(root: &Path, candidates: &[String]) -> Option<PathBuf> {
    candidates.iter().map(|rel| root.join(rel)).find(|p| p.is_dir())
}

/// Collect content files under `dir` with a recognized extension.
///
/// Sorted for deterministic reporting order; all comparisons downstream are
/// set-based, so order never changes diagnostic content.
pub fn collect_documents(dir: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .parallelism(Parallelism::Serial)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|e| e.path())
        .filter(|p| has_extension(p, extensions))
        .collect();
    files.sort();
    files
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| ext.eq_ignore_ascii_case(want)))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
