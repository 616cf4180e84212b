//! Configuration sections and their defaults.
//!
//! Everything here is run configuration, not runtime input: the defaults
//! describe the conventional site layout and can be overridden per project
//! in `sitecheck.toml`.
//!
//! # Example
//!
//! ```toml
//! [routes]
//! locales = ["en", "fr"]
//! post_prefix = "posts"
//!
//! [checks.links]
//! enable = false
//! ```

use serde::{Deserialize, Serialize};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

// ============================================================================
// [content]
// ============================================================================

/// `[content]` - where source documents live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Candidate content directories, probed in order; first existing wins.
    pub candidates: Vec<String>,

    /// Recognized markup extensions (matched case-insensitively).
    pub extensions: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            candidates: strings(&[
                "content/posts",
                "content/blog",
                "posts",
                "app/content/posts",
                "app/content/blog",
            ]),
            extensions: strings(&["md", "mdx"]),
        }
    }
}

// ============================================================================
// [routes]
// ============================================================================

/// `[routes]` - how routes are derived from documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Locales for logical (link-hygiene) routes.
    pub locales: Vec<String>,

    /// Base segment of logical routes: `/{locale}/{blog_base}/{slug}`.
    pub blog_base: String,

    /// Leading segment of physical routes: `/{post_prefix}/{YYYY}/{MM}/{slug}`.
    pub post_prefix: String,

    /// Route of the tag index page, required in output and sitemap.
    pub tag_index: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            locales: strings(&["en", "fr", "ht", "es"]),
            blog_base: "blog".to_string(),
            post_prefix: "posts".to_string(),
            tag_index: "/tags".to_string(),
        }
    }
}

// ============================================================================
// [output]
// ============================================================================

/// `[output]` - the built page tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Build output root, relative to the site root.
    pub root: String,

    /// Marker filename whose presence makes a directory a page.
    pub marker: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: "public".to_string(),
            marker: "index.html".to_string(),
        }
    }
}

// ============================================================================
// [feed] / [sitemap]
// ============================================================================

/// `[feed]` - the syndication feed artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Feed file path, relative to the site root.
    pub path: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            path: "feed.xml".to_string(),
        }
    }
}

/// `[sitemap]` - the sitemap artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Sitemap file path, relative to the output root.
    pub path: String,

    /// Routes that must be advertised; absence is a recoverable error.
    pub required: Vec<String>,

    /// Routes that should be advertised; absence is advisory only.
    pub optional: Vec<String>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            path: "sitemap.xml".to_string(),
            required: strings(&["/", "/tags"]),
            optional: Vec::new(),
        }
    }
}

// ============================================================================
// [checks.*]
// ============================================================================

/// `[checks]` - capability flags for the four checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecksConfig {
    /// Internal link hygiene against logical routes.
    pub links: LinksCheckConfig,

    /// Output-tree completeness for physical routes.
    pub pages: PagesCheckConfig,

    /// Feed coverage of physical routes.
    pub feed: FeedCheckConfig,

    /// Sitemap coverage of required and physical routes.
    pub sitemap: SitemapCheckConfig,
}

/// `[checks.links]` - link hygiene settings.
///
/// The logical route space this check validates against is derived purely
/// from content; disable it for sites that never emit locale-prefixed pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksCheckConfig {
    /// Enable the link hygiene check.
    pub enable: bool,

    /// Path prefixes whose hrefs are never checked (static-asset roots).
    pub asset_prefixes: Vec<String>,

    /// Extensions whose hrefs are never checked (binary/static assets).
    pub asset_extensions: Vec<String>,
}

impl Default for LinksCheckConfig {
    fn default() -> Self {
        Self {
            enable: true,
            asset_prefixes: strings(&["/images/", "/icons/", "/fonts/"]),
            asset_extensions: strings(&[
                "png", "jpg", "jpeg", "gif", "webp", "svg", "ico", "pdf",
            ]),
        }
    }
}

/// `[checks.pages]` - output-tree completeness settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesCheckConfig {
    /// Enable the output completeness check.
    pub enable: bool,
}

impl Default for PagesCheckConfig {
    fn default() -> Self {
        Self { enable: true }
    }
}

/// `[checks.feed]` - feed completeness settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedCheckConfig {
    /// Enable the feed completeness check.
    pub enable: bool,
}

impl Default for FeedCheckConfig {
    fn default() -> Self {
        Self { enable: true }
    }
}

/// `[checks.sitemap]` - sitemap completeness settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapCheckConfig {
    /// Enable the sitemap completeness check.
    pub enable: bool,
}

impl Default for SitemapCheckConfig {
    fn default() -> Self {
        Self { enable: true }
    }
}
