//! Diagnostic taxonomy for a check run.

use std::collections::BTreeMap;

/// How a discrepancy affects the run outcome.
///
/// Fatal preconditions (missing content source, missing build output) abort
/// the run as errors before any diagnostic is recorded, so they never
/// appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Reported individually and fails the run; checking continues.
    Recoverable,
    /// Reported; never fails the run.
    Advisory,
}

/// Which check produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    /// Broken internal link in a content document.
    Link,
    /// Missing page in the build output tree.
    Page,
    /// Physical route not referenced by the feed.
    Feed,
    /// Route missing from the sitemap.
    Sitemap,
    /// Document excluded from date-dependent checks.
    Date,
}

impl Category {
    /// All categories in reporting order.
    pub const ALL: [Self; 5] = [Self::Link, Self::Page, Self::Feed, Self::Sitemap, Self::Date];

    pub fn label(self) -> &'static str {
        match self {
            Self::Link => "links",
            Self::Page => "pages",
            Self::Feed => "feed",
            Self::Sitemap => "sitemap",
            Self::Date => "dates",
        }
    }
}

/// A single recorded discrepancy. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub category: Category,
    /// Source document the discrepancy was found in, when one exists.
    pub source: Option<String>,
    /// The route or href at fault.
    pub target: String,
    /// Context with enough detail to fix the issue without reading the
    /// checker's source.
    pub reason: String,
}

/// Aggregate outcome derived deterministically from the diagnostic
/// sequence.
#[derive(Debug, Clone, Default)]
pub struct RunResult {
    /// Recoverable diagnostics per category.
    pub by_category: BTreeMap<Category, usize>,
    /// Total recoverable diagnostics.
    pub recoverable: usize,
    /// Total advisory diagnostics.
    pub advisory: usize,
    /// Success iff zero recoverable diagnostics, regardless of advisories.
    pub success: bool,
}
