//! The reconciler: derives expected routes from content and checks them
//! against the build output, feed, and sitemap.
//!
//! Fatal preconditions (no content source, no build output) abort the run
//! as errors. Everything found past those points is recorded as a
//! diagnostic and checking continues, so one run reports every
//! discrepancy.

pub mod diagnostics;
pub mod report;

use std::fs;

use anyhow::{Result, bail};

use crate::config::CheckConfig;
use crate::content::{self, ContentDocument};
use crate::debug;
use crate::log;
use crate::route::{Route, RouteSet, derive};
use crate::scan;
use crate::utils::plural_count;

use diagnostics::Category;
use report::CheckReport;

/// Everything the content source promises, derived once and shared by all
/// checks.
struct Expected {
    /// Routes a harvested href may legitimately point at.
    known_logical: RouteSet,
    /// Physical route per dated document, with the source path for
    /// diagnostics. Undated documents are absent.
    physical: Vec<(String, Route)>,
    /// The same physical routes as a set, for membership tests.
    physical_set: RouteSet,
}

/// Run every enabled check against the site rooted at `config.root()`.
pub fn run(config: &CheckConfig) -> Result<CheckReport> {
    let Some(content_dir) = content::find_content_dir(config.root(), &config.content.candidates)
    else {
        bail!(
            "no content directory found (checked: {})",
            config.content.candidates.join(", ")
        );
    };

    let files = content::collect_documents(&content_dir, &config.content.extensions);
    if files.is_empty() {
        bail!("no content documents found in {}", content_dir.display());
    }
    log!(
        "scan";
        "{} in {}",
        plural_count(files.len(), "document"),
        config.relative_str(&content_dir)
    );

    let mut report = CheckReport::new();
    let mut documents = Vec::with_capacity(files.len());
    for file in &files {
        documents.push(ContentDocument::from_file(file, &config.checks.links)?);
    }

    let expected = derive_expected(&documents, config, &mut report);

    if config.checks.links.enable {
        check_links(&documents, &expected, config, &mut report);
        debug!("check"; "links: {}", plural_count(report.recoverable_count(Category::Link), "broken link"));
    }
    if config.checks.pages.enable {
        check_output(&expected, config, &mut report)?;
        debug!("check"; "pages: {}", plural_count(report.recoverable_count(Category::Page), "missing page"));
    }
    if config.checks.feed.enable {
        check_feed(&expected, config, &mut report);
        debug!("check"; "feed: {}", plural_count(report.recoverable_count(Category::Feed), "missing item"));
    }
    if config.checks.sitemap.enable {
        check_sitemap(&expected, config, &mut report);
        debug!("check"; "sitemap: {}", plural_count(report.recoverable_count(Category::Sitemap), "missing route"));
    }

    Ok(report)
}

/// Build the expected route sets from the parsed documents.
///
/// Undated documents get an advisory diagnostic and are excluded from the
/// physical set; they still contribute logical routes for link hygiene.
fn derive_expected(
    documents: &[ContentDocument],
    config: &CheckConfig,
    report: &mut CheckReport,
) -> Expected {
    let mut expected = Expected {
        known_logical: RouteSet::default(),
        physical: Vec::new(),
        physical_set: RouteSet::default(),
    };

    // Locale landing pages are always known targets. The tag index is not:
    // it lives in the physical route space and is asserted by the output
    // and sitemap checks instead.
    for locale in &config.routes.locales {
        expected.known_logical.insert(Route::new(format!("/{locale}")));
        expected
            .known_logical
            .insert(Route::new(format!("/{locale}/{}", config.routes.blog_base)));
    }

    for doc in documents {
        let derived = derive::derive(doc, &config.routes);
        expected.known_logical.extend(derived.logical_posts);
        expected.known_logical.extend(derived.logical_tags);

        match derived.physical {
            Some(route) => {
                expected
                    .physical
                    .push((config.relative_str(&doc.source), route.clone()));
                expected.physical_set.insert(route);
            }
            None => {
                report.advisory(
                    Category::Date,
                    Some(&config.relative_str(&doc.source)),
                    doc.raw_date.clone().unwrap_or_else(|| "(none)".to_string()),
                    "missing or unparsable date; excluded from output, feed, and sitemap checks",
                );
            }
        }
    }

    expected
}

/// Every harvested internal href must resolve to a known logical route.
fn check_links(
    documents: &[ContentDocument],
    expected: &Expected,
    config: &CheckConfig,
    report: &mut CheckReport,
) {
    for doc in documents {
        let source = config.relative_str(&doc.source);
        for link in &doc.links {
            if !expected.known_logical.contains(&Route::normalize(link)) {
                report.recoverable(
                    Category::Link,
                    Some(&source),
                    link.clone(),
                    "no matching post, tag, or locale route",
                );
            }
        }
    }
}

/// Every physical route must exist as a page in the build output, along
/// with the tag index.
///
/// A missing output tree is fatal: nothing downstream is meaningful.
fn check_output(expected: &Expected, config: &CheckConfig, report: &mut CheckReport) -> Result<()> {
    let output_routes = scan::output::collect_routes(&config.output_root(), &config.output.marker)?;

    for (source, route) in &expected.physical {
        if !output_routes.contains(route) {
            report.recoverable(
                Category::Page,
                Some(source),
                route.as_str(),
                format!("expected {}{}/{}", config.output.root, route, config.output.marker),
            );
        }
    }

    let tag_index = Route::normalize(&config.routes.tag_index);
    if !output_routes.contains(&tag_index) {
        report.recoverable(
            Category::Page,
            None,
            tag_index.as_str(),
            "missing tag index page",
        );
    }

    Ok(())
}

/// Every physical route must be referenced somewhere in the feed.
///
/// Containment is a substring test on the raw feed text: the canonical
/// route is a substring of any trailing-slash or absolute-URL rendering of
/// itself, so no XML parsing is needed here.
fn check_feed(expected: &Expected, config: &CheckConfig, report: &mut CheckReport) {
    let path = config.root().join(&config.feed.path);
    let Ok(text) = fs::read_to_string(&path) else {
        report.recoverable(
            Category::Feed,
            None,
            config.feed.path.clone(),
            "feed file not found",
        );
        return;
    };

    for (source, route) in &expected.physical {
        if !text.contains(route.as_str()) {
            report.recoverable(Category::Feed, Some(source), route.as_str(), "not referenced in feed");
        }
    }
}

/// The sitemap must advertise every required route and every physical
/// route; optional routes are advisory.
fn check_sitemap(expected: &Expected, config: &CheckConfig, report: &mut CheckReport) {
    let path = config.output_root().join(&config.sitemap.path);
    let Ok(text) = fs::read_to_string(&path) else {
        report.recoverable(
            Category::Sitemap,
            None,
            config.sitemap.path.clone(),
            "sitemap file not found",
        );
        return;
    };

    let advertised: RouteSet = match scan::xml::extract_locations(&text) {
        Ok(locations) => locations.iter().map(|loc| Route::normalize(loc)).collect(),
        Err(err) => {
            report.recoverable(
                Category::Sitemap,
                None,
                config.sitemap.path.clone(),
                format!("unparsable sitemap: {err}"),
            );
            return;
        }
    };

    for route in &config.sitemap.required {
        if !advertised.contains(&Route::normalize(route)) {
            report.recoverable(
                Category::Sitemap,
                None,
                route.clone(),
                "required route missing from sitemap",
            );
        }
    }
    for route in &config.sitemap.optional {
        if !advertised.contains(&Route::normalize(route)) {
            report.advisory(
                Category::Sitemap,
                None,
                route.clone(),
                "optional route missing from sitemap",
            );
        }
    }

    for (source, route) in &expected.physical {
        if !advertised.contains(route) {
            report.recoverable(
                Category::Sitemap,
                Some(source),
                route.as_str(),
                "post route missing from sitemap",
            );
        }
    }
}

// ============================================================================
// tests
// ============================================================================
