//! Internal-link harvesting from raw document text.
//!
//! Two surface syntaxes are scanned: markdown inline links `[text](/path)`
//! and attribute-style `href="/path"`. Only absolute-path targets are
//! collected; trailing fragment identifiers are discarded. Asset references
//! are filtered out entirely - they belong to the copy/staging step, not the
//! route space, and are never checked.

use regex::Regex;
use rustc_hash::FxHashSet;
use std::sync::LazyLock;

use crate::config::LinksCheckConfig;

// ASCII whitespace classes only: the regex build excludes the Unicode
// tables, so `\s` is not available here.

/// Markdown inline link with an absolute-path target: `[text](/path)`.
/// The capture stops before any `#fragment`, whitespace, or closing paren.
static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]\((/[^) \t\r\n#]+)").unwrap());

/// Attribute-style reference: `href="/path"` or `href='/path'`.
static HREF_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href[ \t]*=[ \t]*["'](/[^"' \t\r\n#]+)"#).unwrap());

/// Harvest deduplicated internal hrefs from `text`.
///
/// Returned hrefs are verbatim (unnormalized); normalization happens at
/// comparison time in the reconciler.
pub fn harvest(text: &str, config: &LinksCheckConfig) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut hrefs = Vec::new();

    let captures = MARKDOWN_LINK
        .captures_iter(text)
        .chain(HREF_ATTR.captures_iter(text));

    for caps in captures {
        let href = &caps[1];
        if is_asset(href, config) {
            continue;
        }
        if seen.insert(href.to_string()) {
            hrefs.push(href.to_string());
        }
    }

    hrefs
}

/// Asset references are excluded unconditionally, regardless of
/// well-formedness.
fn is_asset(href: &str, config: &LinksCheckConfig) -> bool {
    if config
        .asset_prefixes
        .iter()
        .any(|prefix| href.starts_with(prefix.as_str()))
    {
        return true;
    }

    let Some((_, ext)) = href.rsplit_once('.') else {
        return false;
    };
    config
        .asset_extensions
        .iter()
        .any(|want| ext.eq_ignore_ascii_case(want))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harvest_default(text: &str) -> Vec<String> {
        harvest(text, &LinksCheckConfig::default())
    }

    #[test]
    fn test_markdown_links() {
        let hrefs = harvest_default("See [this post](/en/blog/hello) and [tags](/en/blog/tags/rust).");
        assert_eq!(hrefs, vec!["/en/blog/hello", "/en/blog/tags/rust"]);
    }

    #[test]
    fn test_href_attributes() {
        let hrefs = harvest_default(r#"<Link href="/en/blog/hello">post</Link> <a href='/fr'>fr</a>"#);
        assert_eq!(hrefs, vec!["/en/blog/hello", "/fr"]);
    }

    #[test]
    fn test_fragment_discarded() {
        let hrefs = harvest_default("[section](/en/blog/hello#intro) and <a href=\"/en/blog/hello#outro\">x</a>");
        assert_eq!(hrefs, vec!["/en/blog/hello"]);
    }

    #[test]
    fn test_deduplication() {
        let hrefs = harvest_default("[a](/en/blog/hello) [b](/en/blog/hello)");
        assert_eq!(hrefs, vec!["/en/blog/hello"]);
    }

    #[test]
    fn test_relative_and_external_links_ignored() {
        let hrefs = harvest_default("[rel](./other.md) [ext](https://example.com/x) [abs](/en)");
        assert_eq!(hrefs, vec!["/en"]);
    }

    #[test]
    fn test_asset_prefixes_excluded() {
        let hrefs = harvest_default("[img](/images/photo) [icon](/icons/x) [font](/fonts/y) [ok](/en)");
        assert_eq!(hrefs, vec!["/en"]);
    }

    #[test]
    fn test_asset_extensions_excluded_case_insensitive() {
        let hrefs =
            harvest_default("[a](/media/shot.PNG) [b](/docs/file.pdf) <a href=\"/x.webp\">x</a> [ok](/en)");
        assert_eq!(hrefs, vec!["/en"]);
    }

    #[test]
    fn test_spaced_href_attribute() {
        let hrefs = harvest_default("<a href = '/en/blog/hello'>x</a>\n<a href\t=\t\"/fr\">y</a>");
        assert_eq!(hrefs, vec!["/en/blog/hello", "/fr"]);
    }

    #[test]
    fn test_target_stops_at_whitespace() {
        let hrefs = harvest_default("[a](/en/blog/hello \"title\")");
        assert_eq!(hrefs, vec!["/en/blog/hello"]);
    }

    #[test]
    fn test_non_asset_dot_segment_kept() {
        let hrefs = harvest_default("[versioned](/en/blog/v1.2)");
        assert_eq!(hrefs, vec!["/en/blog/v1.2"]);
    }
}
