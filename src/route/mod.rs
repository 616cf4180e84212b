//! Route strings and route sets.
//!
//! Two kinds of routes flow through the checker and are held in separate
//! sets that are never compared across kinds:
//! - *logical* routes: locale-prefixed paths used only for link hygiene
//!   (`/en/blog/hello`, `/en/blog/tags/rust`)
//! - *physical* routes: date-based paths the build actually produces
//!   (`/posts/2025/10/hello`)

pub mod derive;

use rustc_hash::FxHashSet;
use std::fmt;

/// A named set of routes of one kind. Set semantics enforce uniqueness.
pub type RouteSet = FxHashSet<Route>;

/// A normalized absolute path: forward slashes, no trailing slash except
/// for the root route `"/"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route(String);

impl Route {
    /// Build from an already-canonical path (internal route constructors).
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Normalize a raw location for comparison.
    ///
    /// Strips the scheme/host from absolute URLs, converts backslashes to
    /// forward slashes, and trims trailing slashes (the root stays `"/"`).
    pub fn normalize(raw: &str) -> Self {
        let path = strip_host(raw).replace('\\', "/");
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            Self("/".to_string())
        } else if trimmed.starts_with('/') {
            Self(trimmed.to_string())
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip `scheme://host` from an absolute URL, keeping only the path.
fn strip_host(loc: &str) -> &str {
    match loc.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("/", |i| &rest[i..]),
        None => loc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trailing_slash() {
        assert_eq!(Route::normalize("/posts/2025/10/hello/").as_str(), "/posts/2025/10/hello");
        assert_eq!(Route::normalize("/tags//").as_str(), "/tags");
        assert_eq!(Route::normalize("/tags").as_str(), "/tags");
    }

    #[test]
    fn test_normalize_root() {
        assert_eq!(Route::normalize("/").as_str(), "/");
        assert_eq!(Route::normalize("///").as_str(), "/");
    }

    #[test]
    fn test_normalize_strips_host() {
        assert_eq!(
            Route::normalize("https://example.com/posts/2025/10/hello/").as_str(),
            "/posts/2025/10/hello"
        );
        assert_eq!(Route::normalize("https://example.com/").as_str(), "/");
        assert_eq!(Route::normalize("https://example.com").as_str(), "/");
    }

    #[test]
    fn test_normalize_separators() {
        assert_eq!(Route::normalize("posts\\2025\\hello").as_str(), "/posts/2025/hello");
    }

    #[test]
    fn test_route_set_dedups() {
        let mut set = RouteSet::default();
        set.insert(Route::normalize("/tags/"));
        set.insert(Route::normalize("/tags"));
        assert_eq!(set.len(), 1);
    }
}
