//! Output-tree route discovery.
//!
//! A directory in the built page tree is a page iff it directly contains
//! the marker file (the rendered entry document for that route).

use std::path::Path;

use anyhow::{Result, bail};
use jwalk::{Parallelism, WalkDir};

use crate::route::{Route, RouteSet};

/// Walk a built page tree and collect the route of every directory that
/// directly contains the marker file.
///
/// The tree root maps to `"/"`; every other page directory maps to
/// `"/" + path relative to the root`, with forward slashes.
///
/// # Errors
///
/// Fails when the tree root is missing or not a directory: there is
/// nothing meaningful to validate without a build output.
pub fn collect_routes(root: &Path, marker: &str) -> Result<RouteSet> {
    if !root.is_dir() {
        bail!("output directory not found: {}", root.display());
    }

    let mut routes = RouteSet::default();

    for entry in WalkDir::new(root)
        .parallelism(Parallelism::Serial)
        .into_iter()
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !name.eq_ignore_ascii_case(marker) {
            continue;
        }

        let path = entry.path();
        let dir = path.parent().unwrap_or(root);
        let rel = dir.strip_prefix(root).unwrap_or(dir);
        routes.insert(dir_route(rel));
    }

    Ok(routes)
}

/// Convert a root-relative directory path to its canonical route.
fn dir_route(rel: &Path) -> Route {
    let rel = rel.to_string_lossy().replace('\\', "/");
    if rel.is_empty() {
        Route::new("/")
    } else {
        Route::new(format!("/{rel}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn page(root: &Path, rel: &str) {
        let dir = root.join(rel);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html></html>").unwrap();
    }

    #[test]
    fn test_collect_routes() {
        let temp = TempDir::new().unwrap();
        page(temp.path(), "");
        page(temp.path(), "tags");
        page(temp.path(), "posts/2025/10/hello");

        let routes = collect_routes(temp.path(), "index.html").unwrap();
        assert_eq!(routes.len(), 3);
        assert!(routes.contains(&Route::new("/")));
        assert!(routes.contains(&Route::new("/tags")));
        assert!(routes.contains(&Route::new("/posts/2025/10/hello")));
    }

    #[test]
    fn test_directories_without_marker_skipped() {
        let temp = TempDir::new().unwrap();
        page(temp.path(), "tags");
        let empty = temp.path().join("posts/2025");
        std::fs::create_dir_all(&empty).unwrap();
        std::fs::write(empty.join("notes.txt"), "").unwrap();

        let routes = collect_routes(temp.path(), "index.html").unwrap();
        assert_eq!(routes.len(), 1);
        assert!(routes.contains(&Route::new("/tags")));
    }

    #[test]
    fn test_marker_match_is_case_insensitive() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("about");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("Index.HTML"), "").unwrap();

        let routes = collect_routes(temp.path(), "index.html").unwrap();
        assert!(routes.contains(&Route::new("/about")));
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("public");
        assert!(collect_routes(&missing, "index.html").is_err());
    }
}
