//! Expected-route derivation for one content document.

use crate::config::RoutesConfig;
use crate::content::ContentDocument;
use crate::route::Route;

/// Routes a single document is expected to occupy.
#[derive(Debug, Default)]
pub struct DerivedRoutes {
    /// Locale-prefixed post routes, one per configured locale.
    pub logical_posts: Vec<Route>,
    /// Locale-prefixed tag routes, one per locale and tag.
    pub logical_tags: Vec<Route>,
    /// Date-based output route. Absent when the document has no parsable
    /// date; such documents still participate in link hygiene.
    pub physical: Option<Route>,
}

/// Derive the logical and physical routes for a document.
///
/// The physical route drops the day component: output is organized by
/// month, `/{post_prefix}/{YYYY}/{MM}/{slug}`.
pub fn derive(doc: &ContentDocument, routes: &RoutesConfig) -> DerivedRoutes {
    let mut derived = DerivedRoutes::default();

    for locale in &routes.locales {
        derived
            .logical_posts
            .push(Route::new(format!("/{locale}/{}/{}", routes.blog_base, doc.slug)));
        for tag in &doc.tags {
            derived
                .logical_tags
                .push(Route::new(format!("/{locale}/{}/tags/{tag}", routes.blog_base)));
        }
    }

    derived.physical = doc.date.map(|date| {
        Route::new(format!(
            "/{}/{:04}/{:02}/{}",
            routes.post_prefix, date.year, date.month, doc.slug
        ))
    });

    derived
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentDocument;
    use crate::utils::date::Date;
    use std::path::PathBuf;

    fn doc(slug: &str, date: Option<&str>, tags: &[&str]) -> ContentDocument {
        ContentDocument {
            source: PathBuf::from(format!("content/posts/{slug}.md")),
            slug: slug.to_string(),
            date: date.and_then(Date::parse),
            raw_date: date.map(str::to_string),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            links: Vec::new(),
        }
    }

    fn routes() -> RoutesConfig {
        RoutesConfig::default()
    }

    #[test]
    fn test_logical_routes_per_locale() {
        let derived = derive(&doc("hello", Some("2025-10-05"), &["rust"]), &routes());
        let posts: Vec<&str> = derived.logical_posts.iter().map(Route::as_str).collect();
        assert!(posts.contains(&"/en/blog/hello"));
        assert!(posts.contains(&"/fr/blog/hello"));
        assert_eq!(posts.len(), routes().locales.len());

        let tags: Vec<&str> = derived.logical_tags.iter().map(Route::as_str).collect();
        assert!(tags.contains(&"/en/blog/tags/rust"));
        assert_eq!(tags.len(), routes().locales.len());
    }

    #[test]
    fn test_physical_route_drops_day() {
        let derived = derive(&doc("hello", Some("2025-10-05"), &[]), &routes());
        assert_eq!(derived.physical.unwrap().as_str(), "/posts/2025/10/hello");
    }

    #[test]
    fn test_physical_route_zero_pads_month() {
        let derived = derive(&doc("hello", Some("2025-03-31"), &[]), &routes());
        assert_eq!(derived.physical.unwrap().as_str(), "/posts/2025/03/hello");
    }

    #[test]
    fn test_no_date_no_physical_route() {
        let derived = derive(&doc("hello", None, &[]), &routes());
        assert!(derived.physical.is_none());
        assert!(!derived.logical_posts.is_empty());
    }
}
