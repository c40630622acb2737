//! Path-to-URL redirect resolution.
//!
//! A resolver inspects a request path and decides between two actions:
//! redirect to a mapped URL, or hand the request to a fallback handler.
//! Two lookup strategies are provided:
//!
//! - [`TableResolver`] - exact-match hash table, O(1) average lookup
//! - [`RuleResolver`] - ordered rule list, first match wins
//!
//! Both are immutable after construction and safe to share across
//! concurrent requests. The decision itself is pure and has no error
//! path; the same input always yields the same [`Action`].

mod rules;
mod table;

pub use rules::{RedirectRule, RuleResolver, parse_rules};
pub use table::TableResolver;

use axum::http::StatusCode;
use std::borrow::Cow;

/// Status code sent for every matched redirect.
pub const REDIRECT_STATUS: StatusCode = StatusCode::FOUND;

/// Outcome of resolving a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Respond with [`REDIRECT_STATUS`] and `Location: <location>`.
    Redirect { location: String },
    /// Hand the request to the wrapped fallback, untouched.
    Delegate,
}

/// A redirect lookup strategy.
///
/// Implementations supply [`target`](Resolver::target); the shared
/// normalize-then-decide step lives in [`resolve`](Resolver::resolve).
pub trait Resolver: Send + Sync + 'static {
    /// Returns the redirect target for an already-normalized path.
    fn target(&self, path: &str) -> Option<&str>;

    /// Maps a request path to an [`Action`].
    ///
    /// Resolution is total: every path yields either a redirect or a
    /// delegation. A missing mapping is not an error.
    fn resolve(&self, path: &str) -> Action {
        let path = normalize_path(path);
        match self.target(&path) {
            Some(url) => Action::Redirect {
                location: url.to_owned(),
            },
            None => Action::Delegate,
        }
    }
}

/// Ensures the comparison key starts with `/`.
///
/// Paths arriving through the HTTP server are already absolute; the
/// prepend only matters for callers feeding bare paths directly.
fn normalize_path(path: &str) -> Cow<'_, str> {
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_absolute_paths() {
        assert_eq!(normalize_path("/already/absolute"), "/already/absolute");
        assert_eq!(normalize_path("/"), "/");
    }

    #[test]
    fn normalize_prepends_missing_slash() {
        assert_eq!(normalize_path("bare-path"), "/bare-path");
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn resolution_is_deterministic() {
        let resolver = TableResolver::from_pairs([("/a", "https://a.example.com")]);

        let first = resolver.resolve("/a");
        let second = resolver.resolve("/a");
        assert_eq!(first, second);

        let first_miss = resolver.resolve("/missing");
        let second_miss = resolver.resolve("/missing");
        assert_eq!(first_miss, second_miss);
        assert_eq!(first_miss, Action::Delegate);
    }

    #[test]
    fn bare_and_absolute_forms_resolve_alike() {
        let resolver = TableResolver::from_pairs([("/docs", "https://docs.example.com")]);
        assert_eq!(resolver.resolve("docs"), resolver.resolve("/docs"));
    }
}
