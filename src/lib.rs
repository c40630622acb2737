//! # URL Redirector
//!
//! A small path-to-URL redirect service built with Axum.
//!
//! Incoming paths are checked against a chain of resolvers. The first
//! match answers `302 Found` with the target in `Location`; a path no
//! resolver claims falls through to the wrapped fallback handler.
//!
//! ## Resolvers
//!
//! - [`resolver::TableResolver`] - exact-match hash table
//! - [`resolver::RuleResolver`] - ordered YAML rule list, first match wins
//!
//! Either one wraps any fallback through
//! [`middleware::redirect::RedirectLayer`], including a service that is
//! itself a wrapped resolver, so chains of arbitrary depth compose out
//! of plain tower layering.
//!
//! ## Quick Start
//!
//! ```bash
//! export STATIC_REDIRECTS="/devfest=https://devfest.example.com"
//! export REDIRECTS_FILE="redirects.yaml"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod resolver;
pub mod routes;
pub mod server;

pub use error::RulesError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library
/// users and integration tests.
pub mod prelude {
    pub use crate::error::RulesError;
    pub use crate::middleware::redirect::RedirectLayer;
    pub use crate::resolver::{
        Action, REDIRECT_STATUS, RedirectRule, Resolver, RuleResolver, TableResolver, parse_rules,
    };
    pub use crate::routes::app_router;
}
