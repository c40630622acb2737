//! Top-level router: the resolver chain layered over routed fallbacks.
//!
//! # Route Structure
//!
//! - `GET /health` - Liveness probe (public)
//! - anything else - Resolver chain, then the 404 fallback
//!
//! # Resolver Chain
//!
//! Redirect layers run outermost first: declarative rules (when
//! configured), then the static table, then whatever the router itself
//! serves. A path claimed by an outer layer never reaches the layers
//! or routes beneath it.

use axum::Router;
use axum::routing::get;

use crate::handlers::{health_handler, not_found};
use crate::middleware::redirect::RedirectLayer;
use crate::middleware::tracing;
use crate::resolver::{RuleResolver, TableResolver};

/// Constructs the application router with the resolver chain applied.
///
/// `rules` is optional; without it only the static table resolves. The
/// rule resolver is layered outside the table, so a declarative entry
/// wins when both map the same path.
pub fn app_router(table: TableResolver, rules: Option<RuleResolver>) -> Router {
    let router = Router::new()
        .route("/health", get(health_handler))
        .fallback(not_found)
        .layer(RedirectLayer::new(table));

    let router = match rules {
        Some(rules) => router.layer(RedirectLayer::new(rules)),
        None => router,
    };

    router.layer(tracing::layer())
}
