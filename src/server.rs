//! HTTP server initialization and runtime setup.
//!
//! Builds the resolver chain from configuration and runs the Axum
//! server until a shutdown signal arrives.

use crate::config::Config;
use crate::resolver::{RuleResolver, TableResolver, parse_rules};
use crate::routes::app_router;

use anyhow::{Context, Result};
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// A configured rules file that cannot be read or parsed is fatal: the
/// server refuses to start rather than silently dropping mappings.
///
/// # Errors
///
/// Returns an error if:
/// - The rules file is unreadable or malformed
/// - The listen address is invalid or the bind fails
/// - The server runtime errors
pub async fn run(config: Config) -> Result<()> {
    let table = TableResolver::new(config.static_redirects.clone());
    if !table.is_empty() {
        tracing::info!("Static table: {} redirects", table.len());
    }

    let rules = match &config.rules_file {
        Some(path) => {
            let payload = std::fs::read(path)
                .with_context(|| format!("Failed to read rules file {}", path.display()))?;
            let rules = parse_rules(&payload)
                .with_context(|| format!("Failed to parse rules file {}", path.display()))?;
            tracing::info!("Declarative rules: {} entries", rules.len());
            Some(RuleResolver::new(rules))
        }
        None => None,
    };

    let app = app_router(table, rules);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to install shutdown handler: {e}"),
    }
}
