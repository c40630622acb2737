//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `REDIRECTS_FILE` - Path to a YAML file with declarative redirect rules
//! - `STATIC_REDIRECTS` - Comma-separated `path=url` pairs for the static table
//!
//! Every variable has a usable default; a service started with an empty
//! environment simply delegates all traffic to the 404 fallback.

use anyhow::{Context, Result, bail};
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Declarative rule list, checked before the static table.
    pub rules_file: Option<PathBuf>,
    /// Exact-match redirects baked in at startup.
    pub static_redirects: HashMap<String, String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `STATIC_REDIRECTS` is set but cannot be
    /// parsed as `path=url` pairs.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let rules_file = env::var("REDIRECTS_FILE").ok().map(PathBuf::from);

        let static_redirects = match env::var("STATIC_REDIRECTS") {
            Ok(raw) => {
                parse_static_redirects(&raw).context("Failed to parse STATIC_REDIRECTS")?
            }
            Err(_) => HashMap::new(),
        };

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            rules_file,
            static_redirects,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        match &self.rules_file {
            Some(path) => tracing::info!("  Rules file: {}", path.display()),
            None => tracing::info!("  Rules file: none"),
        }

        tracing::info!("  Static redirects: {}", self.static_redirects.len());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses `path=url[,path=url...]` into a redirect table.
///
/// Whitespace around pairs is trimmed and empty segments are skipped,
/// so trailing commas are harmless. Later duplicates of a path win.
fn parse_static_redirects(raw: &str) -> Result<HashMap<String, String>> {
    let mut table = HashMap::new();

    for pair in raw.split(',') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }

        let (path, url) = pair
            .split_once('=')
            .with_context(|| format!("expected 'path=url', got '{pair}'"))?;

        if url.is_empty() {
            bail!("empty url for path '{path}'");
        }

        table.insert(path.to_string(), url.to_string());
    }

    Ok(table)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable fails to parse or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            rules_file: None,
            static_redirects: HashMap::new(),
        }
    }

    #[test]
    fn test_parse_static_redirects() {
        let table = parse_static_redirects(
            "/devfest=https://devfest.example.com, /docs=https://docs.example.com",
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table["/devfest"], "https://devfest.example.com");
        assert_eq!(table["/docs"], "https://docs.example.com");
    }

    #[test]
    fn test_parse_static_redirects_last_write_wins() {
        let table = parse_static_redirects("/a=first,/a=second").unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table["/a"], "second");
    }

    #[test]
    fn test_parse_static_redirects_tolerates_trailing_comma() {
        let table = parse_static_redirects("/a=https://a.example.com,").unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_parse_static_redirects_url_with_equals() {
        // Only the first '=' separates path from url.
        let table = parse_static_redirects("/q=https://example.com/search?q=1").unwrap();
        assert_eq!(table["/q"], "https://example.com/search?q=1");
    }

    #[test]
    fn test_parse_static_redirects_rejects_bad_pairs() {
        assert!(parse_static_redirects("no-equals-here").is_err());
        assert!(parse_static_redirects("/path=").is_err());
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("REDIRECTS_FILE");
            env::remove_var("STATIC_REDIRECTS");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert!(config.rules_file.is_none());
        assert!(config.static_redirects.is_empty());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variables() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("REDIRECTS_FILE", "/etc/redirects.yaml");
            env::set_var("STATIC_REDIRECTS", "/a=https://a.example.com");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(
            config.rules_file,
            Some(PathBuf::from("/etc/redirects.yaml"))
        );
        assert_eq!(config.static_redirects.len(), 1);

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("REDIRECTS_FILE");
            env::remove_var("STATIC_REDIRECTS");
        }
    }
}
