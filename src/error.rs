use thiserror::Error;

/// Errors raised while building a resolver from a declarative payload.
///
/// Resolution itself has no error path; the only failure mode in this
/// crate is a payload that cannot be decoded at construction time. The
/// caller decides whether that aborts startup or is handled otherwise,
/// but must not build a resolver from a payload that failed to parse.
#[derive(Debug, Error)]
pub enum RulesError {
    /// The payload is not a YAML sequence of `{path, url}` records.
    #[error("malformed redirect rules: {0}")]
    MalformedConfig(#[source] serde_yaml::Error),
}
