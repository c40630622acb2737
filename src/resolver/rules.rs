//! Declarative redirect rules parsed from a YAML payload.

use serde::Deserialize;

use super::Resolver;
use crate::error::RulesError;

/// A single path-to-URL mapping from the declarative payload.
///
/// `path` and `url` are both required; unknown fields in the source
/// record are ignored. Values are carried literally, no validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RedirectRule {
    pub path: String,
    pub url: String,
}

/// Parses a YAML list of redirect rules.
///
/// The payload must be a top-level sequence of records:
///
/// ```yaml
/// - path: /some-path
///   url: https://www.example.com/demo
/// ```
///
/// # Errors
///
/// Returns [`RulesError::MalformedConfig`] when the payload is not
/// valid YAML, its top level is not a sequence, or a record is missing
/// `path` or `url`.
pub fn parse_rules(payload: &[u8]) -> Result<Vec<RedirectRule>, RulesError> {
    serde_yaml::from_slice(payload).map_err(RulesError::MalformedConfig)
}

/// Resolves paths by scanning an ordered rule list.
///
/// The first rule whose `path` matches wins. The scan always covers the
/// whole list; delegation happens only when no rule matched at all, so
/// a miss on an early rule never hides a match further down. Duplicate
/// paths are permitted, later duplicates are simply unreachable.
#[derive(Debug, Clone, Default)]
pub struct RuleResolver {
    rules: Vec<RedirectRule>,
}

impl RuleResolver {
    pub fn new(rules: Vec<RedirectRule>) -> Self {
        Self { rules }
    }

    /// Parses `payload` and builds a resolver in one step.
    ///
    /// # Errors
    ///
    /// Same conditions as [`parse_rules`].
    pub fn from_yaml(payload: &[u8]) -> Result<Self, RulesError> {
        Ok(Self::new(parse_rules(payload)?))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Resolver for RuleResolver {
    fn target(&self, path: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.path == path)
            .map(|rule| rule.url.as_str())
    }
}
