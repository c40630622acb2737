//! Exact-match redirect table.

use std::collections::HashMap;

use super::Resolver;

/// Resolves paths against an in-memory map of path to URL.
///
/// Keys are unique; building from pairs keeps the last value for a
/// duplicated path. An empty table is legal and delegates every request.
#[derive(Debug, Clone, Default)]
pub struct TableResolver {
    table: HashMap<String, String>,
}

impl TableResolver {
    pub fn new(table: HashMap<String, String>) -> Self {
        Self { table }
    }

    /// Builds a table from `(path, url)` pairs, last write wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            table: pairs
                .into_iter()
                .map(|(path, url)| (path.into(), url.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Resolver for TableResolver {
    fn target(&self, path: &str) -> Option<&str> {
        self.table.get(path).map(String::as_str)
    }
}
