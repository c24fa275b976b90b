//! Declarative endpoint table types
//!
//! Each domain module lists its endpoints as `Endpoint` constants: a
//! name for logging, a path template with `{}` placeholders and the
//! pagination style the endpoint accepts. Every endpoint is a GET.

use crate::error::{Error, Result};
use crate::pagination::PaginationStyle;
use std::fmt::Display;

/// One entry of a domain's endpoint table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Dotted name used in logs (e.g. `members.search`)
    pub name: &'static str,
    /// Path below the base URL, with `{}` for each path argument
    pub path: &'static str,
    /// How the endpoint pages, if at all
    pub paging: PaginationStyle,
}

impl Endpoint {
    /// An unpaged GET endpoint
    pub const fn get(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            path,
            paging: PaginationStyle::Unpaged,
        }
    }

    /// Same endpoint with a pagination style
    pub const fn paged(self, paging: PaginationStyle) -> Self {
        Self {
            name: self.name,
            path: self.path,
            paging,
        }
    }

    /// Number of `{}` placeholders in the path template
    pub fn arity(&self) -> usize {
        self.path.matches("{}").count()
    }

    /// Substitute path arguments, percent-encoding each one
    pub fn render(&self, args: &[&str]) -> Result<String> {
        if args.len() != self.arity() {
            return Err(Error::invalid_argument(
                self.name,
                format!(
                    "path '{}' takes {} argument(s), got {}",
                    self.path,
                    self.arity(),
                    args.len()
                ),
            ));
        }

        let mut rendered = String::with_capacity(self.path.len());
        let mut args = args.iter();
        for (i, segment) in self.path.split("{}").enumerate() {
            if i > 0 {
                if let Some(arg) = args.next() {
                    if arg.is_empty() {
                        return Err(Error::invalid_argument(
                            self.name,
                            "path arguments must not be empty",
                        ));
                    }
                    rendered.push_str(&urlencoding::encode(arg));
                }
            }
            rendered.push_str(segment);
        }
        Ok(rendered)
    }
}

// ============================================================================
// Query Strings
// ============================================================================

/// Ordered query-string pairs
///
/// Keys may repeat (`push`), which the list-valued filters of some APIs
/// need; `set` replaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair (builder form)
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.push(key, value);
        self
    }

    /// Append a pair
    pub fn push(&mut self, key: impl Into<String>, value: impl Display) -> &mut Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Append a pair when the value is present
    pub fn push_opt<V: Display>(&mut self, key: impl Into<String>, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Append one pair per value under the same key
    pub fn push_all<V: Display>(
        &mut self,
        key: &str,
        values: impl IntoIterator<Item = V>,
    ) -> &mut Self {
        for value in values {
            self.push(key, value);
        }
        self
    }

    /// Replace every pair with this key by a single pair
    pub fn set(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.pairs.retain(|(k, _)| k != key);
        self.push(key, value)
    }

    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Typed filter structs that render to a query string
pub trait ToQuery {
    fn to_query(&self) -> Query;
}

impl ToQuery for Query {
    fn to_query(&self) -> Query {
        self.clone()
    }
}
