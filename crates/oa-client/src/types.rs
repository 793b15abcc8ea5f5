//! Request and response types for the OpenAustralia API.

use std::fmt;
use std::str::FromStr;

/// The decoded body of an API response.
///
/// Usually an array of objects, but the service defines the shape and the
/// client passes it through untouched (search results arrive as an object
/// with `info` and `rows`, some failures as an `error` object).
pub type Records = serde_json::Value;

/// Remote operations exposed by the API, one per fixed method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Divisions,
    Representative,
    Representatives,
    Senator,
    Senators,
    Debates,
    Hansard,
    Comments,
}

impl Endpoint {
    /// Every endpoint, in the order the API documents them.
    pub const ALL: [Self; 8] = [
        Self::Divisions,
        Self::Representative,
        Self::Representatives,
        Self::Senator,
        Self::Senators,
        Self::Debates,
        Self::Hansard,
        Self::Comments,
    ];

    /// The method name appended to the base URL.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Divisions => "getDivisions",
            Self::Representative => "getRepresentative",
            Self::Representatives => "getRepresentatives",
            Self::Senator => "getSenator",
            Self::Senators => "getSenators",
            Self::Debates => "getDebates",
            Self::Hansard => "getHansard",
            Self::Comments => "getComments",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which house's debates to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebateType {
    Representatives,
    Senate,
}

impl DebateType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Representatives => "representatives",
            Self::Senate => "senate",
        }
    }
}

impl fmt::Display for DebateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown debate type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown debate type '{0}', expected 'representatives' or 'senate'")]
pub struct ParseDebateTypeError(String);

impl FromStr for DebateType {
    type Err = ParseDebateTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "representatives" => Ok(Self::Representatives),
            "senate" => Ok(Self::Senate),
            _ => Err(ParseDebateTypeError(s.to_string())),
        }
    }
}

/// Ordered query parameters for one request, excluding the API key.
///
/// Optional parameters that were not supplied are never stored, so they
/// never reach the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a parameter.
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl ToString) -> Self {
        self.0.push((name, value.to_string()));
        self
    }

    /// Append a parameter only when a value was supplied.
    #[must_use]
    pub fn with_opt(self, name: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    /// Look up a parameter value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Parameter names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(name, _)| *name)
    }

    #[must_use]
    pub fn as_pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
