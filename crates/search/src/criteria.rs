//! Search criteria and the canonical query parameters built from them.

use std::{convert::Infallible, fmt, str::FromStr};

/// Parameter name for the free-text query.
pub const PARAM_QUERY: &str = "q";
/// Parameter name for the level filter.
pub const PARAM_LEVEL: &str = "level";
/// Parameter name for the range start.
pub const PARAM_START: &str = "start";
/// Parameter name for the range end.
pub const PARAM_END: &str = "end";

/// Severity level used as a search filter and as a record tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LogLevel {
    /// Informational records.
    Info,
    /// Error records.
    Error,
    /// Any other tag the store knows about, passed through verbatim.
    Other(String),
}

impl LogLevel {
    /// The wire tag for this level.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
            Self::Other(tag) => tag,
        }
    }

    /// The level selected after `current` when cycling through the form choices.
    ///
    /// Cycles `None -> info -> error -> None`. A custom tag falls back to `None`.
    pub fn cycle(current: Option<&Self>) -> Option<Self> {
        match current {
            None => Some(Self::Info),
            Some(Self::Info) => Some(Self::Error),
            Some(Self::Error) | Some(Self::Other(_)) => None,
        }
    }
}

impl FromStr for LogLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "info" => Self::Info,
            "error" => Self::Error,
            other => Self::Other(other.to_string()),
        })
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user-controlled filter set driving one search.
///
/// Time bounds are kept as the text the user typed; they are forwarded to the
/// service uninterpreted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Free-text query. Always sent, even when empty.
    pub query: String,
    /// Optional level filter.
    pub level: Option<LogLevel>,
    /// Optional range start.
    pub start_time: Option<String>,
    /// Optional range end.
    pub end_time: Option<String>,
}

impl SearchCriteria {
    /// Creates criteria with the given query and no filters.
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into(), ..Default::default() }
    }

    /// Sets the level filter.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Sets the range start.
    pub fn with_start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = Some(start_time.into());
        self
    }

    /// Sets the range end.
    pub fn with_end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = Some(end_time.into());
        self
    }

    /// Builds the canonical query parameters for these criteria.
    ///
    /// `q` is always present. `level`, `start` and `end` are present only when
    /// they hold a non-empty value, which is copied verbatim.
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::default();
        params.push(PARAM_QUERY, self.query.clone());
        params.push_non_empty(PARAM_LEVEL, self.level.as_ref().map(LogLevel::as_str));
        params.push_non_empty(PARAM_START, self.start_time.as_deref());
        params.push_non_empty(PARAM_END, self.end_time.as_deref());
        params
    }
}

/// Ordered parameter mapping sent with a search request.
///
/// Keys keep insertion order (`q`, `level`, `start`, `end`) so the encoded
/// request is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    fn push(&mut self, key: &'static str, value: String) {
        self.pairs.push((key, value));
    }

    fn push_non_empty(&mut self, key: &'static str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.push(key, value.to_string());
        }
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Parameter names in encoding order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs.iter().map(|(k, _)| *k)
    }

    /// Key/value pairs in encoding order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
