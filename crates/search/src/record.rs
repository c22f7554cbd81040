//! Log records and response bodies returned by the search service.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::SearchError;

/// Level tag that marks a record as an error.
pub const ERROR_LEVEL: &str = "error";

/// One entry returned by the search endpoint.
///
/// Missing or `null` fields fall back to empty text (or `null` for `data`), and
/// non-text scalars in text fields are kept as their JSON text, so a single odd
/// record does not fail the whole response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Instant the record was emitted, as sent by the service.
    #[serde(default, deserialize_with = "lenient_text")]
    pub timestamp: String,
    /// Severity tag.
    #[serde(default, deserialize_with = "lenient_text")]
    pub level: String,
    /// Short event label.
    #[serde(default, deserialize_with = "lenient_text")]
    pub event: String,
    /// Arbitrary structured payload.
    #[serde(default)]
    pub data: Value,
}

impl LogRecord {
    /// Returns `true` if the record carries the error tag.
    pub fn is_error(&self) -> bool {
        self.level == ERROR_LEVEL
    }
}

/// Reads any JSON value as text: `null` is empty, strings are taken as-is and
/// everything else becomes its JSON rendering.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

/// Raw sample lines from the service's debug endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSample {
    /// Object the lines were read from.
    #[serde(default)]
    pub filename: String,
    /// The first lines of that object.
    #[serde(default)]
    pub sample_lines: Vec<String>,
}

/// Sample endpoint body: either a sample or the service's own error report.
#[derive(Deserialize)]
#[serde(untagged)]
enum SampleBody {
    Failed { error: String },
    Sample(LogSample),
}

/// Parses a search response body into its ordered records.
///
/// An absent or `null` `results` field yields no records. A `null` body or a
/// `results` value that is not a list of records is a parse error.
pub fn parse_search_body(body: &[u8]) -> Result<Vec<LogRecord>, SearchError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| SearchError::Parse(e.to_string()))?;

    if value.is_null() {
        return Err(SearchError::Parse("response body is null".to_string()));
    }

    match value.get("results") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(results) => Vec::<LogRecord>::deserialize(results)
            .map_err(|e| SearchError::Parse(format!("invalid results: {e}"))),
    }
}

/// Parses a sample response body.
///
/// A body carrying an `error` field (the service answers `200` with
/// `{"error": "No log files found"}` for an empty store) becomes
/// [`SearchError::Service`].
pub fn parse_sample_body(body: &[u8]) -> Result<LogSample, SearchError> {
    match serde_json::from_slice(body).map_err(|e| SearchError::Parse(e.to_string()))? {
        SampleBody::Failed { error } => Err(SearchError::Service(error)),
        SampleBody::Sample(sample) => Ok(sample),
    }
}
