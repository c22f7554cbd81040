//! Best-effort formatting of record payloads.

use serde::Serialize;

/// Shown in place of a payload that cannot be serialized at all.
pub const UNSERIALIZABLE_PLACEHOLDER: &str = "[unserializable]";

/// Format a record payload for the details column.
///
/// Tries pretty JSON with two-space indentation first, then compact JSON, and
/// finally [`UNSERIALIZABLE_PLACEHOLDER`]. Always returns a string.
///
/// # Examples
///
/// ```
/// use logscope_tui_common::format_data;
/// use serde_json::json;
///
/// assert_eq!(format_data(&json!({"code": 504})), "{\n  \"code\": 504\n}");
/// assert_eq!(format_data(&json!("plain")), "\"plain\"");
/// ```
pub fn format_data<T>(data: &T) -> String
where
    T: Serialize + ?Sized,
{
    serde_json::to_string_pretty(data)
        .or_else(|_| serde_json::to_string(data))
        .unwrap_or_else(|_| UNSERIALIZABLE_PLACEHOLDER.to_string())
}
