//! Filter encoder — compact JSON serialization plus percent-encoding.
//!
//! Encoding is two library calls deep: serialize the filter value to
//! compact JSON (no whitespace between tokens, keys in insertion order —
//! serde_json's `preserve_order` feature is load-bearing here), then
//! percent-encode the result for use as a URL query component. Unreserved
//! characters (`A-Za-z0-9`, `-`, `_`, `.`, `~`) pass through untouched;
//! everything else becomes `%XX` with uppercase hex.

use crate::error::Result;
use serde_json::Value;

/// Encode a filter value as percent-encoded compact JSON.
///
/// Pure and infallible: any `serde_json::Value` has a compact JSON
/// rendering (its `Display` impl), and percent-encoding never fails.
/// The output is deterministic for a given input.
///
/// # Example
/// ```
/// use serde_json::json;
/// use filterq_core::encode;
///
/// let encoded = encode(&json!({"a": 1}));
/// assert_eq!(encoded, "%7B%22a%22%3A1%7D");
/// ```
pub fn encode(filter: &Value) -> String {
    urlencoding::encode(&filter.to_string()).into_owned()
}

/// Parse a JSON string and encode the resulting filter.
///
/// Returns [`FilterError::JsonParse`](crate::FilterError::JsonParse) if
/// the input is not valid JSON; the error display carries the parser's
/// diagnostic (line/column included).
pub fn encode_json(json: &str) -> Result<String> {
    let filter: Value = serde_json::from_str(json)?;
    Ok(encode(&filter))
}
