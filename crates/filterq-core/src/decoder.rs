//! Filter decoder — percent-decoding plus JSON parsing.
//!
//! The inverse of [`encoder::encode`](crate::encoder::encode): undo the
//! percent-escapes, then parse the result as JSON. Percent-decoding
//! itself is lenient — a malformed escape like a trailing `%7` passes
//! through verbatim — so truncated escapes surface as JSON syntax errors
//! rather than being silently dropped. Escapes that decode to invalid
//! UTF-8 (e.g. a lone `%FF`) are rejected outright.

use crate::error::{FilterError, Result};
use serde_json::Value;

/// Decode a percent-encoded filter back into a JSON value.
///
/// Accepts plain (unencoded) JSON too, since percent-decoding is the
/// identity on text without `%` escapes. All failure modes map to
/// [`FilterError::Decode`] with the underlying diagnostic.
///
/// # Example
/// ```
/// use serde_json::json;
/// use filterq_core::decode;
///
/// let filter = decode("%7B%22a%22%3A1%7D").unwrap();
/// assert_eq!(filter, json!({"a": 1}));
/// ```
pub fn decode(encoded: &str) -> Result<Value> {
    let json = urlencoding::decode(encoded)
        .map_err(|e| FilterError::Decode(format!("invalid UTF-8 in percent-escapes: {e}")))?;
    serde_json::from_str(&json).map_err(|e| FilterError::Decode(e.to_string()))
}
