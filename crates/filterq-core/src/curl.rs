//! Curl command generation for the filter endpoint.
//!
//! Formats a complete, copy-pasteable shell command embedding an encoded
//! fixture filter into the endpoint's query-string convention:
//!
//! ```text
//! curl "{base_url}/users/filter?filter={encoded}&page=1&limit=10"
//! ```
//!
//! `page=1&limit=10` are fixed literals — the endpoint paginates and the
//! generated commands always request the first page.

use crate::encoder::encode;
use crate::error::Result;
use crate::fixtures;

/// Base URL used when none is given (local development server).
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Generate a curl command for a named fixture against [`DEFAULT_BASE_URL`].
///
/// # Example
/// ```
/// use filterq_core::curl_command;
///
/// let cmd = curl_command("simple").unwrap();
/// assert!(cmd.starts_with("curl \"http://localhost:3000/users/filter?filter="));
/// assert!(cmd.ends_with("&page=1&limit=10\""));
/// ```
pub fn curl_command(name: &str) -> Result<String> {
    curl_command_with_base(name, DEFAULT_BASE_URL)
}

/// Generate a curl command for a named fixture against a custom base URL.
///
/// Unknown names propagate
/// [`FilterError::FixtureNotFound`](crate::FilterError::FixtureNotFound),
/// which enumerates the valid names.
pub fn curl_command_with_base(name: &str, base_url: &str) -> Result<String> {
    let filter = fixtures::lookup(name)?;
    let encoded = encode(filter);
    Ok(format!(
        "curl \"{base_url}/users/filter?filter={encoded}&page=1&limit=10\""
    ))
}
