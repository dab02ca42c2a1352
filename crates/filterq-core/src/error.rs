//! Error types for filter encoding, decoding, and fixture lookup.

use thiserror::Error;

/// Errors that can occur while handling filter expressions.
///
/// Display strings deliberately match the CLI's user-facing wording: the
/// binary prefixes them with `Error: ` and prints them to stdout.
#[derive(Error, Debug)]
pub enum FilterError {
    /// The input string was not valid JSON (encoding path).
    #[error("Invalid JSON - {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The input could not be percent-decoded into valid JSON
    /// (decoding path). Carries the underlying diagnostic.
    #[error("Could not decode - {0}")]
    Decode(String),

    /// The requested fixture name is not in the registry.
    #[error("Filter '{name}' not found. Available: {available}")]
    FixtureNotFound {
        /// The name that was looked up.
        name: String,
        /// Comma-separated list of valid fixture names.
        available: String,
    },
}

/// Convenience alias used throughout filterq-core.
pub type Result<T> = std::result::Result<T, FilterError>;
