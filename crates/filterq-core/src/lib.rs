//! # filterq-core
//!
//! URL codec for JSON filter expressions, plus the fixture table and
//! curl-command generator behind the `filterq` CLI.
//!
//! A filter expression is a recursive JSON tree: a leaf comparison
//! `{"field":..,"operator":..,"value":..}`, or a combinator
//! `{"and":[..]}` / `{"or":[..]}`. Filters travel inside a URL query
//! component as percent-encoded compact JSON:
//!
//! ```text
//! GET /users/filter?filter=%7B%22field%22%3A%22role%22...%7D&page=1&limit=10
//! ```
//!
//! ## Quick start
//!
//! ```rust
//! use serde_json::json;
//! use filterq_core::{encode, decode};
//!
//! let filter = json!({"field": "age", "operator": "gt", "value": 30});
//! let encoded = encode(&filter);
//! assert_eq!(encoded, "%7B%22field%22%3A%22age%22%2C%22operator%22%3A%22gt%22%2C%22value%22%3A30%7D");
//!
//! // Roundtrip
//! assert_eq!(decode(&encoded).unwrap(), filter);
//! ```
//!
//! ## Modules
//!
//! - [`encoder`] — filter value → percent-encoded compact JSON
//! - [`decoder`] — percent-encoded text → filter value
//! - [`fixtures`] — the predefined named test filters
//! - [`curl`] — ready-to-run curl command strings for the filter endpoint
//! - [`error`] — error types for parse/decode/lookup failures

pub mod curl;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod fixtures;

pub use curl::{curl_command, curl_command_with_base, DEFAULT_BASE_URL};
pub use decoder::decode;
pub use encoder::{encode, encode_json};
pub use error::FilterError;
pub use fixtures::{entries, lookup, names};
