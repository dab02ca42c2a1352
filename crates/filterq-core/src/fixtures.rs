//! Predefined test filters for exercising the filter endpoint by hand.
//!
//! The registry is built once at first use and is immutable for the
//! process lifetime. Definition order matters: `names` and `entries`
//! yield fixtures in the order below, and error messages enumerate them
//! the same way.

use crate::error::{FilterError, Result};
use serde_json::{json, Value};
use std::sync::LazyLock;

/// The fixture table, in definition order. Key order inside each filter
/// follows the `json!` literals (serde_json `preserve_order`).
static FIXTURES: LazyLock<Vec<(&'static str, Value)>> = LazyLock::new(|| {
    vec![
        (
            "simple",
            json!({
                "field": "role",
                "operator": "eq",
                "value": "developer"
            }),
        ),
        (
            "age_range",
            json!({
                "field": "age",
                "operator": "between",
                "value": [25, 30]
            }),
        ),
        (
            "active_devs",
            json!({
                "and": [
                    {
                        "field": "isActive",
                        "operator": "eq",
                        "value": true
                    },
                    {
                        "field": "role",
                        "operator": "eq",
                        "value": "developer"
                    }
                ]
            }),
        ),
        (
            "complex",
            json!({
                "or": [
                    {
                        "and": [
                            {
                                "field": "role",
                                "operator": "eq",
                                "value": "developer"
                            },
                            {
                                "field": "age",
                                "operator": "gt",
                                "value": 25
                            }
                        ]
                    },
                    {
                        "field": "role",
                        "operator": "eq",
                        "value": "manager"
                    }
                ]
            }),
        ),
    ]
});

/// All fixture names, in definition order.
pub fn names() -> Vec<&'static str> {
    FIXTURES.iter().map(|(name, _)| *name).collect()
}

/// Iterate over `(name, filter)` pairs in definition order.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static Value)> {
    FIXTURES.iter().map(|(name, filter)| (*name, filter))
}

/// Look up a fixture by name.
///
/// Returns [`FilterError::FixtureNotFound`] for unknown names; the error
/// enumerates the valid names so callers can surface it directly.
pub fn lookup(name: &str) -> Result<&'static Value> {
    FIXTURES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, filter)| filter)
        .ok_or_else(|| FilterError::FixtureNotFound {
            name: name.to_string(),
            available: names().join(", "),
        })
}
