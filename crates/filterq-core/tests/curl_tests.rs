//! Curl command generator tests.

use filterq_core::{curl_command, curl_command_with_base, FilterError, DEFAULT_BASE_URL};

#[test]
fn simple_fixture_exact_command() {
    let cmd = curl_command("simple").unwrap();
    assert_eq!(
        cmd,
        "curl \"http://localhost:3000/users/filter?filter=%7B%22field%22%3A%22role%22%2C%22operator%22%3A%22eq%22%2C%22value%22%3A%22developer%22%7D&page=1&limit=10\""
    );
}

#[test]
fn age_range_command_escapes_brackets() {
    let cmd = curl_command("age_range").unwrap();
    assert!(cmd.contains("%5B25%2C30%5D"));
    assert!(cmd.ends_with("&page=1&limit=10\""));
}

#[test]
fn default_base_url_is_local_dev_server() {
    assert_eq!(DEFAULT_BASE_URL, "http://localhost:3000");
    let cmd = curl_command("simple").unwrap();
    assert!(cmd.starts_with("curl \"http://localhost:3000/users/filter?filter="));
}

#[test]
fn custom_base_url() {
    let cmd = curl_command_with_base("simple", "https://api.example.com").unwrap();
    assert!(cmd.starts_with("curl \"https://api.example.com/users/filter?filter="));
    assert!(cmd.ends_with("&page=1&limit=10\""));
}

#[test]
fn unknown_fixture_propagates_not_found() {
    let err = curl_command("nope").unwrap_err();
    assert!(matches!(err, FilterError::FixtureNotFound { .. }));
}

#[test]
fn pagination_literals_are_fixed() {
    for name in filterq_core::names() {
        let cmd = curl_command(name).unwrap();
        assert!(cmd.contains("&page=1&limit=10"), "missing pagination in: {cmd}");
    }
}
