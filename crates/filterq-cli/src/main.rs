//! `filterq` CLI — URL-encode and decode JSON filters for query-string
//! endpoint testing.
//!
//! ## Usage
//!
//! ```sh
//! # Encode a JSON filter for use in a URL
//! filterq encode '{"field":"age","operator":"gt","value":30}'
//!
//! # Decode a percent-encoded filter back to pretty JSON
//! filterq decode '%7B%22field%22%3A%22age%22%2C%22operator%22%3A%22gt%22%2C%22value%22%3A30%7D'
//!
//! # Generate a ready-to-run curl command for a predefined filter
//! filterq test simple
//!
//! # List the predefined filters
//! filterq list
//! ```
//!
//! Every error branch prints an `Error: ...` line to stdout and the
//! process still exits 0 — errors are report text here, not failures.
//! The commands are plain positionals rather than clap subcommands so
//! that an unknown command prints our own message instead of clap's
//! exit-code-2 usage error.

use anyhow::Result;
use clap::Parser;
use filterq_core::DEFAULT_BASE_URL;

#[derive(Parser)]
#[command(
    name = "filterq",
    version,
    about = "URL-encode and decode JSON filters for query-string endpoint testing"
)]
struct Cli {
    /// Command to run: encode, decode, test, or list
    command: Option<String>,

    /// Command argument: JSON text, encoded filter, or filter name
    #[arg(allow_hyphen_values = true)]
    arg: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        print_help();
        return Ok(());
    };

    match command.as_str() {
        "encode" => cmd_encode(cli.arg.as_deref()),
        "decode" => cmd_decode(cli.arg.as_deref()),
        "test" => cmd_test(cli.arg.as_deref()),
        "list" => cmd_list(),
        other => {
            println!("Error: Unknown command '{other}'");
            println!("Run 'filterq' with no arguments for help");
            Ok(())
        }
    }
}

/// Help text shown when no command is given.
fn print_help() {
    println!("URL encoding utility for filter endpoint testing");
    println!("{}", "=".repeat(50));
    println!();
    println!("Usage:");
    println!("  filterq <command> [args...]");
    println!();
    println!("Commands:");
    println!("  encode <json>     - Encode JSON filter for URL");
    println!("  decode <encoded>  - Decode URL-encoded filter");
    println!("  test <filter>     - Generate test curl command");
    println!("  list              - List predefined test filters");
    println!();
    println!("Examples:");
    println!("  filterq encode '{{\"field\":\"age\",\"operator\":\"gt\",\"value\":30}}'");
    println!("  filterq test simple");
}

/// `encode <json>`: print the percent-encoded filter and a full URL.
fn cmd_encode(arg: Option<&str>) -> Result<()> {
    let Some(json) = arg else {
        println!("Error: JSON filter required");
        return Ok(());
    };

    match filterq_core::encode_json(json) {
        Ok(encoded) => {
            println!("Encoded: {encoded}");
            println!();
            println!("Full URL: {DEFAULT_BASE_URL}/users/filter?filter={encoded}");
        }
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

/// `decode <encoded>`: percent-decode and pretty-print the filter.
fn cmd_decode(arg: Option<&str>) -> Result<()> {
    let Some(encoded) = arg else {
        println!("Error: Encoded filter required");
        return Ok(());
    };

    match filterq_core::decode(encoded) {
        Ok(filter) => {
            println!("Decoded: {}", serde_json::to_string_pretty(&filter)?);
        }
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

/// `test <name>`: print the curl command and fixture JSON for a name.
fn cmd_test(arg: Option<&str>) -> Result<()> {
    let Some(name) = arg else {
        println!("Error: Filter name required");
        println!("Available filters: {}", filterq_core::names().join(", "));
        return Ok(());
    };

    match filterq_core::curl_command(name) {
        Ok(cmd) => {
            println!("Test command for '{name}':");
            println!("{cmd}");
            println!();
            println!("Filter JSON:");
            if let Ok(filter) = filterq_core::lookup(name) {
                println!("{}", serde_json::to_string_pretty(filter)?);
            }
        }
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

/// `list`: print every fixture with its compact JSON and a test hint.
fn cmd_list() -> Result<()> {
    println!("Predefined test filters:");
    println!("{}", "=".repeat(25));
    for (name, filter) in filterq_core::entries() {
        println!();
        println!("{name}:");
        println!("  {filter}");
        println!("  Try: filterq test {name}");
    }
    Ok(())
}
