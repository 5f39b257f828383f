//! Basic usage example for the AOC HTTP client
//!
//! This example demonstrates how to:
//! - Create a client with default settings
//! - Fetch a puzzle description and render it as text
//! - Fetch puzzle input
//!
//! Note: This example requires a valid AOC session cookie in `AOC_SESSION`.
//! You can get your session cookie from your browser's cookies after logging in to adventofcode.com

use aoc_http_client::{AocClient, AocError, html_to_text};
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let session = std::env::var("AOC_SESSION")?;

    let client = AocClient::builder()
        .client_builder(reqwest::blocking::Client::builder().timeout(Duration::from_secs(30)))
        .build()?;

    println!("=== Puzzle 2015/1 ===");
    let puzzle = client.puzzle(2015, 1, &session)?;
    println!("{}", html_to_text(&puzzle));

    println!("\n=== Input 2015/1 ===");
    match client.input(2015, 1, &session) {
        Ok(input) => println!("{} bytes, first line: {:?}", input.len(), input.lines().next()),
        Err(AocError::InvalidStatus { url, status }) => {
            println!("{} returned {} (is the session still valid?)", url, status)
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
