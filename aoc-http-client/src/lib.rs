//! AOC HTTP Client Library
//!
//! This library provides the network side of the `aoc` command-line tool:
//! fetching calendar pages, puzzle descriptions and puzzle inputs, and
//! submitting answers, all authenticated with a session cookie.
//!
//! # Features
//!
//! - Calendar, puzzle and input fetching for any year and day
//! - Answer submission via form POST
//! - `<main>` fragment extraction from full page responses
//! - HTML to plain text rendering for terminal display
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Blocking synchronous API
//!
//! # Example
//!
//! ```no_run
//! use aoc_http_client::{AocClient, html_to_text};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//! let session = "your_session_cookie_here";
//!
//! // Fetch the puzzle description and print it as text
//! let puzzle = client.puzzle(2024, 1, session)?;
//! println!("{}", html_to_text(&puzzle));
//!
//! // Fetch puzzle input
//! let input = client.input(2024, 1, session)?;
//!
//! // Submit an answer, the response is the page's <main> fragment
//! let response = client.submit_answer(2024, 1, "1", "42", session)?;
//! println!("{}", html_to_text(&response));
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod parser;

pub use client::{AocClient, AocClientBuilder};
pub use error::AocError;
pub use parser::{extract_main_fragment, html_to_text, html_to_wrapped_text};
