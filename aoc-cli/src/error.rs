//! Error types for the CLI

use crate::puzzle::Resource;
use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Year/day combination is outside the retrievable window
    #[error("puzzle for year {year} day {day} is not available")]
    InvalidDate { year: u16, day: u8 },

    /// No session token could be located
    #[error("unable to find session cookie (set AOC_SESSION or pass --session-path)")]
    SessionNotFound,

    /// A session file exists but could not be read
    #[error("failed to read session file {}: {source}", .path.display())]
    SessionRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An explicitly given session file holds no token
    #[error("session file {} is empty", .path.display())]
    EmptySession { path: PathBuf },

    /// Fetching a page failed
    #[error("failed to get {resource} for {year}/{day}: {source}")]
    Fetch {
        resource: Resource,
        year: u16,
        day: u8,
        #[source]
        source: aoc_http_client::AocError,
    },

    /// Posting an answer failed
    #[error("failed to submit part {part} for {year}/{day}: {source}")]
    Submit {
        part: String,
        year: u16,
        day: u8,
        #[source]
        source: aoc_http_client::AocError,
    },

    /// HTTP client setup failed
    #[error("HTTP client error: {0}")]
    Http(#[from] aoc_http_client::AocError),

    /// Submission part is not "1" or "2"
    #[error("invalid part number {0:?}, please enter 1 or 2")]
    InvalidPart(String),

    /// Refused to replace an existing file
    #[error("file {} already exists (use --overwrite to replace it)", .path.display())]
    FileExists { path: PathBuf },

    /// Writing output failed
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the console failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
