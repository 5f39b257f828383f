//! Configuration resolution from CLI args

use crate::calendar::{default_day, default_year};
use crate::cli::{Args, Command};
use crate::puzzle::ClientOptions;
use chrono::{DateTime, FixedOffset};
use std::path::PathBuf;

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Puzzle year
    pub year: u16,
    /// Puzzle day
    pub day: u8,
    /// Explicit session cookie file
    pub session_path: Option<PathBuf>,
    /// Puzzle client options
    pub options: ClientOptions,
    /// Command to run
    pub command: Command,
    /// Debug logging
    pub verbose: bool,
}

impl Config {
    /// Build config from CLI args, filling in the date from `now` (US Eastern)
    pub fn from_args(args: Args, now: DateTime<FixedOffset>) -> Self {
        let overwrite = matches!(args.command, Command::Download { overwrite: true, .. });

        Config {
            year: args.year.unwrap_or_else(|| default_year(now)),
            day: args.day.unwrap_or_else(|| default_day(now)),
            session_path: args.session_path,
            options: ClientOptions {
                overwrite,
                eager: args.prefetch,
            },
            command: args.command,
            verbose: args.verbose,
        }
    }

    /// Log filter used unless `RUST_LOG` is set
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "aoc=debug,aoc_http_client=debug"
        } else {
            "warn"
        }
    }
}

/// File name used by `download` when no output path is given
pub fn default_output_path(year: u16, day: u8, puzzle: bool) -> PathBuf {
    let extension = if puzzle { "html" } else { "txt" };
    PathBuf::from(format!("{}_day{:02}.{}", year, day, extension))
}
