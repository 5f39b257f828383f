//! CLI argument parsing using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Page shown by `aoc read`
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Info {
    /// Puzzle description, rendered as text
    #[default]
    Puzzle,
    /// Puzzle input, printed verbatim
    Input,
    /// The year's calendar, rendered as text
    Calendar,
}

/// Command line interface for Advent of Code
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Command line interface for Advent of Code", version)]
pub struct Args {
    /// Puzzle year (defaults to the current event year, US Eastern time)
    #[arg(short, long, global = true)]
    pub year: Option<u16>,

    /// Puzzle day (defaults to today in December, otherwise 25)
    #[arg(short, long, global = true)]
    pub day: Option<u8>,

    /// Session cookie file path
    #[arg(short, long, global = true)]
    pub session_path: Option<PathBuf>,

    /// Fetch the puzzle and its input before running the command
    #[arg(long, global = true)]
    pub prefetch: bool,

    /// Log requests and cache activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Read the information for a given puzzle
    Read {
        /// What to display
        #[arg(short, long, value_enum, default_value = "puzzle")]
        info: Info,
    },

    /// Download the information for a given puzzle
    Download {
        /// Output file path (defaults to {year}_day{day}.txt, or .html with --puzzle)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Download the puzzle description instead of the puzzle input
        #[arg(short = 'z', long)]
        puzzle: bool,

        /// Overwrite the file at the output path
        #[arg(short = 'w', long)]
        overwrite: bool,
    },

    /// Submit an answer for a given puzzle
    Submit {
        /// Part to submit the answer for
        #[arg(short, long, default_value = "1", value_parser = ["1", "2"])]
        part: String,

        /// Answer to the puzzle
        #[arg(short, long)]
        answer: String,
    },
}
