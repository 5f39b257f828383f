//! AOC CLI - read, download and submit Advent of Code puzzles

mod calendar;
mod cli;
mod config;
mod error;
mod output;
mod puzzle;
mod save;
mod session;

use aoc_http_client::AocClient;
use clap::Parser;
use cli::{Args, Command, Info};
use config::{Config, default_output_path};
use error::CliError;
use puzzle::PuzzleClient;
use session::SessionResolver;
use std::io::Write;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    let config = Config::from_args(args, calendar::eastern_now());
    init_logging(&config);

    // Construction failures (date, session, prefetch) are fatal
    let mut client = match AocClient::new()
        .map_err(CliError::from)
        .and_then(|gateway| build_client(&config, gateway))
    {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    if let Err(e) = run(&mut client, &config.command, Path::new("."), &mut stdout.lock()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_client(config: &Config, gateway: AocClient) -> Result<PuzzleClient, CliError> {
    let resolver = SessionResolver::from_environment(config.session_path.clone());
    PuzzleClient::new(config.year, config.day, &resolver, gateway, config.options)
}

/// Run one command against the client
///
/// Relative download paths, including the default file name, are resolved
/// against `base_dir`.
fn run(
    client: &mut PuzzleClient,
    command: &Command,
    base_dir: &Path,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        Command::Read { info } => match info {
            Info::Puzzle => client.show_puzzle(out),
            Info::Input => client.show_input(out),
            Info::Calendar => client.show_calendar(out),
        },
        Command::Download {
            output, puzzle, ..
        } => {
            let path = base_dir.join(
                output
                    .clone()
                    .unwrap_or_else(|| default_output_path(client.year(), client.day(), *puzzle)),
            );
            if *puzzle {
                client.save_puzzle(&path)?;
            } else {
                client.save_input(&path)?;
            }
            writeln!(out, "Saved to {}", path.display())?;
            Ok(())
        }
        Command::Submit { part, answer } => {
            let response = client.submit_answer(part, answer)?;
            writeln!(out, "{}", output::render_html(&response))?;
            Ok(())
        }
    }
}
