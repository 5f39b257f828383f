//! Puzzle client: date gate, lazy page cache and the read/download/submit operations

use crate::calendar::is_retrievable;
use crate::error::CliError;
use crate::output::render_html;
use crate::save::save;
use crate::session::SessionResolver;
use aoc_http_client::AocClient;
use std::fmt;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};
use zeroize::Zeroizing;

/// A page the client can fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Calendar,
    Puzzle,
    Input,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Calendar => "calendar",
            Resource::Puzzle => "puzzle",
            Resource::Input => "input",
        };
        f.write_str(name)
    }
}

/// Construction options
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientOptions {
    /// Allow saves to replace existing files
    pub overwrite: bool,
    /// Fetch the puzzle and input during construction
    pub eager: bool,
}

/// Client for a single year/day
///
/// Each page is fetched at most once and kept for the lifetime of the client.
pub struct PuzzleClient {
    year: u16,
    day: u8,
    overwrite: bool,
    session: Zeroizing<String>,
    gateway: AocClient,
    calendar: Option<String>,
    puzzle: Option<String>,
    input: Option<String>,
}

impl PuzzleClient {
    /// Create a client for `year`/`day`
    ///
    /// The date is checked before anything else, so an unreleased puzzle never
    /// triggers a session lookup or a request. With `options.eager` the puzzle
    /// and input are fetched immediately and the first failure is returned.
    pub fn new(
        year: u16,
        day: u8,
        resolver: &SessionResolver,
        gateway: AocClient,
        options: ClientOptions,
    ) -> Result<Self, CliError> {
        if !is_retrievable(year, day) {
            return Err(CliError::InvalidDate { year, day });
        }

        let session = resolver.resolve()?;
        let mut client = Self {
            year,
            day,
            overwrite: options.overwrite,
            session,
            gateway,
            calendar: None,
            puzzle: None,
            input: None,
        };

        if options.eager {
            client.ensure(Resource::Puzzle)?;
            client.ensure(Resource::Input)?;
        }
        Ok(client)
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return the cached page, fetching it on first use
    fn ensure(&mut self, resource: Resource) -> Result<&str, CliError> {
        let Self {
            year,
            day,
            session,
            gateway,
            calendar,
            puzzle,
            input,
            ..
        } = self;

        let slot = match resource {
            Resource::Calendar => calendar,
            Resource::Puzzle => puzzle,
            Resource::Input => input,
        };

        let content = match slot.take() {
            Some(content) => content,
            None => {
                info!(%resource, year = *year, day = *day, "fetching");
                let fetched = match resource {
                    Resource::Calendar => gateway.calendar(*year, session.as_str()),
                    Resource::Puzzle => gateway.puzzle(*year, *day, session.as_str()),
                    Resource::Input => gateway.input(*year, *day, session.as_str()),
                };
                fetched.map_err(|source| CliError::Fetch {
                    resource,
                    year: *year,
                    day: *day,
                    source,
                })?
            }
        };
        Ok(slot.insert(content).as_str())
    }

    /// Print the year's calendar as wrapped text
    pub fn show_calendar(&mut self, out: &mut impl Write) -> Result<(), CliError> {
        let calendar = self.ensure(Resource::Calendar)?;
        writeln!(out, "{}", render_html(calendar))?;
        Ok(())
    }

    /// Print the puzzle description as wrapped text
    pub fn show_puzzle(&mut self, out: &mut impl Write) -> Result<(), CliError> {
        let puzzle = self.ensure(Resource::Puzzle)?;
        writeln!(out, "{}", render_html(puzzle))?;
        Ok(())
    }

    /// Print the puzzle input verbatim
    pub fn show_input(&mut self, out: &mut impl Write) -> Result<(), CliError> {
        let input = self.ensure(Resource::Input)?;
        writeln!(out, "{}", input)?;
        Ok(())
    }

    /// Save the puzzle's `<main>` fragment to `path`
    pub fn save_puzzle(&mut self, path: &Path) -> Result<(), CliError> {
        let overwrite = self.overwrite;
        let puzzle = self.ensure(Resource::Puzzle)?;
        save(path, puzzle, overwrite)
    }

    /// Save the puzzle input to `path`
    pub fn save_input(&mut self, path: &Path) -> Result<(), CliError> {
        let overwrite = self.overwrite;
        let input = self.ensure(Resource::Input)?;
        save(path, input, overwrite)
    }

    /// Submit `answer` for `part`, returning the response's `<main>` fragment
    ///
    /// `part` must be `"1"` or `"2"`; anything else fails before a request is made.
    pub fn submit_answer(&self, part: &str, answer: &str) -> Result<String, CliError> {
        if !matches!(part, "1" | "2") {
            return Err(CliError::InvalidPart(part.to_string()));
        }

        debug!(part, year = self.year, day = self.day, "submitting answer");
        self.gateway
            .submit_answer(self.year, self.day, part, answer, &self.session)
            .map_err(|source| CliError::Submit {
                part: part.to_string(),
                year: self.year,
                day: self.day,
                source,
            })
    }
}
