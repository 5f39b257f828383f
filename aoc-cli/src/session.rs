//! Session token lookup

use crate::error::CliError;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use zeroize::Zeroizing;

/// Environment variable that may hold the session token
pub const SESSION_ENV_VAR: &str = "AOC_SESSION";

/// Legacy token file name inside the user config directory
pub const LEGACY_SESSION_FILE: &str = ".adventofcode.session";

/// Token file name inside the user config directory
pub const SESSION_FILE: &str = "adventofcode.session";

type Lookup = fn(&SessionResolver) -> Result<Option<Zeroizing<String>>, CliError>;

/// Locates the session token, trying each source in priority order:
///
/// 1. an explicitly given file (a read failure here is fatal)
/// 2. the `AOC_SESSION` environment variable
/// 3. `<config dir>/.adventofcode.session`
/// 4. `<config dir>/adventofcode.session`
///
/// Tokens are trimmed of surrounding whitespace.
#[derive(Clone, Default)]
pub struct SessionResolver {
    explicit_path: Option<PathBuf>,
    env_token: Option<Zeroizing<String>>,
    config_dir: Option<PathBuf>,
}

impl SessionResolver {
    /// Build a resolver from explicit sources
    pub fn new(
        explicit_path: Option<PathBuf>,
        env_token: Option<String>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            explicit_path,
            env_token: env_token.map(Zeroizing::new),
            config_dir,
        }
    }

    /// Build a resolver reading `AOC_SESSION` and the OS config directory
    pub fn from_environment(explicit_path: Option<PathBuf>) -> Self {
        Self::new(
            explicit_path,
            std::env::var(SESSION_ENV_VAR).ok(),
            dirs::config_dir(),
        )
    }

    /// Resolve the session token, short-circuiting on the first source that has one
    pub fn resolve(&self) -> Result<Zeroizing<String>, CliError> {
        const LOOKUPS: [Lookup; 4] = [
            SessionResolver::explicit_file,
            SessionResolver::env_var,
            SessionResolver::legacy_file,
            SessionResolver::config_file,
        ];

        for lookup in LOOKUPS {
            if let Some(token) = lookup(self)? {
                return Ok(token);
            }
        }
        Err(CliError::SessionNotFound)
    }

    fn explicit_file(&self) -> Result<Option<Zeroizing<String>>, CliError> {
        let Some(path) = self
            .explicit_path
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
        else {
            return Ok(None);
        };

        let token = read_token(path)?;
        if token.is_empty() {
            return Err(CliError::EmptySession {
                path: path.to_path_buf(),
            });
        }
        debug!(path = %path.display(), "using session from explicit path");
        Ok(Some(token))
    }

    fn env_var(&self) -> Result<Option<Zeroizing<String>>, CliError> {
        let token = self
            .env_token
            .as_ref()
            .map(|t| Zeroizing::new(t.trim().to_string()))
            .filter(|t| !t.is_empty());
        if token.is_some() {
            debug!("using session from {}", SESSION_ENV_VAR);
        }
        Ok(token)
    }

    fn legacy_file(&self) -> Result<Option<Zeroizing<String>>, CliError> {
        self.config_file_named(LEGACY_SESSION_FILE)
    }

    fn config_file(&self) -> Result<Option<Zeroizing<String>>, CliError> {
        self.config_file_named(SESSION_FILE)
    }

    fn config_file_named(&self, name: &str) -> Result<Option<Zeroizing<String>>, CliError> {
        let Some(dir) = &self.config_dir else {
            return Ok(None);
        };

        let path = dir.join(name);
        if !path.exists() {
            return Ok(None);
        }

        let token = read_token(&path)?;
        if token.is_empty() {
            warn!(path = %path.display(), "ignoring empty session file");
            return Ok(None);
        }
        debug!(path = %path.display(), "using session from config directory");
        Ok(Some(token))
    }
}

impl fmt::Debug for SessionResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionResolver")
            .field("explicit_path", &self.explicit_path)
            .field("env_token", &self.env_token.as_ref().map(|_| "<redacted>"))
            .field("config_dir", &self.config_dir)
            .finish()
    }
}

/// Read a token file, trimming surrounding whitespace
fn read_token(path: &Path) -> Result<Zeroizing<String>, CliError> {
    let raw = Zeroizing::new(fs::read_to_string(path).map_err(|source| CliError::SessionRead {
        path: path.to_path_buf(),
        source,
    })?);
    Ok(Zeroizing::new(raw.trim().to_string()))
}
