//! AOC HTTP client implementation

use crate::error::AocError;
use crate::parser::extract_main_fragment;
use reqwest::header::{COOKIE, HeaderValue};
use tracing::debug;
use zeroize::Zeroize;

const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// The main AOC HTTP client
///
/// Every request carries the session cookie and every successful response is
/// reduced to its `<main>` fragment before being returned.
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::new()?;
/// let session = "your_session_cookie";
///
/// let calendar = client.calendar(2024, session)?;
/// let input = client.input(2024, 1, session)?;
/// println!("Input: {}", input);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
}

impl AocClient {
    /// Create a new AOC client with rustls-tls configuration and no redirect policy
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    ///
    /// # Example
    ///
    /// ```
    /// use aoc_http_client::AocClient;
    ///
    /// let client = AocClient::new().expect("Failed to create client");
    /// ```
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the AOC client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_http_client::AocClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::builder()
    ///     .base_url("http://localhost:1234")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    /// Create a secure cookie header value from a session string
    ///
    /// The header is flagged sensitive so it never shows up in debug output,
    /// and the temporary string is zeroized after use.
    fn create_cookie_header(session: &str) -> Result<HeaderValue, AocError> {
        let mut cookie_string = format!("session={}", session);
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes())
            .map_err(|_| AocError::ClientInit("Invalid session cookie format".to_string()));
        cookie_string.zeroize();

        let mut sensitive_header = header_value?;
        sensitive_header.set_sensitive(true);
        Ok(sensitive_header)
    }

    /// Build an absolute URL from path segments below the base URL
    fn url_for(&self, segments: &[&str]) -> Result<reqwest::Url, AocError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AocError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(segments);
        Ok(url)
    }

    /// Read a response, failing on anything but 200 OK
    fn read_response(response: reqwest::blocking::Response) -> Result<String, AocError> {
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(AocError::InvalidStatus {
                url: response.url().to_string(),
                status,
            });
        }

        let body = response.text().map_err(|_| AocError::Encoding)?;
        Ok(extract_main_fragment(&body).to_string())
    }

    /// Issue an authenticated GET request
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - Network error
    /// * `AocError::InvalidStatus` - Any status other than 200
    /// * `AocError::Encoding` - Response is not valid UTF-8
    pub fn get(&self, url: reqwest::Url, session: &str) -> Result<String, AocError> {
        let cookie_header = Self::create_cookie_header(session)?;
        debug!(%url, "GET");

        let response = self.client.get(url).header(COOKIE, cookie_header).send()?;
        Self::read_response(response)
    }

    /// Issue an authenticated, form-encoded POST request
    ///
    /// # Errors
    ///
    /// Same as [`AocClient::get`].
    pub fn post(
        &self,
        url: reqwest::Url,
        form: &[(&str, &str)],
        session: &str,
    ) -> Result<String, AocError> {
        let cookie_header = Self::create_cookie_header(session)?;
        debug!(%url, "POST");

        // `form` sets Content-Type: application/x-www-form-urlencoded
        let response = self
            .client
            .post(url)
            .header(COOKIE, cookie_header)
            .form(form)
            .send()?;
        Self::read_response(response)
    }

    /// Fetch the calendar page for a year
    pub fn calendar(&self, year: u16, session: &str) -> Result<String, AocError> {
        let url = self.url_for(&[&year.to_string()])?;
        self.get(url, session)
    }

    /// Fetch the puzzle description for a specific year and day
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_http_client::AocClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::new()?;
    /// let puzzle = client.puzzle(2024, 1, "your_session_cookie")?;
    /// assert!(puzzle.starts_with("<main>"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn puzzle(&self, year: u16, day: u8, session: &str) -> Result<String, AocError> {
        let url = self.url_for(&[&year.to_string(), "day", &day.to_string()])?;
        self.get(url, session)
    }

    /// Fetch puzzle input for a specific year and day
    ///
    /// Inputs are plain text, so the fragment extractor leaves them untouched.
    pub fn input(&self, year: u16, day: u8, session: &str) -> Result<String, AocError> {
        let url = self.url_for(&[&year.to_string(), "day", &day.to_string(), "input"])?;
        self.get(url, session)
    }

    /// Submit an answer for a puzzle part
    ///
    /// Returns the `<main>` fragment of the response page. The verdict it
    /// contains is left for the caller to display.
    ///
    /// # Arguments
    ///
    /// * `year` - The AOC year (e.g., 2024)
    /// * `day` - The day number (1-25)
    /// * `part` - The part, sent verbatim as the `part` form field
    /// * `answer` - The answer to submit
    /// * `session` - The session cookie value
    pub fn submit_answer(
        &self,
        year: u16,
        day: u8,
        part: &str,
        answer: &str,
        session: &str,
    ) -> Result<String, AocError> {
        let url = self.url_for(&[&year.to_string(), "day", &day.to_string()])?;
        self.post(url, &[("part", part), ("answer", answer)], session)
    }
}

/// Builder for configuring an AOC HTTP client
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::builder()
///     .base_url("http://localhost:1234")?
///     .client_builder(
///         reqwest::blocking::Client::builder()
///             .timeout(Duration::from_secs(10))
///     )
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AocClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl AocClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            base_url: None,
            client_builder: None,
        }
    }

    /// Set a custom base URL for the client
    ///
    /// This is useful for testing with mock servers.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, AocError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set a custom HTTP client builder
    ///
    /// The redirect policy is always overridden to `Policy::none()` so that a
    /// redirect away from an expired session surfaces as a status error.
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the AOC client with the configured settings
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| AocError::ClientInit(e.to_string()))?,
        };

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        let client = builder
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient { client, base_url })
    }
}

impl Default for AocClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
