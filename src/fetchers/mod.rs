pub mod http;

use crate::query::SearchParameters;
use std::error::Error;
use std::fmt;

/// Number of results the backend returns per page
pub const PAGE_SIZE: usize = 25;

/// Source of listing markup, one page at a time
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    /// Fetch the markup fragment for the page starting at `offset`
    async fn fetch(&self, params: &SearchParameters, offset: usize) -> Result<String, FetchError>;
}

impl<T: PageFetcher> PageFetcher for &T {
    async fn fetch(&self, params: &SearchParameters, offset: usize) -> Result<String, FetchError> {
        (**self).fetch(params, offset).await
    }
}

/// Errors surfaced while fetching a page. All of them end the run.
#[derive(Debug)]
pub enum FetchError {
    /// The configured endpoint is not a valid URL.
    InvalidEndpoint(url::ParseError),
    /// The configured User-Agent is not a valid header value.
    InvalidUserAgent(reqwest::header::InvalidHeaderValue),
    /// The request could not be sent or no response arrived.
    Transport(reqwest::Error),
    /// A response arrived with a non-success status.
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoint(err) => write!(f, "invalid search endpoint: {err}"),
            Self::InvalidUserAgent(err) => write!(f, "invalid user agent: {err}"),
            Self::Transport(err) => write!(f, "transport error: {err}"),
            Self::HttpStatus { status, url } => write!(f, "http status {status} for {url}"),
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEndpoint(err) => Some(err),
            Self::InvalidUserAgent(err) => Some(err),
            Self::Transport(err) => Some(err),
            Self::HttpStatus { .. } => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}
