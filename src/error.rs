// src/error.rs
// =============================================================================
// Typed errors for the parts of the program that callers need to inspect.
//
// - ParseError: a tree expression could not be understood
// - TreeError: a tree could not be summed
// - CrawlError: one documentation page could not be fetched or read
//
// The top level (main.rs, the crawl pipeline) still uses anyhow::Result and
// wraps these with context. thiserror generates the Display and Error impls.
// =============================================================================

use thiserror::Error;

// Failure to turn a tree expression into a Node
//
// `offset` is the byte position in the input where parsing stopped
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected} at offset {offset}, found {found}")]
    Unexpected {
        expected: &'static str,
        found: String,
        offset: usize,
    },

    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    #[error("integer '{literal}' at offset {offset} does not fit in 64 bits")]
    IntegerOverflow { literal: String, offset: usize },

    #[error("tree nested deeper than {limit} levels at offset {offset}")]
    TooDeep { limit: usize, offset: usize },

    #[error("trailing input at offset {offset}: {rest}")]
    TrailingInput { rest: String, offset: usize },
}

// Failure to compute an aggregate over the node labels
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("cannot sum non-numeric label {0}")]
    NonNumeric(String),

    #[error("integer sum overflowed 64-bit range")]
    Overflow,
}

// Failure while processing a single documentation page
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The request timed out
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Any other transport-level failure (DNS, TLS, connection reset)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered, but not with 2xx
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// The page has no usable <title>, so we cannot name the API
    #[error("page has no title to name the API after")]
    MissingTitle,

    /// Writing the notes file failed
    #[error("could not write notes file: {0}")]
    Io(#[from] std::io::Error),
}

impl CrawlError {
    // Sorts reqwest errors into timeout vs. everything else
    pub fn from_request(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            CrawlError::Timeout(error.to_string())
        } else {
            CrawlError::Http(error)
        }
    }
}
