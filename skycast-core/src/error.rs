use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced while talking to the weather services or the console.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection could not be established or the request timed out.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with anything other than `200 OK`.
    #[error("{url} responded with status {status}")]
    Status { url: String, status: StatusCode },

    /// The body could not be read to completion.
    #[error("failed to read response body from {url}: {source}")]
    Read {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not the JSON shape we expect.
    #[error("malformed {context} response: {source}")]
    Parse {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("console I/O failed: {0}")]
    Console(#[from] std::io::Error),
}

impl WeatherError {
    /// True for every failure that means "could not connect" to the user.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            WeatherError::Client(_)
                | WeatherError::Transport { .. }
                | WeatherError::Status { .. }
                | WeatherError::Read { .. }
        )
    }
}

/// Rejected answer to the "choose a location" prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{choice} is outside 1..={count}")]
    OutOfRange { choice: i64, count: usize },
}
