use thiserror::Error;

/// Errors produced by the router and its provider clients.
#[derive(Error, Debug)]
pub enum RouterError {
    /// Low-level HTTP transport failure (connection refused, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed at the serde level.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A provider returned a non-success status code.
    ///
    /// Returned by [`TextGen`](crate::textgen::TextGen) implementations.
    /// The weather client does not use this variant: a non-200 lookup is
    /// recovered locally as [`LookupOutcome::Unavailable`](crate::weather::LookupOutcome).
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code (e.g. 401, 429, 500).
        status: u16,
        /// Response body text.
        body: String,
    },

    /// Missing or invalid configuration detected at startup.
    #[error("{0}")]
    Config(String),

    /// The question was empty or whitespace-only. Rejected before the
    /// pipeline runs; the HTTP surface maps this to 400.
    #[error("Question cannot be empty.")]
    EmptyInput,

    /// Catch-all for other errors.
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for RouterError {
    fn from(err: anyhow::Error) -> Self {
        RouterError::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RouterError>;
