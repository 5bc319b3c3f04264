use thiserror::Error;

/// Errors from the OMDb API client.
#[derive(Debug, Error)]
pub enum OmdbError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// OMDb answered with its `Response: "False"` sentinel. The payload is
    /// the API's own error text.
    #[error("no match: {0}")]
    NotFound(String),

    #[error("parse error: {0}")]
    Parse(String),
}
