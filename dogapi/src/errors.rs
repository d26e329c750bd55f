//! Error types for the API client.

/// Errors that can occur when making API requests.
///
/// Every variant carries a human-readable message. Callers that only care
/// about the text can use [`Error::message`]; callers that want to tell a
/// network failure apart from an upstream "breed not found" can match on
/// the variant.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
    /// A breed or sub-breed would change the endpoint's path structure.
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    /// The request never produced a response (connection, DNS, TLS, or body read failure).
    #[error("Request failed: {0}")]
    Transport(String),
    /// The API answered with a non-2xx HTTP status.
    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },
    /// The response body was not the JSON shape we expected.
    #[error("Failed to parse response: {0}")]
    Parse(String),
    /// The envelope `status` was not `"success"`. Holds the envelope `message`.
    #[error("{0}")]
    Api(String),
}

impl Error {
    /// Returns the message carried by this error, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Error::InvalidBaseUrl(msg)
            | Error::InvalidPath(msg)
            | Error::Transport(msg)
            | Error::Parse(msg)
            | Error::Api(msg) => msg,
            Error::HttpStatus { message, .. } => message,
        }
    }
}

/// Name used by callers that think of this as the single API error kind.
pub type ApiError = Error;
