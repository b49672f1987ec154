use thiserror::Error;

/// Unified error type for the hacoCMS client.
///
/// Every failed operation surfaces exactly one of these; the client never
/// retries on its own. Local misconfiguration is reported before any network
/// activity, server rejections carry the status and raw body, and anything
/// the transport or decoder raises converts in via `#[from]`.
#[derive(Debug, Error)]
pub enum Error {
    /// The client configuration cannot support the requested operation, or
    /// a client could not be constructed from the given inputs.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// The server answered with a non-2xx status.
    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// Transport-level failure (connect, TLS, timeout, reading the body).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body is not valid JSON or does not match the expected
    /// shape.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a new API error from a response status and raw body.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Error::Api {
            status,
            body: body.into(),
        }
    }
}
