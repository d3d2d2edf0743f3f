use thiserror::Error;

/// Failures surfaced by the catalog client and carried inside screen state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Connection, DNS or TLS failure, or a non-2xx status.
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The body did not match the expected record shape, or carried a service
    /// error envelope instead of the record.
    #[error("Failed to decode response, error: {0}")]
    DecodeError(String),

    /// Invalid base URL or environment. Only raised while building a client.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::TransportError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::DecodeError(err.to_string())
    }
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}
