use reqwest::StatusCode;
use thiserror::Error;

/// Boxed error type accepted from [`Transport`](crate::Transport) implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by [`Client`](crate::Client) calls.
///
/// Nothing is retried or recovered internally; every failure is surfaced to
/// the immediate caller through this enum.
#[derive(Debug, Error)]
pub enum Error {
    /// The GET itself failed before any response arrived.
    #[error("cannot connect to {url}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The service answered with a non-200 HTTP status.
    #[error("bad status: {0}")]
    HttpStatus(StatusCode),

    /// The response body was not valid JSON for the expected shape.
    #[error("bad server response")]
    Decode(#[from] serde_json::Error),

    /// The body decoded fine but its embedded status code signals failure.
    #[error("bad status: {message} [{code}]")]
    ApiStatus { code: String, message: String },
}
