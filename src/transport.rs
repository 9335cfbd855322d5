use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::BoxError;

/// Minimal GET capability required by [`Client`](crate::Client).
///
/// `reqwest::Client` implements it out of the box; tests and exotic setups
/// substitute their own. Connection pooling, timeouts and cancellation are
/// the implementation's concern, never the client's.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<TransportResponse, BoxError>;
}

/// Status and body of a completed GET.
///
/// The body is read to completion before the response is returned, so the
/// underlying connection is released on success and error paths alike.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: String,
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn get(&self, url: &str) -> Result<TransportResponse, BoxError> {
        let response = reqwest::Client::get(self, url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}
