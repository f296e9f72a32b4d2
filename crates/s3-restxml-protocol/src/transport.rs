//! The HTTP transport seam.
//!
//! Connection pooling, retries, TLS and request signing live behind this trait.
//! Dropping the returned future cancels the request.

use s3_restxml_model::BoxError;

use crate::wire::{HttpRequest, HttpResponse};

/// Sends serialized requests.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request and return the raw response, whatever its status.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, BoxError>;
}
