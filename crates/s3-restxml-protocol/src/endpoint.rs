//! Endpoint resolution.

use http::Uri;

use crate::error::{ProtocolError, ProtocolResult};

/// Where requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// `http` or `https`.
    pub protocol: String,
    /// Host name without port.
    pub hostname: String,
    /// Explicit port, if any.
    pub port: Option<u16>,
    /// Base path prefixed to every request path. Empty or without a trailing `/`.
    pub path: String,
}

impl Endpoint {
    /// Parse an endpoint URL such as `http://localhost:4566` or
    /// `https://gateway.example.com/s3/`.
    pub fn from_url(url: &str) -> ProtocolResult<Self> {
        let uri: Uri = url
            .parse()
            .map_err(|e| ProtocolError::Endpoint(format!("invalid endpoint URL {url:?}: {e}")))?;
        let protocol = uri
            .scheme_str()
            .ok_or_else(|| ProtocolError::Endpoint(format!("endpoint URL {url:?} has no scheme")))?
            .to_owned();
        let hostname = uri
            .host()
            .ok_or_else(|| ProtocolError::Endpoint(format!("endpoint URL {url:?} has no host")))?
            .to_owned();
        let path = uri.path().trim_end_matches('/').to_owned();

        Ok(Self {
            protocol,
            hostname,
            port: uri.port_u16(),
            path,
        })
    }
}

/// Resolves the endpoint for a request. Called once per request, after input
/// validation.
#[async_trait::async_trait]
pub trait EndpointResolver: Send + Sync {
    /// Resolve the endpoint.
    async fn resolve(&self) -> ProtocolResult<Endpoint>;
}

/// A resolver that always returns the same endpoint.
#[derive(Debug, Clone)]
pub struct StaticEndpoint {
    endpoint: Endpoint,
}

impl StaticEndpoint {
    /// Wrap a fixed endpoint.
    #[must_use]
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    /// Parse a fixed endpoint from a URL.
    pub fn from_url(url: &str) -> ProtocolResult<Self> {
        Endpoint::from_url(url).map(Self::new)
    }

    /// The endpoint this resolver returns.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl EndpointResolver for StaticEndpoint {
    async fn resolve(&self) -> ProtocolResult<Endpoint> {
        Ok(self.endpoint.clone())
    }
}
