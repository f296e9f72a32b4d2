//! Wire-level request and response.

use bytes::Bytes;
use http::{HeaderMap, Method};
use http_body::Body;
use s3_restxml_model::{BoxError, ByteStream};

use crate::encoding::encode_query;

/// Body of an outgoing request.
#[derive(Debug, Default)]
pub enum RequestBody {
    /// No body.
    #[default]
    Empty,
    /// Raw bytes, passed through unchanged.
    Stream(ByteStream),
    /// Text: an XML document or a policy.
    Text(String),
}

impl RequestBody {
    /// True when there is no body.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The text body, if this is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Convert into a byte stream for sending.
    #[must_use]
    pub fn into_byte_stream(self) -> ByteStream {
        match self {
            Self::Empty => ByteStream::empty(),
            Self::Stream(stream) => stream,
            Self::Text(text) => ByteStream::from(text),
        }
    }
}

/// A serialized request, ready for a transport.
#[derive(Debug)]
pub struct HttpRequest {
    /// `http` or `https`.
    pub protocol: String,
    /// Host name without port.
    pub hostname: String,
    /// Explicit port, if any.
    pub port: Option<u16>,
    /// HTTP method.
    pub method: Method,
    /// Percent-encoded path, starting with `/`.
    pub path: String,
    /// Query parameters in insertion order, unencoded. Sub-resource markers have an
    /// empty value.
    pub query: Vec<(String, String)>,
    /// Request headers.
    pub headers: HeaderMap,
    /// Request body.
    pub body: RequestBody,
}

impl HttpRequest {
    /// Look up a query value by key.
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a header as a string.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The path followed by the encoded query string, if any.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, encode_query(&self.query))
        }
    }

    /// The full request URI.
    #[must_use]
    pub fn uri(&self) -> String {
        let authority = match self.port {
            Some(port) => format!("{}:{port}", self.hostname),
            None => self.hostname.clone(),
        };
        format!("{}://{authority}{}", self.protocol, self.path_and_query())
    }

    /// Convert into an [`http::Request`] for transports built on the `http` crate.
    pub fn into_http(self) -> Result<http::Request<ByteStream>, http::Error> {
        let mut builder = http::Request::builder()
            .method(self.method.clone())
            .uri(self.uri());
        if let Some(headers) = builder.headers_mut() {
            *headers = self.headers;
        }
        builder.body(self.body.into_byte_stream())
    }
}

/// A response as delivered by a transport.
#[derive(Debug)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Response headers; lookups are case-insensitive.
    pub headers: HeaderMap,
    /// Response body, not yet consumed.
    pub body: ByteStream,
}

impl HttpResponse {
    /// Create a response.
    #[must_use]
    pub fn new(status: u16, headers: HeaderMap, body: ByteStream) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Look up a header as a string.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Convert from an [`http::Response`] with any body.
    pub fn from_http<B>(response: http::Response<B>) -> Self
    where
        B: Body<Data = Bytes> + Send + 'static,
        B::Error: Into<BoxError>,
    {
        let (parts, body) = response.into_parts();
        Self {
            status: parts.status.as_u16(),
            headers: parts.headers,
            body: ByteStream::from_body(body),
        }
    }
}
