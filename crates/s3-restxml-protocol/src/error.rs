//! Protocol error type.

use s3_restxml_model::{BoxError, S3Error};
use s3_restxml_xml::XmlError;

/// Errors raised while building a request or reading a response.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// A required path label was absent or empty.
    #[error("No value provided for input HTTP label: {0}")]
    MissingLabel(&'static str),

    /// A value could not be written as an HTTP header.
    #[error("invalid value for header {name}: {reason}")]
    InvalidHeader {
        /// Header name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A response header could not be coerced to its field type.
    #[error("invalid value {value:?} for response header {name}: {reason}")]
    InvalidHeaderValue {
        /// Header name.
        name: &'static str,
        /// Raw header value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The response body is not a well-formed document for this operation.
    #[error("XML error: {0}")]
    Xml(#[from] XmlError),

    /// A text body is not valid UTF-8.
    #[error("body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The event stream is malformed.
    #[error("event stream error: {0}")]
    EventStream(String),

    /// Reading the response body failed.
    #[error("failed to read body: {0}")]
    Body(#[source] BoxError),

    /// The transport failed to deliver the request.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The service returned an error response.
    #[error(transparent)]
    Service(#[from] S3Error),

    /// The request could not be assembled.
    #[error("HTTP error: {0}")]
    Http(#[from] http::Error),

    /// The endpoint could not be resolved.
    #[error("endpoint error: {0}")]
    Endpoint(String),
}

impl ProtocolError {
    /// The classified service error, if the service answered with one.
    #[must_use]
    pub fn service_error(&self) -> Option<&S3Error> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }

    /// Shorthand for an event-stream framing error.
    pub(crate) fn event_stream(reason: impl Into<String>) -> Self {
        Self::EventStream(reason.into())
    }
}

/// Result alias for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;
