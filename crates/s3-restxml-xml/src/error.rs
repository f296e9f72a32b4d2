//! XML error types.

use std::io;

/// Errors that can occur while building or parsing S3 XML documents.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// An error from quick-xml attribute handling.
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// The document body is not valid UTF-8.
    #[error("XML body is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// A closing tag did not match the open element, or the document ended early.
    #[error("unbalanced XML document: {0}")]
    Unbalanced(String),

    /// A required XML element was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// An error parsing a typed value from XML text content.
    #[error("failed to parse value of <{element}>: {reason}")]
    ParseError {
        /// Element whose text failed to parse.
        element: String,
        /// Human-readable failure reason.
        reason: String,
    },
}

impl XmlError {
    /// Shorthand for a [`XmlError::ParseError`].
    pub fn parse(element: impl Into<String>, reason: impl ToString) -> Self {
        Self::ParseError {
            element: element.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result alias for XML operations.
pub type XmlResult<T> = Result<T, XmlError>;
