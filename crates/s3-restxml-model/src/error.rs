//! Service errors and response metadata.

use std::fmt;

use crate::enums::{IntelligentTieringAccessTier, StorageClass};

/// Metadata read from every response, successful or not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
    /// HTTP status code.
    pub http_status_code: Option<u16>,
    /// `x-amzn-requestid`, `x-amzn-request-id` or `x-amz-request-id`.
    pub request_id: Option<String>,
    /// `x-amz-id-2`.
    pub extended_request_id: Option<String>,
    /// `x-amz-cf-id`.
    pub cf_id: Option<String>,
}

/// Which side of the exchange an error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorFault {
    /// The request was at fault.
    #[default]
    Client,
    /// The service was at fault.
    Server,
}

impl ErrorFault {
    /// Returns the fault as a lowercase string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Server => "server",
        }
    }
}

impl fmt::Display for ErrorFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modeled S3 error shapes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum S3ErrorKind {
    /// The bucket name is taken by another account.
    BucketAlreadyExists,
    /// The bucket already exists and is owned by the caller.
    BucketAlreadyOwnedByYou,
    /// The object is archived and must be restored first.
    InvalidObjectState {
        /// Storage class of the archived object.
        storage_class: Option<StorageClass>,
        /// Intelligent-Tiering access tier of the archived object.
        access_tier: Option<IntelligentTieringAccessTier>,
    },
    /// The bucket does not exist.
    NoSuchBucket,
    /// The key does not exist.
    NoSuchKey,
    /// The multipart upload does not exist.
    NoSuchUpload,
    /// The resource was not found (HEAD requests carry no error body).
    NotFound,
    /// The restore target is already in the active tier.
    ObjectAlreadyInActiveTierError,
    /// The copy source is not in the active tier.
    ObjectNotInActiveTierError,
    /// An error code this model does not describe.
    #[default]
    Unhandled,
}

impl S3ErrorKind {
    /// The error code of a modeled shape; `None` for [`S3ErrorKind::Unhandled`].
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        Some(match self {
            Self::BucketAlreadyExists => "BucketAlreadyExists",
            Self::BucketAlreadyOwnedByYou => "BucketAlreadyOwnedByYou",
            Self::InvalidObjectState { .. } => "InvalidObjectState",
            Self::NoSuchBucket => "NoSuchBucket",
            Self::NoSuchKey => "NoSuchKey",
            Self::NoSuchUpload => "NoSuchUpload",
            Self::NotFound => "NotFound",
            Self::ObjectAlreadyInActiveTierError => "ObjectAlreadyInActiveTierError",
            Self::ObjectNotInActiveTierError => "ObjectNotInActiveTierError",
            Self::Unhandled => return None,
        })
    }
}

/// An error returned by the service.
///
/// `code` is the error name: the modeled shape's code, or for unmodeled errors the
/// code the service sent. `message` falls back to the code when the service sent
/// none.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct S3Error {
    /// The modeled error shape.
    pub kind: S3ErrorKind,
    /// The error name.
    pub code: String,
    /// A human-readable error message.
    pub message: String,
    /// Fault attribution.
    pub fault: ErrorFault,
    /// Metadata of the response that carried this error.
    pub metadata: ResponseMetadata,
}

impl S3Error {
    /// Create a client-fault error. An empty message is replaced by the code.
    #[must_use]
    pub fn new(kind: S3ErrorKind, code: impl Into<String>, message: Option<String>) -> Self {
        let code = code.into();
        let message = match message {
            Some(m) if !m.is_empty() => m,
            _ => code.clone(),
        };
        Self {
            kind,
            code,
            message,
            fault: ErrorFault::Client,
            metadata: ResponseMetadata::default(),
        }
    }

    /// Create an error for a modeled shape, named by its code.
    #[must_use]
    pub fn modeled(kind: S3ErrorKind, message: Option<String>) -> Self {
        let code = kind.code().unwrap_or("UnknownError");
        Self::new(kind, code, message)
    }

    /// Attach response metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: ResponseMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// The request ID reported by the service.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.metadata.request_id.as_deref()
    }

    /// True for `NoSuchKey`, `NoSuchBucket`, `NoSuchUpload` and `NotFound`.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind,
            S3ErrorKind::NoSuchKey
                | S3ErrorKind::NoSuchBucket
                | S3ErrorKind::NoSuchUpload
                | S3ErrorKind::NotFound
        )
    }
}
