//! String coercion of header and query values.

use s3_restxml_model::DateTime;
use s3_restxml_model::enums::{
    ArchiveStatus, BucketAccelerateStatus, BucketCannedACL, BucketLocationConstraint,
    BucketVersioningStatus, ChecksumAlgorithm, ChecksumMode, CompressionType, EncodingType,
    ExpirationStatus, ExpressionType, FileHeaderInfo, GranteeType, IntelligentTieringAccessTier,
    JSONType, MFADelete, MFADeleteStatus, MetadataDirective, ObjectAttributes, ObjectCannedACL,
    ObjectLockEnabled, ObjectLockLegalHoldStatus, ObjectLockMode, ObjectLockRetentionMode,
    ObjectOwnership, Payer, Permission, QuoteFields, ReplicationStatus, RequestCharged,
    RequestPayer, RestoreRequestType, ServerSideEncryption, StorageClass, TaggingDirective, Tier,
    TransitionStorageClass,
};

use crate::timestamp::{format_http_date, parse_http_date};

/// A scalar that travels as a header or query string.
///
/// Timestamps use HTTP-date here; fields modeled as ISO 8601 are bound explicitly.
pub trait HttpValue: Sized {
    /// Canonical string form.
    fn to_http_value(&self) -> String;

    /// Parse the string form. The error is a human-readable reason.
    fn from_http_value(value: &str) -> Result<Self, String>;
}

impl HttpValue for String {
    fn to_http_value(&self) -> String {
        self.clone()
    }

    fn from_http_value(value: &str) -> Result<Self, String> {
        Ok(value.to_owned())
    }
}

impl HttpValue for bool {
    fn to_http_value(&self) -> String {
        self.to_string()
    }

    fn from_http_value(value: &str) -> Result<Self, String> {
        Ok(value == "true")
    }
}

impl HttpValue for i32 {
    fn to_http_value(&self) -> String {
        self.to_string()
    }

    fn from_http_value(value: &str) -> Result<Self, String> {
        value.trim().parse().map_err(|e| format!("{e}"))
    }
}

impl HttpValue for i64 {
    fn to_http_value(&self) -> String {
        self.to_string()
    }

    fn from_http_value(value: &str) -> Result<Self, String> {
        value.trim().parse().map_err(|e| format!("{e}"))
    }
}

impl HttpValue for DateTime {
    fn to_http_value(&self) -> String {
        format_http_date(self)
    }

    fn from_http_value(value: &str) -> Result<Self, String> {
        parse_http_date(value).map_err(|e| format!("{e}"))
    }
}

macro_rules! enum_http_value {
    ($($name:ty),+ $(,)?) => {
        $(
            impl HttpValue for $name {
                fn to_http_value(&self) -> String {
                    self.as_str().to_owned()
                }

                fn from_http_value(value: &str) -> Result<Self, String> {
                    Ok(Self::from(value))
                }
            }
        )+
    };
}

enum_http_value!(
    ArchiveStatus,
    BucketAccelerateStatus,
    BucketCannedACL,
    BucketLocationConstraint,
    BucketVersioningStatus,
    ChecksumAlgorithm,
    ChecksumMode,
    CompressionType,
    EncodingType,
    ExpirationStatus,
    ExpressionType,
    FileHeaderInfo,
    GranteeType,
    IntelligentTieringAccessTier,
    JSONType,
    MFADelete,
    MFADeleteStatus,
    MetadataDirective,
    ObjectAttributes,
    ObjectCannedACL,
    ObjectLockEnabled,
    ObjectLockLegalHoldStatus,
    ObjectLockMode,
    ObjectLockRetentionMode,
    ObjectOwnership,
    Payer,
    Permission,
    QuoteFields,
    ReplicationStatus,
    RequestCharged,
    RequestPayer,
    RestoreRequestType,
    ServerSideEncryption,
    StorageClass,
    TaggingDirective,
    Tier,
    TransitionStorageClass,
);

/// An input field bound to a header or a query parameter.
pub trait HttpField {
    /// Header value, or `None` when the field is not serializable as a header:
    /// absent, an empty string, or an empty list.
    fn header_value(&self) -> Option<String>;

    /// Query value, or `None` when absent. Empty strings are kept.
    fn query_value(&self) -> Option<String>;
}

impl HttpField for String {
    fn header_value(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.clone())
    }

    fn query_value(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl HttpField for i32 {
    fn header_value(&self) -> Option<String> {
        Some(self.to_string())
    }

    fn query_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl<T: HttpValue> HttpField for Option<T> {
    fn header_value(&self) -> Option<String> {
        self.as_ref()
            .map(HttpValue::to_http_value)
            .filter(|v| !v.is_empty())
    }

    fn query_value(&self) -> Option<String> {
        self.as_ref().map(HttpValue::to_http_value)
    }
}

impl<T: HttpValue> HttpField for Vec<T> {
    fn header_value(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(
            self.iter()
                .map(HttpValue::to_http_value)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    fn query_value(&self) -> Option<String> {
        self.header_value()
    }
}
