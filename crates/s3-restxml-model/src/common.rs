//! Header groups shared by object and multipart operations.
//!
//! Several operations send or return the same cluster of headers. Each cluster is
//! one struct here, nested into the inputs and outputs that carry it. An all-`None`
//! group writes no headers.

use crate::DateTime;
use crate::enums::{ObjectLockLegalHoldStatus, ObjectLockMode, ServerSideEncryption};

/// Representation headers describing an object's content.
///
/// Sent on uploads and returned on reads. `GetObject` reuses the group to override
/// them in its response through `response-*` query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentHeaders {
    /// `Cache-Control`.
    pub cache_control: Option<String>,
    /// `Content-Disposition`.
    pub content_disposition: Option<String>,
    /// `Content-Encoding`.
    pub content_encoding: Option<String>,
    /// `Content-Language`.
    pub content_language: Option<String>,
    /// `Content-Type`.
    pub content_type: Option<String>,
    /// `Expires`, an HTTP-date.
    pub expires: Option<DateTime>,
}

impl ContentHeaders {
    /// Headers carrying only a content type.
    #[must_use]
    pub fn typed(content_type: impl Into<String>) -> Self {
        Self {
            content_type: Some(content_type.into()),
            ..Self::default()
        }
    }
}

/// Explicit ACL grants, each a comma-separated grantee list such as
/// `id="…", emailAddress="…"`.
///
/// `write` is sent by bucket creation and the ACL operations only. Uploads and copies
/// leave it out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grants {
    /// `x-amz-grant-full-control`.
    pub full_control: Option<String>,
    /// `x-amz-grant-read`.
    pub read: Option<String>,
    /// `x-amz-grant-read-acp`.
    pub read_acp: Option<String>,
    /// `x-amz-grant-write`.
    pub write: Option<String>,
    /// `x-amz-grant-write-acp`.
    pub write_acp: Option<String>,
}

/// Server-side encryption with a service-managed or KMS key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encryption {
    /// `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// `x-amz-server-side-encryption-bucket-key-enabled`.
    pub bucket_key_enabled: Option<bool>,
}

impl Encryption {
    /// Encrypt with the given KMS key.
    #[must_use]
    pub fn kms(key_id: impl Into<String>) -> Self {
        Self {
            server_side_encryption: Some(ServerSideEncryption::AwsKms),
            ssekms_key_id: Some(key_id.into()),
            bucket_key_enabled: None,
        }
    }
}

/// A customer-provided encryption key (SSE-C).
///
/// Responses echo the algorithm and key digest only, so `key` is always `None` on
/// outputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerKey {
    /// `x-amz-server-side-encryption-customer-algorithm`.
    pub algorithm: Option<String>,
    /// `x-amz-server-side-encryption-customer-key`, base64.
    pub key: Option<String>,
    /// `x-amz-server-side-encryption-customer-key-MD5`, base64.
    pub key_md5: Option<String>,
}

impl CustomerKey {
    /// An AES256 key with its digest, both base64-encoded.
    #[must_use]
    pub fn aes256(key: impl Into<String>, key_md5: impl Into<String>) -> Self {
        Self {
            algorithm: Some("AES256".to_owned()),
            key: Some(key.into()),
            key_md5: Some(key_md5.into()),
        }
    }
}

/// Object Lock settings applied to a new object, or reported for an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectLockSettings {
    /// `x-amz-object-lock-mode`.
    pub mode: Option<ObjectLockMode>,
    /// `x-amz-object-lock-retain-until-date`, ISO 8601 on the wire.
    pub retain_until_date: Option<DateTime>,
    /// `x-amz-object-lock-legal-hold`.
    pub legal_hold_status: Option<ObjectLockLegalHoldStatus>,
}

/// Conditions the service checks before acting.
///
/// On `GetObject` and `HeadObject` they are the plain `If-*` headers. On copies they
/// apply to the source and go out as `x-amz-copy-source-if-*`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preconditions {
    pub if_match: Option<String>,
    pub if_none_match: Option<String>,
    pub if_modified_since: Option<DateTime>,
    pub if_unmodified_since: Option<DateTime>,
}

impl Preconditions {
    /// Proceed only if the entity tag matches.
    #[must_use]
    pub fn matching(e_tag: impl Into<String>) -> Self {
        Self {
            if_match: Some(e_tag.into()),
            ..Self::default()
        }
    }

    /// Proceed only if the entity tag differs, as in a cache revalidation.
    #[must_use]
    pub fn not_matching(e_tag: impl Into<String>) -> Self {
        Self {
            if_none_match: Some(e_tag.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_default_to_empty_groups() {
        assert_eq!(ContentHeaders::default().content_type, None);
        assert_eq!(Grants::default(), Grants {
            full_control: None,
            read: None,
            read_acp: None,
            write: None,
            write_acp: None,
        });
        assert!(CustomerKey::default().key.is_none());
    }

    #[test]
    fn test_should_build_customer_key() {
        let key = CustomerKey::aes256("a2V5", "bWQ1");
        assert_eq!(key.algorithm.as_deref(), Some("AES256"));
        assert_eq!(key.key.as_deref(), Some("a2V5"));
        assert_eq!(key.key_md5.as_deref(), Some("bWQ1"));
    }

    #[test]
    fn test_should_build_kms_encryption() {
        let sse = Encryption::kms("alias/logs");
        assert_eq!(sse.server_side_encryption, Some(ServerSideEncryption::AwsKms));
        assert_eq!(sse.ssekms_key_id.as_deref(), Some("alias/logs"));
        assert_eq!(sse.bucket_key_enabled, None);
    }

    #[test]
    fn test_should_build_single_condition() {
        let only_if = Preconditions::matching("\"e1\"");
        assert_eq!(only_if.if_match.as_deref(), Some("\"e1\""));
        assert!(only_if.if_none_match.is_none());

        let unless = Preconditions::not_matching("\"e1\"");
        assert_eq!(unless.if_none_match.as_deref(), Some("\"e1\""));
        assert!(unless.if_modified_since.is_none());
    }

    #[test]
    fn test_should_carry_only_content_type() {
        let content = ContentHeaders::typed("text/plain");
        assert_eq!(content.content_type.as_deref(), Some("text/plain"));
        assert_eq!(content, ContentHeaders {
            content_type: Some("text/plain".to_owned()),
            ..ContentHeaders::default()
        });
    }
}
