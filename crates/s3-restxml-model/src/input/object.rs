//! Object inputs.

use std::collections::HashMap;

use typed_builder::TypedBuilder;

use crate::common::{
    ContentHeaders, CustomerKey, Encryption, Grants, ObjectLockSettings, Preconditions,
};
use crate::enums::{
    ChecksumAlgorithm, ChecksumMode, ExpressionType, MetadataDirective, ObjectCannedACL,
    RequestPayer, StorageClass, TaggingDirective,
};
use crate::stream::ByteStream;
use crate::types::{
    Checksum, Delete, InputSerialization, OutputSerialization, RequestProgress, RestoreRequest,
    ScanRange,
};

/// Upload an object in a single request.
///
/// Holds a streaming body, so it is not `Clone`.
///
/// ```
/// use s3_restxml_model::common::ContentHeaders;
/// use s3_restxml_model::input::PutObjectInput;
///
/// let input = PutObjectInput::builder()
///     .bucket("photos")
///     .key("2024/a.jpg")
///     .content(ContentHeaders::typed("image/jpeg"))
///     .body("…")
///     .build();
/// assert_eq!(input.content.content_type.as_deref(), Some("image/jpeg"));
/// ```
#[derive(Debug, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
pub struct PutObjectInput {
    #[builder(!default)]
    pub bucket: String,
    #[builder(!default)]
    pub key: String,
    pub body: Option<ByteStream>,
    /// Sent as `Content-Length`; without it the body is streamed chunked.
    pub content_length: Option<i64>,
    pub content_md5: Option<String>,
    pub content: ContentHeaders,
    /// User metadata, sent as `x-amz-meta-*` headers.
    pub metadata: HashMap<String, String>,
    pub acl: Option<ObjectCannedACL>,
    pub grants: Grants,
    pub encryption: Encryption,
    pub customer_key: CustomerKey,
    /// Algorithm the SDK used for the trailing checksum.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Precomputed checksums of the body.
    pub checksum: Checksum,
    pub object_lock: ObjectLockSettings,
    pub storage_class: Option<StorageClass>,
    /// URL-encoded tag set, as in `k1=v1&k2=v2`.
    pub tagging: Option<String>,
    pub website_redirect_location: Option<String>,
    /// Write only if the current object has this entity tag.
    pub if_match: Option<String>,
    /// `*` writes only if no object exists at the key.
    pub if_none_match: Option<String>,
    pub request_payer: Option<RequestPayer>,
    pub expected_bucket_owner: Option<String>,
}

/// Download an object, or a byte range or part of it.
#[derive(Debug, Clone, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
pub struct GetObjectInput {
    #[builder(!default)]
    pub bucket: String,
    #[builder(!default)]
    pub key: String,
    pub version_id: Option<String>,
    /// A single `bytes=first-last` range.
    pub range: Option<String>,
    pub part_number: Option<i32>,
    pub conditions: Preconditions,
    /// Representation headers the service should return in place of the stored ones.
    /// They travel as `response-*` query parameters.
    pub response_overrides: ContentHeaders,
    pub customer_key: CustomerKey,
    pub checksum_mode: Option<ChecksumMode>,
    pub request_payer: Option<RequestPayer>,
    pub expected_bucket_owner: Option<String>,
}

/// Read an object's metadata. Same addressing as [`GetObjectInput`], minus the
/// response overrides.
#[derive(Debug, Clone, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
pub struct HeadObjectInput {
    #[builder(!default)]
    pub bucket: String,
    #[builder(!default)]
    pub key: String,
    pub version_id: Option<String>,
    pub range: Option<String>,
    pub part_number: Option<i32>,
    pub conditions: Preconditions,
    pub customer_key: CustomerKey,
    pub checksum_mode: Option<ChecksumMode>,
    pub request_payer: Option<RequestPayer>,
    pub expected_bucket_owner: Option<String>,
}

/// Copy an object, server side, into `bucket`/`key`.
#[derive(Debug, Clone, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
pub struct CopyObjectInput {
    #[builder(!default)]
    pub bucket: String,
    #[builder(!default)]
    pub key: String,
    /// `source-bucket/source-key`, optionally followed by `?versionId=…`. URL-encode
    /// the key.
    #[builder(!default)]
    pub copy_source: String,
    pub copy_source_conditions: Preconditions,
    /// Whether metadata is copied from the source or replaced by `metadata`.
    pub metadata_directive: Option<MetadataDirective>,
    pub metadata: HashMap<String, String>,
    pub content: ContentHeaders,
    pub tagging_directive: Option<TaggingDirective>,
    pub tagging: Option<String>,
    pub acl: Option<ObjectCannedACL>,
    pub grants: Grants,
    pub encryption: Encryption,
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    pub object_lock: ObjectLockSettings,
    pub storage_class: Option<StorageClass>,
    pub request_payer: Option<RequestPayer>,
    pub expected_bucket_owner: Option<String>,
    pub expected_source_bucket_owner: Option<String>,
}

/// Delete an object, or one version of it.
#[derive(Debug, Clone, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
pub struct DeleteObjectInput {
    #[builder(!default)]
    pub bucket: String,
    #[builder(!default)]
    pub key: String,
    pub version_id: Option<String>,
    pub if_match: Option<String>,
    /// Serial number and token of the MFA device, space separated.
    pub mfa: Option<String>,
    pub bypass_governance_retention: Option<bool>,
    pub request_payer: Option<RequestPayer>,
    pub expected_bucket_owner: Option<String>,
}

/// Delete up to 1000 objects in one request.
#[derive(Debug, Clone, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
pub struct DeleteObjectsInput {
    #[builder(!default)]
    pub bucket: String,
    /// The `Delete` request body.
    pub delete: Option<Delete>,
    pub mfa: Option<String>,
    pub bypass_governance_retention: Option<bool>,
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    pub request_payer: Option<RequestPayer>,
    pub expected_bucket_owner: Option<String>,
}

/// Restore an archived object for a number of days.
#[derive(Debug, Clone, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
pub struct RestoreObjectInput {
    #[builder(!default)]
    pub bucket: String,
    #[builder(!default)]
    pub key: String,
    pub version_id: Option<String>,
    pub restore_request: Option<RestoreRequest>,
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    pub request_payer: Option<RequestPayer>,
    pub expected_bucket_owner: Option<String>,
}

/// Run an SQL expression over a CSV, JSON or Parquet object.
///
/// Everything but the addressing, the customer key and the owner check goes into the
/// `SelectObjectContentRequest` body.
#[derive(Debug, Clone, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
pub struct SelectObjectContentInput {
    #[builder(!default)]
    pub bucket: String,
    #[builder(!default)]
    pub key: String,
    #[builder(!default)]
    pub expression: String,
    pub expression_type: ExpressionType,
    pub input_serialization: Option<InputSerialization>,
    pub output_serialization: Option<OutputSerialization>,
    pub request_progress: Option<RequestProgress>,
    pub scan_range: Option<ScanRange>,
    pub customer_key: CustomerKey,
    pub expected_bucket_owner: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_require_only_addressing() {
        let input = GetObjectInput::builder().bucket("b").key("k").build();
        assert_eq!(input.bucket, "b");
        assert_eq!(input.key, "k");
        assert!(input.version_id.is_none());
        assert_eq!(input.conditions, Preconditions::default());
    }

    #[test]
    fn test_should_wrap_optional_setters() {
        let input = HeadObjectInput::builder()
            .bucket("b")
            .key("k")
            .version_id("v1")
            .part_number(2)
            .conditions(Preconditions::not_matching("\"e1\""))
            .build();
        assert_eq!(input.version_id.as_deref(), Some("v1"));
        assert_eq!(input.part_number, Some(2));
        assert_eq!(input.conditions.if_none_match.as_deref(), Some("\"e1\""));
    }

    #[test]
    fn test_should_build_copy_with_source_conditions() {
        let input = CopyObjectInput::builder()
            .bucket("dst")
            .key("copy.txt")
            .copy_source("src/orig.txt")
            .copy_source_conditions(Preconditions::matching("\"abc\""))
            .metadata_directive(MetadataDirective::Replace)
            .metadata(HashMap::from([("owner".to_owned(), "ops".to_owned())]))
            .build();
        assert_eq!(input.copy_source, "src/orig.txt");
        assert_eq!(input.copy_source_conditions.if_match.as_deref(), Some("\"abc\""));
        assert_eq!(input.metadata["owner"], "ops");
        assert!(input.grants.read.is_none());
    }

    #[test]
    fn test_should_take_body_from_bytes() {
        let input = PutObjectInput::builder()
            .bucket("b")
            .key("k")
            .body(ByteStream::from_bytes("hello"))
            .content_length(5)
            .build();
        assert!(input.body.is_some());
        assert_eq!(input.content_length, Some(5));
    }
}
