//! S3 shape types shared by operation inputs and outputs.
//!
//! Collection fields are `Option<Vec<_>>`: `None` when the element was absent from the
//! document, `Some(vec![])` when it was present but empty.

use s3_restxml_xml::XmlValue;

use crate::DateTime;
use crate::enums::{
    BucketAccelerateStatus, BucketLocationConstraint, BucketVersioningStatus, ChecksumAlgorithm,
    CompressionType, ExpirationStatus, FileHeaderInfo, GranteeType, JSONType, MFADelete,
    ObjectLockEnabled, ObjectLockLegalHoldStatus, ObjectLockRetentionMode, ObjectOwnership, Payer,
    Permission, QuoteFields, RestoreRequestType, ServerSideEncryption, StorageClass, Tier,
    TransitionStorageClass,
};

/// S3 AbortIncompleteMultipartUpload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbortIncompleteMultipartUpload {
    pub days_after_initiation: Option<i32>,
}

/// S3 AccelerateConfiguration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccelerateConfiguration {
    pub status: Option<BucketAccelerateStatus>,
}

/// S3 AccessControlPolicy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessControlPolicy {
    pub grants: Option<Vec<Grant>>,
    pub owner: Option<Owner>,
}

/// S3 Bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bucket {
    pub bucket_region: Option<String>,
    pub creation_date: Option<DateTime>,
    pub name: Option<String>,
}

/// S3 BucketLifecycleConfiguration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BucketLifecycleConfiguration {
    pub rules: Option<Vec<LifecycleRule>>,
}

/// Base64 checksums of an object or part.
///
/// As response headers these are `x-amz-checksum-*`; inside XML documents they are
/// the `ChecksumCRC32`, `ChecksumCRC32C`, `ChecksumSHA1` and `ChecksumSHA256` members
/// of the enclosing element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checksum {
    pub crc32: Option<String>,
    pub crc32c: Option<String>,
    pub sha1: Option<String>,
    pub sha256: Option<String>,
}

impl Checksum {
    /// True when no algorithm has a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.crc32.is_none()
            && self.crc32c.is_none()
            && self.sha1.is_none()
            && self.sha256.is_none()
    }
}

/// S3 CommonPrefix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonPrefix {
    pub prefix: Option<String>,
}

/// S3 CompletedMultipartUpload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletedMultipartUpload {
    pub parts: Option<Vec<CompletedPart>>,
}

/// S3 CompletedPart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletedPart {
    pub checksum: Checksum,
    pub e_tag: Option<String>,
    pub part_number: Option<i32>,
}

/// S3 CopyObjectResult.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopyObjectResult {
    pub checksum: Checksum,
    pub e_tag: Option<String>,
    pub last_modified: Option<DateTime>,
}

/// S3 CopyPartResult.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopyPartResult {
    pub checksum: Checksum,
    pub e_tag: Option<String>,
    pub last_modified: Option<DateTime>,
}

/// S3 CORSConfiguration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CORSConfiguration {
    pub cors_rules: Option<Vec<CORSRule>>,
}

/// S3 CORSRule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CORSRule {
    pub allowed_headers: Option<Vec<String>>,
    pub allowed_methods: Option<Vec<String>>,
    pub allowed_origins: Option<Vec<String>>,
    pub expose_headers: Option<Vec<String>>,
    pub id: Option<String>,
    pub max_age_seconds: Option<i32>,
}

/// S3 CreateBucketConfiguration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateBucketConfiguration {
    pub location_constraint: Option<BucketLocationConstraint>,
}

/// S3 CSVInput.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CSVInput {
    pub allow_quoted_record_delimiter: Option<bool>,
    pub comments: Option<String>,
    pub field_delimiter: Option<String>,
    pub file_header_info: Option<FileHeaderInfo>,
    pub quote_character: Option<String>,
    pub quote_escape_character: Option<String>,
    pub record_delimiter: Option<String>,
}

/// S3 CSVOutput.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CSVOutput {
    pub field_delimiter: Option<String>,
    pub quote_character: Option<String>,
    pub quote_escape_character: Option<String>,
    pub quote_fields: Option<QuoteFields>,
    pub record_delimiter: Option<String>,
}

/// S3 DefaultRetention.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultRetention {
    pub days: Option<i32>,
    pub mode: Option<ObjectLockRetentionMode>,
    pub years: Option<i32>,
}

/// S3 Delete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Delete {
    pub objects: Option<Vec<ObjectIdentifier>>,
    pub quiet: Option<bool>,
}

/// S3 DeletedObject.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeletedObject {
    pub delete_marker: Option<bool>,
    pub delete_marker_version_id: Option<String>,
    pub key: Option<String>,
    pub version_id: Option<String>,
}

/// S3 DeleteMarkerEntry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteMarkerEntry {
    pub is_latest: Option<bool>,
    pub key: Option<String>,
    pub last_modified: Option<DateTime>,
    pub owner: Option<Owner>,
    pub version_id: Option<String>,
}

/// S3 Error (an entry of a `DeleteObjects` result).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteError {
    pub code: Option<String>,
    pub key: Option<String>,
    pub message: Option<String>,
    pub version_id: Option<String>,
}

/// S3 GetObjectAttributesParts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetObjectAttributesParts {
    pub is_truncated: Option<bool>,
    pub max_parts: Option<i32>,
    pub next_part_number_marker: Option<String>,
    pub part_number_marker: Option<String>,
    pub parts: Option<Vec<ObjectPart>>,
    pub total_parts_count: Option<i32>,
}

/// S3 GlacierJobParameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlacierJobParameters {
    pub tier: Tier,
}

/// S3 Grant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grant {
    pub grantee: Option<Grantee>,
    pub permission: Option<Permission>,
}

/// S3 Grantee.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grantee {
    pub display_name: Option<String>,
    pub email_address: Option<String>,
    pub id: Option<String>,
    pub r#type: GranteeType,
    pub uri: Option<String>,
}

/// S3 Initiator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Initiator {
    pub display_name: Option<String>,
    pub id: Option<String>,
}

/// S3 InputSerialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSerialization {
    pub compression_type: Option<CompressionType>,
    pub csv: Option<CSVInput>,
    pub json: Option<JSONInput>,
    pub parquet: Option<ParquetInput>,
}

/// S3 JSONInput.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JSONInput {
    pub r#type: Option<JSONType>,
}

/// S3 JSONOutput.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JSONOutput {
    pub record_delimiter: Option<String>,
}

/// S3 LifecycleExpiration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LifecycleExpiration {
    pub date: Option<DateTime>,
    pub days: Option<i32>,
    pub expired_object_delete_marker: Option<bool>,
}

/// S3 LifecycleRule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LifecycleRule {
    pub abort_incomplete_multipart_upload: Option<AbortIncompleteMultipartUpload>,
    pub expiration: Option<LifecycleExpiration>,
    pub filter: Option<LifecycleRuleFilter>,
    pub id: Option<String>,
    pub noncurrent_version_expiration: Option<NoncurrentVersionExpiration>,
    pub noncurrent_version_transitions: Option<Vec<NoncurrentVersionTransition>>,
    pub prefix: Option<String>,
    pub status: ExpirationStatus,
    pub transitions: Option<Vec<Transition>>,
}

/// S3 LifecycleRuleAndOperator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LifecycleRuleAndOperator {
    pub object_size_greater_than: Option<i64>,
    pub object_size_less_than: Option<i64>,
    pub prefix: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

/// S3 LifecycleRuleFilter.
///
/// Exactly one member is set on the wire. A member this model does not know is kept
/// as [`LifecycleRuleFilter::Unknown`] with its raw tag and value.
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleRuleFilter {
    And(LifecycleRuleAndOperator),
    ObjectSizeGreaterThan(i64),
    ObjectSizeLessThan(i64),
    Prefix(String),
    Tag(Tag),
    /// A filter member not described by this model.
    Unknown {
        tag: String,
        value: XmlValue,
    },
}

/// S3 MultipartUpload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartUpload {
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    pub initiated: Option<DateTime>,
    pub initiator: Option<Initiator>,
    pub key: Option<String>,
    pub owner: Option<Owner>,
    pub storage_class: Option<StorageClass>,
    pub upload_id: Option<String>,
}

/// S3 NoncurrentVersionExpiration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoncurrentVersionExpiration {
    pub newer_noncurrent_versions: Option<i32>,
    pub noncurrent_days: Option<i32>,
}

/// S3 NoncurrentVersionTransition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoncurrentVersionTransition {
    pub newer_noncurrent_versions: Option<i32>,
    pub noncurrent_days: Option<i32>,
    pub storage_class: Option<TransitionStorageClass>,
}

/// S3 Object (an entry of a listing).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    pub checksum_algorithm: Option<Vec<ChecksumAlgorithm>>,
    pub e_tag: Option<String>,
    pub key: Option<String>,
    pub last_modified: Option<DateTime>,
    pub owner: Option<Owner>,
    pub size: Option<i64>,
    pub storage_class: Option<StorageClass>,
}

/// S3 ObjectIdentifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectIdentifier {
    pub key: String,
    pub version_id: Option<String>,
}

/// S3 ObjectLockConfiguration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectLockConfiguration {
    pub object_lock_enabled: Option<ObjectLockEnabled>,
    pub rule: Option<ObjectLockRule>,
}

/// S3 ObjectLockLegalHold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectLockLegalHold {
    pub status: Option<ObjectLockLegalHoldStatus>,
}

/// S3 ObjectLockRetention.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectLockRetention {
    pub mode: Option<ObjectLockRetentionMode>,
    pub retain_until_date: Option<DateTime>,
}

/// S3 ObjectLockRule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectLockRule {
    pub default_retention: Option<DefaultRetention>,
}

/// S3 ObjectPart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectPart {
    pub checksum: Checksum,
    pub part_number: Option<i32>,
    pub size: Option<i64>,
}

/// S3 ObjectVersion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectVersion {
    pub checksum_algorithm: Option<Vec<ChecksumAlgorithm>>,
    pub e_tag: Option<String>,
    pub is_latest: Option<bool>,
    pub key: Option<String>,
    pub last_modified: Option<DateTime>,
    pub owner: Option<Owner>,
    pub size: Option<i64>,
    pub storage_class: Option<StorageClass>,
    pub version_id: Option<String>,
}

/// S3 OutputSerialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputSerialization {
    pub csv: Option<CSVOutput>,
    pub json: Option<JSONOutput>,
}

/// S3 Owner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Owner {
    pub display_name: Option<String>,
    pub id: Option<String>,
}

/// S3 OwnershipControls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OwnershipControls {
    pub rules: Option<Vec<OwnershipControlsRule>>,
}

/// S3 OwnershipControlsRule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OwnershipControlsRule {
    pub object_ownership: ObjectOwnership,
}

/// S3 ParquetInput. Carries no members.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParquetInput {}

/// S3 Part.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Part {
    pub checksum: Checksum,
    pub e_tag: Option<String>,
    pub last_modified: Option<DateTime>,
    pub part_number: Option<i32>,
    pub size: Option<i64>,
}

/// S3 PolicyStatus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyStatus {
    pub is_public: Option<bool>,
}

/// S3 Progress and Stats details of a select event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Progress {
    pub bytes_processed: Option<i64>,
    pub bytes_returned: Option<i64>,
    pub bytes_scanned: Option<i64>,
}

/// S3 Stats has the same members as [`Progress`].
pub type Stats = Progress;

/// S3 PublicAccessBlockConfiguration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublicAccessBlockConfiguration {
    pub block_public_acls: Option<bool>,
    pub block_public_policy: Option<bool>,
    pub ignore_public_acls: Option<bool>,
    pub restrict_public_buckets: Option<bool>,
}

/// S3 RequestPaymentConfiguration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestPaymentConfiguration {
    pub payer: Payer,
}

/// S3 RequestProgress.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestProgress {
    pub enabled: Option<bool>,
}

/// S3 RestoreRequest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestoreRequest {
    pub days: Option<i32>,
    pub description: Option<String>,
    pub glacier_job_parameters: Option<GlacierJobParameters>,
    pub tier: Option<Tier>,
    pub r#type: Option<RestoreRequestType>,
}

/// S3 ScanRange.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanRange {
    pub end: Option<i64>,
    pub start: Option<i64>,
}

/// S3 ServerSideEncryptionByDefault.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerSideEncryptionByDefault {
    pub kms_master_key_id: Option<String>,
    pub sse_algorithm: ServerSideEncryption,
}

/// S3 ServerSideEncryptionConfiguration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerSideEncryptionConfiguration {
    pub rules: Option<Vec<ServerSideEncryptionRule>>,
}

/// S3 ServerSideEncryptionRule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerSideEncryptionRule {
    pub apply_server_side_encryption_by_default: Option<ServerSideEncryptionByDefault>,
    pub bucket_key_enabled: Option<bool>,
}

/// S3 Tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    /// Create a tag.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// S3 Tagging.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tagging {
    pub tag_set: Option<Vec<Tag>>,
}

/// S3 Transition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transition {
    pub date: Option<DateTime>,
    pub days: Option<i32>,
    pub storage_class: Option<TransitionStorageClass>,
}

/// S3 VersioningConfiguration (request side).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VersioningConfiguration {
    pub mfa_delete: Option<MFADelete>,
    pub status: Option<BucketVersioningStatus>,
}
