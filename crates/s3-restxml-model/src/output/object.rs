//! Object outputs.

use std::collections::HashMap;

use crate::DateTime;
use crate::common::{ContentHeaders, CustomerKey, Encryption, ObjectLockSettings};
use crate::enums::{ArchiveStatus, ReplicationStatus, RequestCharged, StorageClass};
use crate::error::ResponseMetadata;
use crate::stream::ByteStream;
use crate::types::{Checksum, CopyObjectResult, DeleteError, DeletedObject};

#[derive(Debug, Clone, Default)]
pub struct PutObjectOutput {
    pub e_tag: Option<String>,
    pub version_id: Option<String>,
    /// Size of the stored object, when the service reports it.
    pub size: Option<i64>,
    /// Expiry date and rule ID, when a lifecycle rule applies.
    pub expiration: Option<String>,
    pub checksum: Checksum,
    pub encryption: Encryption,
    pub customer_key: CustomerKey,
    pub request_charged: Option<RequestCharged>,
    pub response_metadata: ResponseMetadata,
}

/// A downloaded object.
///
/// `body` is handed over unconsumed; reading it is up to the caller.
#[derive(Debug, Default)]
pub struct GetObjectOutput {
    pub body: ByteStream,
    pub content_length: Option<i64>,
    /// Set on ranged reads, as `bytes first-last/total`.
    pub content_range: Option<String>,
    pub content: ContentHeaders,
    pub e_tag: Option<String>,
    pub last_modified: Option<DateTime>,
    pub version_id: Option<String>,
    pub metadata: HashMap<String, String>,
    /// Count of metadata entries that could not be sent as HTTP headers.
    pub missing_meta: Option<i32>,
    pub tag_count: Option<i32>,
    pub parts_count: Option<i32>,
    pub delete_marker: Option<bool>,
    pub accept_ranges: Option<String>,
    pub expiration: Option<String>,
    /// Restore status of an archived object, as in `ongoing-request="false", …`.
    pub restore: Option<String>,
    pub storage_class: Option<StorageClass>,
    pub replication_status: Option<ReplicationStatus>,
    pub website_redirect_location: Option<String>,
    pub checksum: Checksum,
    pub encryption: Encryption,
    pub customer_key: CustomerKey,
    pub object_lock: ObjectLockSettings,
    pub request_charged: Option<RequestCharged>,
    pub response_metadata: ResponseMetadata,
}

/// Object metadata read with `HEAD`. Mirrors [`GetObjectOutput`] without a body.
#[derive(Debug, Clone, Default)]
pub struct HeadObjectOutput {
    pub content_length: Option<i64>,
    pub content_range: Option<String>,
    pub content: ContentHeaders,
    pub e_tag: Option<String>,
    pub last_modified: Option<DateTime>,
    pub version_id: Option<String>,
    pub metadata: HashMap<String, String>,
    pub missing_meta: Option<i32>,
    pub parts_count: Option<i32>,
    pub delete_marker: Option<bool>,
    pub accept_ranges: Option<String>,
    pub expiration: Option<String>,
    pub restore: Option<String>,
    pub archive_status: Option<ArchiveStatus>,
    pub storage_class: Option<StorageClass>,
    pub replication_status: Option<ReplicationStatus>,
    pub website_redirect_location: Option<String>,
    pub checksum: Checksum,
    pub encryption: Encryption,
    pub customer_key: CustomerKey,
    pub object_lock: ObjectLockSettings,
    pub request_charged: Option<RequestCharged>,
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default)]
pub struct CopyObjectOutput {
    /// The `CopyObjectResult` body: the new object's entity tag and checksums.
    pub copy_object_result: Option<CopyObjectResult>,
    pub version_id: Option<String>,
    pub copy_source_version_id: Option<String>,
    pub expiration: Option<String>,
    pub encryption: Encryption,
    pub request_charged: Option<RequestCharged>,
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteObjectOutput {
    /// True when the delete created or removed a delete marker.
    pub delete_marker: Option<bool>,
    pub version_id: Option<String>,
    pub request_charged: Option<RequestCharged>,
    pub response_metadata: ResponseMetadata,
}

/// Result of a batch delete. Failures are reported per key, not as an error.
#[derive(Debug, Clone, Default)]
pub struct DeleteObjectsOutput {
    /// Empty in quiet mode.
    pub deleted: Option<Vec<DeletedObject>>,
    pub errors: Option<Vec<DeleteError>>,
    pub request_charged: Option<RequestCharged>,
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default)]
pub struct RestoreObjectOutput {
    /// Where the results of a `SELECT` restore were written.
    pub restore_output_path: Option<String>,
    pub request_charged: Option<RequestCharged>,
    pub response_metadata: ResponseMetadata,
}

impl_s3_output!(
    CopyObjectOutput,
    DeleteObjectOutput,
    DeleteObjectsOutput,
    GetObjectOutput,
    HeadObjectOutput,
    PutObjectOutput,
    RestoreObjectOutput,
);
