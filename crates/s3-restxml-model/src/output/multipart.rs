//! Multipart upload outputs.

use crate::DateTime;
use crate::common::{CustomerKey, Encryption};
use crate::enums::{ChecksumAlgorithm, EncodingType, RequestCharged, StorageClass};
use crate::error::ResponseMetadata;
use crate::types::{Checksum, CommonPrefix, CopyPartResult, Initiator, MultipartUpload, Owner, Part};

/// A started upload. Keep `upload_id`: every later call needs it.
#[derive(Debug, Clone, Default)]
pub struct CreateMultipartUploadOutput {
    pub bucket: Option<String>,
    pub key: Option<String>,
    pub upload_id: Option<String>,
    /// When a lifecycle rule will abort the upload if it is still incomplete.
    pub abort_date: Option<DateTime>,
    pub abort_rule_id: Option<String>,
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    pub encryption: Encryption,
    pub customer_key: CustomerKey,
    pub request_charged: Option<RequestCharged>,
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default)]
pub struct UploadPartOutput {
    /// Pass back in the matching `CompletedPart`.
    pub e_tag: Option<String>,
    pub checksum: Checksum,
    pub encryption: Encryption,
    pub customer_key: CustomerKey,
    pub request_charged: Option<RequestCharged>,
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default)]
pub struct UploadPartCopyOutput {
    /// The `CopyPartResult` body.
    pub copy_part_result: Option<CopyPartResult>,
    pub copy_source_version_id: Option<String>,
    pub encryption: Encryption,
    pub request_charged: Option<RequestCharged>,
    pub response_metadata: ResponseMetadata,
}

/// The assembled object.
#[derive(Debug, Clone, Default)]
pub struct CompleteMultipartUploadOutput {
    pub location: Option<String>,
    pub bucket: Option<String>,
    pub key: Option<String>,
    /// Entity tag of the whole object, suffixed with `-<part count>`.
    pub e_tag: Option<String>,
    /// Read from the body, not from headers.
    pub checksum: Checksum,
    pub version_id: Option<String>,
    pub expiration: Option<String>,
    pub encryption: Encryption,
    pub request_charged: Option<RequestCharged>,
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default)]
pub struct AbortMultipartUploadOutput {
    pub request_charged: Option<RequestCharged>,
    pub response_metadata: ResponseMetadata,
}

/// One page of the parts of an upload.
#[derive(Debug, Clone, Default)]
pub struct ListPartsOutput {
    pub bucket: Option<String>,
    pub key: Option<String>,
    pub upload_id: Option<String>,
    pub parts: Option<Vec<Part>>,
    pub is_truncated: Option<bool>,
    pub part_number_marker: Option<String>,
    /// Pass as `part_number_marker` to fetch the next page.
    pub next_part_number_marker: Option<String>,
    pub max_parts: Option<i32>,
    pub initiator: Option<Initiator>,
    pub owner: Option<Owner>,
    pub storage_class: Option<StorageClass>,
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    pub abort_date: Option<DateTime>,
    pub abort_rule_id: Option<String>,
    pub request_charged: Option<RequestCharged>,
    pub response_metadata: ResponseMetadata,
}

/// One page of the uploads in progress.
#[derive(Debug, Clone, Default)]
pub struct ListMultipartUploadsOutput {
    pub bucket: Option<String>,
    pub uploads: Option<Vec<MultipartUpload>>,
    pub common_prefixes: Option<Vec<CommonPrefix>>,
    pub prefix: Option<String>,
    pub delimiter: Option<String>,
    pub encoding_type: Option<EncodingType>,
    pub is_truncated: Option<bool>,
    pub key_marker: Option<String>,
    pub upload_id_marker: Option<String>,
    pub next_key_marker: Option<String>,
    pub next_upload_id_marker: Option<String>,
    pub max_uploads: Option<i32>,
    pub request_charged: Option<RequestCharged>,
    pub response_metadata: ResponseMetadata,
}

impl_s3_output!(
    AbortMultipartUploadOutput,
    CompleteMultipartUploadOutput,
    CreateMultipartUploadOutput,
    ListMultipartUploadsOutput,
    ListPartsOutput,
    UploadPartCopyOutput,
    UploadPartOutput,
);
