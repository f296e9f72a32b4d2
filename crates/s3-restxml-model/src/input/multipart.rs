//! Multipart upload inputs.
//!
//! An upload starts with [`CreateMultipartUploadInput`], which fixes the object's
//! metadata, encryption and lock settings. Parts then only carry their body and the
//! upload ID.

use std::collections::HashMap;

use typed_builder::TypedBuilder;

use crate::common::{
    ContentHeaders, CustomerKey, Encryption, Grants, ObjectLockSettings, Preconditions,
};
use crate::enums::{ChecksumAlgorithm, EncodingType, ObjectCannedACL, RequestPayer, StorageClass};
use crate::stream::ByteStream;
use crate::types::{Checksum, CompletedMultipartUpload};

#[derive(Debug, Clone, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
pub struct CreateMultipartUploadInput {
    #[builder(!default)]
    pub bucket: String,
    #[builder(!default)]
    pub key: String,
    pub content: ContentHeaders,
    pub metadata: HashMap<String, String>,
    pub acl: Option<ObjectCannedACL>,
    pub grants: Grants,
    pub encryption: Encryption,
    pub customer_key: CustomerKey,
    /// Algorithm every part must be checksummed with.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    pub object_lock: ObjectLockSettings,
    pub storage_class: Option<StorageClass>,
    pub tagging: Option<String>,
    pub request_payer: Option<RequestPayer>,
    pub expected_bucket_owner: Option<String>,
}

/// Upload one part. Part numbers run from 1 to 10000.
///
/// Holds a streaming body, so it is not `Clone`.
#[derive(Debug, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
pub struct UploadPartInput {
    #[builder(!default)]
    pub bucket: String,
    #[builder(!default)]
    pub key: String,
    #[builder(!default)]
    pub upload_id: String,
    #[builder(!default)]
    pub part_number: i32,
    pub body: Option<ByteStream>,
    pub content_length: Option<i64>,
    pub content_md5: Option<String>,
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    pub checksum: Checksum,
    /// Must repeat the key given when the upload was created.
    pub customer_key: CustomerKey,
    pub request_payer: Option<RequestPayer>,
    pub expected_bucket_owner: Option<String>,
}

/// Fill one part from a range of an existing object.
#[derive(Debug, Clone, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
pub struct UploadPartCopyInput {
    #[builder(!default)]
    pub bucket: String,
    #[builder(!default)]
    pub key: String,
    #[builder(!default)]
    pub upload_id: String,
    #[builder(!default)]
    pub part_number: i32,
    #[builder(!default)]
    pub copy_source: String,
    /// `bytes=first-last` of the source; the whole source when unset.
    pub copy_source_range: Option<String>,
    pub copy_source_conditions: Preconditions,
    pub request_payer: Option<RequestPayer>,
    pub expected_bucket_owner: Option<String>,
    pub expected_source_bucket_owner: Option<String>,
}

/// Assemble the listed parts into the final object.
#[derive(Debug, Clone, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
pub struct CompleteMultipartUploadInput {
    #[builder(!default)]
    pub bucket: String,
    #[builder(!default)]
    pub key: String,
    #[builder(!default)]
    pub upload_id: String,
    /// Parts in ascending part-number order, sent as the `CompleteMultipartUpload` body.
    pub multipart_upload: Option<CompletedMultipartUpload>,
    /// Checksums of the whole object.
    pub checksum: Checksum,
    pub customer_key: CustomerKey,
    pub if_match: Option<String>,
    pub if_none_match: Option<String>,
    pub request_payer: Option<RequestPayer>,
    pub expected_bucket_owner: Option<String>,
}

#[derive(Debug, Clone, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
pub struct AbortMultipartUploadInput {
    #[builder(!default)]
    pub bucket: String,
    #[builder(!default)]
    pub key: String,
    #[builder(!default)]
    pub upload_id: String,
    pub request_payer: Option<RequestPayer>,
    pub expected_bucket_owner: Option<String>,
}

/// Page through the parts uploaded so far.
#[derive(Debug, Clone, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
pub struct ListPartsInput {
    #[builder(!default)]
    pub bucket: String,
    #[builder(!default)]
    pub key: String,
    #[builder(!default)]
    pub upload_id: String,
    pub max_parts: Option<i32>,
    /// Continue after this part number, taken from `next_part_number_marker`.
    pub part_number_marker: Option<String>,
    pub request_payer: Option<RequestPayer>,
    pub expected_bucket_owner: Option<String>,
}

/// Page through the uploads in progress in a bucket.
#[derive(Debug, Clone, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
pub struct ListMultipartUploadsInput {
    #[builder(!default)]
    pub bucket: String,
    pub prefix: Option<String>,
    pub delimiter: Option<String>,
    pub encoding_type: Option<EncodingType>,
    /// Both markers come from the previous page's `next_*` fields.
    pub key_marker: Option<String>,
    pub upload_id_marker: Option<String>,
    pub max_uploads: Option<i32>,
    pub request_payer: Option<RequestPayer>,
    pub expected_bucket_owner: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CompletedPart;

    #[test]
    fn test_should_build_part_upload() {
        let input = UploadPartInput::builder()
            .bucket("b")
            .key("video.mp4")
            .upload_id("up-1")
            .part_number(3)
            .body(ByteStream::from_bytes(vec![0_u8; 8]))
            .checksum(Checksum {
                crc32: Some("AAAAAA==".to_owned()),
                ..Checksum::default()
            })
            .build();
        assert_eq!(input.part_number, 3);
        assert_eq!(input.upload_id, "up-1");
        assert_eq!(input.checksum.crc32.as_deref(), Some("AAAAAA=="));
        assert!(input.customer_key.key.is_none());
    }

    #[test]
    fn test_should_build_completion_with_parts() {
        let parts = (1..=2)
            .map(|n| CompletedPart {
                e_tag: Some(format!("\"e{n}\"")),
                part_number: Some(n),
                ..CompletedPart::default()
            })
            .collect();
        let input = CompleteMultipartUploadInput::builder()
            .bucket("b")
            .key("k")
            .upload_id("up-1")
            .multipart_upload(CompletedMultipartUpload { parts: Some(parts) })
            .build();
        let parts = input.multipart_upload.and_then(|m| m.parts).unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1].part_number, Some(2));
    }

    #[test]
    fn test_should_leave_listing_filters_unset() {
        let input = ListMultipartUploadsInput::builder().bucket("b").max_uploads(10).build();
        assert_eq!(input.max_uploads, Some(10));
        assert!(input.prefix.is_none());
        assert!(input.key_marker.is_none());
    }
}
