//! Multipart upload operations.

use http::Method;
use s3_restxml_model::S3Operation;
use s3_restxml_model::input::{
    AbortMultipartUploadInput, CompleteMultipartUploadInput, CreateMultipartUploadInput,
    ListMultipartUploadsInput, ListPartsInput, UploadPartCopyInput, UploadPartInput,
};
use s3_restxml_model::types::Checksum;
use s3_restxml_model::output::{
    AbortMultipartUploadOutput, CompleteMultipartUploadOutput, CreateMultipartUploadOutput,
    ListMultipartUploadsOutput, ListPartsOutput, UploadPartCopyOutput, UploadPartOutput,
};

use super::{XML, expected_owner, operation, payload, request_charged, xml_body};
use crate::descriptor::{
    BodyBinding, OperationDescriptor, OutputBinding, PrefixHeaderBinding, QueryBinding, header,
    header_iso8601, label, out_header, query,
};
use crate::error_classifier::NO_SUCH_UPLOAD;
use crate::shapes::{XmlDeserialize, flattened, member};

operation!(
    /// Start a multipart upload and obtain its upload ID.
    CreateMultipartUpload(CreateMultipartUploadInput => CreateMultipartUploadOutput) = CREATE_MULTIPART_UPLOAD
);

static CREATE_MULTIPART_UPLOAD: OperationDescriptor<
    CreateMultipartUploadInput,
    CreateMultipartUploadOutput,
> = OperationDescriptor {
    operation: S3Operation::CreateMultipartUpload,
    method: Method::POST,
    path: "/{Bucket}/{Key+}",
    labels: &[label!("Bucket", bucket), label!("Key", key)],
    headers: &[
        header!("x-amz-acl", acl),
        header!("Cache-Control", content.cache_control),
        header!("Content-Disposition", content.content_disposition),
        header!("Content-Encoding", content.content_encoding),
        header!("Content-Language", content.content_language),
        header!("Content-Type", content.content_type),
        header!("Expires", content.expires),
        header!("x-amz-grant-full-control", grants.full_control),
        header!("x-amz-grant-read", grants.read),
        header!("x-amz-grant-read-acp", grants.read_acp),
        header!("x-amz-grant-write-acp", grants.write_acp),
        header!("x-amz-server-side-encryption", encryption.server_side_encryption),
        header!("x-amz-storage-class", storage_class),
        header!("x-amz-server-side-encryption-customer-algorithm", customer_key.algorithm),
        header!("x-amz-server-side-encryption-customer-key", customer_key.key),
        header!("x-amz-server-side-encryption-customer-key-MD5", customer_key.key_md5),
        header!("x-amz-server-side-encryption-aws-kms-key-id", encryption.ssekms_key_id),
        header!("x-amz-server-side-encryption-bucket-key-enabled", encryption.bucket_key_enabled),
        header!("x-amz-request-payer", request_payer),
        header!("x-amz-tagging", tagging),
        header!("x-amz-object-lock-mode", object_lock.mode),
        header_iso8601!("x-amz-object-lock-retain-until-date", object_lock.retain_until_date),
        header!("x-amz-object-lock-legal-hold", object_lock.legal_hold_status),
        expected_owner!(),
        header!("x-amz-checksum-algorithm", checksum_algorithm),
    ],
    prefix_headers: Some(PrefixHeaderBinding {
        prefix: "x-amz-meta-",
        get: |i| &i.metadata,
    }),
    query: &[QueryBinding::Static("uploads", "")],
    body: BodyBinding::None,
    content_type: None,
    success: &[200],
    output_headers: &[
        out_header!("x-amz-abort-date", abort_date),
        out_header!("x-amz-abort-rule-id", abort_rule_id),
        out_header!("x-amz-server-side-encryption", encryption.server_side_encryption),
        out_header!("x-amz-server-side-encryption-customer-algorithm", customer_key.algorithm),
        out_header!("x-amz-server-side-encryption-customer-key-MD5", customer_key.key_md5),
        out_header!("x-amz-server-side-encryption-aws-kms-key-id", encryption.ssekms_key_id),
        out_header!(
            "x-amz-server-side-encryption-bucket-key-enabled",
            encryption.bucket_key_enabled
        ),
        request_charged!(),
        out_header!("x-amz-checksum-algorithm", checksum_algorithm),
    ],
    output_prefix_headers: None,
    output_body: OutputBinding::Xml(|out, map| {
        out.bucket = member(map, "Bucket")?;
        out.key = member(map, "Key")?;
        out.upload_id = member(map, "UploadId")?;
        Ok(())
    }),
    errors: &[],
};

operation!(
    /// Upload one part of a multipart upload.
    UploadPart(UploadPartInput => UploadPartOutput) = UPLOAD_PART
);

static UPLOAD_PART: OperationDescriptor<UploadPartInput, UploadPartOutput> = OperationDescriptor {
    operation: S3Operation::UploadPart,
    method: Method::PUT,
    path: "/{Bucket}/{Key+}",
    labels: &[label!("Bucket", bucket), label!("Key", key)],
    headers: &[
        header!("Content-Length", content_length),
        header!("Content-MD5", content_md5),
        header!("x-amz-sdk-checksum-algorithm", checksum_algorithm),
        header!("x-amz-checksum-crc32", checksum.crc32),
        header!("x-amz-checksum-crc32c", checksum.crc32c),
        header!("x-amz-checksum-sha1", checksum.sha1),
        header!("x-amz-checksum-sha256", checksum.sha256),
        header!("x-amz-server-side-encryption-customer-algorithm", customer_key.algorithm),
        header!("x-amz-server-side-encryption-customer-key", customer_key.key),
        header!("x-amz-server-side-encryption-customer-key-MD5", customer_key.key_md5),
        header!("x-amz-request-payer", request_payer),
        expected_owner!(),
    ],
    prefix_headers: None,
    query: &[
        QueryBinding::Static("x-id", "UploadPart"),
        query!("partNumber", part_number),
        query!("uploadId", upload_id),
    ],
    body: BodyBinding::Blob(|i| i.body.take()),
    content_type: Some("application/octet-stream"),
    success: &[200],
    output_headers: &[
        out_header!("x-amz-server-side-encryption", encryption.server_side_encryption),
        out_header!("ETag", e_tag),
        out_header!("x-amz-checksum-crc32", checksum.crc32),
        out_header!("x-amz-checksum-crc32c", checksum.crc32c),
        out_header!("x-amz-checksum-sha1", checksum.sha1),
        out_header!("x-amz-checksum-sha256", checksum.sha256),
        out_header!("x-amz-server-side-encryption-customer-algorithm", customer_key.algorithm),
        out_header!("x-amz-server-side-encryption-customer-key-MD5", customer_key.key_md5),
        out_header!("x-amz-server-side-encryption-aws-kms-key-id", encryption.ssekms_key_id),
        out_header!(
            "x-amz-server-side-encryption-bucket-key-enabled",
            encryption.bucket_key_enabled
        ),
        request_charged!(),
    ],
    output_prefix_headers: None,
    output_body: OutputBinding::Discard,
    errors: &[],
};

operation!(
    /// Fill one part of a multipart upload from an existing object.
    UploadPartCopy(UploadPartCopyInput => UploadPartCopyOutput) = UPLOAD_PART_COPY
);

static UPLOAD_PART_COPY: OperationDescriptor<UploadPartCopyInput, UploadPartCopyOutput> =
    OperationDescriptor {
        operation: S3Operation::UploadPartCopy,
        method: Method::PUT,
        path: "/{Bucket}/{Key+}",
        labels: &[label!("Bucket", bucket), label!("Key", key)],
        headers: &[
            header!("x-amz-copy-source", copy_source),
            header!("x-amz-copy-source-if-match", copy_source_conditions.if_match),
            header!(
                "x-amz-copy-source-if-modified-since",
                copy_source_conditions.if_modified_since
            ),
            header!("x-amz-copy-source-if-none-match", copy_source_conditions.if_none_match),
            header!(
                "x-amz-copy-source-if-unmodified-since",
                copy_source_conditions.if_unmodified_since
            ),
            header!("x-amz-copy-source-range", copy_source_range),
            header!("x-amz-request-payer", request_payer),
            expected_owner!(),
            header!("x-amz-source-expected-bucket-owner", expected_source_bucket_owner),
        ],
        prefix_headers: None,
        query: &[
            QueryBinding::Static("x-id", "UploadPartCopy"),
            query!("partNumber", part_number),
            query!("uploadId", upload_id),
        ],
        body: BodyBinding::None,
        content_type: None,
        success: &[200],
        output_headers: &[
            out_header!("x-amz-copy-source-version-id", copy_source_version_id),
            out_header!("x-amz-server-side-encryption", encryption.server_side_encryption),
            out_header!("x-amz-server-side-encryption-aws-kms-key-id", encryption.ssekms_key_id),
            out_header!(
                "x-amz-server-side-encryption-bucket-key-enabled",
                encryption.bucket_key_enabled
            ),
            request_charged!(),
        ],
        output_prefix_headers: None,
        output_body: OutputBinding::Xml(|out, map| {
            out.copy_part_result = payload(map)?;
            Ok(())
        }),
        errors: &[],
    };

operation!(
    /// Assemble the uploaded parts into the final object.
    CompleteMultipartUpload(
        CompleteMultipartUploadInput => CompleteMultipartUploadOutput
    ) = COMPLETE_MULTIPART_UPLOAD
);

static COMPLETE_MULTIPART_UPLOAD: OperationDescriptor<
    CompleteMultipartUploadInput,
    CompleteMultipartUploadOutput,
> = OperationDescriptor {
    operation: S3Operation::CompleteMultipartUpload,
    method: Method::POST,
    path: "/{Bucket}/{Key+}",
    labels: &[label!("Bucket", bucket), label!("Key", key)],
    headers: &[
        header!("x-amz-checksum-crc32", checksum.crc32),
        header!("x-amz-checksum-crc32c", checksum.crc32c),
        header!("x-amz-checksum-sha1", checksum.sha1),
        header!("x-amz-checksum-sha256", checksum.sha256),
        header!("x-amz-request-payer", request_payer),
        expected_owner!(),
        header!("If-Match", if_match),
        header!("If-None-Match", if_none_match),
        header!("x-amz-server-side-encryption-customer-algorithm", customer_key.algorithm),
        header!("x-amz-server-side-encryption-customer-key", customer_key.key),
        header!("x-amz-server-side-encryption-customer-key-MD5", customer_key.key_md5),
    ],
    prefix_headers: None,
    query: &[query!("uploadId", upload_id)],
    body: xml_body!("CompleteMultipartUpload", multipart_upload),
    content_type: XML,
    success: &[200],
    output_headers: &[
        out_header!("x-amz-expiration", expiration),
        out_header!("x-amz-server-side-encryption", encryption.server_side_encryption),
        out_header!("x-amz-version-id", version_id),
        out_header!("x-amz-server-side-encryption-aws-kms-key-id", encryption.ssekms_key_id),
        out_header!(
            "x-amz-server-side-encryption-bucket-key-enabled",
            encryption.bucket_key_enabled
        ),
        request_charged!(),
    ],
    output_prefix_headers: None,
    output_body: OutputBinding::Xml(|out, map| {
        out.location = member(map, "Location")?;
        out.bucket = member(map, "Bucket")?;
        out.key = member(map, "Key")?;
        out.e_tag = member(map, "ETag")?;
        out.checksum = Checksum::from_map(map)?;
        Ok(())
    }),
    errors: &[],
};

operation!(
    /// Abort a multipart upload and discard its parts.
    AbortMultipartUpload(AbortMultipartUploadInput => AbortMultipartUploadOutput) = ABORT_MULTIPART_UPLOAD
);

static ABORT_MULTIPART_UPLOAD: OperationDescriptor<
    AbortMultipartUploadInput,
    AbortMultipartUploadOutput,
> = OperationDescriptor {
    operation: S3Operation::AbortMultipartUpload,
    method: Method::DELETE,
    path: "/{Bucket}/{Key+}",
    labels: &[label!("Bucket", bucket), label!("Key", key)],
    headers: &[header!("x-amz-request-payer", request_payer), expected_owner!()],
    prefix_headers: None,
    query: &[
        QueryBinding::Static("x-id", "AbortMultipartUpload"),
        query!("uploadId", upload_id),
    ],
    body: BodyBinding::None,
    content_type: None,
    success: &[204],
    output_headers: &[request_charged!()],
    output_prefix_headers: None,
    output_body: OutputBinding::Discard,
    errors: &[NO_SUCH_UPLOAD],
};

operation!(
    /// List the parts uploaded so far.
    ListParts(ListPartsInput => ListPartsOutput) = LIST_PARTS
);

static LIST_PARTS: OperationDescriptor<ListPartsInput, ListPartsOutput> = OperationDescriptor {
    operation: S3Operation::ListParts,
    method: Method::GET,
    path: "/{Bucket}/{Key+}",
    labels: &[label!("Bucket", bucket), label!("Key", key)],
    headers: &[header!("x-amz-request-payer", request_payer), expected_owner!()],
    prefix_headers: None,
    query: &[
        QueryBinding::Static("x-id", "ListParts"),
        query!("max-parts", max_parts),
        query!("part-number-marker", part_number_marker),
        query!("uploadId", upload_id),
    ],
    body: BodyBinding::None,
    content_type: None,
    success: &[200],
    output_headers: &[
        out_header!("x-amz-abort-date", abort_date),
        out_header!("x-amz-abort-rule-id", abort_rule_id),
        request_charged!(),
    ],
    output_prefix_headers: None,
    output_body: OutputBinding::Xml(|out, map| {
        out.bucket = member(map, "Bucket")?;
        out.key = member(map, "Key")?;
        out.upload_id = member(map, "UploadId")?;
        out.part_number_marker = member(map, "PartNumberMarker")?;
        out.next_part_number_marker = member(map, "NextPartNumberMarker")?;
        out.max_parts = member(map, "MaxParts")?;
        out.is_truncated = member(map, "IsTruncated")?;
        out.parts = flattened(map, "Part")?;
        out.initiator = member(map, "Initiator")?;
        out.owner = member(map, "Owner")?;
        out.storage_class = member(map, "StorageClass")?;
        out.checksum_algorithm = member(map, "ChecksumAlgorithm")?;
        Ok(())
    }),
    errors: &[],
};

operation!(
    /// List the multipart uploads in progress in a bucket.
    ListMultipartUploads(ListMultipartUploadsInput => ListMultipartUploadsOutput) = LIST_MULTIPART_UPLOADS
);

static LIST_MULTIPART_UPLOADS: OperationDescriptor<
    ListMultipartUploadsInput,
    ListMultipartUploadsOutput,
> = OperationDescriptor {
    operation: S3Operation::ListMultipartUploads,
    method: Method::GET,
    path: "/{Bucket}",
    labels: &[label!("Bucket", bucket)],
    headers: &[expected_owner!(), header!("x-amz-request-payer", request_payer)],
    prefix_headers: None,
    query: &[
        QueryBinding::Static("uploads", ""),
        query!("delimiter", delimiter),
        query!("encoding-type", encoding_type),
        query!("key-marker", key_marker),
        query!("max-uploads", max_uploads),
        query!("prefix", prefix),
        query!("upload-id-marker", upload_id_marker),
    ],
    body: BodyBinding::None,
    content_type: None,
    success: &[200],
    output_headers: &[request_charged!()],
    output_prefix_headers: None,
    output_body: OutputBinding::Xml(|out, map| {
        out.bucket = member(map, "Bucket")?;
        out.key_marker = member(map, "KeyMarker")?;
        out.upload_id_marker = member(map, "UploadIdMarker")?;
        out.next_key_marker = member(map, "NextKeyMarker")?;
        out.prefix = member(map, "Prefix")?;
        out.delimiter = member(map, "Delimiter")?;
        out.next_upload_id_marker = member(map, "NextUploadIdMarker")?;
        out.max_uploads = member(map, "MaxUploads")?;
        out.is_truncated = member(map, "IsTruncated")?;
        out.uploads = flattened(map, "Upload")?;
        out.common_prefixes = flattened(map, "CommonPrefixes")?;
        out.encoding_type = member(map, "EncodingType")?;
        Ok(())
    }),
    errors: &[],
};
