//! Object operations.

use http::Method;
use s3_restxml_model::S3Operation;
use s3_restxml_model::input::{
    CopyObjectInput, DeleteObjectInput, DeleteObjectTaggingInput, DeleteObjectsInput,
    GetObjectAclInput, GetObjectAttributesInput, GetObjectInput, GetObjectLegalHoldInput,
    GetObjectRetentionInput, GetObjectTaggingInput, HeadObjectInput, PutObjectAclInput,
    PutObjectInput, PutObjectLegalHoldInput, PutObjectRetentionInput, PutObjectTaggingInput,
    RestoreObjectInput, SelectObjectContentInput,
};
use s3_restxml_model::output::{
    CopyObjectOutput, DeleteObjectOutput, DeleteObjectTaggingOutput, DeleteObjectsOutput,
    GetObjectAclOutput, GetObjectAttributesOutput, GetObjectLegalHoldOutput, GetObjectOutput,
    GetObjectRetentionOutput, GetObjectTaggingOutput, HeadObjectOutput, PutObjectAclOutput,
    PutObjectLegalHoldOutput, PutObjectOutput, PutObjectRetentionOutput, PutObjectTaggingOutput,
    RestoreObjectOutput,
};
use s3_restxml_xml::XmlNode;

use super::{XML, expected_owner, operation, payload, request_charged, xml_body};
use crate::descriptor::{
    BodyBinding, OperationDescriptor, OutputBinding, OutputPrefixHeaderBinding,
    PrefixHeaderBinding, QueryBinding, header, header_iso8601, label, out_header,
    out_header_iso8601, query,
};
use crate::error_classifier::{
    INVALID_OBJECT_STATE, NO_SUCH_KEY, NOT_FOUND, OBJECT_ALREADY_IN_ACTIVE_TIER,
    OBJECT_NOT_IN_ACTIVE_TIER,
};
use crate::event_stream::{EventReceiver, SelectObjectContentOutput};
use crate::shapes::{XmlNodeExt, access_control_list, flattened, member, tag_set};

const META: &str = "x-amz-meta-";

operation!(
    /// Upload an object.
    PutObject(PutObjectInput => PutObjectOutput) = PUT_OBJECT
);

static PUT_OBJECT: OperationDescriptor<PutObjectInput, PutObjectOutput> = OperationDescriptor {
    operation: S3Operation::PutObject,
    method: Method::PUT,
    path: "/{Bucket}/{Key+}",
    labels: &[label!("Bucket", bucket), label!("Key", key)],
    headers: &[
        header!("x-amz-acl", acl),
        header!("Cache-Control", content.cache_control),
        header!("Content-Disposition", content.content_disposition),
        header!("Content-Encoding", content.content_encoding),
        header!("Content-Language", content.content_language),
        header!("Content-Length", content_length),
        header!("Content-MD5", content_md5),
        header!("Content-Type", content.content_type),
        header!("x-amz-sdk-checksum-algorithm", checksum_algorithm),
        header!("x-amz-checksum-crc32", checksum.crc32),
        header!("x-amz-checksum-crc32c", checksum.crc32c),
        header!("x-amz-checksum-sha1", checksum.sha1),
        header!("x-amz-checksum-sha256", checksum.sha256),
        header!("Expires", content.expires),
        header!("If-Match", if_match),
        header!("If-None-Match", if_none_match),
        header!("x-amz-grant-full-control", grants.full_control),
        header!("x-amz-grant-read", grants.read),
        header!("x-amz-grant-read-acp", grants.read_acp),
        header!("x-amz-grant-write-acp", grants.write_acp),
        header!("x-amz-server-side-encryption", encryption.server_side_encryption),
        header!("x-amz-storage-class", storage_class),
        header!("x-amz-website-redirect-location", website_redirect_location),
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
    ],
    prefix_headers: Some(PrefixHeaderBinding {
        prefix: META,
        get: |i| &i.metadata,
    }),
    query: &[QueryBinding::Static("x-id", "PutObject")],
    body: BodyBinding::Blob(|i| i.body.take()),
    content_type: Some("application/octet-stream"),
    success: &[200],
    output_headers: &[
        out_header!("x-amz-expiration", expiration),
        out_header!("ETag", e_tag),
        out_header!("x-amz-checksum-crc32", checksum.crc32),
        out_header!("x-amz-checksum-crc32c", checksum.crc32c),
        out_header!("x-amz-checksum-sha1", checksum.sha1),
        out_header!("x-amz-checksum-sha256", checksum.sha256),
        out_header!("x-amz-server-side-encryption", encryption.server_side_encryption),
        out_header!("x-amz-version-id", version_id),
        out_header!("x-amz-server-side-encryption-customer-algorithm", customer_key.algorithm),
        out_header!("x-amz-server-side-encryption-customer-key-MD5", customer_key.key_md5),
        out_header!("x-amz-server-side-encryption-aws-kms-key-id", encryption.ssekms_key_id),
        out_header!(
            "x-amz-server-side-encryption-bucket-key-enabled",
            encryption.bucket_key_enabled
        ),
        out_header!("x-amz-object-size", size),
        request_charged!(),
    ],
    output_prefix_headers: None,
    output_body: OutputBinding::Discard,
    errors: &[],
};

operation!(
    /// Download an object. The body is returned unconsumed.
    GetObject(GetObjectInput => GetObjectOutput) = GET_OBJECT
);

static GET_OBJECT: OperationDescriptor<GetObjectInput, GetObjectOutput> = OperationDescriptor {
    operation: S3Operation::GetObject,
    method: Method::GET,
    path: "/{Bucket}/{Key+}",
    labels: &[label!("Bucket", bucket), label!("Key", key)],
    headers: &[
        header!("If-Match", conditions.if_match),
        header!("If-Modified-Since", conditions.if_modified_since),
        header!("If-None-Match", conditions.if_none_match),
        header!("If-Unmodified-Since", conditions.if_unmodified_since),
        header!("Range", range),
        header!("x-amz-server-side-encryption-customer-algorithm", customer_key.algorithm),
        header!("x-amz-server-side-encryption-customer-key", customer_key.key),
        header!("x-amz-server-side-encryption-customer-key-MD5", customer_key.key_md5),
        header!("x-amz-request-payer", request_payer),
        expected_owner!(),
        header!("x-amz-checksum-mode", checksum_mode),
    ],
    prefix_headers: None,
    query: &[
        QueryBinding::Static("x-id", "GetObject"),
        query!("response-cache-control", response_overrides.cache_control),
        query!("response-content-disposition", response_overrides.content_disposition),
        query!("response-content-encoding", response_overrides.content_encoding),
        query!("response-content-language", response_overrides.content_language),
        query!("response-content-type", response_overrides.content_type),
        query!("response-expires", response_overrides.expires),
        query!("versionId", version_id),
        query!("partNumber", part_number),
    ],
    body: BodyBinding::None,
    content_type: None,
    success: &[200],
    output_headers: &[
        out_header!("x-amz-delete-marker", delete_marker),
        out_header!("accept-ranges", accept_ranges),
        out_header!("x-amz-expiration", expiration),
        out_header!("x-amz-restore", restore),
        out_header!("Last-Modified", last_modified),
        out_header!("Content-Length", content_length),
        out_header!("ETag", e_tag),
        out_header!("x-amz-checksum-crc32", checksum.crc32),
        out_header!("x-amz-checksum-crc32c", checksum.crc32c),
        out_header!("x-amz-checksum-sha1", checksum.sha1),
        out_header!("x-amz-checksum-sha256", checksum.sha256),
        out_header!("x-amz-missing-meta", missing_meta),
        out_header!("x-amz-version-id", version_id),
        out_header!("Cache-Control", content.cache_control),
        out_header!("Content-Disposition", content.content_disposition),
        out_header!("Content-Encoding", content.content_encoding),
        out_header!("Content-Language", content.content_language),
        out_header!("Content-Range", content_range),
        out_header!("Content-Type", content.content_type),
        out_header!("Expires", content.expires),
        out_header!("x-amz-website-redirect-location", website_redirect_location),
        out_header!("x-amz-server-side-encryption", encryption.server_side_encryption),
        out_header!("x-amz-server-side-encryption-customer-algorithm", customer_key.algorithm),
        out_header!("x-amz-server-side-encryption-customer-key-MD5", customer_key.key_md5),
        out_header!("x-amz-server-side-encryption-aws-kms-key-id", encryption.ssekms_key_id),
        out_header!(
            "x-amz-server-side-encryption-bucket-key-enabled",
            encryption.bucket_key_enabled
        ),
        out_header!("x-amz-storage-class", storage_class),
        request_charged!(),
        out_header!("x-amz-replication-status", replication_status),
        out_header!("x-amz-mp-parts-count", parts_count),
        out_header!("x-amz-tagging-count", tag_count),
        out_header!("x-amz-object-lock-mode", object_lock.mode),
        out_header_iso8601!("x-amz-object-lock-retain-until-date", object_lock.retain_until_date),
        out_header!("x-amz-object-lock-legal-hold", object_lock.legal_hold_status),
    ],
    output_prefix_headers: Some(OutputPrefixHeaderBinding {
        prefix: META,
        get_mut: |o| &mut o.metadata,
    }),
    output_body: OutputBinding::Stream(|out, body| out.body = body),
    errors: &[INVALID_OBJECT_STATE, NO_SUCH_KEY],
};

operation!(
    /// Read object metadata without the body.
    HeadObject(HeadObjectInput => HeadObjectOutput) = HEAD_OBJECT
);

static HEAD_OBJECT: OperationDescriptor<HeadObjectInput, HeadObjectOutput> = OperationDescriptor {
    operation: S3Operation::HeadObject,
    method: Method::HEAD,
    path: "/{Bucket}/{Key+}",
    labels: &[label!("Bucket", bucket), label!("Key", key)],
    headers: &[
        header!("If-Match", conditions.if_match),
        header!("If-Modified-Since", conditions.if_modified_since),
        header!("If-None-Match", conditions.if_none_match),
        header!("If-Unmodified-Since", conditions.if_unmodified_since),
        header!("Range", range),
        header!("x-amz-server-side-encryption-customer-algorithm", customer_key.algorithm),
        header!("x-amz-server-side-encryption-customer-key", customer_key.key),
        header!("x-amz-server-side-encryption-customer-key-MD5", customer_key.key_md5),
        header!("x-amz-request-payer", request_payer),
        expected_owner!(),
        header!("x-amz-checksum-mode", checksum_mode),
    ],
    prefix_headers: None,
    query: &[query!("versionId", version_id), query!("partNumber", part_number)],
    body: BodyBinding::None,
    content_type: None,
    success: &[200],
    output_headers: &[
        out_header!("x-amz-delete-marker", delete_marker),
        out_header!("accept-ranges", accept_ranges),
        out_header!("x-amz-expiration", expiration),
        out_header!("x-amz-restore", restore),
        out_header!("x-amz-archive-status", archive_status),
        out_header!("Last-Modified", last_modified),
        out_header!("Content-Length", content_length),
        out_header!("ETag", e_tag),
        out_header!("x-amz-checksum-crc32", checksum.crc32),
        out_header!("x-amz-checksum-crc32c", checksum.crc32c),
        out_header!("x-amz-checksum-sha1", checksum.sha1),
        out_header!("x-amz-checksum-sha256", checksum.sha256),
        out_header!("x-amz-missing-meta", missing_meta),
        out_header!("x-amz-version-id", version_id),
        out_header!("Cache-Control", content.cache_control),
        out_header!("Content-Disposition", content.content_disposition),
        out_header!("Content-Encoding", content.content_encoding),
        out_header!("Content-Language", content.content_language),
        out_header!("Content-Range", content_range),
        out_header!("Content-Type", content.content_type),
        out_header!("Expires", content.expires),
        out_header!("x-amz-website-redirect-location", website_redirect_location),
        out_header!("x-amz-server-side-encryption", encryption.server_side_encryption),
        out_header!("x-amz-server-side-encryption-customer-algorithm", customer_key.algorithm),
        out_header!("x-amz-server-side-encryption-customer-key-MD5", customer_key.key_md5),
        out_header!("x-amz-server-side-encryption-aws-kms-key-id", encryption.ssekms_key_id),
        out_header!(
            "x-amz-server-side-encryption-bucket-key-enabled",
            encryption.bucket_key_enabled
        ),
        out_header!("x-amz-storage-class", storage_class),
        request_charged!(),
        out_header!("x-amz-replication-status", replication_status),
        out_header!("x-amz-mp-parts-count", parts_count),
        out_header!("x-amz-object-lock-mode", object_lock.mode),
        out_header_iso8601!("x-amz-object-lock-retain-until-date", object_lock.retain_until_date),
        out_header!("x-amz-object-lock-legal-hold", object_lock.legal_hold_status),
    ],
    output_prefix_headers: Some(OutputPrefixHeaderBinding {
        prefix: META,
        get_mut: |o| &mut o.metadata,
    }),
    output_body: OutputBinding::Discard,
    errors: &[NOT_FOUND],
};

operation!(
    /// Delete an object or one of its versions.
    DeleteObject(DeleteObjectInput => DeleteObjectOutput) = DELETE_OBJECT
);

static DELETE_OBJECT: OperationDescriptor<DeleteObjectInput, DeleteObjectOutput> =
    OperationDescriptor {
        operation: S3Operation::DeleteObject,
        method: Method::DELETE,
        path: "/{Bucket}/{Key+}",
        labels: &[label!("Bucket", bucket), label!("Key", key)],
        headers: &[
            header!("x-amz-mfa", mfa),
            header!("x-amz-request-payer", request_payer),
            header!("x-amz-bypass-governance-retention", bypass_governance_retention),
            expected_owner!(),
            header!("If-Match", if_match),
        ],
        prefix_headers: None,
        query: &[
            QueryBinding::Static("x-id", "DeleteObject"),
            query!("versionId", version_id),
        ],
        body: BodyBinding::None,
        content_type: None,
        success: &[204],
        output_headers: &[
            out_header!("x-amz-delete-marker", delete_marker),
            out_header!("x-amz-version-id", version_id),
            request_charged!(),
        ],
        output_prefix_headers: None,
        output_body: OutputBinding::Discard,
        errors: &[],
    };

operation!(
    /// Delete up to 1000 objects in one request.
    DeleteObjects(DeleteObjectsInput => DeleteObjectsOutput) = DELETE_OBJECTS
);

static DELETE_OBJECTS: OperationDescriptor<DeleteObjectsInput, DeleteObjectsOutput> =
    OperationDescriptor {
        operation: S3Operation::DeleteObjects,
        method: Method::POST,
        path: "/{Bucket}",
        labels: &[label!("Bucket", bucket)],
        headers: &[
            header!("x-amz-mfa", mfa),
            header!("x-amz-request-payer", request_payer),
            header!("x-amz-bypass-governance-retention", bypass_governance_retention),
            expected_owner!(),
            header!("x-amz-sdk-checksum-algorithm", checksum_algorithm),
        ],
        prefix_headers: None,
        query: &[QueryBinding::Static("delete", "")],
        body: xml_body!("Delete", delete),
        content_type: XML,
        success: &[200],
        output_headers: &[request_charged!()],
        output_prefix_headers: None,
        output_body: OutputBinding::Xml(|out, map| {
            out.deleted = flattened(map, "Deleted")?;
            out.errors = flattened(map, "Error")?;
            Ok(())
        }),
        errors: &[],
    };

operation!(
    /// Copy an object, server side.
    CopyObject(CopyObjectInput => CopyObjectOutput) = COPY_OBJECT
);

static COPY_OBJECT: OperationDescriptor<CopyObjectInput, CopyObjectOutput> = OperationDescriptor {
    operation: S3Operation::CopyObject,
    method: Method::PUT,
    path: "/{Bucket}/{Key+}",
    labels: &[label!("Bucket", bucket), label!("Key", key)],
    headers: &[
        header!("x-amz-acl", acl),
        header!("Cache-Control", content.cache_control),
        header!("x-amz-checksum-algorithm", checksum_algorithm),
        header!("Content-Disposition", content.content_disposition),
        header!("Content-Encoding", content.content_encoding),
        header!("Content-Language", content.content_language),
        header!("Content-Type", content.content_type),
        header!("x-amz-copy-source", copy_source),
        header!("x-amz-copy-source-if-match", copy_source_conditions.if_match),
        header!("x-amz-copy-source-if-modified-since", copy_source_conditions.if_modified_since),
        header!("x-amz-copy-source-if-none-match", copy_source_conditions.if_none_match),
        header!(
            "x-amz-copy-source-if-unmodified-since",
            copy_source_conditions.if_unmodified_since
        ),
        header!("Expires", content.expires),
        header!("x-amz-grant-full-control", grants.full_control),
        header!("x-amz-grant-read", grants.read),
        header!("x-amz-grant-read-acp", grants.read_acp),
        header!("x-amz-grant-write-acp", grants.write_acp),
        header!("x-amz-metadata-directive", metadata_directive),
        header!("x-amz-tagging-directive", tagging_directive),
        header!("x-amz-server-side-encryption", encryption.server_side_encryption),
        header!("x-amz-storage-class", storage_class),
        header!("x-amz-server-side-encryption-aws-kms-key-id", encryption.ssekms_key_id),
        header!("x-amz-server-side-encryption-bucket-key-enabled", encryption.bucket_key_enabled),
        header!("x-amz-request-payer", request_payer),
        header!("x-amz-tagging", tagging),
        header!("x-amz-object-lock-mode", object_lock.mode),
        header_iso8601!("x-amz-object-lock-retain-until-date", object_lock.retain_until_date),
        header!("x-amz-object-lock-legal-hold", object_lock.legal_hold_status),
        expected_owner!(),
        header!("x-amz-source-expected-bucket-owner", expected_source_bucket_owner),
    ],
    prefix_headers: Some(PrefixHeaderBinding {
        prefix: META,
        get: |i| &i.metadata,
    }),
    query: &[QueryBinding::Static("x-id", "CopyObject")],
    body: BodyBinding::None,
    content_type: None,
    success: &[200],
    output_headers: &[
        out_header!("x-amz-expiration", expiration),
        out_header!("x-amz-copy-source-version-id", copy_source_version_id),
        out_header!("x-amz-version-id", version_id),
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
        out.copy_object_result = payload(map)?;
        Ok(())
    }),
    errors: &[OBJECT_NOT_IN_ACTIVE_TIER],
};

// Tagging

operation!(
    /// Read the tag set of an object.
    GetObjectTagging(GetObjectTaggingInput => GetObjectTaggingOutput) = GET_OBJECT_TAGGING
);

static GET_OBJECT_TAGGING: OperationDescriptor<GetObjectTaggingInput, GetObjectTaggingOutput> =
    OperationDescriptor {
        operation: S3Operation::GetObjectTagging,
        method: Method::GET,
        path: "/{Bucket}/{Key+}",
        labels: &[label!("Bucket", bucket), label!("Key", key)],
        headers: &[expected_owner!(), header!("x-amz-request-payer", request_payer)],
        prefix_headers: None,
        query: &[QueryBinding::Static("tagging", ""), query!("versionId", version_id)],
        body: BodyBinding::None,
        content_type: None,
        success: &[200],
        output_headers: &[out_header!("x-amz-version-id", version_id)],
        output_prefix_headers: None,
        output_body: OutputBinding::Xml(|out, map| {
            out.tag_set = tag_set(map)?;
            Ok(())
        }),
        errors: &[],
    };

operation!(
    /// Replace the tag set of an object.
    PutObjectTagging(PutObjectTaggingInput => PutObjectTaggingOutput) = PUT_OBJECT_TAGGING
);

static PUT_OBJECT_TAGGING: OperationDescriptor<PutObjectTaggingInput, PutObjectTaggingOutput> =
    OperationDescriptor {
        operation: S3Operation::PutObjectTagging,
        method: Method::PUT,
        path: "/{Bucket}/{Key+}",
        labels: &[label!("Bucket", bucket), label!("Key", key)],
        headers: &[
            header!("Content-MD5", content_md5),
            header!("x-amz-sdk-checksum-algorithm", checksum_algorithm),
            expected_owner!(),
            header!("x-amz-request-payer", request_payer),
        ],
        prefix_headers: None,
        query: &[QueryBinding::Static("tagging", ""), query!("versionId", version_id)],
        body: xml_body!("Tagging", tagging),
        content_type: XML,
        success: &[200],
        output_headers: &[out_header!("x-amz-version-id", version_id)],
        output_prefix_headers: None,
        output_body: OutputBinding::Discard,
        errors: &[],
    };

operation!(
    /// Remove the tag set of an object.
    DeleteObjectTagging(DeleteObjectTaggingInput => DeleteObjectTaggingOutput) = DELETE_OBJECT_TAGGING
);

static DELETE_OBJECT_TAGGING: OperationDescriptor<
    DeleteObjectTaggingInput,
    DeleteObjectTaggingOutput,
> = OperationDescriptor {
    operation: S3Operation::DeleteObjectTagging,
    method: Method::DELETE,
    path: "/{Bucket}/{Key+}",
    labels: &[label!("Bucket", bucket), label!("Key", key)],
    headers: &[expected_owner!()],
    prefix_headers: None,
    query: &[QueryBinding::Static("tagging", ""), query!("versionId", version_id)],
    body: BodyBinding::None,
    content_type: None,
    success: &[204],
    output_headers: &[out_header!("x-amz-version-id", version_id)],
    output_prefix_headers: None,
    output_body: OutputBinding::Discard,
    errors: &[],
};

// ACL

operation!(
    /// Read the access control list of an object.
    GetObjectAcl(GetObjectAclInput => GetObjectAclOutput) = GET_OBJECT_ACL
);

static GET_OBJECT_ACL: OperationDescriptor<GetObjectAclInput, GetObjectAclOutput> =
    OperationDescriptor {
        operation: S3Operation::GetObjectAcl,
        method: Method::GET,
        path: "/{Bucket}/{Key+}",
        labels: &[label!("Bucket", bucket), label!("Key", key)],
        headers: &[header!("x-amz-request-payer", request_payer), expected_owner!()],
        prefix_headers: None,
        query: &[QueryBinding::Static("acl", ""), query!("versionId", version_id)],
        body: BodyBinding::None,
        content_type: None,
        success: &[200],
        output_headers: &[request_charged!()],
        output_prefix_headers: None,
        output_body: OutputBinding::Xml(|out, map| {
            out.owner = member(map, "Owner")?;
            out.grants = access_control_list(map)?;
            Ok(())
        }),
        errors: &[NO_SUCH_KEY],
    };

operation!(
    /// Set the access control list of an object.
    PutObjectAcl(PutObjectAclInput => PutObjectAclOutput) = PUT_OBJECT_ACL
);

static PUT_OBJECT_ACL: OperationDescriptor<PutObjectAclInput, PutObjectAclOutput> =
    OperationDescriptor {
        operation: S3Operation::PutObjectAcl,
        method: Method::PUT,
        path: "/{Bucket}/{Key+}",
        labels: &[label!("Bucket", bucket), label!("Key", key)],
        headers: &[
            header!("x-amz-acl", acl),
            header!("Content-MD5", content_md5),
            header!("x-amz-sdk-checksum-algorithm", checksum_algorithm),
            header!("x-amz-grant-full-control", grants.full_control),
            header!("x-amz-grant-read", grants.read),
            header!("x-amz-grant-read-acp", grants.read_acp),
            header!("x-amz-grant-write", grants.write),
            header!("x-amz-grant-write-acp", grants.write_acp),
            header!("x-amz-request-payer", request_payer),
            expected_owner!(),
        ],
        prefix_headers: None,
        query: &[QueryBinding::Static("acl", ""), query!("versionId", version_id)],
        body: xml_body!("AccessControlPolicy", access_control_policy),
        content_type: XML,
        success: &[200],
        output_headers: &[request_charged!()],
        output_prefix_headers: None,
        output_body: OutputBinding::Discard,
        errors: &[NO_SUCH_KEY],
    };

// Retention and legal hold

operation!(
    /// Read the retention settings of an object version.
    GetObjectRetention(GetObjectRetentionInput => GetObjectRetentionOutput) = GET_OBJECT_RETENTION
);

static GET_OBJECT_RETENTION: OperationDescriptor<
    GetObjectRetentionInput,
    GetObjectRetentionOutput,
> = OperationDescriptor {
    operation: S3Operation::GetObjectRetention,
    method: Method::GET,
    path: "/{Bucket}/{Key+}",
    labels: &[label!("Bucket", bucket), label!("Key", key)],
    headers: &[header!("x-amz-request-payer", request_payer), expected_owner!()],
    prefix_headers: None,
    query: &[QueryBinding::Static("retention", ""), query!("versionId", version_id)],
    body: BodyBinding::None,
    content_type: None,
    success: &[200],
    output_headers: &[],
    output_prefix_headers: None,
    output_body: OutputBinding::Xml(|out, map| {
        out.retention = payload(map)?;
        Ok(())
    }),
    errors: &[],
};

operation!(
    /// Place a retention configuration on an object version.
    PutObjectRetention(PutObjectRetentionInput => PutObjectRetentionOutput) = PUT_OBJECT_RETENTION
);

static PUT_OBJECT_RETENTION: OperationDescriptor<
    PutObjectRetentionInput,
    PutObjectRetentionOutput,
> = OperationDescriptor {
    operation: S3Operation::PutObjectRetention,
    method: Method::PUT,
    path: "/{Bucket}/{Key+}",
    labels: &[label!("Bucket", bucket), label!("Key", key)],
    headers: &[
        header!("x-amz-request-payer", request_payer),
        header!("x-amz-bypass-governance-retention", bypass_governance_retention),
        header!("Content-MD5", content_md5),
        header!("x-amz-sdk-checksum-algorithm", checksum_algorithm),
        expected_owner!(),
    ],
    prefix_headers: None,
    query: &[QueryBinding::Static("retention", ""), query!("versionId", version_id)],
    body: xml_body!("Retention", retention),
    content_type: XML,
    success: &[200],
    output_headers: &[request_charged!()],
    output_prefix_headers: None,
    output_body: OutputBinding::Discard,
    errors: &[],
};

operation!(
    /// Read the legal hold status of an object version.
    GetObjectLegalHold(GetObjectLegalHoldInput => GetObjectLegalHoldOutput) = GET_OBJECT_LEGAL_HOLD
);

static GET_OBJECT_LEGAL_HOLD: OperationDescriptor<
    GetObjectLegalHoldInput,
    GetObjectLegalHoldOutput,
> = OperationDescriptor {
    operation: S3Operation::GetObjectLegalHold,
    method: Method::GET,
    path: "/{Bucket}/{Key+}",
    labels: &[label!("Bucket", bucket), label!("Key", key)],
    headers: &[header!("x-amz-request-payer", request_payer), expected_owner!()],
    prefix_headers: None,
    query: &[QueryBinding::Static("legal-hold", ""), query!("versionId", version_id)],
    body: BodyBinding::None,
    content_type: None,
    success: &[200],
    output_headers: &[],
    output_prefix_headers: None,
    output_body: OutputBinding::Xml(|out, map| {
        out.legal_hold = payload(map)?;
        Ok(())
    }),
    errors: &[],
};

operation!(
    /// Place or lift a legal hold on an object version.
    PutObjectLegalHold(PutObjectLegalHoldInput => PutObjectLegalHoldOutput) = PUT_OBJECT_LEGAL_HOLD
);

static PUT_OBJECT_LEGAL_HOLD: OperationDescriptor<
    PutObjectLegalHoldInput,
    PutObjectLegalHoldOutput,
> = OperationDescriptor {
    operation: S3Operation::PutObjectLegalHold,
    method: Method::PUT,
    path: "/{Bucket}/{Key+}",
    labels: &[label!("Bucket", bucket), label!("Key", key)],
    headers: &[
        header!("x-amz-request-payer", request_payer),
        header!("Content-MD5", content_md5),
        header!("x-amz-sdk-checksum-algorithm", checksum_algorithm),
        expected_owner!(),
    ],
    prefix_headers: None,
    query: &[QueryBinding::Static("legal-hold", ""), query!("versionId", version_id)],
    body: xml_body!("LegalHold", legal_hold),
    content_type: XML,
    success: &[200],
    output_headers: &[request_charged!()],
    output_prefix_headers: None,
    output_body: OutputBinding::Discard,
    errors: &[],
};

operation!(
    /// Read selected attributes of an object without its body.
    GetObjectAttributes(GetObjectAttributesInput => GetObjectAttributesOutput) = GET_OBJECT_ATTRIBUTES
);

static GET_OBJECT_ATTRIBUTES: OperationDescriptor<
    GetObjectAttributesInput,
    GetObjectAttributesOutput,
> = OperationDescriptor {
    operation: S3Operation::GetObjectAttributes,
    method: Method::GET,
    path: "/{Bucket}/{Key+}",
    labels: &[label!("Bucket", bucket), label!("Key", key)],
    headers: &[
        header!("x-amz-max-parts", max_parts),
        header!("x-amz-part-number-marker", part_number_marker),
        header!("x-amz-server-side-encryption-customer-algorithm", customer_key.algorithm),
        header!("x-amz-server-side-encryption-customer-key", customer_key.key),
        header!("x-amz-server-side-encryption-customer-key-MD5", customer_key.key_md5),
        header!("x-amz-request-payer", request_payer),
        expected_owner!(),
        header!("x-amz-object-attributes", object_attributes),
    ],
    prefix_headers: None,
    query: &[QueryBinding::Static("attributes", ""), query!("versionId", version_id)],
    body: BodyBinding::None,
    content_type: None,
    success: &[200],
    output_headers: &[
        out_header!("x-amz-delete-marker", delete_marker),
        out_header!("Last-Modified", last_modified),
        out_header!("x-amz-version-id", version_id),
        request_charged!(),
    ],
    output_prefix_headers: None,
    output_body: OutputBinding::Xml(|out, map| {
        out.e_tag = member(map, "ETag")?;
        out.checksum = member(map, "Checksum")?;
        out.object_parts = member(map, "ObjectParts")?;
        out.storage_class = member(map, "StorageClass")?;
        out.object_size = member(map, "ObjectSize")?;
        Ok(())
    }),
    errors: &[NO_SUCH_KEY],
};

operation!(
    /// Restore a temporary copy of an archived object.
    RestoreObject(RestoreObjectInput => RestoreObjectOutput) = RESTORE_OBJECT
);

static RESTORE_OBJECT: OperationDescriptor<RestoreObjectInput, RestoreObjectOutput> =
    OperationDescriptor {
        operation: S3Operation::RestoreObject,
        method: Method::POST,
        path: "/{Bucket}/{Key+}",
        labels: &[label!("Bucket", bucket), label!("Key", key)],
        headers: &[
            header!("x-amz-request-payer", request_payer),
            header!("x-amz-sdk-checksum-algorithm", checksum_algorithm),
            expected_owner!(),
        ],
        prefix_headers: None,
        query: &[QueryBinding::Static("restore", ""), query!("versionId", version_id)],
        body: xml_body!("RestoreRequest", restore_request),
        content_type: XML,
        success: &[200, 202],
        output_headers: &[
            request_charged!(),
            out_header!("x-amz-restore-output-path", restore_output_path),
        ],
        output_prefix_headers: None,
        output_body: OutputBinding::Discard,
        errors: &[OBJECT_ALREADY_IN_ACTIVE_TIER],
    };

operation!(
    /// Run an SQL expression over one object and stream back the results.
    SelectObjectContent(SelectObjectContentInput => SelectObjectContentOutput) = SELECT_OBJECT_CONTENT
);

static SELECT_OBJECT_CONTENT: OperationDescriptor<
    SelectObjectContentInput,
    SelectObjectContentOutput,
> = OperationDescriptor {
    operation: S3Operation::SelectObjectContent,
    method: Method::POST,
    path: "/{Bucket}/{Key+}",
    labels: &[label!("Bucket", bucket), label!("Key", key)],
    headers: &[
        header!("x-amz-server-side-encryption-customer-algorithm", customer_key.algorithm),
        header!("x-amz-server-side-encryption-customer-key", customer_key.key),
        header!("x-amz-server-side-encryption-customer-key-MD5", customer_key.key_md5),
        expected_owner!(),
    ],
    prefix_headers: None,
    query: &[
        QueryBinding::Static("select", ""),
        QueryBinding::Static("select-type", "2"),
    ],
    body: BodyBinding::Xml {
        root: "SelectObjectContentRequest",
        build: select_request,
    },
    content_type: XML,
    success: &[200],
    output_headers: &[],
    output_prefix_headers: None,
    output_body: OutputBinding::Stream(|out, body| {
        let receiver = EventReceiver::new(body).with_metadata(out.response_metadata.clone());
        out.payload = Some(receiver);
    }),
    errors: &[],
};

/// The request members sit directly under the document root.
fn select_request(input: &SelectObjectContentInput) -> Option<XmlNode> {
    let mut node = XmlNode::new("SelectObjectContentRequest");
    node.scalar("Expression", Some(&input.expression))
        .scalar("ExpressionType", Some(&input.expression_type))
        .shape("InputSerialization", input.input_serialization.as_ref())
        .shape("OutputSerialization", input.output_serialization.as_ref())
        .shape("RequestProgress", input.request_progress.as_ref())
        .shape("ScanRange", input.scan_range.as_ref());
    Some(node)
}

#[cfg(test)]
mod tests {
    use s3_restxml_model::enums::{ExpressionType, ObjectLockLegalHoldStatus};
    use s3_restxml_model::types::{CSVOutput, OutputSerialization};
    use s3_restxml_xml::parse_body;

    use super::*;
    use crate::descriptor::Operation;

    fn read<Op: Operation>(body: &[u8]) -> Op::Output {
        let OutputBinding::Xml(read) = &Op::descriptor().output_body else {
            panic!("{} has no XML output", Op::descriptor().operation);
        };
        let mut out = Op::Output::default();
        read(&mut out, &parse_body(body).unwrap()).unwrap();
        out
    }

    #[test]
    fn test_should_read_delete_results() {
        let out = read::<DeleteObjects>(
            b"<DeleteResult>\
              <Deleted><Key>a</Key></Deleted>\
              <Error><Key>b</Key><Code>AccessDenied</Code><Message>no</Message></Error>\
              </DeleteResult>",
        );
        let deleted = out.deleted.unwrap();
        assert_eq!(deleted.len(), 1);
        assert_eq!(deleted[0].key.as_deref(), Some("a"));
        let errors = out.errors.unwrap();
        assert_eq!(errors[0].code.as_deref(), Some("AccessDenied"));
    }

    #[test]
    fn test_should_read_copy_result_payload() {
        let out = read::<CopyObject>(
            b"<CopyObjectResult><ETag>\"abc\"</ETag>\
              <LastModified>2024-01-01T00:00:00.000Z</LastModified></CopyObjectResult>",
        );
        let result = out.copy_object_result.unwrap();
        assert_eq!(result.e_tag.as_deref(), Some("\"abc\""));
        assert!(result.last_modified.is_some());
    }

    #[test]
    fn test_should_read_legal_hold_payload() {
        let out = read::<GetObjectLegalHold>(b"<LegalHold><Status>ON</Status></LegalHold>");
        assert_eq!(
            out.legal_hold.and_then(|h| h.status),
            Some(ObjectLockLegalHoldStatus::On)
        );
        assert!(read::<GetObjectLegalHold>(b"").legal_hold.is_none());
    }

    #[test]
    fn test_should_read_object_attributes() {
        let out = read::<GetObjectAttributes>(
            b"<GetObjectAttributesResponse><ETag>abc</ETag><ObjectSize>42</ObjectSize>\
              <StorageClass>STANDARD</StorageClass></GetObjectAttributesResponse>",
        );
        assert_eq!(out.e_tag.as_deref(), Some("abc"));
        assert_eq!(out.object_size, Some(42));
        assert!(out.checksum.is_none());
    }

    #[test]
    fn test_should_build_select_request_body() {
        let input = SelectObjectContentInput {
            bucket: "b".to_owned(),
            key: "data.csv".to_owned(),
            expression: "SELECT * FROM S3Object".to_owned(),
            expression_type: ExpressionType::Sql,
            output_serialization: Some(OutputSerialization {
                csv: Some(CSVOutput::default()),
                ..OutputSerialization::default()
            }),
            ..SelectObjectContentInput::default()
        };
        let node = select_request(&input).unwrap();
        assert_eq!(
            node.to_xml_string().unwrap(),
            "<SelectObjectContentRequest><Expression>SELECT * FROM S3Object</Expression>\
             <ExpressionType>SQL</ExpressionType>\
             <OutputSerialization><CSV/></OutputSerialization></SelectObjectContentRequest>"
        );
    }

    fn x_id<Op: Operation>() -> Option<&'static str> {
        Op::descriptor().query.iter().find_map(|q| match q {
            QueryBinding::Static("x-id", id) => Some(*id),
            _ => None,
        })
    }

    #[test]
    fn test_should_mark_object_operations_with_x_id() {
        assert_eq!(x_id::<PutObject>(), Some("PutObject"));
        assert_eq!(x_id::<GetObject>(), Some("GetObject"));
        assert_eq!(x_id::<DeleteObject>(), Some("DeleteObject"));
        assert_eq!(x_id::<CopyObject>(), Some("CopyObject"));
        assert_eq!(x_id::<HeadObject>(), None);
        assert_eq!(x_id::<GetObjectTagging>(), None);
    }
}
