//! Object listings.

use http::Method;
use s3_restxml_model::S3Operation;
use s3_restxml_model::input::{ListObjectVersionsInput, ListObjectsInput, ListObjectsV2Input};
use s3_restxml_model::output::{ListObjectVersionsOutput, ListObjectsOutput, ListObjectsV2Output};
use s3_restxml_xml::{XmlMap, XmlResult};

use super::{expected_owner, operation, request_charged};
use crate::descriptor::{
    BodyBinding, OperationDescriptor, OutputBinding, QueryBinding, header, label, query,
};
use crate::error_classifier::NO_SUCH_BUCKET;
use crate::shapes::{flattened, member};

operation!(
    /// List objects with marker pagination.
    ListObjects(ListObjectsInput => ListObjectsOutput) = LIST_OBJECTS
);

static LIST_OBJECTS: OperationDescriptor<ListObjectsInput, ListObjectsOutput> =
    OperationDescriptor {
        operation: S3Operation::ListObjects,
        method: Method::GET,
        path: "/{Bucket}",
        labels: &[label!("Bucket", bucket)],
        headers: &[header!("x-amz-request-payer", request_payer), expected_owner!()],
        prefix_headers: None,
        query: &[
            query!("delimiter", delimiter),
            query!("encoding-type", encoding_type),
            query!("marker", marker),
            query!("max-keys", max_keys),
            query!("prefix", prefix),
        ],
        body: BodyBinding::None,
        content_type: None,
        success: &[200],
        output_headers: &[request_charged!()],
        output_prefix_headers: None,
        output_body: OutputBinding::Xml(read_list_objects),
        errors: &[NO_SUCH_BUCKET],
    };

fn read_list_objects(out: &mut ListObjectsOutput, map: &XmlMap) -> XmlResult<()> {
    out.is_truncated = member(map, "IsTruncated")?;
    out.marker = member(map, "Marker")?;
    out.next_marker = member(map, "NextMarker")?;
    out.contents = flattened(map, "Contents")?;
    out.name = member(map, "Name")?;
    out.prefix = member(map, "Prefix")?;
    out.delimiter = member(map, "Delimiter")?;
    out.max_keys = member(map, "MaxKeys")?;
    out.common_prefixes = flattened(map, "CommonPrefixes")?;
    out.encoding_type = member(map, "EncodingType")?;
    Ok(())
}

operation!(
    /// List objects with continuation-token pagination.
    ListObjectsV2(ListObjectsV2Input => ListObjectsV2Output) = LIST_OBJECTS_V2
);

static LIST_OBJECTS_V2: OperationDescriptor<ListObjectsV2Input, ListObjectsV2Output> =
    OperationDescriptor {
        operation: S3Operation::ListObjectsV2,
        method: Method::GET,
        path: "/{Bucket}",
        labels: &[label!("Bucket", bucket)],
        headers: &[header!("x-amz-request-payer", request_payer), expected_owner!()],
        prefix_headers: None,
        query: &[
            QueryBinding::Static("list-type", "2"),
            query!("delimiter", delimiter),
            query!("encoding-type", encoding_type),
            query!("max-keys", max_keys),
            query!("prefix", prefix),
            query!("continuation-token", continuation_token),
            query!("fetch-owner", fetch_owner),
            query!("start-after", start_after),
        ],
        body: BodyBinding::None,
        content_type: None,
        success: &[200],
        output_headers: &[request_charged!()],
        output_prefix_headers: None,
        output_body: OutputBinding::Xml(read_list_objects_v2),
        errors: &[NO_SUCH_BUCKET],
    };

fn read_list_objects_v2(out: &mut ListObjectsV2Output, map: &XmlMap) -> XmlResult<()> {
    out.is_truncated = member(map, "IsTruncated")?;
    out.contents = flattened(map, "Contents")?;
    out.name = member(map, "Name")?;
    out.prefix = member(map, "Prefix")?;
    out.delimiter = member(map, "Delimiter")?;
    out.max_keys = member(map, "MaxKeys")?;
    out.common_prefixes = flattened(map, "CommonPrefixes")?;
    out.encoding_type = member(map, "EncodingType")?;
    out.key_count = member(map, "KeyCount")?;
    out.continuation_token = member(map, "ContinuationToken")?;
    out.next_continuation_token = member(map, "NextContinuationToken")?;
    out.start_after = member(map, "StartAfter")?;
    Ok(())
}

operation!(
    /// List object versions and delete markers.
    ListObjectVersions(ListObjectVersionsInput => ListObjectVersionsOutput) = LIST_OBJECT_VERSIONS
);

static LIST_OBJECT_VERSIONS: OperationDescriptor<ListObjectVersionsInput, ListObjectVersionsOutput> =
    OperationDescriptor {
        operation: S3Operation::ListObjectVersions,
        method: Method::GET,
        path: "/{Bucket}",
        labels: &[label!("Bucket", bucket)],
        headers: &[expected_owner!(), header!("x-amz-request-payer", request_payer)],
        prefix_headers: None,
        query: &[
            QueryBinding::Static("versions", ""),
            query!("delimiter", delimiter),
            query!("encoding-type", encoding_type),
            query!("key-marker", key_marker),
            query!("max-keys", max_keys),
            query!("prefix", prefix),
            query!("version-id-marker", version_id_marker),
        ],
        body: BodyBinding::None,
        content_type: None,
        success: &[200],
        output_headers: &[request_charged!()],
        output_prefix_headers: None,
        output_body: OutputBinding::Xml(|out, map| {
            out.is_truncated = member(map, "IsTruncated")?;
            out.key_marker = member(map, "KeyMarker")?;
            out.version_id_marker = member(map, "VersionIdMarker")?;
            out.next_key_marker = member(map, "NextKeyMarker")?;
            out.next_version_id_marker = member(map, "NextVersionIdMarker")?;
            out.versions = flattened(map, "Version")?;
            out.delete_markers = flattened(map, "DeleteMarker")?;
            out.name = member(map, "Name")?;
            out.prefix = member(map, "Prefix")?;
            out.delimiter = member(map, "Delimiter")?;
            out.max_keys = member(map, "MaxKeys")?;
            out.common_prefixes = flattened(map, "CommonPrefixes")?;
            out.encoding_type = member(map, "EncodingType")?;
            Ok(())
        }),
        errors: &[],
    };
