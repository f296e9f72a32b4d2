//! Bucket lifecycle operations.

use http::Method;
use s3_restxml_model::S3Operation;
use s3_restxml_model::enums::BucketLocationConstraint;
use s3_restxml_model::input::{
    CreateBucketInput, DeleteBucketInput, GetBucketLocationInput, HeadBucketInput,
    ListBucketsInput,
};
use s3_restxml_model::output::{
    CreateBucketOutput, DeleteBucketOutput, GetBucketLocationOutput, HeadBucketOutput,
    ListBucketsOutput,
};
use s3_restxml_xml::{XmlMap, XmlResult};

use super::{XML, expected_owner, operation, xml_body};
use crate::descriptor::{
    BodyBinding, OperationDescriptor, OutputBinding, QueryBinding, header, label, out_header,
    query,
};
use crate::error_classifier::{BUCKET_ALREADY_EXISTS, BUCKET_ALREADY_OWNED_BY_YOU, NOT_FOUND};
use crate::shapes::{member, wrapped};

operation!(
    /// Create a bucket.
    CreateBucket(CreateBucketInput => CreateBucketOutput) = CREATE_BUCKET
);

static CREATE_BUCKET: OperationDescriptor<CreateBucketInput, CreateBucketOutput> =
    OperationDescriptor {
        operation: S3Operation::CreateBucket,
        method: Method::PUT,
        path: "/{Bucket}",
        labels: &[label!("Bucket", bucket)],
        headers: &[
            header!("x-amz-acl", acl),
            header!("x-amz-grant-full-control", grants.full_control),
            header!("x-amz-grant-read", grants.read),
            header!("x-amz-grant-read-acp", grants.read_acp),
            header!("x-amz-grant-write", grants.write),
            header!("x-amz-grant-write-acp", grants.write_acp),
            header!("x-amz-bucket-object-lock-enabled", object_lock_enabled_for_bucket),
            header!("x-amz-object-ownership", object_ownership),
        ],
        prefix_headers: None,
        query: &[],
        body: xml_body!("CreateBucketConfiguration", create_bucket_configuration),
        content_type: XML,
        success: &[200],
        output_headers: &[out_header!("Location", location)],
        output_prefix_headers: None,
        output_body: OutputBinding::Discard,
        errors: &[BUCKET_ALREADY_EXISTS, BUCKET_ALREADY_OWNED_BY_YOU],
    };

operation!(
    /// Delete an empty bucket.
    DeleteBucket(DeleteBucketInput => DeleteBucketOutput) = DELETE_BUCKET
);

static DELETE_BUCKET: OperationDescriptor<DeleteBucketInput, DeleteBucketOutput> =
    OperationDescriptor {
        operation: S3Operation::DeleteBucket,
        method: Method::DELETE,
        path: "/{Bucket}",
        labels: &[label!("Bucket", bucket)],
        headers: &[expected_owner!()],
        prefix_headers: None,
        query: &[],
        body: BodyBinding::None,
        content_type: None,
        success: &[204],
        output_headers: &[],
        output_prefix_headers: None,
        output_body: OutputBinding::Discard,
        errors: &[],
    };

operation!(
    /// Check that a bucket exists and is accessible.
    HeadBucket(HeadBucketInput => HeadBucketOutput) = HEAD_BUCKET
);

static HEAD_BUCKET: OperationDescriptor<HeadBucketInput, HeadBucketOutput> = OperationDescriptor {
    operation: S3Operation::HeadBucket,
    method: Method::HEAD,
    path: "/{Bucket}",
    labels: &[label!("Bucket", bucket)],
    headers: &[expected_owner!()],
    prefix_headers: None,
    query: &[],
    body: BodyBinding::None,
    content_type: None,
    success: &[200],
    output_headers: &[
        out_header!("x-amz-access-point-alias", access_point_alias),
        out_header!("x-amz-bucket-region", bucket_region),
    ],
    output_prefix_headers: None,
    output_body: OutputBinding::Discard,
    errors: &[NOT_FOUND],
};

operation!(
    /// List the caller's buckets.
    ListBuckets(ListBucketsInput => ListBucketsOutput) = LIST_BUCKETS
);

static LIST_BUCKETS: OperationDescriptor<ListBucketsInput, ListBucketsOutput> =
    OperationDescriptor {
        operation: S3Operation::ListBuckets,
        method: Method::GET,
        path: "/",
        labels: &[],
        headers: &[],
        prefix_headers: None,
        query: &[
            QueryBinding::Static("x-id", "ListBuckets"),
            query!("max-buckets", max_buckets),
            query!("continuation-token", continuation_token),
            query!("prefix", prefix),
            query!("bucket-region", bucket_region),
        ],
        body: BodyBinding::None,
        content_type: None,
        success: &[200],
        output_headers: &[],
        output_prefix_headers: None,
        output_body: OutputBinding::Xml(read_list_buckets),
        errors: &[],
    };

fn read_list_buckets(out: &mut ListBucketsOutput, map: &XmlMap) -> XmlResult<()> {
    out.buckets = wrapped(map, "Buckets", "Bucket")?;
    out.owner = member(map, "Owner")?;
    out.continuation_token = member(map, "ContinuationToken")?;
    out.prefix = member(map, "Prefix")?;
    Ok(())
}

operation!(
    /// Read the region constraint of a bucket.
    GetBucketLocation(GetBucketLocationInput => GetBucketLocationOutput) = GET_BUCKET_LOCATION
);

static GET_BUCKET_LOCATION: OperationDescriptor<GetBucketLocationInput, GetBucketLocationOutput> =
    OperationDescriptor {
        operation: S3Operation::GetBucketLocation,
        method: Method::GET,
        path: "/{Bucket}",
        labels: &[label!("Bucket", bucket)],
        headers: &[expected_owner!()],
        prefix_headers: None,
        query: &[QueryBinding::Static("location", "")],
        body: BodyBinding::None,
        content_type: None,
        success: &[200],
        output_headers: &[],
        output_prefix_headers: None,
        output_body: OutputBinding::Xml(read_bucket_location),
        errors: &[],
    };

/// The document is a bare `LocationConstraint` element; us-east-1 sends it empty.
fn read_bucket_location(out: &mut GetBucketLocationOutput, map: &XmlMap) -> XmlResult<()> {
    out.location_constraint = map
        .text("LocationConstraint")
        .filter(|text| !text.is_empty())
        .map(BucketLocationConstraint::from);
    Ok(())
}
