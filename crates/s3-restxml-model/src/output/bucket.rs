//! Bucket outputs.

use crate::enums::BucketLocationConstraint;
use crate::error::ResponseMetadata;
use crate::types::{Bucket, Owner};

#[derive(Debug, Clone, Default)]
pub struct CreateBucketOutput {
    /// Path of the new bucket, as in `/my-bucket`.
    pub location: Option<String>,
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteBucketOutput {
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default)]
pub struct GetBucketLocationOutput {
    /// Text of the root `LocationConstraint` element; absent for us-east-1.
    pub location_constraint: Option<BucketLocationConstraint>,
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default)]
pub struct HeadBucketOutput {
    pub access_point_alias: Option<bool>,
    pub bucket_region: Option<String>,
    pub response_metadata: ResponseMetadata,
}

/// One page of the caller's buckets.
#[derive(Debug, Clone, Default)]
pub struct ListBucketsOutput {
    pub buckets: Option<Vec<Bucket>>,
    /// Present while more buckets remain.
    pub continuation_token: Option<String>,
    pub owner: Option<Owner>,
    pub prefix: Option<String>,
    pub response_metadata: ResponseMetadata,
}

impl_s3_output!(
    CreateBucketOutput,
    DeleteBucketOutput,
    GetBucketLocationOutput,
    HeadBucketOutput,
    ListBucketsOutput,
);
