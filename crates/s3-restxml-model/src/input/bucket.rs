//! Bucket inputs.

use typed_builder::TypedBuilder;

use crate::common::Grants;
use crate::enums::{BucketCannedACL, ObjectOwnership};
use crate::types::CreateBucketConfiguration;

/// Create a bucket.
///
/// Outside `us-east-1` the region goes into `create_bucket_configuration` as the
/// location constraint.
#[derive(Debug, Clone, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
pub struct CreateBucketInput {
    #[builder(!default)]
    pub bucket: String,
    pub create_bucket_configuration: Option<CreateBucketConfiguration>,
    pub acl: Option<BucketCannedACL>,
    pub grants: Grants,
    /// Sent as `x-amz-bucket-object-lock-enabled`. Also turns on versioning.
    pub object_lock_enabled_for_bucket: Option<bool>,
    pub object_ownership: Option<ObjectOwnership>,
}

/// Delete an empty bucket.
#[derive(Debug, Clone, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
pub struct DeleteBucketInput {
    #[builder(!default)]
    pub bucket: String,
    pub expected_bucket_owner: Option<String>,
}

#[derive(Debug, Clone, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
pub struct GetBucketLocationInput {
    #[builder(!default)]
    pub bucket: String,
    pub expected_bucket_owner: Option<String>,
}

/// Check that a bucket exists and is accessible.
#[derive(Debug, Clone, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
pub struct HeadBucketInput {
    #[builder(!default)]
    pub bucket: String,
    pub expected_bucket_owner: Option<String>,
}

/// List the caller's buckets, optionally paginated and filtered.
#[derive(Debug, Clone, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
pub struct ListBucketsInput {
    pub prefix: Option<String>,
    pub bucket_region: Option<String>,
    pub max_buckets: Option<i32>,
    pub continuation_token: Option<String>,
}
