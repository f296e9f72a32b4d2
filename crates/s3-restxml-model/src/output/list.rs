//! Listing outputs.

use crate::enums::{EncodingType, RequestCharged};
use crate::error::ResponseMetadata;
use crate::types::{CommonPrefix, DeleteMarkerEntry, Object, ObjectVersion};

#[derive(Debug, Clone, Default)]
pub struct ListObjectVersionsOutput {
    pub common_prefixes: Option<Vec<CommonPrefix>>,
    pub delete_markers: Option<Vec<DeleteMarkerEntry>>,
    pub delimiter: Option<String>,
    pub encoding_type: Option<EncodingType>,
    pub is_truncated: Option<bool>,
    pub key_marker: Option<String>,
    pub max_keys: Option<i32>,
    pub name: Option<String>,
    pub next_key_marker: Option<String>,
    pub next_version_id_marker: Option<String>,
    pub prefix: Option<String>,
    pub request_charged: Option<RequestCharged>,
    pub response_metadata: ResponseMetadata,
    pub version_id_marker: Option<String>,
    pub versions: Option<Vec<ObjectVersion>>,
}

#[derive(Debug, Clone, Default)]
pub struct ListObjectsOutput {
    pub common_prefixes: Option<Vec<CommonPrefix>>,
    pub contents: Option<Vec<Object>>,
    pub delimiter: Option<String>,
    pub encoding_type: Option<EncodingType>,
    pub is_truncated: Option<bool>,
    pub marker: Option<String>,
    pub max_keys: Option<i32>,
    pub name: Option<String>,
    /// Only returned when a delimiter was given.
    pub next_marker: Option<String>,
    pub prefix: Option<String>,
    pub request_charged: Option<RequestCharged>,
    pub response_metadata: ResponseMetadata,
}

/// One page of a `ListObjectsV2` listing.
///
/// Keys ending in `delimiter` after `prefix` are rolled up into `common_prefixes`
/// instead of `contents`. With `encoding_type` set to `url` the keys, prefixes and
/// markers are URL-encoded.
#[derive(Debug, Clone, Default)]
pub struct ListObjectsV2Output {
    pub common_prefixes: Option<Vec<CommonPrefix>>,
    pub contents: Option<Vec<Object>>,
    pub continuation_token: Option<String>,
    pub delimiter: Option<String>,
    pub encoding_type: Option<EncodingType>,
    pub is_truncated: Option<bool>,
    /// Keys plus common prefixes on this page.
    pub key_count: Option<i32>,
    pub max_keys: Option<i32>,
    pub name: Option<String>,
    pub next_continuation_token: Option<String>,
    pub prefix: Option<String>,
    pub request_charged: Option<RequestCharged>,
    pub response_metadata: ResponseMetadata,
    pub start_after: Option<String>,
}

impl_s3_output!(ListObjectVersionsOutput, ListObjectsOutput, ListObjectsV2Output);
