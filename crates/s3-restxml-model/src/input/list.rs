//! Listing inputs.
//!
//! All three listings filter by `prefix` and group keys by `delimiter`; they differ
//! in how a page continues.

use typed_builder::TypedBuilder;

use crate::enums::{EncodingType, RequestPayer};

/// List objects, continuing with an opaque token.
///
/// ```
/// use s3_restxml_model::input::ListObjectsV2Input;
///
/// let input = ListObjectsV2Input::builder()
///     .bucket("photos")
///     .prefix("2024/")
///     .max_keys(100)
///     .build();
/// assert_eq!(input.max_keys, Some(100));
/// ```
#[derive(Debug, Clone, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
pub struct ListObjectsV2Input {
    #[builder(!default)]
    pub bucket: String,
    pub prefix: Option<String>,
    pub delimiter: Option<String>,
    pub max_keys: Option<i32>,
    /// `next_continuation_token` of the previous page.
    pub continuation_token: Option<String>,
    /// Start listing after this key. Ignored once a continuation token is sent.
    pub start_after: Option<String>,
    pub fetch_owner: Option<bool>,
    pub encoding_type: Option<EncodingType>,
    pub request_payer: Option<RequestPayer>,
    pub expected_bucket_owner: Option<String>,
}

/// List objects with the original marker-based pagination.
#[derive(Debug, Clone, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
pub struct ListObjectsInput {
    #[builder(!default)]
    pub bucket: String,
    pub prefix: Option<String>,
    pub delimiter: Option<String>,
    pub max_keys: Option<i32>,
    /// Start after this key. Use the previous page's `next_marker`, or its last key
    /// when no delimiter was given.
    pub marker: Option<String>,
    pub encoding_type: Option<EncodingType>,
    pub request_payer: Option<RequestPayer>,
    pub expected_bucket_owner: Option<String>,
}

/// List every version and delete marker of the objects in a bucket.
#[derive(Debug, Clone, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
pub struct ListObjectVersionsInput {
    #[builder(!default)]
    pub bucket: String,
    pub prefix: Option<String>,
    pub delimiter: Option<String>,
    pub max_keys: Option<i32>,
    pub key_marker: Option<String>,
    pub version_id_marker: Option<String>,
    pub encoding_type: Option<EncodingType>,
    pub request_payer: Option<RequestPayer>,
    pub expected_bucket_owner: Option<String>,
}
