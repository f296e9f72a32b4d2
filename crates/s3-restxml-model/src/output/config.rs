//! Bucket and object sub-resource outputs.

use crate::DateTime;
use crate::enums::{
    BucketAccelerateStatus, BucketVersioningStatus, MFADeleteStatus, Payer, RequestCharged,
    StorageClass,
};
use crate::error::ResponseMetadata;
use crate::types::{
    CORSRule, Checksum, GetObjectAttributesParts, Grant, LifecycleRule, ObjectLockConfiguration,
    ObjectLockLegalHold, ObjectLockRetention, Owner, OwnershipControls, PolicyStatus,
    PublicAccessBlockConfiguration, ServerSideEncryptionConfiguration, Tag,
};

/// Outputs with nothing but response metadata.
macro_rules! empty_output {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default)]
            pub struct $name {
                pub response_metadata: ResponseMetadata,
            }

            impl_s3_output!($name);
        )+
    };
}

empty_output! {
    DeleteBucketCorsOutput,
    DeleteBucketEncryptionOutput,
    DeleteBucketLifecycleOutput,
    DeleteBucketOwnershipControlsOutput,
    DeleteBucketPolicyOutput,
    DeleteBucketTaggingOutput,
    DeletePublicAccessBlockOutput,
    PutBucketAccelerateConfigurationOutput,
    PutBucketAclOutput,
    PutBucketCorsOutput,
    PutBucketEncryptionOutput,
    PutBucketLifecycleConfigurationOutput,
    PutBucketOwnershipControlsOutput,
    PutBucketPolicyOutput,
    PutBucketRequestPaymentOutput,
    PutBucketTaggingOutput,
    PutBucketVersioningOutput,
    PutPublicAccessBlockOutput,
}

/// Outputs reporting only whether the requester was charged.
macro_rules! request_charged_output {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default)]
            pub struct $name {
                pub request_charged: Option<RequestCharged>,
                pub response_metadata: ResponseMetadata,
            }

            impl_s3_output!($name);
        )+
    };
}

request_charged_output! {
    PutObjectAclOutput,
    PutObjectLegalHoldOutput,
    PutObjectLockConfigurationOutput,
    PutObjectRetentionOutput,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteObjectTaggingOutput {
    pub response_metadata: ResponseMetadata,
    pub version_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetBucketAccelerateConfigurationOutput {
    pub request_charged: Option<RequestCharged>,
    pub response_metadata: ResponseMetadata,
    pub status: Option<BucketAccelerateStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct GetBucketAclOutput {
    /// Entries of the `AccessControlList`, in document order.
    pub grants: Option<Vec<Grant>>,
    pub owner: Option<Owner>,
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default)]
pub struct GetBucketCorsOutput {
    pub cors_rules: Option<Vec<CORSRule>>,
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default)]
pub struct GetBucketEncryptionOutput {
    pub response_metadata: ResponseMetadata,
    pub server_side_encryption_configuration: Option<ServerSideEncryptionConfiguration>,
}

#[derive(Debug, Clone, Default)]
pub struct GetBucketLifecycleConfigurationOutput {
    pub response_metadata: ResponseMetadata,
    /// One entry per `Rule` element.
    pub rules: Option<Vec<LifecycleRule>>,
}

#[derive(Debug, Clone, Default)]
pub struct GetBucketOwnershipControlsOutput {
    pub ownership_controls: Option<OwnershipControls>,
    pub response_metadata: ResponseMetadata,
}

/// The bucket policy, returned verbatim.
#[derive(Debug, Clone, Default)]
pub struct GetBucketPolicyOutput {
    /// The JSON document exactly as the service sent it.
    pub policy: Option<String>,
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default)]
pub struct GetBucketPolicyStatusOutput {
    pub policy_status: Option<PolicyStatus>,
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default)]
pub struct GetBucketRequestPaymentOutput {
    pub payer: Option<Payer>,
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default)]
pub struct GetBucketTaggingOutput {
    pub response_metadata: ResponseMetadata,
    pub tag_set: Option<Vec<Tag>>,
}

/// Both fields are `None` for a bucket that never had versioning enabled.
#[derive(Debug, Clone, Default)]
pub struct GetBucketVersioningOutput {
    pub mfa_delete: Option<MFADeleteStatus>,
    pub response_metadata: ResponseMetadata,
    pub status: Option<BucketVersioningStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct GetObjectAclOutput {
    pub grants: Option<Vec<Grant>>,
    pub owner: Option<Owner>,
    pub request_charged: Option<RequestCharged>,
    pub response_metadata: ResponseMetadata,
}

/// Only the attributes asked for are set.
#[derive(Debug, Clone, Default)]
pub struct GetObjectAttributesOutput {
    pub checksum: Option<Checksum>,
    pub delete_marker: Option<bool>,
    pub e_tag: Option<String>,
    pub last_modified: Option<DateTime>,
    pub object_parts: Option<GetObjectAttributesParts>,
    pub object_size: Option<i64>,
    pub request_charged: Option<RequestCharged>,
    pub response_metadata: ResponseMetadata,
    pub storage_class: Option<StorageClass>,
    pub version_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetObjectLegalHoldOutput {
    pub legal_hold: Option<ObjectLockLegalHold>,
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default)]
pub struct GetObjectLockConfigurationOutput {
    pub object_lock_configuration: Option<ObjectLockConfiguration>,
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default)]
pub struct GetObjectRetentionOutput {
    pub response_metadata: ResponseMetadata,
    pub retention: Option<ObjectLockRetention>,
}

#[derive(Debug, Clone, Default)]
pub struct GetObjectTaggingOutput {
    pub response_metadata: ResponseMetadata,
    pub tag_set: Option<Vec<Tag>>,
    pub version_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetPublicAccessBlockOutput {
    pub public_access_block_configuration: Option<PublicAccessBlockConfiguration>,
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default)]
pub struct PutObjectTaggingOutput {
    pub response_metadata: ResponseMetadata,
    pub version_id: Option<String>,
}

impl_s3_output!(
    DeleteObjectTaggingOutput,
    GetBucketAccelerateConfigurationOutput,
    GetBucketAclOutput,
    GetBucketCorsOutput,
    GetBucketEncryptionOutput,
    GetBucketLifecycleConfigurationOutput,
    GetBucketOwnershipControlsOutput,
    GetBucketPolicyOutput,
    GetBucketPolicyStatusOutput,
    GetBucketRequestPaymentOutput,
    GetBucketTaggingOutput,
    GetBucketVersioningOutput,
    GetObjectAclOutput,
    GetObjectAttributesOutput,
    GetObjectLegalHoldOutput,
    GetObjectLockConfigurationOutput,
    GetObjectRetentionOutput,
    GetObjectTaggingOutput,
    GetPublicAccessBlockOutput,
    PutObjectTaggingOutput,
);
