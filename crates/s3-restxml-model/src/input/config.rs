//! Bucket and object sub-resource inputs.
//!
//! Sub-resources (`?acl`, `?cors`, `?tagging`, …) share their addressing: a bucket, or
//! a bucket, key and optional version. The macros below write that part once and add
//! the per-operation fields after it.

use typed_builder::TypedBuilder;

use crate::common::{CustomerKey, Grants};
use crate::enums::{
    BucketCannedACL, ChecksumAlgorithm, ObjectAttributes, ObjectCannedACL, RequestPayer,
};
use crate::types::{
    AccelerateConfiguration, AccessControlPolicy, BucketLifecycleConfiguration,
    CORSConfiguration, ObjectLockConfiguration, ObjectLockLegalHold, ObjectLockRetention,
    OwnershipControls, PublicAccessBlockConfiguration, RequestPaymentConfiguration,
    ServerSideEncryptionConfiguration, Tagging, VersioningConfiguration,
};

/// Inputs addressed by bucket alone.
macro_rules! bucket_input {
    ($(
        $(#[$meta:meta])*
        $name:ident { $($(#[$field_meta:meta])* $field:ident: $ty:ty),* $(,)? }
    )+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, TypedBuilder)]
            #[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
            pub struct $name {
                #[builder(!default)]
                pub bucket: String,
                $($(#[$field_meta])* pub $field: $ty,)*
                pub expected_bucket_owner: Option<String>,
            }
        )+
    };
}

/// Inputs addressed by bucket, key and an optional version.
macro_rules! object_input {
    ($(
        $(#[$meta:meta])*
        $name:ident { $($(#[$field_meta:meta])* $field:ident: $ty:ty),* $(,)? }
    )+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, TypedBuilder)]
            #[builder(field_defaults(default, setter(into, strip_option(ignore_invalid))))]
            pub struct $name {
                #[builder(!default)]
                pub bucket: String,
                #[builder(!default)]
                pub key: String,
                pub version_id: Option<String>,
                $($(#[$field_meta])* pub $field: $ty,)*
                pub expected_bucket_owner: Option<String>,
            }
        )+
    };
}

bucket_input! {
    DeleteBucketCorsInput {}
    DeleteBucketEncryptionInput {}
    /// Remove every lifecycle rule of a bucket.
    DeleteBucketLifecycleInput {}
    DeleteBucketOwnershipControlsInput {}
    DeleteBucketPolicyInput {}
    DeleteBucketTaggingInput {}
    DeletePublicAccessBlockInput {}
    GetBucketAclInput {}
    GetBucketCorsInput {}
    GetBucketEncryptionInput {}
    GetBucketLifecycleConfigurationInput {}
    GetBucketOwnershipControlsInput {}
    /// Read the bucket policy. The output holds the raw JSON document.
    GetBucketPolicyInput {}
    GetBucketPolicyStatusInput {}
    GetBucketRequestPaymentInput {}
    GetBucketTaggingInput {}
    GetBucketVersioningInput {}
    GetObjectLockConfigurationInput {}
    GetPublicAccessBlockInput {}

    GetBucketAccelerateConfigurationInput {
        request_payer: Option<RequestPayer>,
    }

    PutBucketAccelerateConfigurationInput {
        accelerate_configuration: Option<AccelerateConfiguration>,
        checksum_algorithm: Option<ChecksumAlgorithm>,
    }

    /// Replace a bucket's ACL, either with a canned ACL, explicit grants, or a full
    /// `AccessControlPolicy` body.
    PutBucketAclInput {
        acl: Option<BucketCannedACL>,
        grants: Grants,
        access_control_policy: Option<AccessControlPolicy>,
        content_md5: Option<String>,
        checksum_algorithm: Option<ChecksumAlgorithm>,
    }

    PutBucketCorsInput {
        cors_configuration: Option<CORSConfiguration>,
        content_md5: Option<String>,
        checksum_algorithm: Option<ChecksumAlgorithm>,
    }

    /// Set the bucket's default encryption.
    PutBucketEncryptionInput {
        server_side_encryption_configuration: Option<ServerSideEncryptionConfiguration>,
        content_md5: Option<String>,
        checksum_algorithm: Option<ChecksumAlgorithm>,
    }

    /// Replace the lifecycle rules. The body root is `LifecycleConfiguration`.
    PutBucketLifecycleConfigurationInput {
        lifecycle_configuration: Option<BucketLifecycleConfiguration>,
        checksum_algorithm: Option<ChecksumAlgorithm>,
    }

    PutBucketOwnershipControlsInput {
        ownership_controls: Option<OwnershipControls>,
        content_md5: Option<String>,
    }

    /// Attach a bucket policy.
    PutBucketPolicyInput {
        /// The JSON policy document, sent as the raw body.
        policy: Option<String>,
        /// Allow the policy to lock the caller out of further policy changes.
        confirm_remove_self_bucket_access: Option<bool>,
        content_md5: Option<String>,
        checksum_algorithm: Option<ChecksumAlgorithm>,
    }

    PutBucketRequestPaymentInput {
        request_payment_configuration: Option<RequestPaymentConfiguration>,
        content_md5: Option<String>,
        checksum_algorithm: Option<ChecksumAlgorithm>,
    }

    PutBucketTaggingInput {
        tagging: Option<Tagging>,
        content_md5: Option<String>,
        checksum_algorithm: Option<ChecksumAlgorithm>,
    }

    /// Enable or suspend versioning.
    PutBucketVersioningInput {
        versioning_configuration: Option<VersioningConfiguration>,
        /// Required when changing MFA delete: device serial and code, space separated.
        mfa: Option<String>,
        content_md5: Option<String>,
        checksum_algorithm: Option<ChecksumAlgorithm>,
    }

    PutObjectLockConfigurationInput {
        object_lock_configuration: Option<ObjectLockConfiguration>,
        /// Sent as `x-amz-bucket-object-lock-token`.
        token: Option<String>,
        content_md5: Option<String>,
        checksum_algorithm: Option<ChecksumAlgorithm>,
        request_payer: Option<RequestPayer>,
    }

    PutPublicAccessBlockInput {
        public_access_block_configuration: Option<PublicAccessBlockConfiguration>,
        content_md5: Option<String>,
        checksum_algorithm: Option<ChecksumAlgorithm>,
    }
}

object_input! {
    GetObjectAclInput {
        request_payer: Option<RequestPayer>,
    }

    GetObjectLegalHoldInput {
        request_payer: Option<RequestPayer>,
    }

    GetObjectRetentionInput {
        request_payer: Option<RequestPayer>,
    }

    GetObjectTaggingInput {
        request_payer: Option<RequestPayer>,
    }

    DeleteObjectTaggingInput {}

    /// Read selected attributes of an object without downloading it.
    GetObjectAttributesInput {
        /// Which attributes to return, sent as one comma-separated header.
        object_attributes: Vec<ObjectAttributes>,
        max_parts: Option<i32>,
        part_number_marker: Option<String>,
        customer_key: CustomerKey,
        request_payer: Option<RequestPayer>,
    }

    /// Replace the ACL of an object version.
    PutObjectAclInput {
        acl: Option<ObjectCannedACL>,
        grants: Grants,
        access_control_policy: Option<AccessControlPolicy>,
        content_md5: Option<String>,
        checksum_algorithm: Option<ChecksumAlgorithm>,
        request_payer: Option<RequestPayer>,
    }

    /// Place or lift a legal hold. The body root is `LegalHold`.
    PutObjectLegalHoldInput {
        legal_hold: Option<ObjectLockLegalHold>,
        content_md5: Option<String>,
        checksum_algorithm: Option<ChecksumAlgorithm>,
        request_payer: Option<RequestPayer>,
    }

    /// Set a retention period. The body root is `Retention`.
    PutObjectRetentionInput {
        retention: Option<ObjectLockRetention>,
        bypass_governance_retention: Option<bool>,
        content_md5: Option<String>,
        checksum_algorithm: Option<ChecksumAlgorithm>,
        request_payer: Option<RequestPayer>,
    }

    PutObjectTaggingInput {
        tagging: Option<Tagging>,
        content_md5: Option<String>,
        checksum_algorithm: Option<ChecksumAlgorithm>,
        request_payer: Option<RequestPayer>,
    }
}
