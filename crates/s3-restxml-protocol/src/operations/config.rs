//! Bucket configuration sub-resources.

use http::Method;
use s3_restxml_model::S3Operation;
use s3_restxml_model::input::{
    DeleteBucketCorsInput, DeleteBucketEncryptionInput, DeleteBucketLifecycleInput,
    DeleteBucketOwnershipControlsInput, DeleteBucketPolicyInput, DeleteBucketTaggingInput,
    DeletePublicAccessBlockInput, GetBucketAccelerateConfigurationInput, GetBucketAclInput,
    GetBucketCorsInput, GetBucketEncryptionInput, GetBucketLifecycleConfigurationInput,
    GetBucketOwnershipControlsInput, GetBucketPolicyInput, GetBucketPolicyStatusInput,
    GetBucketRequestPaymentInput, GetBucketTaggingInput, GetBucketVersioningInput,
    GetObjectLockConfigurationInput, GetPublicAccessBlockInput,
    PutBucketAccelerateConfigurationInput, PutBucketAclInput, PutBucketCorsInput,
    PutBucketEncryptionInput, PutBucketLifecycleConfigurationInput,
    PutBucketOwnershipControlsInput, PutBucketPolicyInput, PutBucketRequestPaymentInput,
    PutBucketTaggingInput, PutBucketVersioningInput, PutObjectLockConfigurationInput,
    PutPublicAccessBlockInput,
};
use s3_restxml_model::output::{
    DeleteBucketCorsOutput, DeleteBucketEncryptionOutput, DeleteBucketLifecycleOutput,
    DeleteBucketOwnershipControlsOutput, DeleteBucketPolicyOutput, DeleteBucketTaggingOutput,
    DeletePublicAccessBlockOutput, GetBucketAccelerateConfigurationOutput, GetBucketAclOutput,
    GetBucketCorsOutput, GetBucketEncryptionOutput, GetBucketLifecycleConfigurationOutput,
    GetBucketOwnershipControlsOutput, GetBucketPolicyOutput, GetBucketPolicyStatusOutput,
    GetBucketRequestPaymentOutput, GetBucketTaggingOutput, GetBucketVersioningOutput,
    GetObjectLockConfigurationOutput, GetPublicAccessBlockOutput,
    PutBucketAccelerateConfigurationOutput, PutBucketAclOutput, PutBucketCorsOutput,
    PutBucketEncryptionOutput, PutBucketLifecycleConfigurationOutput,
    PutBucketOwnershipControlsOutput, PutBucketPolicyOutput, PutBucketRequestPaymentOutput,
    PutBucketTaggingOutput, PutBucketVersioningOutput, PutObjectLockConfigurationOutput,
    PutPublicAccessBlockOutput,
};
use s3_restxml_xml::{XmlMap, XmlResult};

use super::{XML, expected_owner, operation, payload, request_charged, xml_body};
use crate::descriptor::{
    BodyBinding, OperationDescriptor, OutputBinding, QueryBinding, header, label,
};
use crate::shapes::{access_control_list, flattened, member, tag_set};

/// A `DELETE /{Bucket}?<resource>` operation with no request or response members.
macro_rules! delete_config {
    ($(#[$meta:meta])* $name:ident($input:ty => $output:ty) = $descriptor:ident, $resource:literal) => {
        operation!($(#[$meta])* $name($input => $output) = $descriptor);

        static $descriptor: OperationDescriptor<$input, $output> = OperationDescriptor {
            operation: S3Operation::$name,
            method: Method::DELETE,
            path: "/{Bucket}",
            labels: &[label!("Bucket", bucket)],
            headers: &[expected_owner!()],
            prefix_headers: None,
            query: &[QueryBinding::Static($resource, "")],
            body: BodyBinding::None,
            content_type: None,
            success: &[204],
            output_headers: &[],
            output_prefix_headers: None,
            output_body: OutputBinding::Discard,
            errors: &[],
        };
    };
}

// Versioning

operation!(
    /// Read the versioning state of a bucket.
    GetBucketVersioning(GetBucketVersioningInput => GetBucketVersioningOutput) = GET_BUCKET_VERSIONING
);

static GET_BUCKET_VERSIONING: OperationDescriptor<GetBucketVersioningInput, GetBucketVersioningOutput> =
    OperationDescriptor {
        operation: S3Operation::GetBucketVersioning,
        method: Method::GET,
        path: "/{Bucket}",
        labels: &[label!("Bucket", bucket)],
        headers: &[expected_owner!()],
        prefix_headers: None,
        query: &[QueryBinding::Static("versioning", "")],
        body: BodyBinding::None,
        content_type: None,
        success: &[200],
        output_headers: &[],
        output_prefix_headers: None,
        output_body: OutputBinding::Xml(|out, map| {
            out.status = member(map, "Status")?;
            out.mfa_delete = member(map, "MfaDelete")?;
            Ok(())
        }),
        errors: &[],
    };

operation!(
    /// Enable or suspend versioning.
    PutBucketVersioning(PutBucketVersioningInput => PutBucketVersioningOutput) = PUT_BUCKET_VERSIONING
);

static PUT_BUCKET_VERSIONING: OperationDescriptor<PutBucketVersioningInput, PutBucketVersioningOutput> =
    OperationDescriptor {
        operation: S3Operation::PutBucketVersioning,
        method: Method::PUT,
        path: "/{Bucket}",
        labels: &[label!("Bucket", bucket)],
        headers: &[
            header!("Content-MD5", content_md5),
            header!("x-amz-sdk-checksum-algorithm", checksum_algorithm),
            header!("x-amz-mfa", mfa),
            expected_owner!(),
        ],
        prefix_headers: None,
        query: &[QueryBinding::Static("versioning", "")],
        body: xml_body!("VersioningConfiguration", versioning_configuration),
        content_type: XML,
        success: &[200],
        output_headers: &[],
        output_prefix_headers: None,
        output_body: OutputBinding::Discard,
        errors: &[],
    };

// Tagging

operation!(
    /// Read the tag set of a bucket.
    GetBucketTagging(GetBucketTaggingInput => GetBucketTaggingOutput) = GET_BUCKET_TAGGING
);

static GET_BUCKET_TAGGING: OperationDescriptor<GetBucketTaggingInput, GetBucketTaggingOutput> =
    OperationDescriptor {
        operation: S3Operation::GetBucketTagging,
        method: Method::GET,
        path: "/{Bucket}",
        labels: &[label!("Bucket", bucket)],
        headers: &[expected_owner!()],
        prefix_headers: None,
        query: &[QueryBinding::Static("tagging", "")],
        body: BodyBinding::None,
        content_type: None,
        success: &[200],
        output_headers: &[],
        output_prefix_headers: None,
        output_body: OutputBinding::Xml(|out, map| {
            out.tag_set = tag_set(map)?;
            Ok(())
        }),
        errors: &[],
    };

operation!(
    /// Replace the tag set of a bucket.
    PutBucketTagging(PutBucketTaggingInput => PutBucketTaggingOutput) = PUT_BUCKET_TAGGING
);

static PUT_BUCKET_TAGGING: OperationDescriptor<PutBucketTaggingInput, PutBucketTaggingOutput> =
    OperationDescriptor {
        operation: S3Operation::PutBucketTagging,
        method: Method::PUT,
        path: "/{Bucket}",
        labels: &[label!("Bucket", bucket)],
        headers: &[
            header!("Content-MD5", content_md5),
            header!("x-amz-sdk-checksum-algorithm", checksum_algorithm),
            expected_owner!(),
        ],
        prefix_headers: None,
        query: &[QueryBinding::Static("tagging", "")],
        body: xml_body!("Tagging", tagging),
        content_type: XML,
        success: &[200],
        output_headers: &[],
        output_prefix_headers: None,
        output_body: OutputBinding::Discard,
        errors: &[],
    };

delete_config!(
    /// Remove the tag set of a bucket.
    DeleteBucketTagging(DeleteBucketTaggingInput => DeleteBucketTaggingOutput) = DELETE_BUCKET_TAGGING,
    "tagging"
);

// CORS

operation!(
    /// Read the CORS rules of a bucket.
    GetBucketCors(GetBucketCorsInput => GetBucketCorsOutput) = GET_BUCKET_CORS
);

static GET_BUCKET_CORS: OperationDescriptor<GetBucketCorsInput, GetBucketCorsOutput> =
    OperationDescriptor {
        operation: S3Operation::GetBucketCors,
        method: Method::GET,
        path: "/{Bucket}",
        labels: &[label!("Bucket", bucket)],
        headers: &[expected_owner!()],
        prefix_headers: None,
        query: &[QueryBinding::Static("cors", "")],
        body: BodyBinding::None,
        content_type: None,
        success: &[200],
        output_headers: &[],
        output_prefix_headers: None,
        output_body: OutputBinding::Xml(|out, map| {
            out.cors_rules = flattened(map, "CORSRule")?;
            Ok(())
        }),
        errors: &[],
    };

operation!(
    /// Replace the CORS rules of a bucket.
    PutBucketCors(PutBucketCorsInput => PutBucketCorsOutput) = PUT_BUCKET_CORS
);

static PUT_BUCKET_CORS: OperationDescriptor<PutBucketCorsInput, PutBucketCorsOutput> =
    OperationDescriptor {
        operation: S3Operation::PutBucketCors,
        method: Method::PUT,
        path: "/{Bucket}",
        labels: &[label!("Bucket", bucket)],
        headers: &[
            header!("Content-MD5", content_md5),
            header!("x-amz-sdk-checksum-algorithm", checksum_algorithm),
            expected_owner!(),
        ],
        prefix_headers: None,
        query: &[QueryBinding::Static("cors", "")],
        body: xml_body!("CORSConfiguration", cors_configuration),
        content_type: XML,
        success: &[200],
        output_headers: &[],
        output_prefix_headers: None,
        output_body: OutputBinding::Discard,
        errors: &[],
    };

delete_config!(
    /// Remove the CORS rules of a bucket.
    DeleteBucketCors(DeleteBucketCorsInput => DeleteBucketCorsOutput) = DELETE_BUCKET_CORS,
    "cors"
);

// Lifecycle

operation!(
    /// Read the lifecycle rules of a bucket.
    GetBucketLifecycleConfiguration(
        GetBucketLifecycleConfigurationInput => GetBucketLifecycleConfigurationOutput
    ) = GET_BUCKET_LIFECYCLE_CONFIGURATION
);

static GET_BUCKET_LIFECYCLE_CONFIGURATION: OperationDescriptor<
    GetBucketLifecycleConfigurationInput,
    GetBucketLifecycleConfigurationOutput,
> = OperationDescriptor {
    operation: S3Operation::GetBucketLifecycleConfiguration,
    method: Method::GET,
    path: "/{Bucket}",
    labels: &[label!("Bucket", bucket)],
    headers: &[expected_owner!()],
    prefix_headers: None,
    query: &[QueryBinding::Static("lifecycle", "")],
    body: BodyBinding::None,
    content_type: None,
    success: &[200],
    output_headers: &[],
    output_prefix_headers: None,
    output_body: OutputBinding::Xml(|out, map| {
        out.rules = flattened(map, "Rule")?;
        Ok(())
    }),
    errors: &[],
};

operation!(
    /// Replace the lifecycle rules of a bucket.
    PutBucketLifecycleConfiguration(
        PutBucketLifecycleConfigurationInput => PutBucketLifecycleConfigurationOutput
    ) = PUT_BUCKET_LIFECYCLE_CONFIGURATION
);

static PUT_BUCKET_LIFECYCLE_CONFIGURATION: OperationDescriptor<
    PutBucketLifecycleConfigurationInput,
    PutBucketLifecycleConfigurationOutput,
> = OperationDescriptor {
    operation: S3Operation::PutBucketLifecycleConfiguration,
    method: Method::PUT,
    path: "/{Bucket}",
    labels: &[label!("Bucket", bucket)],
    headers: &[
        header!("x-amz-sdk-checksum-algorithm", checksum_algorithm),
        expected_owner!(),
    ],
    prefix_headers: None,
    query: &[QueryBinding::Static("lifecycle", "")],
    body: xml_body!("LifecycleConfiguration", lifecycle_configuration),
    content_type: XML,
    success: &[200],
    output_headers: &[],
    output_prefix_headers: None,
    output_body: OutputBinding::Discard,
    errors: &[],
};

delete_config!(
    /// Remove the lifecycle rules of a bucket.
    DeleteBucketLifecycle(DeleteBucketLifecycleInput => DeleteBucketLifecycleOutput) = DELETE_BUCKET_LIFECYCLE,
    "lifecycle"
);

// Policy

operation!(
    /// Read the policy document of a bucket.
    GetBucketPolicy(GetBucketPolicyInput => GetBucketPolicyOutput) = GET_BUCKET_POLICY
);

static GET_BUCKET_POLICY: OperationDescriptor<GetBucketPolicyInput, GetBucketPolicyOutput> =
    OperationDescriptor {
        operation: S3Operation::GetBucketPolicy,
        method: Method::GET,
        path: "/{Bucket}",
        labels: &[label!("Bucket", bucket)],
        headers: &[expected_owner!()],
        prefix_headers: None,
        query: &[QueryBinding::Static("policy", "")],
        body: BodyBinding::None,
        content_type: None,
        success: &[200],
        output_headers: &[],
        output_prefix_headers: None,
        output_body: OutputBinding::Text(|out, text| out.policy = Some(text)),
        errors: &[],
    };

operation!(
    /// Replace the policy document of a bucket.
    PutBucketPolicy(PutBucketPolicyInput => PutBucketPolicyOutput) = PUT_BUCKET_POLICY
);

static PUT_BUCKET_POLICY: OperationDescriptor<PutBucketPolicyInput, PutBucketPolicyOutput> =
    OperationDescriptor {
        operation: S3Operation::PutBucketPolicy,
        method: Method::PUT,
        path: "/{Bucket}",
        labels: &[label!("Bucket", bucket)],
        headers: &[
            header!("Content-MD5", content_md5),
            header!("x-amz-sdk-checksum-algorithm", checksum_algorithm),
            header!(
                "x-amz-confirm-remove-self-bucket-access",
                confirm_remove_self_bucket_access
            ),
            expected_owner!(),
        ],
        prefix_headers: None,
        query: &[QueryBinding::Static("policy", "")],
        body: BodyBinding::Text(|i| i.policy.take()),
        content_type: Some("text/plain"),
        success: &[200],
        output_headers: &[],
        output_prefix_headers: None,
        output_body: OutputBinding::Discard,
        errors: &[],
    };

delete_config!(
    /// Remove the policy of a bucket.
    DeleteBucketPolicy(DeleteBucketPolicyInput => DeleteBucketPolicyOutput) = DELETE_BUCKET_POLICY,
    "policy"
);

operation!(
    /// Ask whether the bucket policy makes the bucket public.
    GetBucketPolicyStatus(GetBucketPolicyStatusInput => GetBucketPolicyStatusOutput) = GET_BUCKET_POLICY_STATUS
);

static GET_BUCKET_POLICY_STATUS: OperationDescriptor<
    GetBucketPolicyStatusInput,
    GetBucketPolicyStatusOutput,
> = OperationDescriptor {
    operation: S3Operation::GetBucketPolicyStatus,
    method: Method::GET,
    path: "/{Bucket}",
    labels: &[label!("Bucket", bucket)],
    headers: &[expected_owner!()],
    prefix_headers: None,
    query: &[QueryBinding::Static("policyStatus", "")],
    body: BodyBinding::None,
    content_type: None,
    success: &[200],
    output_headers: &[],
    output_prefix_headers: None,
    output_body: OutputBinding::Xml(|out, map| {
        out.policy_status = payload(map)?;
        Ok(())
    }),
    errors: &[],
};

// Default encryption

operation!(
    /// Read the default encryption of a bucket.
    GetBucketEncryption(GetBucketEncryptionInput => GetBucketEncryptionOutput) = GET_BUCKET_ENCRYPTION
);

static GET_BUCKET_ENCRYPTION: OperationDescriptor<GetBucketEncryptionInput, GetBucketEncryptionOutput> =
    OperationDescriptor {
        operation: S3Operation::GetBucketEncryption,
        method: Method::GET,
        path: "/{Bucket}",
        labels: &[label!("Bucket", bucket)],
        headers: &[expected_owner!()],
        prefix_headers: None,
        query: &[QueryBinding::Static("encryption", "")],
        body: BodyBinding::None,
        content_type: None,
        success: &[200],
        output_headers: &[],
        output_prefix_headers: None,
        output_body: OutputBinding::Xml(|out, map| {
            out.server_side_encryption_configuration = payload(map)?;
            Ok(())
        }),
        errors: &[],
    };

operation!(
    /// Set the default encryption of a bucket.
    PutBucketEncryption(PutBucketEncryptionInput => PutBucketEncryptionOutput) = PUT_BUCKET_ENCRYPTION
);

static PUT_BUCKET_ENCRYPTION: OperationDescriptor<PutBucketEncryptionInput, PutBucketEncryptionOutput> =
    OperationDescriptor {
        operation: S3Operation::PutBucketEncryption,
        method: Method::PUT,
        path: "/{Bucket}",
        labels: &[label!("Bucket", bucket)],
        headers: &[
            header!("Content-MD5", content_md5),
            header!("x-amz-sdk-checksum-algorithm", checksum_algorithm),
            expected_owner!(),
        ],
        prefix_headers: None,
        query: &[QueryBinding::Static("encryption", "")],
        body: xml_body!(
            "ServerSideEncryptionConfiguration",
            server_side_encryption_configuration
        ),
        content_type: XML,
        success: &[200],
        output_headers: &[],
        output_prefix_headers: None,
        output_body: OutputBinding::Discard,
        errors: &[],
    };

delete_config!(
    /// Reset the default encryption of a bucket.
    DeleteBucketEncryption(DeleteBucketEncryptionInput => DeleteBucketEncryptionOutput) = DELETE_BUCKET_ENCRYPTION,
    "encryption"
);

// Public access block

operation!(
    /// Read the public access block of a bucket.
    GetPublicAccessBlock(GetPublicAccessBlockInput => GetPublicAccessBlockOutput) = GET_PUBLIC_ACCESS_BLOCK
);

static GET_PUBLIC_ACCESS_BLOCK: OperationDescriptor<
    GetPublicAccessBlockInput,
    GetPublicAccessBlockOutput,
> = OperationDescriptor {
    operation: S3Operation::GetPublicAccessBlock,
    method: Method::GET,
    path: "/{Bucket}",
    labels: &[label!("Bucket", bucket)],
    headers: &[expected_owner!()],
    prefix_headers: None,
    query: &[QueryBinding::Static("publicAccessBlock", "")],
    body: BodyBinding::None,
    content_type: None,
    success: &[200],
    output_headers: &[],
    output_prefix_headers: None,
    output_body: OutputBinding::Xml(|out, map| {
        out.public_access_block_configuration = payload(map)?;
        Ok(())
    }),
    errors: &[],
};

operation!(
    /// Replace the public access block of a bucket.
    PutPublicAccessBlock(PutPublicAccessBlockInput => PutPublicAccessBlockOutput) = PUT_PUBLIC_ACCESS_BLOCK
);

static PUT_PUBLIC_ACCESS_BLOCK: OperationDescriptor<
    PutPublicAccessBlockInput,
    PutPublicAccessBlockOutput,
> = OperationDescriptor {
    operation: S3Operation::PutPublicAccessBlock,
    method: Method::PUT,
    path: "/{Bucket}",
    labels: &[label!("Bucket", bucket)],
    headers: &[
        header!("Content-MD5", content_md5),
        header!("x-amz-sdk-checksum-algorithm", checksum_algorithm),
        expected_owner!(),
    ],
    prefix_headers: None,
    query: &[QueryBinding::Static("publicAccessBlock", "")],
    body: xml_body!(
        "PublicAccessBlockConfiguration",
        public_access_block_configuration
    ),
    content_type: XML,
    success: &[200],
    output_headers: &[],
    output_prefix_headers: None,
    output_body: OutputBinding::Discard,
    errors: &[],
};

delete_config!(
    /// Remove the public access block of a bucket.
    DeletePublicAccessBlock(DeletePublicAccessBlockInput => DeletePublicAccessBlockOutput) = DELETE_PUBLIC_ACCESS_BLOCK,
    "publicAccessBlock"
);

// Ownership controls

operation!(
    /// Read the object ownership setting of a bucket.
    GetBucketOwnershipControls(
        GetBucketOwnershipControlsInput => GetBucketOwnershipControlsOutput
    ) = GET_BUCKET_OWNERSHIP_CONTROLS
);

static GET_BUCKET_OWNERSHIP_CONTROLS: OperationDescriptor<
    GetBucketOwnershipControlsInput,
    GetBucketOwnershipControlsOutput,
> = OperationDescriptor {
    operation: S3Operation::GetBucketOwnershipControls,
    method: Method::GET,
    path: "/{Bucket}",
    labels: &[label!("Bucket", bucket)],
    headers: &[expected_owner!()],
    prefix_headers: None,
    query: &[QueryBinding::Static("ownershipControls", "")],
    body: BodyBinding::None,
    content_type: None,
    success: &[200],
    output_headers: &[],
    output_prefix_headers: None,
    output_body: OutputBinding::Xml(|out, map| {
        out.ownership_controls = payload(map)?;
        Ok(())
    }),
    errors: &[],
};

operation!(
    /// Set the object ownership of a bucket.
    PutBucketOwnershipControls(
        PutBucketOwnershipControlsInput => PutBucketOwnershipControlsOutput
    ) = PUT_BUCKET_OWNERSHIP_CONTROLS
);

static PUT_BUCKET_OWNERSHIP_CONTROLS: OperationDescriptor<
    PutBucketOwnershipControlsInput,
    PutBucketOwnershipControlsOutput,
> = OperationDescriptor {
    operation: S3Operation::PutBucketOwnershipControls,
    method: Method::PUT,
    path: "/{Bucket}",
    labels: &[label!("Bucket", bucket)],
    headers: &[header!("Content-MD5", content_md5), expected_owner!()],
    prefix_headers: None,
    query: &[QueryBinding::Static("ownershipControls", "")],
    body: xml_body!("OwnershipControls", ownership_controls),
    content_type: XML,
    success: &[200],
    output_headers: &[],
    output_prefix_headers: None,
    output_body: OutputBinding::Discard,
    errors: &[],
};

delete_config!(
    /// Remove the object ownership setting of a bucket.
    DeleteBucketOwnershipControls(
        DeleteBucketOwnershipControlsInput => DeleteBucketOwnershipControlsOutput
    ) = DELETE_BUCKET_OWNERSHIP_CONTROLS,
    "ownershipControls"
);

// ACL

operation!(
    /// Read the access control list of a bucket.
    GetBucketAcl(GetBucketAclInput => GetBucketAclOutput) = GET_BUCKET_ACL
);

static GET_BUCKET_ACL: OperationDescriptor<GetBucketAclInput, GetBucketAclOutput> =
    OperationDescriptor {
        operation: S3Operation::GetBucketAcl,
        method: Method::GET,
        path: "/{Bucket}",
        labels: &[label!("Bucket", bucket)],
        headers: &[expected_owner!()],
        prefix_headers: None,
        query: &[QueryBinding::Static("acl", "")],
        body: BodyBinding::None,
        content_type: None,
        success: &[200],
        output_headers: &[],
        output_prefix_headers: None,
        output_body: OutputBinding::Xml(read_bucket_acl),
        errors: &[],
    };

fn read_bucket_acl(out: &mut GetBucketAclOutput, map: &XmlMap) -> XmlResult<()> {
    out.owner = member(map, "Owner")?;
    out.grants = access_control_list(map)?;
    Ok(())
}

operation!(
    /// Replace the access control list of a bucket.
    PutBucketAcl(PutBucketAclInput => PutBucketAclOutput) = PUT_BUCKET_ACL
);

static PUT_BUCKET_ACL: OperationDescriptor<PutBucketAclInput, PutBucketAclOutput> =
    OperationDescriptor {
        operation: S3Operation::PutBucketAcl,
        method: Method::PUT,
        path: "/{Bucket}",
        labels: &[label!("Bucket", bucket)],
        headers: &[
            header!("x-amz-acl", acl),
            header!("Content-MD5", content_md5),
            header!("x-amz-sdk-checksum-algorithm", checksum_algorithm),
            header!("x-amz-grant-full-control", grants.full_control),
            header!("x-amz-grant-read", grants.read),
            header!("x-amz-grant-read-acp", grants.read_acp),
            header!("x-amz-grant-write", grants.write),
            header!("x-amz-grant-write-acp", grants.write_acp),
            expected_owner!(),
        ],
        prefix_headers: None,
        query: &[QueryBinding::Static("acl", "")],
        body: xml_body!("AccessControlPolicy", access_control_policy),
        content_type: XML,
        success: &[200],
        output_headers: &[],
        output_prefix_headers: None,
        output_body: OutputBinding::Discard,
        errors: &[],
    };

// Transfer acceleration

operation!(
    /// Read the transfer acceleration state of a bucket.
    GetBucketAccelerateConfiguration(
        GetBucketAccelerateConfigurationInput => GetBucketAccelerateConfigurationOutput
    ) = GET_BUCKET_ACCELERATE_CONFIGURATION
);

static GET_BUCKET_ACCELERATE_CONFIGURATION: OperationDescriptor<
    GetBucketAccelerateConfigurationInput,
    GetBucketAccelerateConfigurationOutput,
> = OperationDescriptor {
    operation: S3Operation::GetBucketAccelerateConfiguration,
    method: Method::GET,
    path: "/{Bucket}",
    labels: &[label!("Bucket", bucket)],
    headers: &[
        expected_owner!(),
        header!("x-amz-request-payer", request_payer),
    ],
    prefix_headers: None,
    query: &[QueryBinding::Static("accelerate", "")],
    body: BodyBinding::None,
    content_type: None,
    success: &[200],
    output_headers: &[request_charged!()],
    output_prefix_headers: None,
    output_body: OutputBinding::Xml(|out, map| {
        out.status = member(map, "Status")?;
        Ok(())
    }),
    errors: &[],
};

operation!(
    /// Enable or suspend transfer acceleration.
    PutBucketAccelerateConfiguration(
        PutBucketAccelerateConfigurationInput => PutBucketAccelerateConfigurationOutput
    ) = PUT_BUCKET_ACCELERATE_CONFIGURATION
);

static PUT_BUCKET_ACCELERATE_CONFIGURATION: OperationDescriptor<
    PutBucketAccelerateConfigurationInput,
    PutBucketAccelerateConfigurationOutput,
> = OperationDescriptor {
    operation: S3Operation::PutBucketAccelerateConfiguration,
    method: Method::PUT,
    path: "/{Bucket}",
    labels: &[label!("Bucket", bucket)],
    headers: &[
        expected_owner!(),
        header!("x-amz-sdk-checksum-algorithm", checksum_algorithm),
    ],
    prefix_headers: None,
    query: &[QueryBinding::Static("accelerate", "")],
    body: xml_body!("AccelerateConfiguration", accelerate_configuration),
    content_type: XML,
    success: &[200],
    output_headers: &[],
    output_prefix_headers: None,
    output_body: OutputBinding::Discard,
    errors: &[],
};

// Requester pays

operation!(
    /// Read who pays for requests to a bucket.
    GetBucketRequestPayment(GetBucketRequestPaymentInput => GetBucketRequestPaymentOutput) = GET_BUCKET_REQUEST_PAYMENT
);

static GET_BUCKET_REQUEST_PAYMENT: OperationDescriptor<
    GetBucketRequestPaymentInput,
    GetBucketRequestPaymentOutput,
> = OperationDescriptor {
    operation: S3Operation::GetBucketRequestPayment,
    method: Method::GET,
    path: "/{Bucket}",
    labels: &[label!("Bucket", bucket)],
    headers: &[expected_owner!()],
    prefix_headers: None,
    query: &[QueryBinding::Static("requestPayment", "")],
    body: BodyBinding::None,
    content_type: None,
    success: &[200],
    output_headers: &[],
    output_prefix_headers: None,
    output_body: OutputBinding::Xml(|out, map| {
        out.payer = member(map, "Payer")?;
        Ok(())
    }),
    errors: &[],
};

operation!(
    /// Set who pays for requests to a bucket.
    PutBucketRequestPayment(PutBucketRequestPaymentInput => PutBucketRequestPaymentOutput) = PUT_BUCKET_REQUEST_PAYMENT
);

static PUT_BUCKET_REQUEST_PAYMENT: OperationDescriptor<
    PutBucketRequestPaymentInput,
    PutBucketRequestPaymentOutput,
> = OperationDescriptor {
    operation: S3Operation::PutBucketRequestPayment,
    method: Method::PUT,
    path: "/{Bucket}",
    labels: &[label!("Bucket", bucket)],
    headers: &[
        header!("Content-MD5", content_md5),
        header!("x-amz-sdk-checksum-algorithm", checksum_algorithm),
        expected_owner!(),
    ],
    prefix_headers: None,
    query: &[QueryBinding::Static("requestPayment", "")],
    body: xml_body!("RequestPaymentConfiguration", request_payment_configuration),
    content_type: XML,
    success: &[200],
    output_headers: &[],
    output_prefix_headers: None,
    output_body: OutputBinding::Discard,
    errors: &[],
};

// Object lock

operation!(
    /// Read the object lock configuration of a bucket.
    GetObjectLockConfiguration(
        GetObjectLockConfigurationInput => GetObjectLockConfigurationOutput
    ) = GET_OBJECT_LOCK_CONFIGURATION
);

static GET_OBJECT_LOCK_CONFIGURATION: OperationDescriptor<
    GetObjectLockConfigurationInput,
    GetObjectLockConfigurationOutput,
> = OperationDescriptor {
    operation: S3Operation::GetObjectLockConfiguration,
    method: Method::GET,
    path: "/{Bucket}",
    labels: &[label!("Bucket", bucket)],
    headers: &[expected_owner!()],
    prefix_headers: None,
    query: &[QueryBinding::Static("object-lock", "")],
    body: BodyBinding::None,
    content_type: None,
    success: &[200],
    output_headers: &[],
    output_prefix_headers: None,
    output_body: OutputBinding::Xml(|out, map| {
        out.object_lock_configuration = payload(map)?;
        Ok(())
    }),
    errors: &[],
};

operation!(
    /// Replace the object lock configuration of a bucket.
    PutObjectLockConfiguration(
        PutObjectLockConfigurationInput => PutObjectLockConfigurationOutput
    ) = PUT_OBJECT_LOCK_CONFIGURATION
);

static PUT_OBJECT_LOCK_CONFIGURATION: OperationDescriptor<
    PutObjectLockConfigurationInput,
    PutObjectLockConfigurationOutput,
> = OperationDescriptor {
    operation: S3Operation::PutObjectLockConfiguration,
    method: Method::PUT,
    path: "/{Bucket}",
    labels: &[label!("Bucket", bucket)],
    headers: &[
        header!("x-amz-request-payer", request_payer),
        header!("x-amz-bucket-object-lock-token", token),
        header!("Content-MD5", content_md5),
        header!("x-amz-sdk-checksum-algorithm", checksum_algorithm),
        expected_owner!(),
    ],
    prefix_headers: None,
    query: &[QueryBinding::Static("object-lock", "")],
    body: xml_body!("ObjectLockConfiguration", object_lock_configuration),
    content_type: XML,
    success: &[200],
    output_headers: &[request_charged!()],
    output_prefix_headers: None,
    output_body: OutputBinding::Discard,
    errors: &[],
};

#[cfg(test)]
mod tests {
    use s3_restxml_model::enums::{BucketVersioningStatus, Permission, ServerSideEncryption};
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
    fn test_should_read_bucket_acl() {
        let out = read::<GetBucketAcl>(
            br#"<AccessControlPolicy>
  <Owner><ID>o1</ID></Owner>
  <AccessControlList>
    <Grant>
      <Grantee xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:type="CanonicalUser"><ID>o1</ID></Grantee>
      <Permission>FULL_CONTROL</Permission>
    </Grant>
  </AccessControlList>
</AccessControlPolicy>"#,
        );
        assert_eq!(out.owner.and_then(|o| o.id).as_deref(), Some("o1"));
        let grants = out.grants.unwrap();
        assert_eq!(grants.len(), 1);
        assert_eq!(grants[0].permission, Some(Permission::FullControl));
    }

    #[test]
    fn test_should_read_encryption_payload() {
        let out = read::<GetBucketEncryption>(
            b"<ServerSideEncryptionConfiguration><Rule><ApplyServerSideEncryptionByDefault>\
              <SSEAlgorithm>AES256</SSEAlgorithm></ApplyServerSideEncryptionByDefault>\
              </Rule></ServerSideEncryptionConfiguration>",
        );
        let rules = out.server_side_encryption_configuration.unwrap().rules.unwrap();
        assert_eq!(
            rules[0]
                .apply_server_side_encryption_by_default
                .as_ref()
                .map(|d| d.sse_algorithm.clone()),
            Some(ServerSideEncryption::Aes256)
        );
    }

    #[test]
    fn test_should_read_single_cors_rule_as_list() {
        let out = read::<GetBucketCors>(
            b"<CORSConfiguration><CORSRule><AllowedMethod>GET</AllowedMethod>\
              <AllowedOrigin>*</AllowedOrigin></CORSRule></CORSConfiguration>",
        );
        let rules = out.cors_rules.unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].allowed_methods, Some(vec!["GET".to_owned()]));
    }

    #[test]
    fn test_should_read_versioning_state() {
        let out = read::<GetBucketVersioning>(
            b"<VersioningConfiguration><Status>Enabled</Status></VersioningConfiguration>",
        );
        assert_eq!(out.status, Some(BucketVersioningStatus::Enabled));
        assert_eq!(out.mfa_delete, None);
    }

    #[test]
    fn test_should_select_sub_resources() {
        assert!(matches!(
            GetBucketPolicyStatus::descriptor().query,
            [QueryBinding::Static("policyStatus", "")]
        ));
        assert!(matches!(
            DeleteBucketTagging::descriptor().query,
            [QueryBinding::Static("tagging", "")]
        ));
        assert_eq!(DeleteBucketCors::descriptor().method, Method::DELETE);
    }
}
