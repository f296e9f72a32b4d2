//! String-valued S3 enums.

s3_enum! {
    /// S3 ArchiveStatus enum.
    ArchiveStatus {
        ArchiveAccess => "ARCHIVE_ACCESS",
        DeepArchiveAccess => "DEEP_ARCHIVE_ACCESS",
    }
}

s3_enum! {
    /// S3 BucketAccelerateStatus enum.
    BucketAccelerateStatus {
        Enabled => "Enabled",
        Suspended => "Suspended",
    }
}

s3_enum! {
    /// S3 BucketCannedACL enum.
    BucketCannedACL {
        Private => "private",
        PublicRead => "public-read",
        PublicReadWrite => "public-read-write",
        AuthenticatedRead => "authenticated-read",
    }
}

s3_enum! {
    /// S3 BucketLocationConstraint enum.
    BucketLocationConstraint {
        Eu => "EU",
        AfSouth1 => "af-south-1",
        ApEast1 => "ap-east-1",
        ApNortheast1 => "ap-northeast-1",
        ApNortheast2 => "ap-northeast-2",
        ApNortheast3 => "ap-northeast-3",
        ApSouth1 => "ap-south-1",
        ApSoutheast1 => "ap-southeast-1",
        ApSoutheast2 => "ap-southeast-2",
        CaCentral1 => "ca-central-1",
        CnNorth1 => "cn-north-1",
        CnNorthwest1 => "cn-northwest-1",
        EuCentral1 => "eu-central-1",
        EuNorth1 => "eu-north-1",
        EuSouth1 => "eu-south-1",
        EuWest1 => "eu-west-1",
        EuWest2 => "eu-west-2",
        EuWest3 => "eu-west-3",
        MeSouth1 => "me-south-1",
        SaEast1 => "sa-east-1",
        UsEast2 => "us-east-2",
        UsGovEast1 => "us-gov-east-1",
        UsGovWest1 => "us-gov-west-1",
        UsWest1 => "us-west-1",
        UsWest2 => "us-west-2",
    }
}

s3_enum! {
    /// S3 BucketVersioningStatus enum.
    BucketVersioningStatus {
        Enabled => "Enabled",
        Suspended => "Suspended",
    }
}

s3_enum! {
    /// S3 ChecksumAlgorithm enum.
    ChecksumAlgorithm {
        Crc32 => "CRC32",
        Crc32c => "CRC32C",
        Sha1 => "SHA1",
        Sha256 => "SHA256",
    }
}

s3_enum! {
    /// S3 ChecksumMode enum.
    ChecksumMode {
        Enabled => "ENABLED",
    }
}

s3_enum! {
    /// S3 CompressionType enum.
    CompressionType {
        None => "NONE",
        Gzip => "GZIP",
        Bzip2 => "BZIP2",
    }
}

s3_enum! {
    /// S3 EncodingType enum.
    EncodingType {
        Url => "url",
    }
}

s3_enum! {
    /// S3 ExpirationStatus enum.
    ExpirationStatus {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

s3_enum! {
    /// S3 ExpressionType enum.
    ExpressionType {
        Sql => "SQL",
    }
}

s3_enum! {
    /// S3 FileHeaderInfo enum.
    FileHeaderInfo {
        Use => "USE",
        Ignore => "IGNORE",
        None => "NONE",
    }
}

s3_enum! {
    /// S3 Type enum (grantee type).
    GranteeType {
        CanonicalUser => "CanonicalUser",
        AmazonCustomerByEmail => "AmazonCustomerByEmail",
        Group => "Group",
    }
}

s3_enum! {
    /// S3 IntelligentTieringAccessTier enum.
    IntelligentTieringAccessTier {
        ArchiveAccess => "ARCHIVE_ACCESS",
        DeepArchiveAccess => "DEEP_ARCHIVE_ACCESS",
    }
}

s3_enum! {
    /// S3 JSONType enum.
    JSONType {
        Document => "DOCUMENT",
        Lines => "LINES",
    }
}

s3_enum! {
    /// S3 MetadataDirective enum.
    MetadataDirective {
        Copy => "COPY",
        Replace => "REPLACE",
    }
}

s3_enum! {
    /// S3 MFADelete enum (request side).
    MFADelete {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

s3_enum! {
    /// S3 MFADeleteStatus enum (response side).
    MFADeleteStatus {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

s3_enum! {
    /// S3 ObjectAttributes enum.
    ObjectAttributes {
        ETag => "ETag",
        Checksum => "Checksum",
        ObjectParts => "ObjectParts",
        StorageClass => "StorageClass",
        ObjectSize => "ObjectSize",
    }
}

s3_enum! {
    /// S3 ObjectCannedACL enum.
    ObjectCannedACL {
        Private => "private",
        PublicRead => "public-read",
        PublicReadWrite => "public-read-write",
        AuthenticatedRead => "authenticated-read",
        AwsExecRead => "aws-exec-read",
        BucketOwnerRead => "bucket-owner-read",
        BucketOwnerFullControl => "bucket-owner-full-control",
    }
}

s3_enum! {
    /// S3 ObjectLockEnabled enum.
    ObjectLockEnabled {
        Enabled => "Enabled",
    }
}

s3_enum! {
    /// S3 ObjectLockLegalHoldStatus enum.
    ObjectLockLegalHoldStatus {
        On => "ON",
        Off => "OFF",
    }
}

s3_enum! {
    /// S3 ObjectLockMode enum.
    ObjectLockMode {
        Governance => "GOVERNANCE",
        Compliance => "COMPLIANCE",
    }
}

s3_enum! {
    /// S3 ObjectLockRetentionMode enum.
    ObjectLockRetentionMode {
        Governance => "GOVERNANCE",
        Compliance => "COMPLIANCE",
    }
}

s3_enum! {
    /// S3 ObjectOwnership enum.
    ObjectOwnership {
        BucketOwnerPreferred => "BucketOwnerPreferred",
        ObjectWriter => "ObjectWriter",
        BucketOwnerEnforced => "BucketOwnerEnforced",
    }
}

s3_enum! {
    /// S3 Payer enum.
    Payer {
        Requester => "Requester",
        BucketOwner => "BucketOwner",
    }
}

s3_enum! {
    /// S3 Permission enum.
    Permission {
        FullControl => "FULL_CONTROL",
        Write => "WRITE",
        WriteAcp => "WRITE_ACP",
        Read => "READ",
        ReadAcp => "READ_ACP",
    }
}

s3_enum! {
    /// S3 QuoteFields enum.
    QuoteFields {
        Always => "ALWAYS",
        AsNeeded => "ASNEEDED",
    }
}

s3_enum! {
    /// S3 ReplicationStatus enum.
    ReplicationStatus {
        Complete => "COMPLETE",
        Pending => "PENDING",
        Failed => "FAILED",
        Replica => "REPLICA",
        Completed => "COMPLETED",
    }
}

s3_enum! {
    /// S3 RequestCharged enum.
    RequestCharged {
        Requester => "requester",
    }
}

s3_enum! {
    /// S3 RequestPayer enum.
    RequestPayer {
        Requester => "requester",
    }
}

s3_enum! {
    /// S3 RestoreRequestType enum.
    RestoreRequestType {
        Select => "SELECT",
    }
}

s3_enum! {
    /// S3 ServerSideEncryption enum.
    ServerSideEncryption {
        Aes256 => "AES256",
        AwsKms => "aws:kms",
        AwsKmsDsse => "aws:kms:dsse",
    }
}

s3_enum! {
    /// S3 StorageClass enum.
    StorageClass {
        Standard => "STANDARD",
        ReducedRedundancy => "REDUCED_REDUNDANCY",
        StandardIa => "STANDARD_IA",
        OnezoneIa => "ONEZONE_IA",
        IntelligentTiering => "INTELLIGENT_TIERING",
        Glacier => "GLACIER",
        DeepArchive => "DEEP_ARCHIVE",
        Outposts => "OUTPOSTS",
        GlacierIr => "GLACIER_IR",
        Snow => "SNOW",
        ExpressOnezone => "EXPRESS_ONEZONE",
    }
}

s3_enum! {
    /// S3 TaggingDirective enum.
    TaggingDirective {
        Copy => "COPY",
        Replace => "REPLACE",
    }
}

s3_enum! {
    /// S3 Tier enum.
    Tier {
        Standard => "Standard",
        Bulk => "Bulk",
        Expedited => "Expedited",
    }
}

s3_enum! {
    /// S3 TransitionStorageClass enum.
    TransitionStorageClass {
        Glacier => "GLACIER",
        StandardIa => "STANDARD_IA",
        OnezoneIa => "ONEZONE_IA",
        IntelligentTiering => "INTELLIGENT_TIERING",
        DeepArchive => "DEEP_ARCHIVE",
        GlacierIr => "GLACIER_IR",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_round_trip_known_values() {
        for value in StorageClass::VALUES {
            assert_eq!(StorageClass::from(*value).as_str(), *value);
        }
        assert_eq!(ServerSideEncryption::from("aws:kms"), ServerSideEncryption::AwsKms);
    }

    #[test]
    fn test_should_keep_unknown_values() {
        let class = StorageClass::from("FUTURE_TIER");
        assert_eq!(class, StorageClass::Unknown("FUTURE_TIER".to_owned()));
        assert_eq!(class.to_string(), "FUTURE_TIER");
    }

    #[test]
    fn test_should_default_to_first_value() {
        assert_eq!(Permission::default(), Permission::FullControl);
    }

    #[test]
    fn test_should_serialize_as_wire_string() {
        let json = serde_json::to_string(&ObjectLockLegalHoldStatus::On).expect("serialize");
        assert_eq!(json, "\"ON\"");
        let parsed: Tier = serde_json::from_str("\"Bulk\"").expect("deserialize");
        assert_eq!(parsed, Tier::Bulk);
    }
}
