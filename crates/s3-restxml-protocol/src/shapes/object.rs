//! Object, listing and multipart shapes.

use s3_restxml_model::types::{
    Checksum, CommonPrefix, CompletedMultipartUpload, CompletedPart, CopyObjectResult,
    CopyPartResult, Delete, DeleteError, DeleteMarkerEntry, DeletedObject,
    GetObjectAttributesParts, GlacierJobParameters, MultipartUpload, Object, ObjectIdentifier,
    ObjectLockLegalHold, ObjectLockRetention, ObjectPart, ObjectVersion, Part, RestoreRequest,
};
use s3_restxml_xml::{XmlMap, XmlNode, XmlResult};

use super::{XmlDeserialize, XmlNodeExt, XmlSerialize, flattened, member, member_or_default};

impl XmlSerialize for Delete {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.flattened("Object", self.objects.as_ref())
            .scalar("Quiet", self.quiet.as_ref());
        node
    }
}

impl XmlSerialize for ObjectIdentifier {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("Key", Some(&self.key))
            .scalar("VersionId", self.version_id.as_ref());
        node
    }
}

impl XmlDeserialize for DeletedObject {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            delete_marker: member(map, "DeleteMarker")?,
            delete_marker_version_id: member(map, "DeleteMarkerVersionId")?,
            key: member(map, "Key")?,
            version_id: member(map, "VersionId")?,
        })
    }
}

impl XmlDeserialize for DeleteError {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            code: member(map, "Code")?,
            key: member(map, "Key")?,
            message: member(map, "Message")?,
            version_id: member(map, "VersionId")?,
        })
    }
}

impl XmlSerialize for CompletedMultipartUpload {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.flattened("Part", self.parts.as_ref());
        node
    }
}

impl XmlSerialize for CompletedPart {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("ETag", self.e_tag.as_ref());
        checksum_members(&mut node, &self.checksum).scalar("PartNumber", self.part_number.as_ref());
        node
    }
}

impl XmlDeserialize for CopyObjectResult {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            checksum: Checksum::from_map(map)?,
            e_tag: member(map, "ETag")?,
            last_modified: member(map, "LastModified")?,
        })
    }
}

impl XmlDeserialize for CopyPartResult {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            checksum: Checksum::from_map(map)?,
            e_tag: member(map, "ETag")?,
            last_modified: member(map, "LastModified")?,
        })
    }
}

/// The checksum members sit directly in the enclosing element.
impl XmlDeserialize for Checksum {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            crc32: member(map, "ChecksumCRC32")?,
            crc32c: member(map, "ChecksumCRC32C")?,
            sha1: member(map, "ChecksumSHA1")?,
            sha256: member(map, "ChecksumSHA256")?,
        })
    }
}

fn checksum_members<'a>(node: &'a mut XmlNode, checksum: &Checksum) -> &'a mut XmlNode {
    node.scalar("ChecksumCRC32", checksum.crc32.as_ref())
        .scalar("ChecksumCRC32C", checksum.crc32c.as_ref())
        .scalar("ChecksumSHA1", checksum.sha1.as_ref())
        .scalar("ChecksumSHA256", checksum.sha256.as_ref())
}

impl XmlDeserialize for GetObjectAttributesParts {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            is_truncated: member(map, "IsTruncated")?,
            max_parts: member(map, "MaxParts")?,
            next_part_number_marker: member(map, "NextPartNumberMarker")?,
            part_number_marker: member(map, "PartNumberMarker")?,
            parts: flattened(map, "Part")?,
            total_parts_count: member(map, "PartsCount")?,
        })
    }
}

impl XmlDeserialize for ObjectPart {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            checksum: Checksum::from_map(map)?,
            part_number: member(map, "PartNumber")?,
            size: member(map, "Size")?,
        })
    }
}

impl XmlDeserialize for Object {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            checksum_algorithm: flattened(map, "ChecksumAlgorithm")?,
            e_tag: member(map, "ETag")?,
            key: member(map, "Key")?,
            last_modified: member(map, "LastModified")?,
            owner: member(map, "Owner")?,
            size: member(map, "Size")?,
            storage_class: member(map, "StorageClass")?,
        })
    }
}

impl XmlDeserialize for ObjectVersion {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            checksum_algorithm: flattened(map, "ChecksumAlgorithm")?,
            e_tag: member(map, "ETag")?,
            is_latest: member(map, "IsLatest")?,
            key: member(map, "Key")?,
            last_modified: member(map, "LastModified")?,
            owner: member(map, "Owner")?,
            size: member(map, "Size")?,
            storage_class: member(map, "StorageClass")?,
            version_id: member(map, "VersionId")?,
        })
    }
}

impl XmlDeserialize for DeleteMarkerEntry {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            is_latest: member(map, "IsLatest")?,
            key: member(map, "Key")?,
            last_modified: member(map, "LastModified")?,
            owner: member(map, "Owner")?,
            version_id: member(map, "VersionId")?,
        })
    }
}

impl XmlDeserialize for CommonPrefix {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            prefix: member(map, "Prefix")?,
        })
    }
}

impl XmlDeserialize for MultipartUpload {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            checksum_algorithm: member(map, "ChecksumAlgorithm")?,
            initiated: member(map, "Initiated")?,
            initiator: member(map, "Initiator")?,
            key: member(map, "Key")?,
            owner: member(map, "Owner")?,
            storage_class: member(map, "StorageClass")?,
            upload_id: member(map, "UploadId")?,
        })
    }
}

impl XmlDeserialize for Part {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            checksum: Checksum::from_map(map)?,
            e_tag: member(map, "ETag")?,
            last_modified: member(map, "LastModified")?,
            part_number: member(map, "PartNumber")?,
            size: member(map, "Size")?,
        })
    }
}

impl XmlSerialize for ObjectLockLegalHold {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("Status", self.status.as_ref());
        node
    }
}

impl XmlDeserialize for ObjectLockLegalHold {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            status: member(map, "Status")?,
        })
    }
}

impl XmlSerialize for ObjectLockRetention {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("Mode", self.mode.as_ref())
            .scalar("RetainUntilDate", self.retain_until_date.as_ref());
        node
    }
}

impl XmlDeserialize for ObjectLockRetention {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            mode: member(map, "Mode")?,
            retain_until_date: member(map, "RetainUntilDate")?,
        })
    }
}

impl XmlSerialize for RestoreRequest {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("Days", self.days.as_ref())
            .shape("GlacierJobParameters", self.glacier_job_parameters.as_ref())
            .scalar("Type", self.r#type.as_ref())
            .scalar("Tier", self.tier.as_ref())
            .scalar("Description", self.description.as_ref());
        node
    }
}

impl XmlSerialize for GlacierJobParameters {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("Tier", Some(&self.tier));
        node
    }
}

impl XmlDeserialize for GlacierJobParameters {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            tier: member_or_default(map, "Tier")?,
        })
    }
}
