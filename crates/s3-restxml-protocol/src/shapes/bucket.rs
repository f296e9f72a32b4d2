//! Bucket configuration shapes.

use s3_restxml_model::types::{
    AbortIncompleteMultipartUpload, AccelerateConfiguration, Bucket, BucketLifecycleConfiguration,
    CORSConfiguration, CORSRule, CreateBucketConfiguration, DefaultRetention, LifecycleExpiration,
    LifecycleRule, LifecycleRuleAndOperator, LifecycleRuleFilter, NoncurrentVersionExpiration,
    NoncurrentVersionTransition, ObjectLockConfiguration, ObjectLockRule, OwnershipControls,
    OwnershipControlsRule, PolicyStatus, PublicAccessBlockConfiguration,
    RequestPaymentConfiguration, ServerSideEncryptionByDefault, ServerSideEncryptionConfiguration,
    ServerSideEncryptionRule, Tag, Tagging, Transition, VersioningConfiguration,
};
use s3_restxml_xml::{XmlError, XmlMap, XmlNode, XmlResult, XmlValue};

use super::{
    XmlDeserialize, XmlNodeExt, XmlSerialize, flattened, member, member_or_default, wrapped,
};

impl XmlSerialize for CreateBucketConfiguration {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("LocationConstraint", self.location_constraint.as_ref());
        node
    }
}

impl XmlDeserialize for Bucket {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            bucket_region: member(map, "BucketRegion")?,
            creation_date: member(map, "CreationDate")?,
            name: member(map, "Name")?,
        })
    }
}

impl XmlSerialize for VersioningConfiguration {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("MfaDelete", self.mfa_delete.as_ref())
            .scalar("Status", self.status.as_ref());
        node
    }
}

impl XmlSerialize for Tag {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("Key", Some(&self.key))
            .scalar("Value", Some(&self.value));
        node
    }
}

impl XmlDeserialize for Tag {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            key: member_or_default(map, "Key")?,
            value: member_or_default(map, "Value")?,
        })
    }
}

impl XmlSerialize for Tagging {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.wrapped("TagSet", "Tag", self.tag_set.as_ref());
        node
    }
}

impl XmlSerialize for CORSConfiguration {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.flattened("CORSRule", self.cors_rules.as_ref());
        node
    }
}

impl XmlSerialize for CORSRule {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.flattened("AllowedHeader", self.allowed_headers.as_ref())
            .flattened("AllowedMethod", self.allowed_methods.as_ref())
            .flattened("AllowedOrigin", self.allowed_origins.as_ref())
            .flattened("ExposeHeader", self.expose_headers.as_ref())
            .scalar("ID", self.id.as_ref())
            .scalar("MaxAgeSeconds", self.max_age_seconds.as_ref());
        node
    }
}

impl XmlDeserialize for CORSRule {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            allowed_headers: flattened(map, "AllowedHeader")?,
            allowed_methods: flattened(map, "AllowedMethod")?,
            allowed_origins: flattened(map, "AllowedOrigin")?,
            expose_headers: flattened(map, "ExposeHeader")?,
            id: member(map, "ID")?,
            max_age_seconds: member(map, "MaxAgeSeconds")?,
        })
    }
}

impl XmlSerialize for BucketLifecycleConfiguration {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.flattened("Rule", self.rules.as_ref());
        node
    }
}

impl XmlSerialize for LifecycleRule {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.shape("Expiration", self.expiration.as_ref())
            .scalar("ID", self.id.as_ref())
            .scalar("Prefix", self.prefix.as_ref())
            .shape("Filter", self.filter.as_ref())
            .scalar("Status", Some(&self.status))
            .flattened("Transition", self.transitions.as_ref())
            .flattened(
                "NoncurrentVersionTransition",
                self.noncurrent_version_transitions.as_ref(),
            )
            .shape(
                "NoncurrentVersionExpiration",
                self.noncurrent_version_expiration.as_ref(),
            )
            .shape(
                "AbortIncompleteMultipartUpload",
                self.abort_incomplete_multipart_upload.as_ref(),
            );
        node
    }
}

impl XmlDeserialize for LifecycleRule {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            abort_incomplete_multipart_upload: member(map, "AbortIncompleteMultipartUpload")?,
            expiration: member(map, "Expiration")?,
            filter: lifecycle_filter(map)?,
            id: member(map, "ID")?,
            noncurrent_version_expiration: member(map, "NoncurrentVersionExpiration")?,
            noncurrent_version_transitions: flattened(map, "NoncurrentVersionTransition")?,
            prefix: member(map, "Prefix")?,
            status: member_or_default(map, "Status")?,
            transitions: flattened(map, "Transition")?,
        })
    }
}

/// An empty `<Filter/>` carries no member and reads as no filter.
fn lifecycle_filter(map: &XmlMap) -> XmlResult<Option<LifecycleRuleFilter>> {
    match map.get("Filter") {
        Some(XmlValue::Text(text)) if text.trim().is_empty() => Ok(None),
        _ => member(map, "Filter"),
    }
}

impl XmlSerialize for LifecycleExpiration {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("Date", self.date.as_ref())
            .scalar("Days", self.days.as_ref())
            .scalar(
                "ExpiredObjectDeleteMarker",
                self.expired_object_delete_marker.as_ref(),
            );
        node
    }
}

impl XmlDeserialize for LifecycleExpiration {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            date: member(map, "Date")?,
            days: member(map, "Days")?,
            expired_object_delete_marker: member(map, "ExpiredObjectDeleteMarker")?,
        })
    }
}

impl XmlSerialize for LifecycleRuleFilter {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        match self {
            Self::Prefix(prefix) => node.scalar("Prefix", Some(prefix)),
            Self::Tag(tag) => node.shape("Tag", Some(tag)),
            Self::ObjectSizeGreaterThan(size) => node.scalar("ObjectSizeGreaterThan", Some(size)),
            Self::ObjectSizeLessThan(size) => node.scalar("ObjectSizeLessThan", Some(size)),
            Self::And(and) => node.shape("And", Some(and)),
            Self::Unknown { tag, value } => node.add_value(tag, value),
        };
        node
    }
}

impl XmlDeserialize for LifecycleRuleFilter {
    /// Known members are tried in a fixed order; the first present one wins. A filter
    /// naming none of them keeps its first entry as [`LifecycleRuleFilter::Unknown`].
    /// A filter with no entry at all is an error.
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        if let Some(prefix) = member(map, "Prefix")? {
            return Ok(Self::Prefix(prefix));
        }
        if let Some(tag) = member(map, "Tag")? {
            return Ok(Self::Tag(tag));
        }
        if let Some(size) = member(map, "ObjectSizeGreaterThan")? {
            return Ok(Self::ObjectSizeGreaterThan(size));
        }
        if let Some(size) = member(map, "ObjectSizeLessThan")? {
            return Ok(Self::ObjectSizeLessThan(size));
        }
        if let Some(and) = member(map, "And")? {
            return Ok(Self::And(and));
        }
        let (tag, value) = map
            .first()
            .ok_or_else(|| XmlError::parse("Filter", "union has no member"))?;
        Ok(Self::Unknown {
            tag: tag.to_owned(),
            value: value.clone(),
        })
    }
}

impl XmlSerialize for LifecycleRuleAndOperator {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("Prefix", self.prefix.as_ref())
            .flattened("Tag", self.tags.as_ref())
            .scalar("ObjectSizeGreaterThan", self.object_size_greater_than.as_ref())
            .scalar("ObjectSizeLessThan", self.object_size_less_than.as_ref());
        node
    }
}

impl XmlDeserialize for LifecycleRuleAndOperator {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            object_size_greater_than: member(map, "ObjectSizeGreaterThan")?,
            object_size_less_than: member(map, "ObjectSizeLessThan")?,
            prefix: member(map, "Prefix")?,
            tags: flattened(map, "Tag")?,
        })
    }
}

impl XmlSerialize for Transition {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("Date", self.date.as_ref())
            .scalar("Days", self.days.as_ref())
            .scalar("StorageClass", self.storage_class.as_ref());
        node
    }
}

impl XmlDeserialize for Transition {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            date: member(map, "Date")?,
            days: member(map, "Days")?,
            storage_class: member(map, "StorageClass")?,
        })
    }
}

impl XmlSerialize for NoncurrentVersionTransition {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("NoncurrentDays", self.noncurrent_days.as_ref())
            .scalar("StorageClass", self.storage_class.as_ref())
            .scalar(
                "NewerNoncurrentVersions",
                self.newer_noncurrent_versions.as_ref(),
            );
        node
    }
}

impl XmlDeserialize for NoncurrentVersionTransition {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            newer_noncurrent_versions: member(map, "NewerNoncurrentVersions")?,
            noncurrent_days: member(map, "NoncurrentDays")?,
            storage_class: member(map, "StorageClass")?,
        })
    }
}

impl XmlSerialize for NoncurrentVersionExpiration {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("NoncurrentDays", self.noncurrent_days.as_ref())
            .scalar(
                "NewerNoncurrentVersions",
                self.newer_noncurrent_versions.as_ref(),
            );
        node
    }
}

impl XmlDeserialize for NoncurrentVersionExpiration {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            newer_noncurrent_versions: member(map, "NewerNoncurrentVersions")?,
            noncurrent_days: member(map, "NoncurrentDays")?,
        })
    }
}

impl XmlSerialize for AbortIncompleteMultipartUpload {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("DaysAfterInitiation", self.days_after_initiation.as_ref());
        node
    }
}

impl XmlDeserialize for AbortIncompleteMultipartUpload {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            days_after_initiation: member(map, "DaysAfterInitiation")?,
        })
    }
}

impl XmlSerialize for ServerSideEncryptionConfiguration {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.flattened("Rule", self.rules.as_ref());
        node
    }
}

impl XmlDeserialize for ServerSideEncryptionConfiguration {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            rules: flattened(map, "Rule")?,
        })
    }
}

impl XmlSerialize for ServerSideEncryptionRule {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.shape(
            "ApplyServerSideEncryptionByDefault",
            self.apply_server_side_encryption_by_default.as_ref(),
        )
        .scalar("BucketKeyEnabled", self.bucket_key_enabled.as_ref());
        node
    }
}

impl XmlDeserialize for ServerSideEncryptionRule {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            apply_server_side_encryption_by_default: member(
                map,
                "ApplyServerSideEncryptionByDefault",
            )?,
            bucket_key_enabled: member(map, "BucketKeyEnabled")?,
        })
    }
}

impl XmlSerialize for ServerSideEncryptionByDefault {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("SSEAlgorithm", Some(&self.sse_algorithm))
            .scalar("KMSMasterKeyID", self.kms_master_key_id.as_ref());
        node
    }
}

impl XmlDeserialize for ServerSideEncryptionByDefault {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            kms_master_key_id: member(map, "KMSMasterKeyID")?,
            sse_algorithm: member_or_default(map, "SSEAlgorithm")?,
        })
    }
}

impl XmlSerialize for PublicAccessBlockConfiguration {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("BlockPublicAcls", self.block_public_acls.as_ref())
            .scalar("IgnorePublicAcls", self.ignore_public_acls.as_ref())
            .scalar("BlockPublicPolicy", self.block_public_policy.as_ref())
            .scalar("RestrictPublicBuckets", self.restrict_public_buckets.as_ref());
        node
    }
}

impl XmlDeserialize for PublicAccessBlockConfiguration {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            block_public_acls: member(map, "BlockPublicAcls")?,
            block_public_policy: member(map, "BlockPublicPolicy")?,
            ignore_public_acls: member(map, "IgnorePublicAcls")?,
            restrict_public_buckets: member(map, "RestrictPublicBuckets")?,
        })
    }
}

impl XmlSerialize for OwnershipControls {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.flattened("Rule", self.rules.as_ref());
        node
    }
}

impl XmlDeserialize for OwnershipControls {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            rules: flattened(map, "Rule")?,
        })
    }
}

impl XmlSerialize for OwnershipControlsRule {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("ObjectOwnership", Some(&self.object_ownership));
        node
    }
}

impl XmlDeserialize for OwnershipControlsRule {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            object_ownership: member_or_default(map, "ObjectOwnership")?,
        })
    }
}

impl XmlDeserialize for PolicyStatus {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            is_public: member(map, "IsPublic")?,
        })
    }
}

impl XmlSerialize for AccelerateConfiguration {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("Status", self.status.as_ref());
        node
    }
}

impl XmlSerialize for RequestPaymentConfiguration {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("Payer", Some(&self.payer));
        node
    }
}

impl XmlSerialize for ObjectLockConfiguration {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("ObjectLockEnabled", self.object_lock_enabled.as_ref())
            .shape("Rule", self.rule.as_ref());
        node
    }
}

impl XmlDeserialize for ObjectLockConfiguration {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            object_lock_enabled: member(map, "ObjectLockEnabled")?,
            rule: member(map, "Rule")?,
        })
    }
}

impl XmlSerialize for ObjectLockRule {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.shape("DefaultRetention", self.default_retention.as_ref());
        node
    }
}

impl XmlDeserialize for ObjectLockRule {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            default_retention: member(map, "DefaultRetention")?,
        })
    }
}

impl XmlSerialize for DefaultRetention {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("Mode", self.mode.as_ref())
            .scalar("Days", self.days.as_ref())
            .scalar("Years", self.years.as_ref());
        node
    }
}

impl XmlDeserialize for DefaultRetention {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            days: member(map, "Days")?,
            mode: member(map, "Mode")?,
            years: member(map, "Years")?,
        })
    }
}

/// Read the `TagSet` of a tagging response.
pub(crate) fn tag_set(map: &XmlMap) -> XmlResult<Option<Vec<Tag>>> {
    wrapped(map, "TagSet", "Tag")
}

#[cfg(test)]
mod tests {
    use s3_restxml_model::enums::{ExpirationStatus, TransitionStorageClass};
    use s3_restxml_xml::parse_body;

    use super::*;

    fn parse<T: XmlDeserialize>(xml: &str) -> T {
        T::from_map(&parse_body(xml.as_bytes()).unwrap()).unwrap()
    }

    #[test]
    fn test_should_pick_first_known_filter_member() {
        let filter: LifecycleRuleFilter =
            parse("<Filter><Prefix>logs/</Prefix><ObjectSizeLessThan>10</ObjectSizeLessThan></Filter>");
        assert_eq!(filter, LifecycleRuleFilter::Prefix("logs/".to_owned()));

        let filter: LifecycleRuleFilter = parse(
            "<Filter><And><Prefix>p</Prefix><Tag><Key>k</Key><Value>v</Value></Tag></And></Filter>",
        );
        let LifecycleRuleFilter::And(and) = filter else {
            panic!("expected And, got {filter:?}");
        };
        assert_eq!(and.prefix.as_deref(), Some("p"));
        assert_eq!(and.tags, Some(vec![Tag::new("k", "v")]));
    }

    #[test]
    fn test_should_keep_unknown_filter_member() {
        let filter: LifecycleRuleFilter =
            parse("<Filter><ObjectSizeBetween>5</ObjectSizeBetween></Filter>");
        assert_eq!(
            filter,
            LifecycleRuleFilter::Unknown {
                tag: "ObjectSizeBetween".to_owned(),
                value: XmlValue::Text("5".to_owned()),
            }
        );
    }

    #[test]
    fn test_should_read_empty_filter_as_none() {
        for xml in [
            "<Rule><Filter></Filter><Status>Enabled</Status></Rule>",
            "<Rule><Filter/><Status>Enabled</Status></Rule>",
            "<Rule><Filter>\n  </Filter><Status>Enabled</Status></Rule>",
        ] {
            let rule: LifecycleRule = parse(xml);
            assert_eq!(rule.filter, None, "{xml}");
            assert_eq!(rule.status, ExpirationStatus::Enabled);
            assert_eq!(
                rule.to_xml_node("Rule").to_xml_string().unwrap(),
                "<Rule><Status>Enabled</Status></Rule>"
            );
        }
    }

    #[test]
    fn test_should_reject_filter_without_member() {
        let err = LifecycleRuleFilter::from_map(&XmlMap::new()).unwrap_err();
        assert!(matches!(err, XmlError::ParseError { ref element, .. } if element == "Filter"));
    }

    #[test]
    fn test_should_write_unknown_filter_member_structure() {
        let filter: LifecycleRuleFilter =
            parse("<Filter><Odd><A>1</A><B>2</B></Odd></Filter>");
        assert_eq!(
            filter.to_xml_node("Filter").to_xml_string().unwrap(),
            "<Filter><Odd><A>1</A><B>2</B></Odd></Filter>"
        );

        let filter = LifecycleRuleFilter::Unknown {
            tag: "Odd".to_owned(),
            value: XmlValue::List(vec![
                XmlValue::Text("x".to_owned()),
                XmlValue::Text("y".to_owned()),
            ]),
        };
        assert_eq!(
            filter.to_xml_node("Filter").to_xml_string().unwrap(),
            "<Filter><Odd>x</Odd><Odd>y</Odd></Filter>"
        );
    }

    #[test]
    fn test_should_round_trip_lifecycle_rule() {
        let rule = LifecycleRule {
            id: Some("archive".to_owned()),
            filter: Some(LifecycleRuleFilter::Prefix("logs/".to_owned())),
            status: ExpirationStatus::Enabled,
            transitions: Some(vec![Transition {
                days: Some(30),
                storage_class: Some(TransitionStorageClass::Glacier),
                ..Transition::default()
            }]),
            ..LifecycleRule::default()
        };
        let config = BucketLifecycleConfiguration {
            rules: Some(vec![rule.clone()]),
        };

        let xml = config
            .to_xml_node("LifecycleConfiguration")
            .into_document()
            .unwrap();
        let map = parse_body(xml.as_bytes()).unwrap();
        let rules: Option<Vec<LifecycleRule>> = flattened(&map, "Rule").unwrap();
        assert_eq!(rules, Some(vec![rule]));
    }

    #[test]
    fn test_should_read_empty_tag_set_as_empty_list() {
        let map = parse_body(b"<Tagging><TagSet></TagSet></Tagging>").unwrap();
        assert_eq!(tag_set(&map).unwrap(), Some(Vec::new()));

        let map = parse_body(b"<Tagging><TagSet><Tag><Key>a</Key><Value>1</Value></Tag></TagSet></Tagging>")
            .unwrap();
        assert_eq!(tag_set(&map).unwrap(), Some(vec![Tag::new("a", "1")]));
    }

    #[test]
    fn test_should_serialize_cors_rules_flattened() {
        let config = CORSConfiguration {
            cors_rules: Some(vec![CORSRule {
                allowed_methods: Some(vec!["GET".to_owned()]),
                allowed_origins: Some(vec!["*".to_owned()]),
                ..CORSRule::default()
            }]),
        };
        assert_eq!(
            config.to_xml_node("CORSConfiguration").to_xml_string().unwrap(),
            "<CORSConfiguration><CORSRule><AllowedMethod>GET</AllowedMethod>\
             <AllowedOrigin>*</AllowedOrigin></CORSRule></CORSConfiguration>"
        );
    }
}
