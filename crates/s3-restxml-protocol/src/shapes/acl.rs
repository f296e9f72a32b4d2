//! Access control shapes.

use s3_restxml_model::types::{AccessControlPolicy, Grant, Grantee, Initiator, Owner};
use s3_restxml_xml::{XmlMap, XmlNode, XmlResult};

use super::{XmlDeserialize, XmlNodeExt, XmlSerialize, member, member_or_default, wrapped};

const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

impl XmlSerialize for Owner {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("DisplayName", self.display_name.as_ref())
            .scalar("ID", self.id.as_ref());
        node
    }
}

impl XmlDeserialize for Owner {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            display_name: member(map, "DisplayName")?,
            id: member(map, "ID")?,
        })
    }
}

impl XmlDeserialize for Initiator {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            display_name: member(map, "DisplayName")?,
            id: member(map, "ID")?,
        })
    }
}

impl XmlSerialize for Grantee {
    /// The grantee type travels as an `xsi:type` attribute.
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.add_attribute("xmlns:xsi", XSI_NAMESPACE)
            .add_attribute("xsi:type", self.r#type.as_str());
        node.scalar("DisplayName", self.display_name.as_ref())
            .scalar("EmailAddress", self.email_address.as_ref())
            .scalar("ID", self.id.as_ref())
            .scalar("URI", self.uri.as_ref());
        node
    }
}

impl XmlDeserialize for Grantee {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            display_name: member(map, "DisplayName")?,
            email_address: member(map, "EmailAddress")?,
            id: member(map, "ID")?,
            r#type: member_or_default(map, "xsi:type")?,
            uri: member(map, "URI")?,
        })
    }
}

impl XmlSerialize for Grant {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.shape("Grantee", self.grantee.as_ref())
            .scalar("Permission", self.permission.as_ref());
        node
    }
}

impl XmlDeserialize for Grant {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            grantee: member(map, "Grantee")?,
            permission: member(map, "Permission")?,
        })
    }
}

impl XmlSerialize for AccessControlPolicy {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.wrapped("AccessControlList", "Grant", self.grants.as_ref())
            .shape("Owner", self.owner.as_ref());
        node
    }
}

/// Read the `AccessControlList` of an ACL response.
pub(crate) fn access_control_list(map: &XmlMap) -> XmlResult<Option<Vec<Grant>>> {
    wrapped(map, "AccessControlList", "Grant")
}

#[cfg(test)]
mod tests {
    use s3_restxml_model::enums::{GranteeType, Permission};
    use s3_restxml_xml::parse_body;

    use super::*;

    #[test]
    fn test_should_write_grantee_type_as_xsi_attribute() {
        let grantee = Grantee {
            id: Some("abc".to_owned()),
            r#type: GranteeType::CanonicalUser,
            ..Grantee::default()
        };
        assert_eq!(
            grantee.to_xml_node("Grantee").to_xml_string().unwrap(),
            "<Grantee xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
             xsi:type=\"CanonicalUser\"><ID>abc</ID></Grantee>"
        );
    }

    #[test]
    fn test_should_read_access_control_list() {
        let body = br#"<AccessControlPolicy>
  <Owner><ID>owner-id</ID></Owner>
  <AccessControlList>
    <Grant>
      <Grantee xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:type="Group">
        <URI>http://acs.amazonaws.com/groups/global/AllUsers</URI>
      </Grantee>
      <Permission>READ</Permission>
    </Grant>
  </AccessControlList>
</AccessControlPolicy>"#;
        let map = parse_body(body).unwrap();
        let grants = access_control_list(&map).unwrap().unwrap();
        assert_eq!(grants.len(), 1);
        let grantee = grants[0].grantee.as_ref().unwrap();
        assert_eq!(grantee.r#type, GranteeType::Group);
        assert_eq!(
            grantee.uri.as_deref(),
            Some("http://acs.amazonaws.com/groups/global/AllUsers")
        );
        assert_eq!(grants[0].permission, Some(Permission::Read));

        let owner: Option<Owner> = member(&map, "Owner").unwrap();
        assert_eq!(owner.unwrap().id.as_deref(), Some("owner-id"));
    }
}
