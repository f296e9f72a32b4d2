//! XML mapping of S3 shapes.
//!
//! [`XmlSerialize`] builds the request-side element tree of a shape and
//! [`XmlDeserialize`] reads a shape back from a parsed [`XmlMap`]. Element names follow
//! the S3 wire schema; collections are either flattened (members repeat directly under
//! the parent) or wrapped (members sit inside a container element).

use s3_restxml_model::DateTime;
use s3_restxml_model::enums::{
    BucketAccelerateStatus, BucketLocationConstraint, BucketVersioningStatus, ChecksumAlgorithm,
    CompressionType, EncodingType, ExpirationStatus, ExpressionType, FileHeaderInfo, GranteeType,
    IntelligentTieringAccessTier, JSONType, MFADelete, MFADeleteStatus, ObjectLockEnabled,
    ObjectLockLegalHoldStatus, ObjectLockRetentionMode, ObjectOwnership, Payer, Permission,
    QuoteFields, RestoreRequestType, ServerSideEncryption, StorageClass, Tier,
    TransitionStorageClass,
};
use s3_restxml_xml::{XmlError, XmlMap, XmlNode, XmlResult, XmlValue, flattened_list, wrapped_list};

use crate::timestamp::{format_iso8601, parse_iso8601};

mod acl;
mod bucket;
mod object;
mod select;

pub(crate) use acl::access_control_list;
pub(crate) use bucket::tag_set;

/// A shape that serializes to an XML element.
pub trait XmlSerialize {
    /// Build the element for this value, named `name`.
    fn to_xml_node(&self, name: &str) -> XmlNode;
}

/// A shape read from the children and attributes of an XML element.
pub trait XmlDeserialize: Sized {
    /// Read the shape from a parsed element.
    fn from_map(map: &XmlMap) -> XmlResult<Self>;
}

/// A value read from a single parsed XML value: a scalar from text, a shape from a map.
pub trait FromXmlValue: Sized {
    /// Read the value of element `element`.
    fn from_xml_value(value: &XmlValue, element: &str) -> XmlResult<Self>;
}

/// A scalar written as element text.
pub trait XmlText {
    /// Text form of the value.
    fn to_xml_text(&self) -> String;
}

impl<T: XmlDeserialize> FromXmlValue for T {
    fn from_xml_value(value: &XmlValue, element: &str) -> XmlResult<Self> {
        match value {
            XmlValue::Map(map) => T::from_map(map),
            // An element with neither children nor attributes.
            XmlValue::Text(_) => T::from_map(&XmlMap::new()),
            XmlValue::List(items) => match items.first() {
                Some(first) => T::from_xml_value(first, element),
                None => T::from_map(&XmlMap::new()),
            },
        }
    }
}

/// The text of a scalar element. A repeated scalar yields its first occurrence.
fn scalar_text<'a>(value: &'a XmlValue, element: &str) -> XmlResult<&'a str> {
    match value {
        XmlValue::Text(text) => Ok(text),
        XmlValue::List(items) => match items.first() {
            Some(first) => scalar_text(first, element),
            None => Ok(""),
        },
        XmlValue::Map(_) => Err(XmlError::parse(element, "expected text content")),
    }
}

impl FromXmlValue for String {
    fn from_xml_value(value: &XmlValue, element: &str) -> XmlResult<Self> {
        scalar_text(value, element).map(str::to_owned)
    }
}

impl FromXmlValue for bool {
    fn from_xml_value(value: &XmlValue, element: &str) -> XmlResult<Self> {
        Ok(scalar_text(value, element)? == "true")
    }
}

impl FromXmlValue for i32 {
    fn from_xml_value(value: &XmlValue, element: &str) -> XmlResult<Self> {
        let text = scalar_text(value, element)?;
        text.trim().parse().map_err(|e| XmlError::parse(element, e))
    }
}

impl FromXmlValue for i64 {
    fn from_xml_value(value: &XmlValue, element: &str) -> XmlResult<Self> {
        let text = scalar_text(value, element)?;
        text.trim().parse().map_err(|e| XmlError::parse(element, e))
    }
}

impl FromXmlValue for DateTime {
    fn from_xml_value(value: &XmlValue, element: &str) -> XmlResult<Self> {
        let text = scalar_text(value, element)?;
        parse_iso8601(text).map_err(|e| XmlError::parse(element, e))
    }
}

impl XmlText for String {
    fn to_xml_text(&self) -> String {
        self.clone()
    }
}

impl XmlText for bool {
    fn to_xml_text(&self) -> String {
        self.to_string()
    }
}

impl XmlText for i32 {
    fn to_xml_text(&self) -> String {
        self.to_string()
    }
}

impl XmlText for i64 {
    fn to_xml_text(&self) -> String {
        self.to_string()
    }
}

impl XmlText for DateTime {
    fn to_xml_text(&self) -> String {
        format_iso8601(self)
    }
}

macro_rules! xml_enum {
    ($($name:ty),+ $(,)?) => {
        $(
            impl FromXmlValue for $name {
                fn from_xml_value(value: &XmlValue, element: &str) -> XmlResult<Self> {
                    scalar_text(value, element).map(Self::from)
                }
            }

            impl XmlText for $name {
                fn to_xml_text(&self) -> String {
                    self.as_str().to_owned()
                }
            }
        )+
    };
}

xml_enum!(
    BucketAccelerateStatus,
    BucketLocationConstraint,
    BucketVersioningStatus,
    ChecksumAlgorithm,
    CompressionType,
    EncodingType,
    ExpirationStatus,
    ExpressionType,
    FileHeaderInfo,
    GranteeType,
    IntelligentTieringAccessTier,
    JSONType,
    MFADelete,
    MFADeleteStatus,
    ObjectLockEnabled,
    ObjectLockLegalHoldStatus,
    ObjectLockRetentionMode,
    ObjectOwnership,
    Payer,
    Permission,
    QuoteFields,
    RestoreRequestType,
    ServerSideEncryption,
    StorageClass,
    Tier,
    TransitionStorageClass,
);

/// Read an optional member.
pub fn member<T: FromXmlValue>(map: &XmlMap, name: &str) -> XmlResult<Option<T>> {
    map.get(name)
        .map(|value| T::from_xml_value(value, name))
        .transpose()
}

/// Read a member that defaults when absent.
pub fn member_or_default<T: FromXmlValue + Default>(map: &XmlMap, name: &str) -> XmlResult<T> {
    member(map, name).map(Option::unwrap_or_default)
}

/// Read a flattened collection whose `member` elements repeat directly in `map`.
pub fn flattened<T: FromXmlValue>(map: &XmlMap, member: &str) -> XmlResult<Option<Vec<T>>> {
    flattened_list(map, member)
        .map(|items| {
            items
                .into_iter()
                .map(|item| T::from_xml_value(item, member))
                .collect()
        })
        .transpose()
}

/// Read a wrapped collection of `member` elements inside `container`.
pub fn wrapped<T: FromXmlValue>(
    map: &XmlMap,
    container: &str,
    member: &str,
) -> XmlResult<Option<Vec<T>>> {
    wrapped_list(map, container, member)
        .map(|items| {
            items
                .into_iter()
                .map(|item| T::from_xml_value(item, member))
                .collect()
        })
        .transpose()
}

/// Builder helpers for optional members and collections.
pub trait XmlNodeExt {
    /// Append `<name>text</name>` when `value` is present.
    fn scalar<T: XmlText>(&mut self, name: &str, value: Option<&T>) -> &mut Self;

    /// Append a nested shape when present.
    fn shape<T: XmlSerialize>(&mut self, name: &str, value: Option<&T>) -> &mut Self;

    /// Append a flattened collection when present.
    fn flattened<T: XmlSerialize>(&mut self, member: &str, values: Option<&Vec<T>>) -> &mut Self;

    /// Append a wrapped collection when present. An empty collection still writes
    /// the container.
    fn wrapped<T: XmlSerialize>(
        &mut self,
        container: &str,
        member: &str,
        values: Option<&Vec<T>>,
    ) -> &mut Self;
}

impl XmlNodeExt for XmlNode {
    fn scalar<T: XmlText>(&mut self, name: &str, value: Option<&T>) -> &mut Self {
        self.add_text_child(name, value.map(XmlText::to_xml_text))
    }

    fn shape<T: XmlSerialize>(&mut self, name: &str, value: Option<&T>) -> &mut Self {
        if let Some(value) = value {
            self.add_child(value.to_xml_node(name));
        }
        self
    }

    fn flattened<T: XmlSerialize>(&mut self, member: &str, values: Option<&Vec<T>>) -> &mut Self {
        if let Some(values) = values {
            self.add_flattened(member, values.iter().map(|v| v.to_xml_node(member)));
        }
        self
    }

    fn wrapped<T: XmlSerialize>(
        &mut self,
        container: &str,
        member: &str,
        values: Option<&Vec<T>>,
    ) -> &mut Self {
        if let Some(values) = values {
            self.add_wrapped(container, values.iter().map(|v| v.to_xml_node(member)));
        }
        self
    }
}

/// A list of scalars serialized as repeated text elements.
impl<T: XmlText> XmlSerialize for T {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        XmlNode::of(name, self.to_xml_text())
    }
}
