//! Mutable XML element tree used to build request bodies.
//!
//! Shape serializers build a node under the shape's own type name and the caller
//! relabels it with [`XmlNode::with_name`] to the element name the enclosing field
//! expects. Attribute and child order is insertion order, never sorted.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::XmlResult;
use crate::value::XmlValue;

/// The S3 XML namespace.
pub const S3_NAMESPACE: &str = "http://s3.amazonaws.com/doc/2006-03-01/";

/// Declaration prefixed to every XML request body.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// A child of an [`XmlNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlChild {
    /// A nested element.
    Node(XmlNode),
    /// Character data, escaped on output.
    Text(String),
}

/// An XML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlChild>,
}

impl XmlNode {
    /// Create an empty element.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an element holding a single text child: `<name>text</name>`.
    #[must_use]
    pub fn of(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut node = Self::new(name);
        node.add_text(text);
        node
    }

    /// The element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[XmlChild] {
        &self.children
    }

    /// Set an attribute. Setting an existing key replaces its value in place.
    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
        self
    }

    /// Builder form of [`add_attribute`](Self::add_attribute).
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_attribute(key, value);
        self
    }

    /// Append a child element.
    pub fn add_child(&mut self, node: XmlNode) -> &mut Self {
        self.children.push(XmlChild::Node(node));
        self
    }

    /// Append a text child.
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.children.push(XmlChild::Text(text.into()));
        self
    }

    /// Append `<name>text</name>` when `text` is present.
    pub fn add_text_child<T: AsRef<str>>(&mut self, name: &str, text: Option<T>) -> &mut Self {
        if let Some(text) = text {
            self.add_child(Self::of(name, text.as_ref()));
        }
        self
    }

    /// Append a parsed value as `<name>` elements: text as a text child, a map as
    /// nested elements in document order, a list as repeated `<name>` siblings.
    ///
    /// Parsed attributes are merged into maps, so they come back as child elements.
    pub fn add_value(&mut self, name: &str, value: &XmlValue) -> &mut Self {
        match value {
            XmlValue::Text(text) => {
                self.add_child(Self::of(name, text.as_str()));
            }
            XmlValue::Map(map) => {
                let mut child = Self::new(name);
                for (key, entry) in map.iter() {
                    child.add_value(key, entry);
                }
                self.add_child(child);
            }
            XmlValue::List(items) => {
                for item in items {
                    self.add_value(name, item);
                }
            }
        }
        self
    }

    /// Relabel this element in place.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Relabel this element, keeping attributes and children.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.rename(name);
        self
    }

    /// Append a flattened collection: every member becomes a direct child named
    /// `member`.
    pub fn add_flattened<I>(&mut self, member: &str, nodes: I) -> &mut Self
    where
        I: IntoIterator<Item = XmlNode>,
    {
        for node in nodes {
            self.add_child(node.with_name(member));
        }
        self
    }

    /// Append a wrapped collection: a `container` element holding the members
    /// under their own names.
    pub fn add_wrapped<I>(&mut self, container: &str, nodes: I) -> &mut Self
    where
        I: IntoIterator<Item = XmlNode>,
    {
        let mut wrapper = Self::new(container);
        for node in nodes {
            wrapper.add_child(node);
        }
        self.add_child(wrapper)
    }

    /// Write this element and its subtree.
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() {
            return writer.write_event(Event::Empty(start));
        }

        writer.write_event(Event::Start(start))?;
        for child in &self.children {
            match child {
                XmlChild::Node(node) => node.write_to(writer)?,
                XmlChild::Text(text) => {
                    let escaped = escape_element(text);
                    writer.write_event(Event::Text(BytesText::from_escaped(escaped.as_str())))?;
                }
            }
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))
    }

    /// Serialize this element without a declaration.
    pub fn to_xml_string(&self) -> XmlResult<String> {
        let mut buf = Vec::with_capacity(256);
        let mut writer = Writer::new(&mut buf);
        self.write_to(&mut writer)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Serialize as a request body document: the XML declaration followed by this
    /// element carrying the S3 namespace.
    pub fn into_document(self) -> XmlResult<String> {
        let root = self.with_attribute("xmlns", S3_NAMESPACE);

        let mut buf = Vec::with_capacity(512);
        let mut writer = Writer::new(&mut buf);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        root.write_to(&mut writer)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Escape element text. Line terminators are written as character references.
fn escape_element(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' => out.push_str("&#x0D;"),
            '\n' => out.push_str("&#x0A;"),
            '\u{0085}' => out.push_str("&#x85;"),
            '\u{2028}' => out.push_str("&#x2028;"),
            _ => out.push(c),
        }
    }
    out
}
