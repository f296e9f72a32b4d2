//! XML body parsing into [`XmlMap`] trees.
//!
//! The tree shape follows these rules:
//!
//! - The document root is stripped; its children and attributes form the returned map.
//!   A root holding only text returns `{root_name: text}`. An empty body returns an
//!   empty map.
//! - Attributes are merged alongside child elements under their qualified name
//!   (`xsi:type`, `xmlns`).
//! - An element holding only text becomes that text, even when it carries attributes.
//!   An empty element becomes `Text("")`.
//! - Text wins over structure: an element mixing child elements with non-blank text
//!   becomes that text, and its children and attributes are dropped.
//! - Whitespace-only text containing a newline is treated as empty. Other text is kept
//!   untrimmed.
//! - A tag repeated under one parent becomes a list; a single occurrence stays scalar.
//! - Entity and character references are unescaped in text and attribute values.

use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};

use crate::error::{XmlError, XmlResult};
use crate::value::{XmlMap, XmlValue};

/// Parse a UTF-8 XML response body.
pub fn parse_body(body: &[u8]) -> XmlResult<XmlMap> {
    let text = std::str::from_utf8(body)?;
    parse_str(text)
}

/// Parse XML text. See the module docs for the resulting tree shape.
pub fn parse_str(text: &str) -> XmlResult<XmlMap> {
    if text.trim().is_empty() {
        return Ok(XmlMap::new());
    }

    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<(String, XmlValue)> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => stack.push(Frame::open(&e)?),
            Event::Empty(e) => {
                let (name, value) = Frame::open(&e)?.close();
                attach(&mut stack, &mut root, name, value);
            }
            Event::End(_) => {
                let frame = stack
                    .pop()
                    .ok_or_else(|| XmlError::Unbalanced("closing tag without element".to_owned()))?;
                let (name, value) = frame.close();
                attach(&mut stack, &mut root, name, value);
            }
            Event::Text(e) => {
                if let Some(top) = stack.last_mut() {
                    let decoded = e.decode().map_err(|err| XmlError::parse(&top.name, err))?;
                    let unescaped =
                        unescape(&decoded).map_err(|err| XmlError::parse(&top.name, err))?;
                    top.text.push_str(&unescaped);
                }
            }
            Event::CData(e) => {
                if let Some(top) = stack.last_mut() {
                    let decoded = e.decode().map_err(|err| XmlError::parse(&top.name, err))?;
                    top.text.push_str(&decoded);
                }
            }
            Event::GeneralRef(r) => {
                if let Some(top) = stack.last_mut() {
                    let name = r.decode().map_err(|err| XmlError::parse(&top.name, err))?;
                    let entity = format!("&{name};");
                    let resolved =
                        unescape(&entity).map_err(|err| XmlError::parse(&top.name, err))?;
                    top.text.push_str(&resolved);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::Unbalanced(format!(
            "document ended inside <{}>",
            open.name
        )));
    }

    let map = match root {
        None => XmlMap::new(),
        Some((_, XmlValue::Map(map))) => map,
        Some((name, value)) => [(name, value)].into_iter().collect(),
    };
    tracing::trace!(entries = map.len(), "parsed XML body");
    Ok(map)
}

fn attach(
    stack: &mut [Frame],
    root: &mut Option<(String, XmlValue)>,
    name: String,
    value: XmlValue,
) {
    match stack.last_mut() {
        Some(parent) => {
            parent.children += 1;
            parent.map.insert(name, value);
        }
        None => {
            if root.is_none() {
                *root = Some((name, value));
            }
        }
    }
}

/// An element being assembled.
struct Frame {
    name: String,
    map: XmlMap,
    text: String,
    children: usize,
}

impl Frame {
    fn open(start: &BytesStart<'_>) -> XmlResult<Self> {
        let name = std::str::from_utf8(start.name().as_ref())?.to_owned();
        let mut map = XmlMap::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())?;
            let raw = std::str::from_utf8(&attr.value)?;
            let value = unescape(raw).map_err(|err| XmlError::parse(&name, err))?;
            map.insert(key, XmlValue::Text(value.into_owned()));
        }
        Ok(Self {
            name,
            map,
            text: String::new(),
            children: 0,
        })
    }

    fn close(self) -> (String, XmlValue) {
        let blank = self.text.trim().is_empty();
        let text = if blank && self.text.contains('\n') {
            String::new()
        } else {
            self.text
        };

        let value = if self.children > 0 {
            if blank {
                XmlValue::Map(self.map)
            } else {
                tracing::debug!(
                    element = %self.name,
                    dropped = self.children,
                    "mixed content, keeping text only"
                );
                XmlValue::Text(text)
            }
        } else if self.map.is_empty() || !text.is_empty() {
            XmlValue::Text(text)
        } else {
            XmlValue::Map(self.map)
        };
        (self.name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> XmlValue {
        XmlValue::Text(s.to_owned())
    }

    #[test]
    fn test_should_strip_root_and_keep_document_order() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>bucket</Name>
  <Prefix></Prefix>
  <KeyCount>1</KeyCount>
</ListBucketResult>"#;
        let map = parse_str(xml).expect("parse");

        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["xmlns", "Name", "Prefix", "KeyCount"]);
        assert_eq!(map.text("Name"), Some("bucket"));
        assert_eq!(map.get("Prefix"), Some(&text("")));
    }

    #[test]
    fn test_should_collapse_single_child_and_list_repeated_children() {
        let one = parse_str("<R><Contents><Key>a</Key></Contents></R>").expect("parse");
        assert!(matches!(one.get("Contents"), Some(XmlValue::Map(_))));

        let many =
            parse_str("<R><Contents><Key>a</Key></Contents><Contents><Key>b</Key></Contents></R>")
                .expect("parse");
        match many.get("Contents") {
            Some(XmlValue::List(items)) => assert_eq!(items.len(), 2),
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_should_merge_attributes_alongside_children() {
        let xml = r#"<Grant><Grantee xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:type="CanonicalUser"><ID>abc</ID></Grantee></Grant>"#;
        let map = parse_str(xml).expect("parse");
        let grantee = map.map("Grantee").expect("grantee");
        assert_eq!(grantee.text("xsi:type"), Some("CanonicalUser"));
        assert_eq!(grantee.text("ID"), Some("abc"));
    }

    #[test]
    fn test_should_hoist_text_of_element_with_attributes() {
        let xml = r#"<LocationConstraint xmlns="http://s3.amazonaws.com/doc/2006-03-01/">eu-west-1</LocationConstraint>"#;
        let map = parse_str(xml).expect("parse");
        assert_eq!(map.text("LocationConstraint"), Some("eu-west-1"));
    }

    #[test]
    fn test_should_treat_newline_whitespace_as_empty() {
        let map = parse_str("<R><A>\n   </A><B>  </B><C> x </C></R>").expect("parse");
        assert_eq!(map.get("A"), Some(&text("")));
        assert_eq!(map.get("B"), Some(&text("  ")));
        assert_eq!(map.get("C"), Some(&text(" x ")));
    }

    #[test]
    fn test_should_keep_text_of_mixed_content() {
        let map = parse_str("<R><Note>see <B>bold</B> here</Note><Plain><A>1</A></Plain></R>")
            .expect("parse");
        assert_eq!(map.get("Note"), Some(&text("see  here")));
        assert_eq!(map.map("Plain").and_then(|m| m.text("A")), Some("1"));
    }

    #[test]
    fn test_should_unescape_entities() {
        let map = parse_str("<R><Key>a &amp; b &lt;c&gt; &#x41;</Key></R>").expect("parse");
        assert_eq!(map.text("Key"), Some("a & b <c> A"));
    }

    #[test]
    fn test_should_return_empty_map_for_empty_body() {
        assert!(parse_body(b"").expect("parse").is_empty());
        assert!(parse_body(b"  \n").expect("parse").is_empty());
    }

    #[test]
    fn test_should_reject_truncated_document() {
        let err = parse_str("<R><A>x</A>").expect_err("truncated");
        assert!(matches!(err, XmlError::Unbalanced(_)), "{err}");
    }

    #[test]
    fn test_should_reject_invalid_utf8() {
        let err = parse_body(&[0x3c, 0xff, 0xfe]).expect_err("invalid utf-8");
        assert!(matches!(err, XmlError::Utf8(_)));
    }
}
