//! XML layer for the S3 REST+XML protocol.
//!
//! This crate is model-agnostic. It provides the two halves of the XML wire format:
//!
//! - [`XmlNode`]: a mutable element tree with ordered attributes and children that
//!   serializes to XML text. Request bodies are built with it.
//! - [`parse_body`]: parses a response body into an [`XmlMap`] of tag name to
//!   [`XmlValue`], merging attributes alongside children and hoisting text content.
//!
//! # S3 XML conventions
//!
//! - Namespace: `http://s3.amazonaws.com/doc/2006-03-01/`
//! - XML declaration: `<?xml version="1.0" encoding="UTF-8"?>`
//! - A repeated child element parses into [`XmlValue::List`]; a single occurrence
//!   stays scalar. Use [`flattened_list`] and [`wrapped_list`] to read collections.

pub mod error;
pub mod node;
pub mod parse;
pub mod value;

pub use error::{XmlError, XmlResult};
pub use node::{S3_NAMESPACE, XML_DECLARATION, XmlChild, XmlNode};
pub use parse::parse_body;
pub use value::{XmlMap, XmlValue, flattened_list, wrapped_list};
