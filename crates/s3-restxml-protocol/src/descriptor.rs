//! Declarative operation descriptors.
//!
//! Each S3 operation is described once by a `static` [`OperationDescriptor`]: its HTTP
//! method, path template, how every input field binds to the request, how the
//! response fills the output, and which error shapes it models. The serializer and
//! deserializer are generic engines driven by these tables.

use std::collections::HashMap;
use std::fmt;

use http::Method;
use s3_restxml_model::output::S3Output;
use s3_restxml_model::{ByteStream, S3ErrorKind, S3Operation};
use s3_restxml_xml::{XmlMap, XmlNode, XmlResult};

/// A zero-sized marker type naming one S3 operation.
pub trait Operation: Send + Sync + 'static {
    /// Operation input.
    type Input: Send + 'static;
    /// Operation output.
    type Output: S3Output + Send + 'static;

    /// The static descriptor of this operation.
    fn descriptor() -> &'static OperationDescriptor<Self::Input, Self::Output>;
}

/// A path label: `{Bucket}` or the greedy `{Key+}`.
pub struct LabelBinding<I> {
    /// Label name as written in the path template.
    pub name: &'static str,
    /// Read the label value. An empty value counts as missing.
    pub get: fn(&I) -> &str,
}

/// A header set from one input field.
pub struct HeaderBinding<I> {
    /// Header name.
    pub name: &'static str,
    /// The header value, or `None` to omit the header.
    pub get: fn(&I) -> Option<String>,
}

/// A map field expanded into one header per entry.
pub struct PrefixHeaderBinding<I> {
    /// Header name prefix, e.g. `x-amz-meta-`.
    pub prefix: &'static str,
    /// Read the map.
    pub get: fn(&I) -> &HashMap<String, String>,
}

/// A query parameter.
pub enum QueryBinding<I> {
    /// Always present, e.g. the `tagging` sub-resource or `x-id=GetObject`.
    Static(&'static str, &'static str),
    /// Set from an input field when present.
    Field {
        /// Query key.
        key: &'static str,
        /// The value, or `None` to omit the parameter.
        get: fn(&I) -> Option<String>,
    },
}

/// The request payload.
pub enum BodyBinding<I> {
    /// No payload.
    None,
    /// Raw bytes taken from the input.
    Blob(fn(&mut I) -> Option<ByteStream>),
    /// A raw string taken from the input.
    Text(fn(&mut I) -> Option<String>),
    /// A structured payload serialized as an XML document.
    Xml {
        /// Name of the document root element.
        root: &'static str,
        /// Build the payload element, or `None` when the payload field is absent.
        build: fn(&I) -> Option<XmlNode>,
    },
}

/// A response header read into one output field.
pub struct OutputHeaderBinding<O> {
    /// Header name, matched case-insensitively.
    pub name: &'static str,
    /// Coerce and store the value. The error is a human-readable reason.
    pub set: fn(&mut O, &str) -> Result<(), String>,
}

/// Response headers with a common prefix collected into a map field.
pub struct OutputPrefixHeaderBinding<O> {
    /// Header name prefix, stripped from the map keys.
    pub prefix: &'static str,
    /// The map to fill.
    pub get_mut: fn(&mut O) -> &mut HashMap<String, String>,
}

/// How the response body fills the output.
pub enum OutputBinding<O> {
    /// Drain and discard the body.
    Discard,
    /// Hand the body over unconsumed.
    Stream(fn(&mut O, ByteStream)),
    /// Read the body as UTF-8 text.
    Text(fn(&mut O, String)),
    /// Parse the body as XML and map its children.
    Xml(fn(&mut O, &XmlMap) -> XmlResult<()>),
}

/// A modeled error shape.
#[derive(Debug, Clone, Copy)]
pub struct ErrorShape {
    /// Error code as sent by the service.
    pub code: &'static str,
    /// Read the error's own members from the parsed error body.
    pub build: fn(&XmlMap) -> S3ErrorKind,
}

impl ErrorShape {
    /// True when `code` names this shape, plainly or with the `com.amazonaws.s3#`
    /// prefix.
    #[must_use]
    pub fn matches(&self, code: &str) -> bool {
        code == self.code || code.strip_prefix("com.amazonaws.s3#") == Some(self.code)
    }
}

/// Everything needed to serialize a request and deserialize its response.
pub struct OperationDescriptor<I: 'static, O: 'static> {
    /// Operation name.
    pub operation: S3Operation,
    /// HTTP method.
    pub method: Method,
    /// Path template, e.g. `/{Bucket}/{Key+}`.
    pub path: &'static str,
    /// Path labels.
    pub labels: &'static [LabelBinding<I>],
    /// Headers, in emission order.
    pub headers: &'static [HeaderBinding<I>],
    /// Map field expanded into prefixed headers.
    pub prefix_headers: Option<PrefixHeaderBinding<I>>,
    /// Query parameters, in emission order.
    pub query: &'static [QueryBinding<I>],
    /// Request payload.
    pub body: BodyBinding<I>,
    /// Default `content-type`, used unless a header binding already set one.
    pub content_type: Option<&'static str>,
    /// Status codes accepted as success besides `< 300`.
    pub success: &'static [u16],
    /// Response headers.
    pub output_headers: &'static [OutputHeaderBinding<O>],
    /// Response headers collected into a map.
    pub output_prefix_headers: Option<OutputPrefixHeaderBinding<O>>,
    /// Response payload.
    pub output_body: OutputBinding<O>,
    /// Modeled errors.
    pub errors: &'static [ErrorShape],
}

impl<I, O> OperationDescriptor<I, O> {
    /// True when `status` is a success for this operation.
    #[must_use]
    pub fn is_success(&self, status: u16) -> bool {
        status < 300 || self.success.contains(&status)
    }

    /// The modeled error shape for `code`, if any.
    #[must_use]
    pub fn error_shape(&self, code: &str) -> Option<&'static ErrorShape> {
        self.errors.iter().find(|shape| shape.matches(code))
    }
}

impl<I> fmt::Debug for LabelBinding<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LabelBinding").field(&self.name).finish()
    }
}

impl<I> fmt::Debug for HeaderBinding<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HeaderBinding").field(&self.name).finish()
    }
}

impl<I> fmt::Debug for PrefixHeaderBinding<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrefixHeaderBinding")
            .field(&self.prefix)
            .finish()
    }
}

impl<I> fmt::Debug for QueryBinding<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(key, value) => f.debug_tuple("Static").field(key).field(value).finish(),
            Self::Field { key, .. } => f.debug_tuple("Field").field(key).finish(),
        }
    }
}

impl<I> fmt::Debug for BodyBinding<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Blob(_) => f.write_str("Blob"),
            Self::Text(_) => f.write_str("Text"),
            Self::Xml { root, .. } => f.debug_tuple("Xml").field(root).finish(),
        }
    }
}

impl<O> fmt::Debug for OutputHeaderBinding<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OutputHeaderBinding")
            .field(&self.name)
            .finish()
    }
}

impl<O> fmt::Debug for OutputPrefixHeaderBinding<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OutputPrefixHeaderBinding")
            .field(&self.prefix)
            .finish()
    }
}

impl<O> fmt::Debug for OutputBinding<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Discard => "Discard",
            Self::Stream(_) => "Stream",
            Self::Text(_) => "Text",
            Self::Xml(_) => "Xml",
        })
    }
}

impl<I, O> fmt::Debug for OperationDescriptor<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationDescriptor")
            .field("operation", &self.operation)
            .field("method", &self.method)
            .field("path", &self.path)
            .field("errors", &self.errors.iter().map(|e| e.code).collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Header binding for a field implementing [`HttpField`](crate::headers::HttpField).
///
/// The field may be a path into a header group, e.g. `customer_key.algorithm`.
macro_rules! header {
    ($name:literal, $($field:ident).+) => {
        $crate::descriptor::HeaderBinding {
            name: $name,
            get: |i| $crate::headers::HttpField::header_value(&i.$($field).+),
        }
    };
}

/// Header binding for a timestamp field sent as ISO 8601.
macro_rules! header_iso8601 {
    ($name:literal, $($field:ident).+) => {
        $crate::descriptor::HeaderBinding {
            name: $name,
            get: |i| i.$($field).+.as_ref().map($crate::timestamp::format_iso8601),
        }
    };
}

/// Query binding for a field implementing [`HttpField`](crate::headers::HttpField).
macro_rules! query {
    ($key:literal, $($field:ident).+) => {
        $crate::descriptor::QueryBinding::Field {
            key: $key,
            get: |i| $crate::headers::HttpField::query_value(&i.$($field).+),
        }
    };
}

/// Path label binding for a `String` field.
macro_rules! label {
    ($name:literal, $field:ident) => {
        $crate::descriptor::LabelBinding {
            name: $name,
            get: |i| i.$field.as_str(),
        }
    };
}

/// Output header binding for an `Option<T: HttpValue>` field.
macro_rules! out_header {
    ($name:literal, $($field:ident).+) => {
        $crate::descriptor::OutputHeaderBinding {
            name: $name,
            set: |o, v| {
                o.$($field).+ = Some($crate::headers::HttpValue::from_http_value(v)?);
                Ok(())
            },
        }
    };
}

/// Output header binding for an `Option<DateTime>` field sent as ISO 8601.
macro_rules! out_header_iso8601 {
    ($name:literal, $($field:ident).+) => {
        $crate::descriptor::OutputHeaderBinding {
            name: $name,
            set: |o, v| {
                o.$($field).+ = Some($crate::timestamp::parse_iso8601(v).map_err(|e| e.to_string())?);
                Ok(())
            },
        }
    };
}

pub(crate) use {header, header_iso8601, label, out_header, out_header_iso8601, query};
