//! Request serialization.

use http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use http::HeaderMap;
use tracing::debug;

use crate::descriptor::{BodyBinding, OperationDescriptor, QueryBinding};
use crate::encoding::{encode_greedy, extended_encode};
use crate::endpoint::EndpointResolver;
use crate::error::{ProtocolError, ProtocolResult};
use crate::wire::{HttpRequest, RequestBody};

/// Where the bucket name goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AddressingStyle {
    /// `/{Bucket}/{Key+}` on the endpoint host.
    #[default]
    Path,
    /// `{Bucket}.{host}` with the key in the path, for DNS-compatible bucket names.
    VirtualHosted,
}

/// Build the request for `input`.
///
/// Required path labels are checked first; a missing or empty one fails before the
/// endpoint resolver is called. Header, query and payload fields that are absent are
/// skipped.
pub async fn serialize_request<I, O>(
    descriptor: &OperationDescriptor<I, O>,
    mut input: I,
    resolver: &dyn EndpointResolver,
    style: AddressingStyle,
) -> ProtocolResult<HttpRequest> {
    let mut labels = Vec::with_capacity(descriptor.labels.len());
    for binding in descriptor.labels {
        let value = (binding.get)(&input);
        if value.is_empty() {
            return Err(ProtocolError::MissingLabel(binding.name));
        }
        labels.push((binding.name, value.to_owned()));
    }

    let mut headers = HeaderMap::new();
    for binding in descriptor.headers {
        if let Some(value) = (binding.get)(&input) {
            insert_header(&mut headers, binding.name, &value)?;
        }
    }
    if let Some(binding) = &descriptor.prefix_headers {
        let mut entries: Vec<_> = (binding.get)(&input).iter().collect();
        entries.sort();
        for (key, value) in entries {
            let name = format!("{}{}", binding.prefix, key.to_lowercase());
            insert_header(&mut headers, &name, value)?;
        }
    }
    if let Some(content_type) = descriptor.content_type {
        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
    }

    let mut query = Vec::with_capacity(descriptor.query.len());
    for binding in descriptor.query {
        match binding {
            QueryBinding::Static(key, value) => query.push(((*key).to_owned(), (*value).to_owned())),
            QueryBinding::Field { key, get } => {
                if let Some(value) = get(&input) {
                    query.push(((*key).to_owned(), value));
                }
            }
        }
    }

    let body = match &descriptor.body {
        BodyBinding::None => RequestBody::Empty,
        BodyBinding::Blob(take) => take(&mut input).map_or(RequestBody::Empty, RequestBody::Stream),
        BodyBinding::Text(take) => take(&mut input).map_or(RequestBody::Empty, RequestBody::Text),
        BodyBinding::Xml { root, build } => match build(&input) {
            Some(node) => RequestBody::Text(node.with_name(*root).into_document()?),
            None => RequestBody::Empty,
        },
    };

    let endpoint = resolver.resolve().await?;

    let mut template = descriptor.path.to_owned();
    let mut hostname = endpoint.hostname;
    if style == AddressingStyle::VirtualHosted {
        if let Some((_, bucket)) = labels.iter().find(|(name, _)| *name == "Bucket") {
            if is_virtual_hostable(bucket) {
                hostname = format!("{bucket}.{hostname}");
                template = template.replacen("/{Bucket}", "", 1);
            }
        }
    }

    for (name, value) in &labels {
        let greedy = format!("{{{name}+}}");
        if template.contains(&greedy) {
            template = template.replace(&greedy, &encode_greedy(value));
        } else {
            template = template.replace(&format!("{{{name}}}"), &extended_encode(value));
        }
    }
    if template.is_empty() {
        template.push('/');
    }
    let path = format!("{}{template}", endpoint.path);

    debug!(
        operation = %descriptor.operation,
        method = %descriptor.method,
        path = %path,
        "serialized request"
    );

    Ok(HttpRequest {
        protocol: endpoint.protocol,
        hostname,
        port: endpoint.port,
        method: descriptor.method.clone(),
        path,
        query,
        headers,
        body,
    })
}

fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) -> ProtocolResult<()> {
    let header_name =
        HeaderName::from_bytes(name.as_bytes()).map_err(|e| ProtocolError::InvalidHeader {
            name: name.to_owned(),
            reason: e.to_string(),
        })?;
    let header_value = HeaderValue::from_str(value).map_err(|e| ProtocolError::InvalidHeader {
        name: name.to_owned(),
        reason: e.to_string(),
    })?;
    headers.insert(header_name, header_value);
    Ok(())
}

/// 3 to 63 lowercase letters, digits and hyphens, starting and ending alphanumeric.
fn is_virtual_hostable(bucket: &str) -> bool {
    let bytes = bucket.as_bytes();
    (3..=63).contains(&bytes.len())
        && bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        && bytes.first().is_some_and(u8::is_ascii_alphanumeric)
        && bytes.last().is_some_and(u8::is_ascii_alphanumeric)
}
