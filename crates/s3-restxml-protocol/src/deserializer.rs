//! Response deserialization.

use s3_restxml_model::output::S3Output;
use s3_restxml_xml::parse_body;
use tracing::debug;

use crate::descriptor::{OperationDescriptor, OutputBinding};
use crate::error::{ProtocolError, ProtocolResult};
use crate::error_classifier::{classify_error, response_metadata};
use crate::wire::HttpResponse;

/// Turn a response into the operation output, or into a classified service error.
///
/// Success is decided from the status code alone. Response metadata is attached to
/// both outcomes.
pub async fn deserialize_response<I, O>(
    descriptor: &OperationDescriptor<I, O>,
    response: HttpResponse,
) -> ProtocolResult<O>
where
    O: S3Output,
{
    let metadata = response_metadata(&response);
    debug!(
        operation = %descriptor.operation,
        status = response.status,
        "classifying response"
    );

    if !descriptor.is_success(response.status) {
        let err = classify_error(descriptor.errors, response, metadata).await?;
        return Err(ProtocolError::Service(err));
    }

    let HttpResponse { headers, body, .. } = response;
    let mut output = O::default();
    output.set_response_metadata(metadata);

    for binding in descriptor.output_headers {
        let Some(raw) = headers.get(binding.name) else {
            continue;
        };
        let value = raw.to_str().map_err(|e| ProtocolError::InvalidHeaderValue {
            name: binding.name,
            value: String::from_utf8_lossy(raw.as_bytes()).into_owned(),
            reason: e.to_string(),
        })?;
        (binding.set)(&mut output, value).map_err(|reason| ProtocolError::InvalidHeaderValue {
            name: binding.name,
            value: value.to_owned(),
            reason,
        })?;
    }

    if let Some(binding) = &descriptor.output_prefix_headers {
        let map = (binding.get_mut)(&mut output);
        for (name, value) in &headers {
            let Some(key) = name.as_str().strip_prefix(binding.prefix) else {
                continue;
            };
            if let Ok(value) = value.to_str() {
                map.insert(key.to_owned(), value.to_owned());
            }
        }
    }

    match &descriptor.output_body {
        OutputBinding::Discard => {
            body.collect().await.map_err(ProtocolError::Body)?;
        }
        OutputBinding::Stream(set) => set(&mut output, body),
        OutputBinding::Text(set) => {
            let bytes = body.collect().await.map_err(ProtocolError::Body)?;
            set(&mut output, String::from_utf8(bytes.to_vec())?);
        }
        OutputBinding::Xml(read) => {
            let bytes = body.collect().await.map_err(ProtocolError::Body)?;
            let map = parse_body(&bytes)?;
            read(&mut output, &map)?;
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use http::{HeaderMap, HeaderValue};
    use s3_restxml_model::enums::{
        ObjectLockLegalHoldStatus, ObjectLockMode, ServerSideEncryption, StorageClass,
    };
    use s3_restxml_model::{ByteStream, S3ErrorKind};

    use super::*;
    use crate::descriptor::Operation;
    use crate::operations::{GetBucketPolicy, GetObject, HeadObject, ListBuckets, PutObject};

    fn response(
        status: u16,
        headers: &[(&'static str, &'static str)],
        body: &'static str,
    ) -> HttpResponse {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            map.insert(*name, HeaderValue::from_static(*value));
        }
        HttpResponse::new(status, map, ByteStream::from(body))
    }

    #[tokio::test]
    async fn test_should_read_headers_metadata_and_stream() {
        let resp = response(
            200,
            &[
                ("content-length", "5"),
                ("etag", "\"abc\""),
                ("last-modified", "Wed, 01 May 2024 12:00:00 GMT"),
                ("x-amz-storage-class", "STANDARD_IA"),
                ("x-amz-meta-color", "blue"),
                ("x-amz-request-id", "req-9"),
            ],
            "hello",
        );
        let out = deserialize_response(GetObject::descriptor(), resp).await.unwrap();

        assert_eq!(out.content_length, Some(5));
        assert_eq!(out.e_tag.as_deref(), Some("\"abc\""));
        assert_eq!(
            out.last_modified.map(|t| t.to_rfc3339()).as_deref(),
            Some("2024-05-01T12:00:00+00:00")
        );
        assert_eq!(out.storage_class, Some(StorageClass::StandardIa));
        assert_eq!(out.metadata.get("color").map(String::as_str), Some("blue"));
        assert_eq!(out.response_metadata.request_id.as_deref(), Some("req-9"));
        assert_eq!(out.response_metadata.http_status_code, Some(200));
        assert_eq!(&out.body.collect().await.unwrap()[..], b"hello");
    }

    #[tokio::test]
    async fn test_should_fill_header_groups() {
        let resp = response(
            200,
            &[
                ("content-type", "text/csv"),
                ("content-encoding", "gzip"),
                ("x-amz-server-side-encryption", "aws:kms"),
                ("x-amz-server-side-encryption-aws-kms-key-id", "alias/logs"),
                ("x-amz-server-side-encryption-customer-key-MD5", "bWQ1"),
                ("x-amz-checksum-crc32", "AAAAAA=="),
                ("x-amz-object-lock-mode", "COMPLIANCE"),
                ("x-amz-object-lock-retain-until-date", "2030-01-01T00:00:00.000Z"),
                ("x-amz-object-lock-legal-hold", "ON"),
            ],
            "",
        );
        let out = deserialize_response(HeadObject::descriptor(), resp).await.unwrap();

        assert_eq!(out.content.content_type.as_deref(), Some("text/csv"));
        assert_eq!(out.content.content_encoding.as_deref(), Some("gzip"));
        assert!(out.content.cache_control.is_none());
        assert_eq!(
            out.encryption.server_side_encryption,
            Some(ServerSideEncryption::AwsKms)
        );
        assert_eq!(out.encryption.ssekms_key_id.as_deref(), Some("alias/logs"));
        assert_eq!(out.customer_key.key_md5.as_deref(), Some("bWQ1"));
        assert!(out.customer_key.key.is_none());
        assert_eq!(out.checksum.crc32.as_deref(), Some("AAAAAA=="));
        assert!(out.checksum.sha256.is_none());
        assert_eq!(out.object_lock.mode, Some(ObjectLockMode::Compliance));
        assert_eq!(
            out.object_lock.retain_until_date.map(|t| t.to_rfc3339()).as_deref(),
            Some("2030-01-01T00:00:00+00:00")
        );
        assert_eq!(
            out.object_lock.legal_hold_status,
            Some(ObjectLockLegalHoldStatus::On)
        );
    }

    #[tokio::test]
    async fn test_should_reject_uncoercible_header() {
        let resp = response(200, &[("content-length", "many")], "");
        let err = deserialize_response(GetObject::descriptor(), resp)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::InvalidHeaderValue { name: "Content-Length", .. }
        ));
    }

    #[tokio::test]
    async fn test_should_read_text_payload() {
        let resp = response(200, &[], r#"{"Version":"2012-10-17"}"#);
        let out = deserialize_response(GetBucketPolicy::descriptor(), resp)
            .await
            .unwrap();
        assert_eq!(out.policy.as_deref(), Some(r#"{"Version":"2012-10-17"}"#));
    }

    #[tokio::test]
    async fn test_should_discard_body_of_header_only_output() {
        let resp = response(200, &[("etag", "\"e\"")], "ignored");
        let out = deserialize_response(PutObject::descriptor(), resp).await.unwrap();
        assert_eq!(out.e_tag.as_deref(), Some("\"e\""));
    }

    #[tokio::test]
    async fn test_should_fail_on_malformed_xml_payload() {
        let resp = response(200, &[], "<ListAllMyBucketsResult><Buckets>");
        let err = deserialize_response(ListBuckets::descriptor(), resp)
            .await
            .unwrap_err();
        assert!(matches!(err, ProtocolError::Xml(_)));
    }

    #[tokio::test]
    async fn test_should_treat_unlisted_status_as_error() {
        let resp = response(304, &[("x-amz-request-id", "req-3")], "");
        let err = deserialize_response(GetObject::descriptor(), resp)
            .await
            .unwrap_err();
        let service = err.service_error().unwrap();
        assert_eq!(service.kind, S3ErrorKind::Unhandled);
        assert_eq!(service.code, "304");
        assert_eq!(service.metadata.request_id.as_deref(), Some("req-3"));
    }

    #[tokio::test]
    async fn test_should_classify_modeled_error() {
        let resp = response(
            404,
            &[],
            "<Error><Code>NoSuchKey</Code><Message>The specified key does not exist.</Message></Error>",
        );
        let err = deserialize_response(GetObject::descriptor(), resp)
            .await
            .unwrap_err();
        let service = err.service_error().unwrap();
        assert_eq!(service.kind, S3ErrorKind::NoSuchKey);
        assert_eq!(service.message, "The specified key does not exist.");
    }
}
