//! Service error classification.
//!
//! A failed response is turned into an [`S3Error`]: the body is parsed once, an error
//! code is derived, and the operation's modeled error shapes are consulted. Codes the
//! operation does not model become a generic error named by the code the service sent.

use s3_restxml_model::enums::{IntelligentTieringAccessTier, StorageClass};
use s3_restxml_model::{ResponseMetadata, S3Error, S3ErrorKind};
use s3_restxml_xml::{XmlMap, parse_body};
use tracing::warn;

use crate::descriptor::ErrorShape;
use crate::error::{ProtocolError, ProtocolResult};
use crate::wire::HttpResponse;

/// `BucketAlreadyExists`.
pub const BUCKET_ALREADY_EXISTS: ErrorShape = ErrorShape {
    code: "BucketAlreadyExists",
    build: |_| S3ErrorKind::BucketAlreadyExists,
};

/// `BucketAlreadyOwnedByYou`.
pub const BUCKET_ALREADY_OWNED_BY_YOU: ErrorShape = ErrorShape {
    code: "BucketAlreadyOwnedByYou",
    build: |_| S3ErrorKind::BucketAlreadyOwnedByYou,
};

/// `InvalidObjectState`, carrying the storage class and access tier of the archived
/// object.
pub const INVALID_OBJECT_STATE: ErrorShape = ErrorShape {
    code: "InvalidObjectState",
    build: |data| S3ErrorKind::InvalidObjectState {
        storage_class: data.text("StorageClass").map(StorageClass::from),
        access_tier: data.text("AccessTier").map(IntelligentTieringAccessTier::from),
    },
};

/// `NoSuchBucket`.
pub const NO_SUCH_BUCKET: ErrorShape = ErrorShape {
    code: "NoSuchBucket",
    build: |_| S3ErrorKind::NoSuchBucket,
};

/// `NoSuchKey`.
pub const NO_SUCH_KEY: ErrorShape = ErrorShape {
    code: "NoSuchKey",
    build: |_| S3ErrorKind::NoSuchKey,
};

/// `NoSuchUpload`.
pub const NO_SUCH_UPLOAD: ErrorShape = ErrorShape {
    code: "NoSuchUpload",
    build: |_| S3ErrorKind::NoSuchUpload,
};

/// `NotFound`, the code derived for a 404 without an error body.
pub const NOT_FOUND: ErrorShape = ErrorShape {
    code: "NotFound",
    build: |_| S3ErrorKind::NotFound,
};

/// `ObjectAlreadyInActiveTierError`.
pub const OBJECT_ALREADY_IN_ACTIVE_TIER: ErrorShape = ErrorShape {
    code: "ObjectAlreadyInActiveTierError",
    build: |_| S3ErrorKind::ObjectAlreadyInActiveTierError,
};

/// `ObjectNotInActiveTierError`.
pub const OBJECT_NOT_IN_ACTIVE_TIER: ErrorShape = ErrorShape {
    code: "ObjectNotInActiveTierError",
    build: |_| S3ErrorKind::ObjectNotInActiveTierError,
};

/// Read the metadata every response carries.
#[must_use]
pub fn response_metadata(response: &HttpResponse) -> ResponseMetadata {
    let header = |name: &str| response.header(name).map(str::to_owned);
    ResponseMetadata {
        http_status_code: Some(response.status),
        request_id: header("x-amzn-requestid")
            .or_else(|| header("x-amzn-request-id"))
            .or_else(|| header("x-amz-request-id")),
        extended_request_id: header("x-amz-id-2"),
        cf_id: header("x-amz-cf-id"),
    }
}

/// Classify a failed response. The body is drained; only a failure to read it is
/// returned as an error of its own.
pub async fn classify_error(
    errors: &[ErrorShape],
    response: HttpResponse,
    metadata: ResponseMetadata,
) -> ProtocolResult<S3Error> {
    let status = response.status;
    let body = response.body.collect().await.map_err(ProtocolError::Body)?;

    let parsed = if body.is_empty() {
        XmlMap::new()
    } else {
        parse_body(&body).unwrap_or_else(|err| {
            warn!(status, error = %err, "error response body is not XML");
            XmlMap::new()
        })
    };
    let data = parsed.map("Error").unwrap_or(&parsed);

    let code = match data.text("Code") {
        Some(code) => code.to_owned(),
        None if status == 404 => NOT_FOUND.code.to_owned(),
        None => String::new(),
    };

    Ok(build_error(errors, &code, data, Some(status), metadata))
}

/// Build the error for `code` from the error members in `data`.
pub(crate) fn build_error(
    errors: &[ErrorShape],
    code: &str,
    data: &XmlMap,
    status: Option<u16>,
    metadata: ResponseMetadata,
) -> S3Error {
    let message = data
        .text("message")
        .or_else(|| data.text("Message"))
        .map(str::to_owned);

    if let Some(shape) = errors.iter().find(|shape| shape.matches(code)) {
        return S3Error::new((shape.build)(data), shape.code, message).with_metadata(metadata);
    }

    let name = data
        .text("code")
        .or_else(|| data.text("Code"))
        .filter(|c| !c.is_empty())
        .map(str::to_owned)
        .or_else(|| (!code.is_empty()).then(|| code.to_owned()))
        .or_else(|| status.map(|s| s.to_string()))
        .unwrap_or_else(|| "UnknownError".to_owned());

    S3Error::new(S3ErrorKind::Unhandled, name, message).with_metadata(metadata)
}

#[cfg(test)]
mod tests {
    use http::HeaderMap;
    use s3_restxml_model::ByteStream;

    use super::*;

    fn response(status: u16, body: &'static str) -> HttpResponse {
        let mut headers = HeaderMap::new();
        headers.insert("x-amz-request-id", "req-123".parse().unwrap());
        headers.insert("x-amz-id-2", "ext-456".parse().unwrap());
        HttpResponse::new(status, headers, ByteStream::from(body))
    }

    async fn classify(errors: &[ErrorShape], status: u16, body: &'static str) -> S3Error {
        let response = response(status, body);
        let metadata = response_metadata(&response);
        classify_error(errors, response, metadata).await.unwrap()
    }

    #[test]
    fn test_should_read_response_metadata() {
        let mut resp = response(200, "");
        resp.headers
            .insert("x-amzn-requestid", "first".parse().unwrap());
        let metadata = response_metadata(&resp);
        assert_eq!(metadata.http_status_code, Some(200));
        assert_eq!(metadata.request_id.as_deref(), Some("first"));
        assert_eq!(metadata.extended_request_id.as_deref(), Some("ext-456"));
        assert_eq!(metadata.cf_id, None);
    }

    #[tokio::test]
    async fn test_should_classify_modeled_error() {
        let err = classify(
            &[NO_SUCH_KEY],
            404,
            "<Error><Code>NoSuchKey</Code><Message>The specified key does not exist.</Message></Error>",
        )
        .await;
        assert_eq!(err.kind, S3ErrorKind::NoSuchKey);
        assert_eq!(err.code, "NoSuchKey");
        assert_eq!(err.message, "The specified key does not exist.");
        assert_eq!(err.request_id(), Some("req-123"));
        assert_eq!(err.metadata.http_status_code, Some(404));
    }

    #[tokio::test]
    async fn test_should_classify_not_found_without_body() {
        let err = classify(&[NOT_FOUND], 404, "").await;
        assert_eq!(err.kind, S3ErrorKind::NotFound);
        assert_eq!(err.message, "NotFound");
    }

    #[tokio::test]
    async fn test_should_fall_back_to_generic_error() {
        let err = classify(
            &[NO_SUCH_KEY],
            503,
            "<Error><Code>SlowDown</Code><Message>Reduce your request rate.</Message></Error>",
        )
        .await;
        assert_eq!(err.kind, S3ErrorKind::Unhandled);
        assert_eq!(err.code, "SlowDown");
        assert_eq!(err.message, "Reduce your request rate.");

        let err = classify(&[], 403, "<Error><Code>AccessDenied</Code></Error>").await;
        assert_eq!(err.code, "AccessDenied");
        assert_eq!(err.message, "AccessDenied");
    }

    #[tokio::test]
    async fn test_should_name_unparseable_error_by_status() {
        let err = classify(&[], 500, "<html>oops").await;
        assert_eq!(err.kind, S3ErrorKind::Unhandled);
        assert_eq!(err.code, "500");

        let err = classify(&[NO_SUCH_KEY], 404, "not xml at all").await;
        assert_eq!(err.code, "NotFound");
        assert_eq!(err.kind, S3ErrorKind::Unhandled);
    }

    #[tokio::test]
    async fn test_should_match_namespaced_code() {
        let err = classify(
            &[NO_SUCH_BUCKET],
            404,
            "<Error><Code>com.amazonaws.s3#NoSuchBucket</Code></Error>",
        )
        .await;
        assert_eq!(err.kind, S3ErrorKind::NoSuchBucket);
        assert_eq!(err.code, "NoSuchBucket");
    }

    #[tokio::test]
    async fn test_should_read_invalid_object_state_members() {
        let err = classify(
            &[INVALID_OBJECT_STATE, NO_SUCH_KEY],
            403,
            "<Error><Code>InvalidObjectState</Code><StorageClass>GLACIER</StorageClass>\
             <AccessTier>ARCHIVE_ACCESS</AccessTier></Error>",
        )
        .await;
        assert_eq!(
            err.kind,
            S3ErrorKind::InvalidObjectState {
                storage_class: Some(StorageClass::Glacier),
                access_tier: Some(IntelligentTieringAccessTier::ArchiveAccess),
            }
        );
    }

    #[tokio::test]
    async fn test_should_look_inside_error_wrapper() {
        let err = classify(
            &[],
            400,
            "<ErrorResponse><Error><Code>InvalidArgument</Code><Message>bad</Message></Error></ErrorResponse>",
        )
        .await;
        assert_eq!(err.code, "InvalidArgument");
        assert_eq!(err.message, "bad");
    }
}
