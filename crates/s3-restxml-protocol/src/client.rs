//! The client facade.
//!
//! [`S3Client`] runs the whole pipeline for one call: serialize the input, send the
//! request through the [`HttpTransport`], and deserialize the response into the
//! operation output or a classified service error.

use std::fmt;
use std::sync::Arc;

use http::header::{HeaderValue, USER_AGENT};
use tracing::{Instrument, info_span};

use crate::config::ClientConfig;
use crate::descriptor::Operation;
use crate::deserializer::deserialize_response;
use crate::endpoint::{EndpointResolver, StaticEndpoint};
use crate::error::{ProtocolError, ProtocolResult};
use crate::serializer::{AddressingStyle, serialize_request};
use crate::transport::HttpTransport;

/// An S3 client over a pluggable transport.
///
/// Cloning is cheap; clones share the resolver and the transport.
#[derive(Clone)]
pub struct S3Client {
    resolver: Arc<dyn EndpointResolver>,
    transport: Arc<dyn HttpTransport>,
    config: ClientConfig,
}

impl fmt::Debug for S3Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("S3Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl S3Client {
    /// Create a client from its collaborators.
    pub fn new(
        resolver: Arc<dyn EndpointResolver>,
        transport: Arc<dyn HttpTransport>,
        config: ClientConfig,
    ) -> Self {
        Self {
            resolver,
            transport,
            config,
        }
    }

    /// Create a client that sends every request to `config.endpoint_url`.
    pub fn from_config(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> ProtocolResult<Self> {
        let resolver = StaticEndpoint::from_url(&config.endpoint_url)?;
        Ok(Self::new(Arc::new(resolver), transport, config))
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Call operation `Op`.
    ///
    /// Dropping the returned future cancels the call, including any in-flight
    /// transport request.
    ///
    /// ```ignore
    /// let output = client
    ///     .send::<GetObject>(GetObjectInput::builder().bucket("b").key("k").build())
    ///     .await?;
    /// ```
    pub async fn send<Op: Operation>(&self, input: Op::Input) -> ProtocolResult<Op::Output> {
        let descriptor = Op::descriptor();
        let span = info_span!("s3", operation = %descriptor.operation);

        async move {
            let style = if self.config.force_path_style {
                AddressingStyle::Path
            } else {
                AddressingStyle::VirtualHosted
            };
            let mut request =
                serialize_request(descriptor, input, self.resolver.as_ref(), style).await?;

            if let Some(agent) = &self.config.user_agent {
                let value =
                    HeaderValue::from_str(agent).map_err(|e| ProtocolError::InvalidHeader {
                        name: USER_AGENT.to_string(),
                        reason: e.to_string(),
                    })?;
                request.headers.insert(USER_AGENT, value);
            }

            let response = self
                .transport
                .send(request)
                .await
                .map_err(ProtocolError::Transport)?;
            deserialize_response(descriptor, response).await
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use http::HeaderMap;
    use s3_restxml_model::input::{HeadBucketInput, ListBucketsInput};
    use s3_restxml_model::output::S3Output;
    use s3_restxml_model::{BoxError, ByteStream, S3ErrorKind};

    use super::*;
    use crate::operations::{HeadBucket, ListBuckets};
    use crate::wire::{HttpRequest, HttpResponse};

    /// Answers every request with a fixed response and keeps what it was sent.
    #[derive(Default)]
    struct FixedTransport {
        status: u16,
        body: &'static str,
        seen: Mutex<Vec<(String, Option<String>)>>,
    }

    #[async_trait::async_trait]
    impl HttpTransport for FixedTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
            let agent = request.header("user-agent").map(str::to_owned);
            self.seen
                .lock()
                .map_err(|e| e.to_string())?
                .push((request.uri(), agent));
            let mut headers = HeaderMap::new();
            headers.insert("x-amz-request-id", HeaderValue::from_static("req-1"));
            Ok(HttpResponse::new(
                self.status,
                headers,
                ByteStream::from(self.body),
            ))
        }
    }

    struct FailingTransport;

    #[async_trait::async_trait]
    impl HttpTransport for FailingTransport {
        async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, BoxError> {
            Err("connection refused".into())
        }
    }

    fn client(transport: Arc<dyn HttpTransport>, config: ClientConfig) -> S3Client {
        S3Client::from_config(config, transport).unwrap()
    }

    #[tokio::test]
    async fn test_should_run_full_pipeline() {
        let transport = Arc::new(FixedTransport {
            status: 200,
            body: "<ListAllMyBucketsResult><Buckets><Bucket><Name>a</Name></Bucket></Buckets></ListAllMyBucketsResult>",
            ..Default::default()
        });
        let config = ClientConfig::builder()
            .user_agent(Some("tests/1.0".into()))
            .build();
        let client = client(transport.clone(), config);

        let out = client
            .send::<ListBuckets>(ListBucketsInput::default())
            .await
            .unwrap();
        assert_eq!(out.buckets.as_ref().map(Vec::len), Some(1));
        assert_eq!(out.response_metadata().request_id.as_deref(), Some("req-1"));

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].0, "http://localhost:4566/?x-id=ListBuckets");
        assert_eq!(seen[0].1.as_deref(), Some("tests/1.0"));
    }

    #[tokio::test]
    async fn test_should_return_classified_service_error() {
        let transport = Arc::new(FixedTransport {
            status: 404,
            ..Default::default()
        });
        let client = client(transport, ClientConfig::default());

        let err = client
            .send::<HeadBucket>(HeadBucketInput {
                bucket: "missing".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        let service = err.service_error().unwrap();
        assert_eq!(service.kind, S3ErrorKind::NotFound);
        assert_eq!(service.metadata.http_status_code, Some(404));
    }

    #[tokio::test]
    async fn test_should_wrap_transport_failure() {
        let client = client(Arc::new(FailingTransport), ClientConfig::default());
        let err = client
            .send::<ListBuckets>(ListBucketsInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProtocolError::Transport(_)));
    }

    #[tokio::test]
    async fn test_should_fail_on_missing_label_before_sending() {
        let transport = Arc::new(FixedTransport::default());
        let client = client(transport.clone(), ClientConfig::default());

        let err = client
            .send::<HeadBucket>(HeadBucketInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProtocolError::MissingLabel("Bucket")));
        assert!(transport.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_should_reject_bad_endpoint_url() {
        let config = ClientConfig::builder().endpoint_url("no scheme".into()).build();
        assert!(S3Client::from_config(config, Arc::new(FailingTransport)).is_err());
    }
}
