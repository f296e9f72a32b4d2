//! End-to-end tests for the S3 REST+XML client.
//!
//! Every test drives [`S3Client`] against [`MockTransport`], an in-memory transport
//! that replays scripted responses and records the requests it was sent. No server
//! or network is involved.
//!
//! Run them with:
//! ```text
//! cargo test -p s3-restxml-integration
//! ```
//!
//! Set `RUST_LOG=s3_restxml_protocol=debug` to see the pipeline's tracing output.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once, PoisonError};

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use s3_restxml_model::{BoxError, ByteStream};
use s3_restxml_protocol::event_stream::{Message, encode_message};
use s3_restxml_protocol::{ClientConfig, HttpRequest, HttpResponse, HttpTransport, S3Client};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// A request as seen by the transport, with its body drained.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method.
    pub method: Method,
    /// Full URI including the encoded query string.
    pub uri: String,
    /// Host name the request was addressed to.
    pub hostname: String,
    /// Percent-encoded path.
    pub path: String,
    /// Request headers.
    pub headers: HeaderMap,
    /// Request body.
    pub body: Bytes,
}

impl RecordedRequest {
    /// Look up a header as a string.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The body as UTF-8 text.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// A scripted response.
#[derive(Debug, Clone)]
pub struct Reply {
    status: u16,
    headers: Vec<(&'static str, String)>,
    chunks: Vec<Bytes>,
}

impl Reply {
    /// An empty response with the given status.
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self {
            status,
            headers: vec![("x-amz-request-id", "mock-request".to_owned())],
            chunks: Vec::new(),
        }
    }

    /// A 200 response carrying an XML document.
    #[must_use]
    pub fn xml(body: &str) -> Self {
        Self::status(200).body(body.to_owned())
    }

    /// A 200 response carrying event-stream frames, each delivered as its own chunk.
    pub fn event_stream(messages: &[Message]) -> anyhow::Result<Self> {
        let mut reply = Self::status(200);
        for message in messages {
            reply.chunks.push(encode_message(message)?);
        }
        Ok(reply)
    }

    /// Add a response header.
    #[must_use]
    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    /// Replace the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.chunks = vec![body.into()];
        self
    }

    fn into_response(self) -> Result<HttpResponse, BoxError> {
        let mut headers = HeaderMap::new();
        for (name, value) in self.headers {
            headers.append(HeaderName::from_static(name), HeaderValue::try_from(value)?);
        }
        let chunks = self.chunks.into_iter().map(Ok::<_, BoxError>);
        Ok(HttpResponse::new(
            self.status,
            headers,
            ByteStream::from_stream(futures::stream::iter(chunks)),
        ))
    }
}

#[derive(Debug, Default)]
struct MockState {
    replies: VecDeque<Reply>,
    requests: Vec<RecordedRequest>,
}

/// An in-memory transport that answers with scripted replies, in order.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// Create a transport with no scripted replies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next reply.
    pub fn reply(&self, reply: Reply) -> &Self {
        self.lock().replies.push_back(reply);
        self
    }

    /// Every request sent so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    /// The most recent request.
    #[must_use]
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.lock().requests.last().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait::async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        let uri = request.uri();
        let HttpRequest {
            hostname,
            method,
            path,
            headers,
            body,
            ..
        } = request;
        let body = body.into_byte_stream().collect().await?;
        tracing::debug!(%method, %uri, body_len = body.len(), "mock transport received request");

        let reply = {
            let mut state = self.lock();
            state.requests.push(RecordedRequest {
                method,
                uri,
                hostname,
                path,
                headers,
                body,
            });
            state.replies.pop_front()
        };
        reply
            .ok_or_else(|| BoxError::from("no scripted reply left"))?
            .into_response()
    }
}

/// Create a path-style client over a fresh mock transport.
#[must_use]
pub fn s3_client() -> (S3Client, MockTransport) {
    s3_client_with(ClientConfig::default())
}

/// Create a client with the given configuration over a fresh mock transport.
#[must_use]
pub fn s3_client_with(config: ClientConfig) -> (S3Client, MockTransport) {
    init_tracing();
    let transport = MockTransport::new();
    let client = S3Client::from_config(config, Arc::new(transport.clone()))
        .unwrap_or_else(|e| panic!("failed to build client: {e}"));
    (client, transport)
}

mod test_addressing;
mod test_bucket;
mod test_error;
mod test_list;
mod test_multipart;
mod test_object;
mod test_select;
