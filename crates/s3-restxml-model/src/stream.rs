//! Streaming byte bodies for uploads and downloads.
//!
//! [`ByteStream`] carries object data in both directions: the `Body` of
//! `PutObject`/`UploadPart` inputs and the `Body` of `GetObject` outputs. It has
//! three modes:
//!
//! - **Buffered**: bytes already in memory.
//! - **Streaming**: any `http_body::Body`, e.g. a transport's response body.
//! - **Empty**: no content.
//!
//! It implements [`http_body::Body`] so transports can send it directly.

use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures::{Stream, TryStreamExt};
use http_body::{Body, Frame, SizeHint};
use http_body_util::combinators::UnsyncBoxBody;
use http_body_util::{BodyExt, BodyStream, Full, StreamBody};

/// Boxed error type carried by streaming bodies and transports.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A byte body that is either in memory or still arriving.
#[derive(Default)]
pub enum ByteStream {
    /// Bytes already in memory.
    Buffered(Full<Bytes>),
    /// A body still being received.
    Streaming(UnsyncBoxBody<Bytes, BoxError>),
    /// No content.
    #[default]
    Empty,
}

impl ByteStream {
    /// Create a buffered body.
    #[must_use]
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        Self::Buffered(Full::new(data.into()))
    }

    /// Create an empty body.
    #[must_use]
    pub fn empty() -> Self {
        Self::Empty
    }

    /// Wrap any HTTP body.
    pub fn from_body<B>(body: B) -> Self
    where
        B: Body<Data = Bytes> + Send + 'static,
        B::Error: Into<BoxError>,
    {
        Self::Streaming(body.map_err(Into::into).boxed_unsync())
    }

    /// Wrap a stream of byte chunks.
    pub fn from_stream<S, E>(stream: S) -> Self
    where
        S: Stream<Item = Result<Bytes, E>> + Send + 'static,
        E: Into<BoxError> + 'static,
    {
        let frames = stream.map_ok(Frame::data).map_err(Into::into);
        Self::Streaming(StreamBody::new(frames).boxed_unsync())
    }

    /// Drain the body into memory.
    pub async fn collect(self) -> Result<Bytes, BoxError> {
        match self {
            Self::Buffered(full) => {
                let Ok(collected) = full.collect().await;
                Ok(collected.to_bytes())
            }
            Self::Streaming(body) => Ok(body.collect().await?.to_bytes()),
            Self::Empty => Ok(Bytes::new()),
        }
    }

    /// Convert into a stream of data chunks, dropping trailers.
    pub fn into_data_stream(self) -> impl Stream<Item = Result<Bytes, BoxError>> + Send {
        BodyStream::new(self).try_filter_map(|frame| async move { Ok(frame.into_data().ok()) })
    }
}

impl fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffered(full) => f
                .debug_tuple("Buffered")
                .field(&full.size_hint().exact())
                .finish(),
            Self::Streaming(_) => f.write_str("Streaming(..)"),
            Self::Empty => f.write_str("Empty"),
        }
    }
}

impl From<Bytes> for ByteStream {
    fn from(data: Bytes) -> Self {
        Self::from_bytes(data)
    }
}

impl From<Vec<u8>> for ByteStream {
    fn from(data: Vec<u8>) -> Self {
        Self::from_bytes(data)
    }
}

impl From<String> for ByteStream {
    fn from(data: String) -> Self {
        Self::from_bytes(data)
    }
}

impl From<&'static str> for ByteStream {
    fn from(data: &'static str) -> Self {
        Self::from_bytes(Bytes::from_static(data.as_bytes()))
    }
}

impl From<&'static [u8]> for ByteStream {
    fn from(data: &'static [u8]) -> Self {
        Self::from_bytes(Bytes::from_static(data))
    }
}

impl Body for ByteStream {
    type Data = Bytes;
    type Error = BoxError;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        match self.get_mut() {
            Self::Buffered(full) => Pin::new(full)
                .poll_frame(cx)
                .map_err(|never| match never {}),
            Self::Streaming(body) => Pin::new(body).poll_frame(cx),
            Self::Empty => Poll::Ready(None),
        }
    }

    fn is_end_stream(&self) -> bool {
        match self {
            Self::Buffered(full) => full.is_end_stream(),
            Self::Streaming(body) => body.is_end_stream(),
            Self::Empty => true,
        }
    }

    fn size_hint(&self) -> SizeHint {
        match self {
            Self::Buffered(full) => full.size_hint(),
            Self::Streaming(body) => body.size_hint(),
            Self::Empty => SizeHint::with_exact(0),
        }
    }
}
