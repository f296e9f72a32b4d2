//! Binary event-stream framing and the `SelectObjectContent` event receiver.
//!
//! Every frame is laid out as
//!
//! ```text
//! [total length: u32][headers length: u32][prelude crc: u32][headers][payload][message crc: u32]
//! ```
//!
//! with big-endian integers and CRC-32 checksums over the prelude and over the whole
//! frame minus its trailing checksum. [`MessageDecoder`] reassembles frames from
//! arbitrary chunks; [`EventReceiver`] turns them into [`SelectObjectContentEvent`]s.

use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use bytes::{Buf, BufMut, Bytes, BytesMut};
use futures::Stream;
use s3_restxml_model::event::{
    ContinuationEvent, EndEvent, ProgressEvent, RecordsEvent, SelectObjectContentEvent,
    StatsEvent,
};
use s3_restxml_model::output::S3Output;
use s3_restxml_model::{BoxError, ByteStream, ResponseMetadata, S3Error, S3ErrorKind};
use s3_restxml_xml::{XmlMap, parse_body};
use tracing::debug;
use uuid::Uuid;

use crate::error::{ProtocolError, ProtocolResult};
use crate::error_classifier::build_error;
use crate::shapes::XmlDeserialize;

const PRELUDE_LEN: usize = 12;
const CRC_LEN: usize = 4;
const MIN_MESSAGE_LEN: usize = PRELUDE_LEN + CRC_LEN;
const MAX_MESSAGE_LEN: usize = 16 * 1024 * 1024;

/// A typed header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderValue {
    /// Types 0 (`true`) and 1 (`false`).
    Bool(bool),
    /// Type 2.
    Byte(i8),
    /// Type 3.
    Int16(i16),
    /// Type 4.
    Int32(i32),
    /// Type 5.
    Int64(i64),
    /// Type 6, at most `u16::MAX` bytes.
    ByteArray(Bytes),
    /// Type 7, at most `u16::MAX` bytes of UTF-8.
    String(String),
    /// Type 8, milliseconds since the Unix epoch.
    Timestamp(i64),
    /// Type 9.
    Uuid(Uuid),
}

impl HeaderValue {
    fn type_byte(&self) -> u8 {
        match self {
            Self::Bool(true) => 0,
            Self::Bool(false) => 1,
            Self::Byte(_) => 2,
            Self::Int16(_) => 3,
            Self::Int32(_) => 4,
            Self::Int64(_) => 5,
            Self::ByteArray(_) => 6,
            Self::String(_) => 7,
            Self::Timestamp(_) => 8,
            Self::Uuid(_) => 9,
        }
    }

    /// The value as a string, for string headers.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

/// One event-stream frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// Headers in wire order.
    pub headers: Vec<(String, HeaderValue)>,
    /// Raw payload.
    pub payload: Bytes,
}

impl Message {
    /// A frame with no headers.
    #[must_use]
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self {
            headers: Vec::new(),
            payload: payload.into(),
        }
    }

    /// Append a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<HeaderValue>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// The first header named `name`.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&HeaderValue> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    fn header_str(&self, name: &str) -> Option<&str> {
        self.header(name).and_then(HeaderValue::as_str)
    }
}

/// Encode one frame.
pub fn encode_message(message: &Message) -> ProtocolResult<Bytes> {
    let mut headers = BytesMut::new();
    for (name, value) in &message.headers {
        let name_len = u8::try_from(name.len())
            .map_err(|_| ProtocolError::event_stream(format!("header name too long: {name}")))?;
        headers.put_u8(name_len);
        headers.put_slice(name.as_bytes());
        headers.put_u8(value.type_byte());
        match value {
            HeaderValue::Bool(_) => {}
            HeaderValue::Byte(v) => headers.put_i8(*v),
            HeaderValue::Int16(v) => headers.put_i16(*v),
            HeaderValue::Int32(v) => headers.put_i32(*v),
            HeaderValue::Int64(v) | HeaderValue::Timestamp(v) => headers.put_i64(*v),
            HeaderValue::ByteArray(v) => put_short_bytes(&mut headers, name, v)?,
            HeaderValue::String(v) => put_short_bytes(&mut headers, name, v.as_bytes())?,
            HeaderValue::Uuid(v) => headers.put_slice(v.as_bytes()),
        }
    }

    let total = MIN_MESSAGE_LEN + headers.len() + message.payload.len();
    if total > MAX_MESSAGE_LEN {
        return Err(ProtocolError::event_stream(format!(
            "frame of {total} bytes exceeds the {MAX_MESSAGE_LEN} byte limit"
        )));
    }

    // Both lengths are bounded by MAX_MESSAGE_LEN.
    #[allow(clippy::cast_possible_truncation)]
    let (total_len, headers_len) = (total as u32, headers.len() as u32);

    let mut frame = BytesMut::with_capacity(total);
    frame.put_u32(total_len);
    frame.put_u32(headers_len);
    let prelude_crc = crc32fast::hash(&frame[..8]);
    frame.put_u32(prelude_crc);
    frame.put_slice(&headers);
    frame.put_slice(&message.payload);
    let message_crc = crc32fast::hash(&frame);
    frame.put_u32(message_crc);
    Ok(frame.freeze())
}

fn put_short_bytes(buf: &mut BytesMut, name: &str, value: &[u8]) -> ProtocolResult<()> {
    let len = u16::try_from(value.len())
        .map_err(|_| ProtocolError::event_stream(format!("value of header {name} too long")))?;
    buf.put_u16(len);
    buf.put_slice(value);
    Ok(())
}

/// Reassembles frames from a chunked byte stream. At most one partial frame is held.
#[derive(Debug, Default)]
pub struct MessageDecoder {
    buffer: BytesMut,
}

impl MessageDecoder {
    /// An empty decoder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append received bytes.
    pub fn push(&mut self, chunk: &[u8]) {
        self.buffer.extend_from_slice(chunk);
    }

    /// True when bytes of an incomplete frame are buffered.
    #[must_use]
    pub fn has_partial(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Take the next complete frame, if one is buffered.
    pub fn decode(&mut self) -> ProtocolResult<Option<Message>> {
        if self.buffer.len() < PRELUDE_LEN {
            return Ok(None);
        }

        let mut prelude = &self.buffer[..PRELUDE_LEN];
        let total = prelude.get_u32() as usize;
        let headers_len = prelude.get_u32() as usize;
        let prelude_crc = prelude.get_u32();

        if crc32fast::hash(&self.buffer[..8]) != prelude_crc {
            return Err(ProtocolError::event_stream("prelude checksum mismatch"));
        }
        if !(MIN_MESSAGE_LEN..=MAX_MESSAGE_LEN).contains(&total) {
            return Err(ProtocolError::event_stream(format!(
                "invalid frame length {total}"
            )));
        }
        if headers_len > total - MIN_MESSAGE_LEN {
            return Err(ProtocolError::event_stream(format!(
                "headers length {headers_len} exceeds frame length {total}"
            )));
        }
        if self.buffer.len() < total {
            return Ok(None);
        }

        let frame = self.buffer.split_to(total).freeze();
        let mut trailer = &frame[total - CRC_LEN..];
        if crc32fast::hash(&frame[..total - CRC_LEN]) != trailer.get_u32() {
            return Err(ProtocolError::event_stream("message checksum mismatch"));
        }

        let headers_end = PRELUDE_LEN + headers_len;
        let headers = decode_headers(&frame[PRELUDE_LEN..headers_end])?;
        Ok(Some(Message {
            headers,
            payload: frame.slice(headers_end..total - CRC_LEN),
        }))
    }
}

fn decode_headers(mut buf: &[u8]) -> ProtocolResult<Vec<(String, HeaderValue)>> {
    let mut headers = Vec::new();
    while buf.has_remaining() {
        let name_len = take(&mut buf, 1)?[0] as usize;
        let name = std::str::from_utf8(take(&mut buf, name_len)?)
            .map_err(|e| ProtocolError::event_stream(format!("header name is not UTF-8: {e}")))?
            .to_owned();
        let type_byte = take(&mut buf, 1)?[0];
        let value = match type_byte {
            0 => HeaderValue::Bool(true),
            1 => HeaderValue::Bool(false),
            2 => HeaderValue::Byte(take(&mut buf, 1)?.get_i8()),
            3 => HeaderValue::Int16(take(&mut buf, 2)?.get_i16()),
            4 => HeaderValue::Int32(take(&mut buf, 4)?.get_i32()),
            5 => HeaderValue::Int64(take(&mut buf, 8)?.get_i64()),
            6 => {
                let len = take(&mut buf, 2)?.get_u16() as usize;
                HeaderValue::ByteArray(Bytes::copy_from_slice(take(&mut buf, len)?))
            }
            7 => {
                let len = take(&mut buf, 2)?.get_u16() as usize;
                let value = std::str::from_utf8(take(&mut buf, len)?).map_err(|e| {
                    ProtocolError::event_stream(format!("header {name} is not UTF-8: {e}"))
                })?;
                HeaderValue::String(value.to_owned())
            }
            8 => HeaderValue::Timestamp(take(&mut buf, 8)?.get_i64()),
            9 => HeaderValue::Uuid(
                Uuid::from_slice(take(&mut buf, 16)?)
                    .map_err(|e| ProtocolError::event_stream(e.to_string()))?,
            ),
            other => {
                return Err(ProtocolError::event_stream(format!(
                    "unknown type {other} for header {name}"
                )));
            }
        };
        headers.push((name, value));
    }
    Ok(headers)
}

/// Split `len` bytes off the front of `buf`.
fn take<'a>(buf: &mut &'a [u8], len: usize) -> ProtocolResult<&'a [u8]> {
    if buf.len() < len {
        return Err(ProtocolError::event_stream("truncated header block"));
    }
    let (head, tail) = buf.split_at(len);
    *buf = tail;
    Ok(head)
}

type DataStream = Pin<Box<dyn Stream<Item = Result<Bytes, BoxError>> + Send>>;

/// Lazily decodes the `SelectObjectContent` event stream.
///
/// Each call to [`recv`](Self::recv) reads just enough of the body to produce the
/// next event. The stream ends after `End`, on a clean end of the body, or after the
/// first error. Exception and error frames are returned as
/// [`ProtocolError::Service`].
pub struct EventReceiver {
    body: DataStream,
    decoder: MessageDecoder,
    metadata: ResponseMetadata,
    done: bool,
}

impl EventReceiver {
    /// Read events from a response body.
    #[must_use]
    pub fn new(body: ByteStream) -> Self {
        Self {
            body: Box::pin(body.into_data_stream()),
            decoder: MessageDecoder::new(),
            metadata: ResponseMetadata::default(),
            done: false,
        }
    }

    /// Attach the metadata of the response carrying the stream to errors it raises.
    #[must_use]
    pub fn with_metadata(mut self, metadata: ResponseMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// The next event, or `None` once the stream has ended.
    pub async fn recv(&mut self) -> ProtocolResult<Option<SelectObjectContentEvent>> {
        futures::future::poll_fn(|cx| self.poll_event(cx))
            .await
            .transpose()
    }

    fn poll_event(
        &mut self,
        cx: &mut Context<'_>,
    ) -> Poll<Option<ProtocolResult<SelectObjectContentEvent>>> {
        loop {
            if self.done {
                return Poll::Ready(None);
            }

            match self.decoder.decode() {
                Ok(Some(message)) => {
                    let event = self.read_event(&message);
                    self.done = matches!(event, Err(_) | Ok(SelectObjectContentEvent::End(_)));
                    return Poll::Ready(Some(event));
                }
                Ok(None) => {}
                Err(err) => {
                    self.done = true;
                    return Poll::Ready(Some(Err(err)));
                }
            }

            match ready!(self.body.as_mut().poll_next(cx)) {
                Some(Ok(chunk)) => self.decoder.push(&chunk),
                Some(Err(err)) => {
                    self.done = true;
                    return Poll::Ready(Some(Err(ProtocolError::Body(err))));
                }
                None => {
                    self.done = true;
                    if self.decoder.has_partial() {
                        return Poll::Ready(Some(Err(ProtocolError::event_stream(
                            "stream ended inside a frame",
                        ))));
                    }
                    return Poll::Ready(None);
                }
            }
        }
    }

    fn read_event(&self, message: &Message) -> ProtocolResult<SelectObjectContentEvent> {
        let message_type = message.header_str(":message-type").unwrap_or("event");
        debug!(
            message_type,
            event_type = message.header_str(":event-type"),
            payload_len = message.payload.len(),
            "decoded event-stream frame"
        );

        match message_type {
            "event" => {
                let event_type = message.header_str(":event-type").ok_or_else(|| {
                    ProtocolError::event_stream("event frame without :event-type")
                })?;
                read_select_event(event_type, &message.payload)
            }
            "exception" => {
                let code = message.header_str(":exception-type").unwrap_or_default();
                let map = parse_body(&message.payload).unwrap_or_else(|err| {
                    debug!(%err, code, "exception payload is not XML");
                    XmlMap::new()
                });
                let data = map.map("Error").unwrap_or(&map);
                Err(build_error(&[], code, data, None, self.metadata.clone()).into())
            }
            "error" => {
                let code = message.header_str(":error-code").unwrap_or("UnknownError");
                let text = message.header_str(":error-message").map(str::to_owned);
                Err(S3Error::new(S3ErrorKind::Unhandled, code, text)
                    .with_metadata(self.metadata.clone())
                    .into())
            }
            other => Err(ProtocolError::event_stream(format!(
                "unknown message type {other}"
            ))),
        }
    }
}

fn read_select_event(event_type: &str, payload: &Bytes) -> ProtocolResult<SelectObjectContentEvent> {
    Ok(match event_type {
        "Records" => SelectObjectContentEvent::Records(RecordsEvent {
            payload: payload.clone(),
        }),
        "Stats" => SelectObjectContentEvent::Stats(StatsEvent {
            details: details(payload)?,
        }),
        "Progress" => SelectObjectContentEvent::Progress(ProgressEvent {
            details: details(payload)?,
        }),
        "Cont" => SelectObjectContentEvent::Cont(ContinuationEvent),
        "End" => SelectObjectContentEvent::End(EndEvent),
        other => SelectObjectContentEvent::Unknown {
            event_type: other.to_owned(),
            payload: payload.clone(),
        },
    })
}

/// `Stats` and `Progress` payloads are a `Details` document.
fn details<T: XmlDeserialize>(payload: &Bytes) -> ProtocolResult<Option<T>> {
    let map = parse_body(payload)?;
    if map.is_empty() {
        return Ok(None);
    }
    Ok(Some(T::from_map(&map)?))
}

impl Stream for EventReceiver {
    type Item = ProtocolResult<SelectObjectContentEvent>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().poll_event(cx)
    }
}

impl fmt::Debug for EventReceiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventReceiver")
            .field("buffered", &self.decoder.buffer.len())
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

/// S3 SelectObjectContentOutput.
#[derive(Debug, Default)]
pub struct SelectObjectContentOutput {
    /// The event stream.
    pub payload: Option<EventReceiver>,
    /// Metadata of the response that opened the stream.
    pub response_metadata: ResponseMetadata,
}

impl S3Output for SelectObjectContentOutput {
    fn response_metadata(&self) -> &ResponseMetadata {
        &self.response_metadata
    }

    fn set_response_metadata(&mut self, metadata: ResponseMetadata) {
        self.response_metadata = metadata;
    }
}
