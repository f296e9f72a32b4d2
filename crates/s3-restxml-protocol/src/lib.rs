//! S3 REST+XML protocol binding.
//!
//! Turns typed operation inputs into HTTP requests and HTTP responses into typed
//! outputs or classified service errors. Each operation is a marker type in
//! [`operations`] whose `static` [`OperationDescriptor`] drives two generic engines:
//!
//! - [`serialize_request`]: path labels, headers, query parameters and the body.
//! - [`deserialize_response`]: status check, response headers, the XML or streaming
//!   payload, and [`ErrorClassifier`](error_classifier) for failures.
//!
//! `SelectObjectContent` returns its records as an AWS event stream, decoded by
//! [`event_stream`]. [`S3Client`] wires the pipeline to an [`HttpTransport`].
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use s3_restxml_protocol::{ClientConfig, S3Client, operations::ListBuckets};
//!
//! let client = S3Client::from_config(ClientConfig::from_env(), Arc::new(my_transport))?;
//! let buckets = client.send::<ListBuckets>(Default::default()).await?;
//! ```

pub mod client;
pub mod config;
pub mod descriptor;
pub mod deserializer;
pub mod encoding;
pub mod endpoint;
pub mod error;
pub mod error_classifier;
pub mod event_stream;
pub mod headers;
pub mod operations;
pub mod serializer;
pub mod shapes;
pub mod timestamp;
pub mod transport;
pub mod wire;

pub use client::S3Client;
pub use config::ClientConfig;
pub use descriptor::{Operation, OperationDescriptor};
pub use deserializer::deserialize_response;
pub use endpoint::{Endpoint, EndpointResolver, StaticEndpoint};
pub use error::{ProtocolError, ProtocolResult};
pub use event_stream::{EventReceiver, SelectObjectContentOutput};
pub use serializer::{AddressingStyle, serialize_request};
pub use transport::HttpTransport;
pub use wire::{HttpRequest, HttpResponse, RequestBody};
