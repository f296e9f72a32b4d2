//! S3 shape types, operation inputs and outputs, and service errors.
//!
//! Inputs are built with typed builders: required path labels are mandatory setters,
//! everything else is optional. Header clusters that several operations share live in
//! [`common`]. Every output carries the [`ResponseMetadata`] read from the response
//! that produced it.
#![allow(clippy::struct_excessive_bools)]
#![allow(missing_docs)]

#[macro_use]
mod macros;

pub mod common;
pub mod enums;
pub mod error;
pub mod event;
pub mod input;
pub mod operations;
pub mod output;
pub mod stream;
pub mod types;

pub use error::{ErrorFault, ResponseMetadata, S3Error, S3ErrorKind};
pub use operations::S3Operation;
pub use stream::{BoxError, ByteStream};

/// Timestamp type used throughout the model.
pub type DateTime = chrono::DateTime<chrono::Utc>;
