//! Operation outputs.

use crate::error::ResponseMetadata;

pub mod bucket;
pub mod config;
pub mod list;
pub mod multipart;
pub mod object;

pub use bucket::*;
pub use config::*;
pub use list::*;
pub use multipart::*;
pub use object::*;

/// An operation output. Every output carries the metadata of its response.
pub trait S3Output: Default {
    /// Metadata of the response this output was read from.
    fn response_metadata(&self) -> &ResponseMetadata;

    /// Attach response metadata.
    fn set_response_metadata(&mut self, metadata: ResponseMetadata);
}

