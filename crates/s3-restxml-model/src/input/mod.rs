//! Operation inputs.
//!
//! Every input has a `builder()`. Path labels such as `bucket` and `key` are required
//! setters and stay plain `String`s; the serializer rejects them when empty. Where a
//! field goes on the wire is fixed by the operation's descriptor, not by the input.

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
