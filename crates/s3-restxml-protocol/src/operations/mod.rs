//! The operation catalog.
//!
//! Every operation is a zero-sized marker type implementing [`Operation`]; its
//! `descriptor()` returns the `static` table entry that drives serialization and
//! deserialization.
//!
//! [`Operation`]: crate::descriptor::Operation

use s3_restxml_xml::{XmlMap, XmlResult};

use crate::shapes::XmlDeserialize;

mod bucket;
mod config;
mod list;
mod multipart;
mod object;

pub use bucket::*;
pub use config::*;
pub use list::*;
pub use multipart::*;
pub use object::*;

/// Content type of XML request bodies.
const XML: Option<&str> = Some("application/xml");

/// Define a marker type for a descriptor.
macro_rules! operation {
    ($(#[$meta:meta])* $name:ident($input:ty => $output:ty) = $descriptor:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $crate::descriptor::Operation for $name {
            type Input = $input;
            type Output = $output;

            fn descriptor() -> &'static $crate::descriptor::OperationDescriptor<$input, $output> {
                &$descriptor
            }
        }
    };
}

/// An XML body built from an optional payload field, under the given root element.
macro_rules! xml_body {
    ($root:literal, $field:ident) => {
        $crate::descriptor::BodyBinding::Xml {
            root: $root,
            build: |i| {
                i.$field
                    .as_ref()
                    .map(|v| $crate::shapes::XmlSerialize::to_xml_node(v, $root))
            },
        }
    };
}

/// The `x-amz-expected-bucket-owner` header.
macro_rules! expected_owner {
    () => {
        $crate::descriptor::header!("x-amz-expected-bucket-owner", expected_bucket_owner)
    };
}

/// The `x-amz-request-charged` response header.
macro_rules! request_charged {
    () => {
        $crate::descriptor::out_header!("x-amz-request-charged", request_charged)
    };
}

pub(crate) use {expected_owner, operation, request_charged, xml_body};

/// Read a payload shape from the whole document. An empty body leaves it unset.
fn payload<T: XmlDeserialize>(map: &XmlMap) -> XmlResult<Option<T>> {
    if map.is_empty() {
        Ok(None)
    } else {
        T::from_map(map).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use s3_restxml_model::S3Operation;
    use s3_restxml_model::types::ServerSideEncryptionConfiguration;
    use s3_restxml_xml::parse_body;

    use super::*;
    use crate::descriptor::Operation;

    #[test]
    fn test_should_leave_empty_payload_unset() {
        let map = parse_body(b"").unwrap();
        assert_eq!(payload::<ServerSideEncryptionConfiguration>(&map).unwrap(), None);
    }

    #[test]
    fn test_should_name_descriptors_after_their_marker() {
        assert_eq!(GetObject::descriptor().operation, S3Operation::GetObject);
        assert_eq!(ListObjectsV2::descriptor().operation, S3Operation::ListObjectsV2);
        assert_eq!(
            PutBucketLifecycleConfiguration::descriptor().operation,
            S3Operation::PutBucketLifecycleConfiguration
        );
    }

    #[test]
    fn test_should_accept_listed_success_codes() {
        assert!(RestoreObject::descriptor().is_success(202));
        assert!(DeleteBucket::descriptor().is_success(204));
        assert!(!GetObject::descriptor().is_success(304));
        assert!(!HeadObject::descriptor().is_success(404));
    }

    #[test]
    fn test_should_model_operation_errors() {
        assert!(GetObject::descriptor().error_shape("NoSuchKey").is_some());
        assert!(GetObject::descriptor().error_shape("InvalidObjectState").is_some());
        assert!(GetObject::descriptor().error_shape("NoSuchBucket").is_none());
        assert!(CreateBucket::descriptor().error_shape("BucketAlreadyOwnedByYou").is_some());
        assert!(AbortMultipartUpload::descriptor().error_shape("NoSuchUpload").is_some());
    }
}
