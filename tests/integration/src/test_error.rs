//! Error classification integration tests.

#[cfg(test)]
mod tests {
    use s3_restxml_model::enums::StorageClass;
    use s3_restxml_model::input::{
        CreateBucketInput, GetObjectInput, HeadObjectInput, ListObjectsV2Input,
    };
    use s3_restxml_model::{ErrorFault, S3ErrorKind};
    use s3_restxml_protocol::ProtocolError;
    use s3_restxml_protocol::operations::{CreateBucket, GetObject, HeadObject, ListObjectsV2};

    use crate::{Reply, s3_client};

    #[tokio::test]
    async fn test_should_return_no_such_key_on_get() {
        let (client, transport) = s3_client();
        transport.reply(
            Reply::status(404)
                .header("x-amz-id-2", "ext-id")
                .body(
                    r#"<?xml version="1.0" encoding="UTF-8"?>
<Error>
  <Code>NoSuchKey</Code>
  <Message>The specified key does not exist.</Message>
  <Key>missing.txt</Key>
  <RequestId>4442587FB7D0A2F9</RequestId>
</Error>"#,
                ),
        );

        let err = client
            .send::<GetObject>(GetObjectInput {
                bucket: "docs".into(),
                key: "missing.txt".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();

        let service = err.service_error().expect("service error");
        assert_eq!(service.kind, S3ErrorKind::NoSuchKey);
        assert_eq!(service.code, "NoSuchKey");
        assert_eq!(service.message, "The specified key does not exist.");
        assert_eq!(service.fault, ErrorFault::Client);
        assert_eq!(service.metadata.http_status_code, Some(404));
        assert_eq!(service.metadata.extended_request_id.as_deref(), Some("ext-id"));
    }

    #[tokio::test]
    async fn test_should_return_not_found_on_head_without_body() {
        let (client, transport) = s3_client();
        transport.reply(Reply::status(404));

        let err = client
            .send::<HeadObject>(HeadObjectInput {
                bucket: "docs".into(),
                key: "missing.txt".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        let service = err.service_error().expect("service error");
        assert_eq!(service.kind, S3ErrorKind::NotFound);
        assert_eq!(service.code, "NotFound");
    }

    #[tokio::test]
    async fn test_should_carry_invalid_object_state_members() {
        let (client, transport) = s3_client();
        transport.reply(Reply::status(403).body(
            "<Error><Code>InvalidObjectState</Code>\
             <Message>The operation is not valid for the object's storage class</Message>\
             <StorageClass>DEEP_ARCHIVE</StorageClass></Error>",
        ));

        let err = client
            .send::<GetObject>(GetObjectInput {
                bucket: "archive".into(),
                key: "cold.bin".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        let service = err.service_error().expect("service error");
        assert_eq!(
            service.kind,
            S3ErrorKind::InvalidObjectState {
                storage_class: Some(StorageClass::DeepArchive),
                access_tier: None,
            }
        );
    }

    #[tokio::test]
    async fn test_should_name_unmodeled_error_by_code() {
        let (client, transport) = s3_client();
        transport.reply(Reply::status(403).body(
            "<Error><Code>AccessDenied</Code><Message>Access Denied</Message></Error>",
        ));

        let err = client
            .send::<ListObjectsV2>(ListObjectsV2Input {
                bucket: "private".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        let service = err.service_error().expect("service error");
        assert_eq!(service.kind, S3ErrorKind::Unhandled);
        assert_eq!(service.code, "AccessDenied");
        assert_eq!(service.message, "Access Denied");
    }

    #[tokio::test]
    async fn test_should_survive_non_xml_error_body() {
        let (client, transport) = s3_client();
        transport.reply(Reply::status(503).body("Service Unavailable"));

        let err = client
            .send::<CreateBucket>(CreateBucketInput {
                bucket: "busy".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        let service = err.service_error().expect("service error");
        assert_eq!(service.kind, S3ErrorKind::Unhandled);
        assert_eq!(service.code, "503");
    }

    #[tokio::test]
    async fn test_should_not_send_request_with_empty_label() {
        let (client, transport) = s3_client();

        let err = client
            .send::<GetObject>(GetObjectInput {
                bucket: "docs".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ProtocolError::MissingLabel("Key")));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_should_report_transport_failure() {
        let (client, _transport) = s3_client();

        let err = client
            .send::<HeadObject>(HeadObjectInput {
                bucket: "docs".into(),
                key: "a".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ProtocolError::Transport(_)));
    }
}
