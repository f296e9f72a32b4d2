//! Object CRUD integration tests.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use http::Method;
    use s3_restxml_model::common::ContentHeaders;
    use s3_restxml_model::enums::StorageClass;
    use s3_restxml_model::input::{
        CopyObjectInput, DeleteObjectInput, GetObjectInput, HeadObjectInput, PutObjectInput,
    };
    use s3_restxml_model::output::S3Output;
    use s3_restxml_protocol::operations::{
        CopyObject, DeleteObject, GetObject, HeadObject, PutObject,
    };

    use crate::{Reply, s3_client};

    #[tokio::test]
    async fn test_should_put_and_get_object() -> anyhow::Result<()> {
        let (client, transport) = s3_client();
        transport
            .reply(Reply::status(200).header("etag", "\"5d41402abc4b2a76b9719d911017c592\""))
            .reply(
                Reply::status(200)
                    .header("content-type", "text/plain")
                    .header("content-length", "17")
                    .header("x-amz-meta-owner", "alice")
                    .body("hello, s3 client!"),
            );

        let put = client
            .send::<PutObject>(
                PutObjectInput::builder()
                    .bucket("docs")
                    .key("notes/greeting.txt")
                    .body("hello, s3 client!")
                    .content(ContentHeaders::typed("text/plain"))
                    .metadata(HashMap::from([("Owner".to_owned(), "alice".to_owned())]))
                    .build(),
            )
            .await?;
        assert_eq!(put.e_tag.as_deref(), Some("\"5d41402abc4b2a76b9719d911017c592\""));

        let get = client
            .send::<GetObject>(
                GetObjectInput::builder().bucket("docs").key("notes/greeting.txt").build(),
            )
            .await?;
        assert_eq!(get.content.content_type.as_deref(), Some("text/plain"));
        assert_eq!(get.content_length, Some(17));
        assert_eq!(get.metadata.get("owner").map(String::as_str), Some("alice"));
        assert_eq!(get.response_metadata().request_id.as_deref(), Some("mock-request"));
        let data = get.body.collect().await.map_err(|e| anyhow::anyhow!(e))?;
        assert_eq!(&data[..], b"hello, s3 client!");

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::PUT);
        assert_eq!(
            requests[0].uri,
            "http://localhost:4566/docs/notes/greeting.txt?x-id=PutObject"
        );
        assert_eq!(requests[0].header("x-amz-meta-owner"), Some("alice"));
        assert_eq!(requests[0].body_text(), "hello, s3 client!");
        assert_eq!(requests[1].method, Method::GET);
        assert_eq!(
            requests[1].uri,
            "http://localhost:4566/docs/notes/greeting.txt?x-id=GetObject"
        );
        assert!(requests[1].body.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_should_head_object() -> anyhow::Result<()> {
        let (client, transport) = s3_client();
        transport.reply(
            Reply::status(200)
                .header("content-length", "1024")
                .header("last-modified", "Tue, 14 May 2024 08:30:00 GMT")
                .header("x-amz-storage-class", "GLACIER")
                .header("x-amz-restore", "ongoing-request=\"true\""),
        );

        let head = client
            .send::<HeadObject>(HeadObjectInput {
                bucket: "archive".into(),
                key: "2024/report.csv".into(),
                ..Default::default()
            })
            .await?;
        assert_eq!(head.content_length, Some(1024));
        assert_eq!(head.storage_class, Some(StorageClass::Glacier));
        assert_eq!(head.restore.as_deref(), Some("ongoing-request=\"true\""));
        assert!(head.last_modified.is_some());

        let request = transport.last_request().expect("request recorded");
        assert_eq!(request.method, Method::HEAD);
        assert_eq!(request.path, "/archive/2024/report.csv");
        Ok(())
    }

    #[tokio::test]
    async fn test_should_encode_special_characters_in_key() -> anyhow::Result<()> {
        let (client, transport) = s3_client();
        transport.reply(Reply::status(204).header("x-amz-delete-marker", "true"));

        let out = client
            .send::<DeleteObject>(DeleteObjectInput {
                bucket: "docs".into(),
                key: "photos/summer trip (1).jpg".into(),
                version_id: Some("3/L4kqtJl".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(out.delete_marker, Some(true));

        let request = transport.last_request().expect("request recorded");
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.path, "/docs/photos/summer%20trip%20%281%29.jpg");
        assert!(request.uri.ends_with("?x-id=DeleteObject&versionId=3%2FL4kqtJl"));
        Ok(())
    }

    #[tokio::test]
    async fn test_should_copy_object() -> anyhow::Result<()> {
        let (client, transport) = s3_client();
        transport.reply(
            Reply::xml(
                r#"<?xml version="1.0" encoding="UTF-8"?>
<CopyObjectResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <LastModified>2024-05-14T08:30:00.000Z</LastModified>
  <ETag>"9b2cf535f27731c974343645a3985328"</ETag>
</CopyObjectResult>"#,
            )
            .header("x-amz-version-id", "v2"),
        );

        let out = client
            .send::<CopyObject>(CopyObjectInput {
                bucket: "dest".into(),
                key: "copy.txt".into(),
                copy_source: "src/original.txt".into(),
                ..Default::default()
            })
            .await?;
        let result = out.copy_object_result.expect("copy result");
        assert_eq!(
            result.e_tag.as_deref(),
            Some("\"9b2cf535f27731c974343645a3985328\"")
        );
        assert!(result.last_modified.is_some());
        assert_eq!(out.version_id.as_deref(), Some("v2"));

        let request = transport.last_request().expect("request recorded");
        assert_eq!(request.header("x-amz-copy-source"), Some("src/original.txt"));
        assert!(request.uri.ends_with("?x-id=CopyObject"));
        Ok(())
    }
}
