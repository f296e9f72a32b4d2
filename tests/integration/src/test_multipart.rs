//! Multipart upload integration tests.

#[cfg(test)]
mod tests {
    use http::Method;
    use s3_restxml_model::S3ErrorKind;
    use s3_restxml_model::common::ContentHeaders;
    use s3_restxml_model::input::{
        AbortMultipartUploadInput, CompleteMultipartUploadInput, CreateMultipartUploadInput,
        UploadPartInput,
    };
    use s3_restxml_model::types::{CompletedMultipartUpload, CompletedPart};
    use s3_restxml_protocol::operations::{
        AbortMultipartUpload, CompleteMultipartUpload, CreateMultipartUpload, UploadPart,
    };

    use crate::{Reply, s3_client};

    #[tokio::test]
    async fn test_should_complete_multipart_upload() -> anyhow::Result<()> {
        let (client, transport) = s3_client();
        transport
            .reply(Reply::xml(
                "<InitiateMultipartUploadResult><Bucket>big</Bucket><Key>video.mp4</Key>\
                 <UploadId>upload-1</UploadId></InitiateMultipartUploadResult>",
            ))
            .reply(Reply::status(200).header("etag", "\"part-1\""))
            .reply(Reply::status(200).header("etag", "\"part-2\""))
            .reply(Reply::xml(
                "<CompleteMultipartUploadResult><Location>http://localhost:4566/big/video.mp4</Location>\
                 <Bucket>big</Bucket><Key>video.mp4</Key><ETag>\"final-2\"</ETag>\
                 </CompleteMultipartUploadResult>",
            ));

        let created = client
            .send::<CreateMultipartUpload>(
                CreateMultipartUploadInput::builder()
                    .bucket("big")
                    .key("video.mp4")
                    .content(ContentHeaders::typed("video/mp4"))
                    .build(),
            )
            .await?;
        let upload_id = created.upload_id.expect("upload id");
        assert_eq!(upload_id, "upload-1");

        let mut parts = Vec::new();
        for (number, chunk) in [(1, "first chunk"), (2, "second chunk")] {
            let out = client
                .send::<UploadPart>(
                    UploadPartInput::builder()
                        .bucket("big")
                        .key("video.mp4")
                        .upload_id(upload_id.as_str())
                        .part_number(number)
                        .body(chunk)
                        .build(),
                )
                .await?;
            parts.push(CompletedPart {
                e_tag: out.e_tag,
                part_number: Some(number),
                ..Default::default()
            });
        }

        let done = client
            .send::<CompleteMultipartUpload>(CompleteMultipartUploadInput {
                bucket: "big".into(),
                key: "video.mp4".into(),
                upload_id: upload_id.clone(),
                multipart_upload: Some(CompletedMultipartUpload { parts: Some(parts) }),
                ..Default::default()
            })
            .await?;
        assert_eq!(done.e_tag.as_deref(), Some("\"final-2\""));
        assert_eq!(
            done.location.as_deref(),
            Some("http://localhost:4566/big/video.mp4")
        );

        let requests = transport.requests();
        assert_eq!(requests.len(), 4);
        assert_eq!(requests[0].method, Method::POST);
        assert!(requests[0].uri.ends_with("/big/video.mp4?uploads="));
        assert_eq!(requests[0].header("content-type"), Some("video/mp4"));
        assert!(
            requests[1]
                .uri
                .ends_with("/big/video.mp4?x-id=UploadPart&partNumber=1&uploadId=upload-1")
        );
        assert_eq!(requests[2].body_text(), "second chunk");
        assert!(requests[3].uri.ends_with("/big/video.mp4?uploadId=upload-1"));
        assert!(requests[3].body_text().ends_with(
            "<Part><ETag>\"part-1\"</ETag><PartNumber>1</PartNumber></Part>\
             <Part><ETag>\"part-2\"</ETag><PartNumber>2</PartNumber></Part>\
             </CompleteMultipartUpload>"
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_should_report_unknown_upload_on_abort() {
        let (client, transport) = s3_client();
        transport.reply(Reply::status(404).body(
            "<Error><Code>NoSuchUpload</Code><Message>The specified upload does not exist.</Message></Error>",
        ));

        let err = client
            .send::<AbortMultipartUpload>(AbortMultipartUploadInput {
                bucket: "big".into(),
                key: "video.mp4".into(),
                upload_id: "gone".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        let service = err.service_error().expect("service error");
        assert_eq!(service.kind, S3ErrorKind::NoSuchUpload);

        let request = transport.last_request().expect("request recorded");
        assert_eq!(request.method, Method::DELETE);
        assert!(request.uri.ends_with("?x-id=AbortMultipartUpload&uploadId=gone"));
    }
}
