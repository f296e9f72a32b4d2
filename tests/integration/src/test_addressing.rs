//! Endpoint and addressing-style integration tests.

#[cfg(test)]
mod tests {
    use s3_restxml_model::input::{GetObjectInput, ListBucketsInput};
    use s3_restxml_protocol::ClientConfig;
    use s3_restxml_protocol::operations::{GetObject, ListBuckets};

    use crate::{Reply, s3_client_with};

    fn get(bucket: &str, key: &str) -> GetObjectInput {
        GetObjectInput {
            bucket: bucket.into(),
            key: key.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_should_move_dns_compatible_bucket_into_host() -> anyhow::Result<()> {
        let config = ClientConfig::builder()
            .endpoint_url("https://s3.example.com".into())
            .force_path_style(false)
            .build();
        let (client, transport) = s3_client_with(config);
        transport.reply(Reply::status(200)).reply(Reply::status(200));

        client.send::<GetObject>(get("my-bucket", "dir/file.txt")).await?;
        client.send::<GetObject>(get("Not_DNS", "file.txt")).await?;

        let requests = transport.requests();
        assert_eq!(requests[0].hostname, "my-bucket.s3.example.com");
        assert_eq!(requests[0].path, "/dir/file.txt");
        assert_eq!(
            requests[0].uri,
            "https://my-bucket.s3.example.com/dir/file.txt?x-id=GetObject"
        );
        assert_eq!(requests[1].hostname, "s3.example.com");
        assert_eq!(requests[1].path, "/Not_DNS/file.txt");
        Ok(())
    }

    #[tokio::test]
    async fn test_should_prefix_endpoint_base_path() -> anyhow::Result<()> {
        let config = ClientConfig::builder()
            .endpoint_url("http://127.0.0.1:9000/storage/".into())
            .build();
        let (client, transport) = s3_client_with(config);
        transport.reply(Reply::status(200));

        client.send::<GetObject>(get("b", "k")).await?;
        let request = transport.last_request().expect("request recorded");
        assert_eq!(request.uri, "http://127.0.0.1:9000/storage/b/k?x-id=GetObject");
        Ok(())
    }

    #[tokio::test]
    async fn test_should_send_configured_user_agent() -> anyhow::Result<()> {
        let config = ClientConfig::builder()
            .user_agent(Some("backup-tool/2.1".into()))
            .build();
        let (client, transport) = s3_client_with(config);
        transport.reply(Reply::xml("<ListAllMyBucketsResult/>"));

        let out = client.send::<ListBuckets>(ListBucketsInput::default()).await?;
        assert_eq!(out.buckets, None);
        let request = transport.last_request().expect("request recorded");
        assert_eq!(request.header("user-agent"), Some("backup-tool/2.1"));
        Ok(())
    }
}
