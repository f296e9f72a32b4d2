//! Listing integration tests.

#[cfg(test)]
mod tests {
    use s3_restxml_model::input::{ListObjectVersionsInput, ListObjectsV2Input};
    use s3_restxml_protocol::operations::{ListObjectVersions, ListObjectsV2};

    use crate::{Reply, s3_client};

    #[tokio::test]
    async fn test_should_list_objects_v2_with_prefix_and_delimiter() -> anyhow::Result<()> {
        let (client, transport) = s3_client();
        transport.reply(Reply::xml(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>media</Name>
  <Prefix>photos/</Prefix>
  <Delimiter>/</Delimiter>
  <KeyCount>3</KeyCount>
  <MaxKeys>2</MaxKeys>
  <IsTruncated>true</IsTruncated>
  <NextContinuationToken>token-2</NextContinuationToken>
  <Contents><Key>photos/a.jpg</Key><Size>10</Size></Contents>
  <Contents><Key>photos/b.jpg</Key><Size>20</Size></Contents>
  <CommonPrefixes><Prefix>photos/2024/</Prefix></CommonPrefixes>
</ListBucketResult>"#,
        ));

        let out = client
            .send::<ListObjectsV2>(ListObjectsV2Input {
                bucket: "media".into(),
                prefix: Some("photos/".into()),
                delimiter: Some("/".into()),
                max_keys: Some(2),
                ..Default::default()
            })
            .await?;

        let keys: Vec<_> = out
            .contents
            .unwrap_or_default()
            .into_iter()
            .filter_map(|o| o.key)
            .collect();
        assert_eq!(keys, ["photos/a.jpg", "photos/b.jpg"]);
        let prefixes: Vec<_> = out
            .common_prefixes
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.prefix)
            .collect();
        assert_eq!(prefixes, ["photos/2024/"]);
        assert_eq!(out.is_truncated, Some(true));
        assert_eq!(out.next_continuation_token.as_deref(), Some("token-2"));

        let request = transport.last_request().expect("request recorded");
        assert_eq!(
            request.uri,
            "http://localhost:4566/media?list-type=2&delimiter=%2F&max-keys=2&prefix=photos%2F"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_should_list_empty_bucket() -> anyhow::Result<()> {
        let (client, transport) = s3_client();
        transport.reply(Reply::xml(
            "<ListBucketResult><Name>empty</Name><KeyCount>0</KeyCount>\
             <IsTruncated>false</IsTruncated></ListBucketResult>",
        ));

        let out = client
            .send::<ListObjectsV2>(ListObjectsV2Input {
                bucket: "empty".into(),
                ..Default::default()
            })
            .await?;
        assert_eq!(out.contents, None);
        assert_eq!(out.key_count, Some(0));
        Ok(())
    }

    #[tokio::test]
    async fn test_should_list_versions_and_delete_markers() -> anyhow::Result<()> {
        let (client, transport) = s3_client();
        transport.reply(Reply::xml(
            r#"<ListVersionsResult>
  <Name>versioned</Name>
  <IsTruncated>false</IsTruncated>
  <Version><Key>doc.txt</Key><VersionId>v2</VersionId><IsLatest>false</IsLatest></Version>
  <DeleteMarker><Key>doc.txt</Key><VersionId>v3</VersionId><IsLatest>true</IsLatest></DeleteMarker>
  <Version><Key>doc.txt</Key><VersionId>v1</VersionId><IsLatest>false</IsLatest></Version>
</ListVersionsResult>"#,
        ));

        let out = client
            .send::<ListObjectVersions>(ListObjectVersionsInput {
                bucket: "versioned".into(),
                ..Default::default()
            })
            .await?;

        let versions: Vec<_> = out
            .versions
            .unwrap_or_default()
            .into_iter()
            .filter_map(|v| v.version_id)
            .collect();
        assert_eq!(versions, ["v2", "v1"]);
        let markers = out.delete_markers.unwrap_or_default();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].is_latest, Some(true));

        let request = transport.last_request().expect("request recorded");
        assert!(request.uri.ends_with("/versioned?versions="));
        Ok(())
    }
}
