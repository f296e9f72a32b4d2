//! Bucket integration tests.

#[cfg(test)]
mod tests {
    use http::Method;
    use s3_restxml_model::enums::{BucketLocationConstraint, BucketVersioningStatus};
    use s3_restxml_model::input::{
        CreateBucketInput, GetBucketLocationInput, GetBucketTaggingInput,
        GetBucketVersioningInput, ListBucketsInput, PutBucketVersioningInput,
    };
    use s3_restxml_model::types::{CreateBucketConfiguration, VersioningConfiguration};
    use s3_restxml_protocol::operations::{
        CreateBucket, GetBucketLocation, GetBucketTagging, GetBucketVersioning, ListBuckets,
        PutBucketVersioning,
    };

    use crate::{Reply, s3_client};

    #[tokio::test]
    async fn test_should_create_bucket_with_location() -> anyhow::Result<()> {
        let (client, transport) = s3_client();
        transport.reply(Reply::status(200).header("location", "/logs"));

        let out = client
            .send::<CreateBucket>(CreateBucketInput {
                bucket: "logs".into(),
                create_bucket_configuration: Some(CreateBucketConfiguration {
                    location_constraint: Some(BucketLocationConstraint::from("eu-west-1")),
                }),
                ..Default::default()
            })
            .await?;
        assert_eq!(out.location.as_deref(), Some("/logs"));

        let request = transport.last_request().expect("request recorded");
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.uri, "http://localhost:4566/logs");
        assert_eq!(request.header("content-type"), Some("application/xml"));
        assert!(request.body_text().contains(
            "<CreateBucketConfiguration xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
             <LocationConstraint>eu-west-1</LocationConstraint></CreateBucketConfiguration>"
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_should_create_bucket_without_body() -> anyhow::Result<()> {
        let (client, transport) = s3_client();
        transport.reply(Reply::status(200));

        client
            .send::<CreateBucket>(CreateBucketInput {
                bucket: "plain".into(),
                ..Default::default()
            })
            .await?;
        let request = transport.last_request().expect("request recorded");
        assert!(request.body.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_should_list_buckets() -> anyhow::Result<()> {
        let (client, transport) = s3_client();
        transport.reply(Reply::xml(
            r#"<ListAllMyBucketsResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Owner><ID>abc123</ID></Owner>
  <Buckets>
    <Bucket><Name>alpha</Name><CreationDate>2024-01-01T00:00:00.000Z</CreationDate></Bucket>
    <Bucket><Name>beta</Name><CreationDate>2024-02-01T00:00:00.000Z</CreationDate></Bucket>
  </Buckets>
</ListAllMyBucketsResult>"#,
        ));

        let out = client.send::<ListBuckets>(ListBucketsInput::default()).await?;
        let names: Vec<_> = out
            .buckets
            .unwrap_or_default()
            .into_iter()
            .filter_map(|b| b.name)
            .collect();
        assert_eq!(names, ["alpha", "beta"]);
        assert_eq!(out.owner.and_then(|o| o.id).as_deref(), Some("abc123"));
        Ok(())
    }

    #[tokio::test]
    async fn test_should_read_us_east_1_location_as_none() -> anyhow::Result<()> {
        let (client, transport) = s3_client();
        transport.reply(Reply::xml(
            r#"<LocationConstraint xmlns="http://s3.amazonaws.com/doc/2006-03-01/"/>"#,
        ));

        let out = client
            .send::<GetBucketLocation>(GetBucketLocationInput {
                bucket: "legacy".into(),
                ..Default::default()
            })
            .await?;
        assert_eq!(out.location_constraint, None);
        let request = transport.last_request().expect("request recorded");
        assert!(request.uri.ends_with("/legacy?location="));
        Ok(())
    }

    #[tokio::test]
    async fn test_should_round_trip_versioning() -> anyhow::Result<()> {
        let (client, transport) = s3_client();
        transport.reply(Reply::status(200)).reply(Reply::xml(
            "<VersioningConfiguration><Status>Enabled</Status></VersioningConfiguration>",
        ));

        client
            .send::<PutBucketVersioning>(PutBucketVersioningInput {
                bucket: "versioned".into(),
                versioning_configuration: Some(VersioningConfiguration {
                    status: Some(BucketVersioningStatus::Enabled),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .await?;
        let out = client
            .send::<GetBucketVersioning>(GetBucketVersioningInput {
                bucket: "versioned".into(),
                ..Default::default()
            })
            .await?;
        assert_eq!(out.status, Some(BucketVersioningStatus::Enabled));
        assert_eq!(out.mfa_delete, None);

        let put = &transport.requests()[0];
        assert!(put.uri.ends_with("/versioned?versioning="));
        assert!(put.body_text().contains("<Status>Enabled</Status>"));
        Ok(())
    }

    #[tokio::test]
    async fn test_should_read_single_tag_as_list() -> anyhow::Result<()> {
        let (client, transport) = s3_client();
        transport.reply(Reply::xml(
            "<Tagging><TagSet><Tag><Key>team</Key><Value>storage</Value></Tag></TagSet></Tagging>",
        ));

        let out = client
            .send::<GetBucketTagging>(GetBucketTaggingInput {
                bucket: "tagged".into(),
                ..Default::default()
            })
            .await?;
        let tags = out.tag_set.unwrap_or_default();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].key, "team");
        assert_eq!(tags[0].value, "storage");
        Ok(())
    }
}
