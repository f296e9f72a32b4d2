//! SelectObjectContent event-stream integration tests.

#[cfg(test)]
mod tests {
    use futures::{StreamExt, TryStreamExt};
    use http::Method;
    use s3_restxml_model::S3ErrorKind;
    use s3_restxml_model::enums::ExpressionType;
    use s3_restxml_model::event::SelectObjectContentEvent;
    use s3_restxml_model::input::SelectObjectContentInput;
    use s3_restxml_model::types::{CSVInput, CSVOutput, InputSerialization, OutputSerialization};
    use s3_restxml_protocol::event_stream::Message;
    use s3_restxml_protocol::operations::SelectObjectContent;

    use crate::{Reply, s3_client};

    fn event(event_type: &str, payload: &'static str) -> Message {
        Message::new(payload)
            .with_header(":message-type", "event")
            .with_header(":event-type", event_type)
            .with_header(":content-type", "application/octet-stream")
    }

    fn select_input() -> SelectObjectContentInput {
        SelectObjectContentInput {
            bucket: "data".into(),
            key: "people.csv".into(),
            expression: "SELECT name FROM S3Object WHERE age > 30".into(),
            expression_type: ExpressionType::Sql,
            input_serialization: Some(InputSerialization {
                csv: Some(CSVInput::default()),
                ..Default::default()
            }),
            output_serialization: Some(OutputSerialization {
                csv: Some(CSVOutput::default()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_should_stream_select_results() -> anyhow::Result<()> {
        let (client, transport) = s3_client();
        transport.reply(Reply::event_stream(&[
            event("Records", "alice\nbob\n"),
            event("Records", "carol\n"),
            event("Cont", ""),
            event(
                "Stats",
                "<Stats><BytesScanned>512</BytesScanned><BytesProcessed>512</BytesProcessed>\
                 <BytesReturned>16</BytesReturned></Stats>",
            ),
            event("End", ""),
        ])?);

        let out = client.send::<SelectObjectContent>(select_input()).await?;
        let mut receiver = out.payload.expect("event stream");

        let mut records = Vec::new();
        let mut stats = None;
        let mut ended = false;
        while let Some(event) = receiver.recv().await? {
            match event {
                SelectObjectContentEvent::Records(r) => records.extend_from_slice(&r.payload),
                SelectObjectContentEvent::Stats(s) => stats = s.details,
                SelectObjectContentEvent::End(_) => ended = true,
                _ => {}
            }
        }
        assert_eq!(records, b"alice\nbob\ncarol\n");
        assert!(ended);
        let stats = stats.expect("stats event");
        assert_eq!(stats.bytes_scanned, Some(512));
        assert_eq!(stats.bytes_returned, Some(16));

        let request = transport.last_request().expect("request recorded");
        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.uri,
            "http://localhost:4566/data/people.csv?select=&select-type=2"
        );
        let body = request.body_text();
        assert!(body.contains("<SelectObjectContentRequest"));
        assert!(body.contains(
            "<Expression>SELECT name FROM S3Object WHERE age &gt; 30</Expression>"
        ));
        assert!(body.contains("<ExpressionType>SQL</ExpressionType>"));
        Ok(())
    }

    #[tokio::test]
    async fn test_should_surface_exception_frame_as_service_error() -> anyhow::Result<()> {
        let (client, transport) = s3_client();
        transport.reply(Reply::event_stream(&[
            event("Records", "partial\n"),
            Message::new("<Error><Message>column age does not exist</Message></Error>")
                .with_header(":message-type", "exception")
                .with_header(":exception-type", "InvalidColumnIndex"),
        ])?);

        let out = client.send::<SelectObjectContent>(select_input()).await?;
        let events: Vec<_> = out.payload.expect("event stream").collect().await;

        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], Ok(SelectObjectContentEvent::Records(_))));
        let err = events[1].as_ref().unwrap_err();
        let service = err.service_error().expect("service error");
        assert_eq!(service.kind, S3ErrorKind::Unhandled);
        assert_eq!(service.code, "InvalidColumnIndex");
        assert_eq!(service.message, "column age does not exist");
        assert_eq!(service.metadata.request_id.as_deref(), Some("mock-request"));
        Ok(())
    }

    #[tokio::test]
    async fn test_should_collect_events_as_stream() -> anyhow::Result<()> {
        let (client, transport) = s3_client();
        transport.reply(Reply::event_stream(&[
            event("Progress", "<Progress><BytesScanned>10</BytesScanned></Progress>"),
            event("End", ""),
        ])?);

        let out = client.send::<SelectObjectContent>(select_input()).await?;
        let events: Vec<_> = out.payload.expect("event stream").try_collect().await?;
        let types: Vec<_> = events.iter().map(SelectObjectContentEvent::event_type).collect();
        assert_eq!(types, ["Progress", "End"]);
        Ok(())
    }
}
