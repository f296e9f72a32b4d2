//! `SelectObjectContent` request shapes and event details.

use s3_restxml_model::types::{
    CSVInput, CSVOutput, InputSerialization, JSONInput, JSONOutput, OutputSerialization,
    ParquetInput, Progress, RequestProgress, ScanRange,
};
use s3_restxml_xml::{XmlMap, XmlNode, XmlResult};

use super::{XmlDeserialize, XmlNodeExt, XmlSerialize, member};

impl XmlSerialize for InputSerialization {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.shape("CSV", self.csv.as_ref())
            .scalar("CompressionType", self.compression_type.as_ref())
            .shape("JSON", self.json.as_ref())
            .shape("Parquet", self.parquet.as_ref());
        node
    }
}

impl XmlSerialize for CSVInput {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("FileHeaderInfo", self.file_header_info.as_ref())
            .scalar("Comments", self.comments.as_ref())
            .scalar("QuoteEscapeCharacter", self.quote_escape_character.as_ref())
            .scalar("RecordDelimiter", self.record_delimiter.as_ref())
            .scalar("FieldDelimiter", self.field_delimiter.as_ref())
            .scalar("QuoteCharacter", self.quote_character.as_ref())
            .scalar(
                "AllowQuotedRecordDelimiter",
                self.allow_quoted_record_delimiter.as_ref(),
            );
        node
    }
}

impl XmlSerialize for JSONInput {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("Type", self.r#type.as_ref());
        node
    }
}

impl XmlSerialize for ParquetInput {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        XmlNode::new(name)
    }
}

impl XmlSerialize for OutputSerialization {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.shape("CSV", self.csv.as_ref())
            .shape("JSON", self.json.as_ref());
        node
    }
}

impl XmlSerialize for CSVOutput {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("QuoteFields", self.quote_fields.as_ref())
            .scalar("QuoteEscapeCharacter", self.quote_escape_character.as_ref())
            .scalar("RecordDelimiter", self.record_delimiter.as_ref())
            .scalar("FieldDelimiter", self.field_delimiter.as_ref())
            .scalar("QuoteCharacter", self.quote_character.as_ref());
        node
    }
}

impl XmlSerialize for JSONOutput {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("RecordDelimiter", self.record_delimiter.as_ref());
        node
    }
}

impl XmlSerialize for RequestProgress {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("Enabled", self.enabled.as_ref());
        node
    }
}

impl XmlSerialize for ScanRange {
    fn to_xml_node(&self, name: &str) -> XmlNode {
        let mut node = XmlNode::new(name);
        node.scalar("Start", self.start.as_ref())
            .scalar("End", self.end.as_ref());
        node
    }
}

/// `Progress` and `Stats` event details.
impl XmlDeserialize for Progress {
    fn from_map(map: &XmlMap) -> XmlResult<Self> {
        Ok(Self {
            bytes_processed: member(map, "BytesProcessed")?,
            bytes_returned: member(map, "BytesReturned")?,
            bytes_scanned: member(map, "BytesScanned")?,
        })
    }
}
