//! Events of the `SelectObjectContent` response stream.

use bytes::Bytes;

use crate::types::{Progress, Stats};

/// One event of a `SelectObjectContent` response.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectObjectContentEvent {
    /// A chunk of query results.
    Records(RecordsEvent),
    /// Final scan statistics.
    Stats(StatsEvent),
    /// Progress so far.
    Progress(ProgressEvent),
    /// Keep-alive sent while the query is still running.
    Cont(ContinuationEvent),
    /// The query finished; no more events follow.
    End(EndEvent),
    /// An event type this model does not describe.
    Unknown {
        /// Value of the `:event-type` header.
        event_type: String,
        /// Raw frame payload.
        payload: Bytes,
    },
}

impl SelectObjectContentEvent {
    /// The event type name as sent on the wire.
    #[must_use]
    pub fn event_type(&self) -> &str {
        match self {
            Self::Records(_) => "Records",
            Self::Stats(_) => "Stats",
            Self::Progress(_) => "Progress",
            Self::Cont(_) => "Cont",
            Self::End(_) => "End",
            Self::Unknown { event_type, .. } => event_type,
        }
    }
}

/// S3 RecordsEvent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordsEvent {
    pub payload: Bytes,
}

/// S3 StatsEvent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsEvent {
    pub details: Option<Stats>,
}

/// S3 ProgressEvent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressEvent {
    pub details: Option<Progress>,
}

/// S3 ContinuationEvent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContinuationEvent;

/// S3 EndEvent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EndEvent;
