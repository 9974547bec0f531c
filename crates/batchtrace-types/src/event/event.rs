use chrono::{DateTime, Utc};
use serde::Deserialize;

// NOTE: Event source contract
//
// Events arrive already fetched from an EPCIS repository. Only the fields the
// trace view needs are modelled here; everything is optional because partially
// populated backend records must still be classifiable. Unknown fields are
// ignored on read.

/// A single traceability event as supplied by the event source
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TraceEvent {
    /// Event identifier (usually `urn:uuid:...`)
    #[serde(rename = "eventID", default)]
    pub event_id: Option<String>,

    /// EPCIS event class (ObjectEvent, TransformationEvent, ...)
    #[serde(rename = "type", default)]
    pub event_class: Option<String>,

    #[serde(rename = "eventTime", default)]
    pub event_time: Option<DateTime<Utc>>,

    /// Raw business step, e.g. `urn:epcglobal:cbv:bizstep:shipping`
    #[serde(rename = "bizStep", default)]
    pub biz_step: Option<String>,

    #[serde(rename = "epcList", default)]
    pub epc_list: Vec<String>,
}
