use batchtrace_types::{EventType, TraceEvent};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::classify::classify;

/// A trace event paired with its canonical type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedEvent {
    pub event_id: Option<String>,
    /// EPCIS event class, e.g. `ObjectEvent`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_class: Option<String>,
    pub event_time: Option<DateTime<Utc>>,
    pub biz_step: Option<String>,
    pub event_type: EventType,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub epc_list: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSummary {
    pub total: usize,
    /// Only types that occurred at least once
    pub counts: BTreeMap<EventType, usize>,
    pub first_event_time: Option<DateTime<Utc>>,
    pub last_event_time: Option<DateTime<Utc>>,
    pub duration: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Duration {
    pub hours: i64,
    pub minutes: i64,
}

pub fn classify_event(event: &TraceEvent) -> ClassifiedEvent {
    ClassifiedEvent {
        event_id: event.event_id.clone(),
        event_class: event.event_class.clone(),
        event_time: event.event_time,
        biz_step: event.biz_step.clone(),
        event_type: classify(event.biz_step.as_deref()),
        epc_list: event.epc_list.clone(),
    }
}

/// Classify every event, keeping source order.
pub fn classify_events(events: &[TraceEvent]) -> Vec<ClassifiedEvent> {
    events.iter().map(classify_event).collect()
}

pub fn summarize_events(events: &[TraceEvent]) -> EventSummary {
    let mut counts = BTreeMap::new();
    for event in events {
        *counts.entry(classify(event.biz_step.as_deref())).or_insert(0) += 1;
    }

    // Source order is not guaranteed to be chronological
    let times = events.iter().filter_map(|e| e.event_time);
    let first_event_time = times.clone().min();
    let last_event_time = times.max();

    let duration = match (first_event_time, last_event_time) {
        (Some(start), Some(end)) => {
            let span = end.signed_duration_since(start);
            Some(Duration {
                hours: span.num_hours(),
                minutes: span.num_minutes() % 60,
            })
        }
        _ => None,
    };

    EventSummary {
        total: events.len(),
        counts,
        first_event_time,
        last_event_time,
        duration,
    }
}
