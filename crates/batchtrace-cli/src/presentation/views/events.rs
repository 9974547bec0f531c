use std::fmt;

use batchtrace_engine::{ClassifiedEvent, EventSummary};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::event_type_label;

const TYPE_WIDTH: usize = 14;

/// JSON shape of the `events` command
#[derive(Debug, Serialize)]
pub struct EventsOutput {
    pub events: Vec<ClassifiedEvent>,
    pub summary: EventSummary,
}

pub struct EventsView<'a> {
    data: &'a EventsOutput,
    color: bool,
}

impl<'a> EventsView<'a> {
    pub fn new(data: &'a EventsOutput, color: bool) -> Self {
        Self { data, color }
    }

    fn write_event(&self, f: &mut fmt::Formatter, event: &ClassifiedEvent) -> fmt::Result {
        let time = event
            .event_time
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string());

        writeln!(
            f,
            "{:<19}  {}  {}  {}",
            time,
            event_type_label(event.event_type, TYPE_WIDTH, self.color),
            event.event_id.as_deref().unwrap_or("-"),
            event.biz_step.as_deref().unwrap_or("-"),
        )
    }

    fn write_summary(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let summary = &self.data.summary;
        let heading = "Summary:";
        if self.color {
            write!(f, "{}", heading.bold())?;
        } else {
            write!(f, "{}", heading)?;
        }

        let noun = if summary.total == 1 { "event" } else { "events" };
        write!(f, " {} {}", summary.total, noun)?;
        if let Some(duration) = &summary.duration {
            write!(f, " over {}h {}m", duration.hours, duration.minutes)?;
        }
        writeln!(f)?;

        for (kind, count) in &summary.counts {
            writeln!(
                f,
                "  {}  {}",
                event_type_label(*kind, TYPE_WIDTH, self.color),
                count
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for EventsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.events.is_empty() {
            return writeln!(f, "No events found.");
        }

        for event in &self.data.events {
            self.write_event(f, event)?;
        }
        writeln!(f)?;
        self.write_summary(f)
    }
}
