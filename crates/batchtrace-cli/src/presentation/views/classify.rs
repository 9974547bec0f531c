use std::fmt;

use batchtrace_types::EventType;
use serde::Serialize;

use super::event_type_label;

#[derive(Debug, Serialize)]
pub struct ClassificationEntry {
    pub biz_step: String,
    pub event_type: EventType,
}

/// One `<biz_step>\t<event_type>` line per entry
pub struct ClassifyView<'a> {
    entries: &'a [ClassificationEntry],
    color: bool,
}

impl<'a> ClassifyView<'a> {
    pub fn new(entries: &'a [ClassificationEntry], color: bool) -> Self {
        Self { entries, color }
    }
}

impl fmt::Display for ClassifyView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.entries {
            writeln!(
                f,
                "{}\t{}",
                entry.biz_step,
                event_type_label(entry.event_type, 0, self.color)
            )?;
        }
        Ok(())
    }
}
