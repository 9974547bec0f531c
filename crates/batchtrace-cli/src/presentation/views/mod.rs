pub mod classify;
pub mod events;
pub mod tree;

pub use classify::{ClassificationEntry, ClassifyView};
pub use events::{EventsOutput, EventsView};
pub use tree::TreeView;

use batchtrace_types::EventType;
use owo_colors::OwoColorize;

/// Left-aligned event type label, colored per type when `color` is set.
pub(crate) fn event_type_label(kind: EventType, width: usize, color: bool) -> String {
    let padded = format!("{:<width$}", kind.as_str(), width = width);
    if !color {
        return padded;
    }

    match kind {
        EventType::Commissioning => padded.green().to_string(),
        EventType::Transformation => padded.magenta().to_string(),
        EventType::Packing => padded.yellow().to_string(),
        EventType::Shipping => padded.blue().to_string(),
        EventType::Receiving => padded.cyan().to_string(),
        EventType::Observation => padded.dimmed().to_string(),
    }
}
