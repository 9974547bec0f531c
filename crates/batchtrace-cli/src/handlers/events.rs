use anyhow::{Context, Result};
use batchtrace_engine::{classify_events, summarize_events};
use std::path::Path;
use tracing::info;

use crate::loader;
use crate::presentation::ConsoleRenderer;
use crate::presentation::views::{EventsOutput, EventsView};

pub fn handle(input: &Path, renderer: &ConsoleRenderer) -> Result<()> {
    let events = loader::load_events(input)
        .with_context(|| format!("Failed to load events from {}", input.display()))?;

    let output = EventsOutput {
        events: classify_events(&events),
        summary: summarize_events(&events),
    };
    info!(total = output.summary.total, "classified events");

    renderer.render(&output, EventsView::new(&output, renderer.color()))
}
