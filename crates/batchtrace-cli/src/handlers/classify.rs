use anyhow::Result;
use batchtrace_engine::classify;
use tracing::debug;

use crate::presentation::ConsoleRenderer;
use crate::presentation::views::{ClassificationEntry, ClassifyView};

pub fn handle(biz_steps: &[String], renderer: &ConsoleRenderer) -> Result<()> {
    let entries: Vec<ClassificationEntry> = biz_steps
        .iter()
        .map(|step| ClassificationEntry {
            biz_step: step.clone(),
            event_type: classify(Some(step.as_str())),
        })
        .collect();

    debug!(count = entries.len(), "classified business steps");
    renderer.render(&entries, ClassifyView::new(&entries, renderer.color()))
}
