// Engine module - pure trace logic (classification, tree building, diagnostics)
// This layer sits between decoded input (types) and CLI presentation

pub mod classify;
pub mod diagnostics;
pub mod stats;
pub mod summary;
pub mod tree;

pub use classify::{BIZ_STEP_MARKERS, classify};
pub use diagnostics::{IssueKind, TreeIssue, validate_tree};
pub use stats::{TreeStats, tree_stats};
pub use summary::{
    ClassifiedEvent, Duration, EventSummary, classify_event, classify_events, summarize_events,
};
pub use tree::{build_tree, format_title};
