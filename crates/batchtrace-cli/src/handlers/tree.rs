use anyhow::{Context, Result, bail};
use batchtrace_engine::{build_tree, tree_stats, validate_tree};
use batchtrace_types::BatchNode;
use std::path::Path;
use tracing::{debug, info};

use crate::loader;
use crate::presentation::ConsoleRenderer;
use crate::presentation::views::TreeView;

pub struct TreeOptions {
    pub check: bool,
    pub strict: bool,
}

pub fn handle(input: &Path, options: TreeOptions, renderer: &ConsoleRenderer) -> Result<()> {
    let root = loader::load_batch_tree(input)
        .with_context(|| format!("Failed to load batch tree from {}", input.display()))?;

    if (options.check || options.strict)
        && let Some(root) = &root
    {
        report_issues(root, input, options.strict)?;
    }

    let model = build_tree(root.as_ref());
    let stats = tree_stats(root.as_ref());
    info!(
        nodes = stats.node_count,
        depth = stats.max_depth,
        "built trace tree"
    );

    renderer.render(&model, TreeView::new(&model, stats, renderer.color()))
}

fn report_issues(root: &BatchNode, input: &Path, strict: bool) -> Result<()> {
    let issues = validate_tree(root);
    debug!(count = issues.len(), "validated batch tree");

    for issue in &issues {
        eprintln!("Warning: {}", issue);
    }

    if strict && !issues.is_empty() {
        bail!(
            "{} inconsistenc{} found in {}",
            issues.len(),
            if issues.len() == 1 { "y" } else { "ies" },
            input.display()
        );
    }
    Ok(())
}
