use std::fmt;

use batchtrace_engine::TreeStats;
use batchtrace_types::{TreeNodeView, TreeViewModel};
use owo_colors::OwoColorize;

// --------------------------------------------------------
// Trace Tree View
// --------------------------------------------------------

pub struct TreeView<'a> {
    model: &'a TreeViewModel,
    stats: TreeStats,
    color: bool,
}

impl<'a> TreeView<'a> {
    pub fn new(model: &'a TreeViewModel, stats: TreeStats, color: bool) -> Self {
        Self {
            model,
            stats,
            color,
        }
    }

    fn write_title(&self, f: &mut fmt::Formatter, node: &TreeNodeView) -> fmt::Result {
        match node.title.strip_prefix(node.key.as_str()) {
            Some(rest) if self.color => writeln!(f, "{}{}", node.key.bold(), rest),
            _ => writeln!(f, "{}", node.title),
        }
    }

    fn write_stats(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let noun = if self.stats.node_count == 1 {
            "batch"
        } else {
            "batches"
        };
        let line = format!(
            "{} {}, depth {}",
            self.stats.node_count, noun, self.stats.max_depth
        );
        if self.color {
            writeln!(f, "{}", line.dimmed())
        } else {
            writeln!(f, "{}", line)
        }
    }
}

impl fmt::Display for TreeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Some(root) = self.model.first() else {
            return writeln!(f, "No batches.");
        };

        self.write_title(f, root)?;

        // (node, indent, is_last)
        let mut stack: Vec<(&TreeNodeView, String, bool)> = Vec::new();
        push_children(&mut stack, root, String::new());

        while let Some((node, indent, is_last)) = stack.pop() {
            let prefix = if is_last { "└── " } else { "├── " };
            let continuation = if is_last { "    " } else { "│   " };

            write!(f, "{}{}", indent, prefix)?;
            self.write_title(f, node)?;
            push_children(&mut stack, node, format!("{}{}", indent, continuation));
        }

        writeln!(f)?;
        self.write_stats(f)
    }
}

fn push_children<'a>(
    stack: &mut Vec<(&'a TreeNodeView, String, bool)>,
    node: &'a TreeNodeView,
    indent: String,
) {
    let count = node.children.len();
    for (idx, child) in node.children.iter().enumerate().rev() {
        stack.push((child, indent.clone(), idx + 1 == count));
    }
}
