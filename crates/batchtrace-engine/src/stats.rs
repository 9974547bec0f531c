use batchtrace_types::BatchNode;

/// Shape statistics of a batch tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub node_count: usize,
    pub leaf_count: usize,
    /// Number of levels; a lone root has depth 1
    pub max_depth: usize,
}

pub fn tree_stats(root: Option<&BatchNode>) -> TreeStats {
    let mut stats = TreeStats::default();
    let Some(root) = root else {
        return stats;
    };

    let mut stack = vec![(root, 1usize)];
    while let Some((node, depth)) = stack.pop() {
        stats.node_count += 1;
        stats.max_depth = stats.max_depth.max(depth);
        if node.is_leaf() {
            stats.leaf_count += 1;
        }
        stack.extend(node.children().iter().map(|child| (child, depth + 1)));
    }

    stats
}
