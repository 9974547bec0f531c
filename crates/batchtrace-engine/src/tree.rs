use batchtrace_types::{BatchNode, TreeNodeView, TreeViewModel};

/// Format the display title of a batch node.
///
/// `"{code} — {quantity}{unit} (Used: {used}, Remain: {remaining})"`.
/// Values are printed as supplied in positional notation; nothing is
/// cross-checked.
pub fn format_title(node: &BatchNode) -> String {
    format!(
        "{} — {}{} (Used: {}, Remain: {})",
        node.code,
        amount(node.quantity),
        node.unit,
        amount(node.used),
        amount(node.remaining)
    )
}

/// `-0` prints as `0`
fn amount(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

enum Visit<'a> {
    Enter(&'a BatchNode),
    Exit(&'a BatchNode),
}

/// Build the renderable view model for a batch trace.
///
/// Returns an empty model when there is no root, otherwise exactly one node
/// whose children mirror the source children in order. Traversal uses an
/// explicit stack, so tree depth is not limited by the call stack.
pub fn build_tree(root: Option<&BatchNode>) -> TreeViewModel {
    let Some(root) = root else {
        return Vec::new();
    };

    let mut stack = vec![Visit::Enter(root)];
    // Finished subtrees, in the order their roots were completed
    let mut built: Vec<TreeNodeView> = Vec::new();

    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Enter(node) => {
                stack.push(Visit::Exit(node));
                for child in node.children().iter().rev() {
                    stack.push(Visit::Enter(child));
                }
            }
            Visit::Exit(node) => {
                let children = built.split_off(built.len() - node.children().len());
                built.push(TreeNodeView {
                    title: format_title(node),
                    key: node.code.clone(),
                    children,
                });
            }
        }
    }

    built
}
