use serde::Serialize;

/// One renderable node of a trace tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNodeView {
    /// Display string for the node
    pub title: String,
    /// Source batch code
    pub key: String,
    pub children: Vec<TreeNodeView>,
}

/// Renderable trace tree: empty when there is no root, otherwise one element.
pub type TreeViewModel = Vec<TreeNodeView>;
