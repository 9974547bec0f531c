use serde::{Deserialize, Serialize};

/// One batch or sub-batch in a trace.
///
/// A trace is a tree owned by its root: children are held by value, so no
/// node can be reached from two parents and cycles cannot be expressed.
///
/// Quantity fields are taken as supplied. `remaining` is an independent
/// field and is never derived from `quantity - used`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchNode {
    /// Batch identifier, unique within one tree.
    pub code: String,

    /// Amount produced at this node.
    #[serde(default)]
    pub quantity: f64,

    /// Unit of measure (display only).
    #[serde(default)]
    pub unit: String,

    /// Amount of `quantity` already consumed downstream.
    #[serde(default)]
    pub used: f64,

    /// Amount still available.
    #[serde(default)]
    pub remaining: f64,

    /// Sub-lineage in source order. Absent and `null` both mean no children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BatchNode>>,
}

impl BatchNode {
    pub fn new(code: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            quantity,
            unit: unit.into(),
            used: 0.0,
            remaining: quantity,
            children: None,
        }
    }

    pub fn with_usage(mut self, used: f64, remaining: f64) -> Self {
        self.used = used;
        self.remaining = remaining;
        self
    }

    pub fn with_child(mut self, child: BatchNode) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Child nodes, empty when the source omitted them.
    pub fn children(&self) -> &[BatchNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }
}
