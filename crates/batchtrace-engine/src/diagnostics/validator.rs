use std::collections::HashSet;
use std::fmt;

use batchtrace_types::BatchNode;

const REMAINING_TOLERANCE: f64 = 1e-9;

/// Category of quantity or identity inconsistency in a batch tree.
#[derive(Debug, Clone, PartialEq)]
pub enum IssueKind {
    /// A quantity field is below zero.
    NegativeValue { field: &'static str, value: f64 },
    /// More was consumed than produced.
    UsedExceedsQuantity { used: f64, quantity: f64 },
    /// `remaining` differs from `quantity - used`.
    RemainingMismatch { expected: f64, actual: f64 },
    /// The code was already used by an earlier node in the same tree.
    DuplicateCode,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::NegativeValue { field, value } => {
                write!(f, "negative {} ({})", field, value)
            }
            IssueKind::UsedExceedsQuantity { used, quantity } => {
                write!(f, "used {} exceeds quantity {}", used, quantity)
            }
            IssueKind::RemainingMismatch { expected, actual } => {
                write!(f, "remaining {} but quantity - used is {}", actual, expected)
            }
            IssueKind::DuplicateCode => write!(f, "duplicate code"),
        }
    }
}

/// An inconsistency found at one node.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeIssue {
    /// Code of the offending node.
    pub code: String,
    pub kind: IssueKind,
}

impl fmt::Display for TreeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.kind)
    }
}

/// Check a batch tree for quantity and identity inconsistencies.
///
/// Issues are reported in pre-order. The tree itself is left untouched;
/// building a view from an inconsistent tree is still valid.
pub fn validate_tree(root: &BatchNode) -> Vec<TreeIssue> {
    let mut issues = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        check_node(node, &mut seen, &mut issues);
        stack.extend(node.children().iter().rev());
    }

    issues
}

fn check_node<'a>(node: &'a BatchNode, seen: &mut HashSet<&'a str>, issues: &mut Vec<TreeIssue>) {
    let mut push = |kind: IssueKind| {
        issues.push(TreeIssue {
            code: node.code.clone(),
            kind,
        })
    };

    if !seen.insert(node.code.as_str()) {
        push(IssueKind::DuplicateCode);
    }

    for (field, value) in [
        ("quantity", node.quantity),
        ("used", node.used),
        ("remaining", node.remaining),
    ] {
        if value < 0.0 {
            push(IssueKind::NegativeValue { field, value });
        }
    }

    if node.used > node.quantity {
        push(IssueKind::UsedExceedsQuantity {
            used: node.used,
            quantity: node.quantity,
        });
    }

    let expected = node.quantity - node.used;
    if (expected - node.remaining).abs() > REMAINING_TOLERANCE {
        push(IssueKind::RemainingMismatch {
            expected,
            actual: node.remaining,
        });
    }
}
