pub mod validator;

pub use validator::{IssueKind, TreeIssue, validate_tree};
