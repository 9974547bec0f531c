//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const THREE_LEVEL_TREE: &str = r#"{
    "code": "LOT-1",
    "quantity": 500,
    "unit": "kg",
    "used": 200,
    "remaining": 300,
    "children": [
        {
            "code": "LOT-1A",
            "quantity": 200,
            "unit": "kg",
            "used": 200,
            "remaining": 0,
            "children": [
                { "code": "PKG-7", "quantity": 40, "unit": "box", "used": 0, "remaining": 40 }
            ]
        },
        { "code": "LOT-1B", "quantity": 300, "unit": "kg", "used": 0, "remaining": 300 }
    ]
}"#;

/// A single-child chain of `depth` batches, `L0` at the root.
pub fn chain_tree(depth: usize) -> String {
    let opening: Vec<String> = (0..depth)
        .map(|level| {
            format!(
                r#"{{"code":"L{}","quantity":1,"unit":"kg","used":1,"remaining":0"#,
                level
            )
        })
        .collect();
    let mut json = opening.join(r#","children":["#);
    json.push_str(&"}]".repeat(depth.saturating_sub(1)));
    json.push('}');
    json
}

pub struct TestFixture {
    temp_dir: TempDir,
    config_path: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        // Not created by default: a missing config means defaults
        let config_path = temp_dir.path().join("config.toml");

        Self {
            temp_dir,
            config_path,
        }
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    pub fn write_config(&self, content: &str) {
        fs::write(&self.config_path, content).expect("Failed to write config");
    }

    /// `batchtrace` isolated from the user's environment.
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("batchtrace").expect("Failed to find binary");
        cmd.env("BATCHTRACE_CONFIG", &self.config_path)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}
