//! Test fixture loader for debuget golden scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

use debuget_core::models::{Category, ErrorDescriptor};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures/golden.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// One golden classification scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub descriptor: ErrorDescriptor,
    pub category: Category,
    pub explanation: String,
    pub header: String,
}

/// All classification scenarios in `golden/scenarios.json`.
pub fn scenarios() -> Vec<Scenario> {
    load_fixture("golden/scenarios.json")
}

/// Raw V8-style stack text fixture.
pub fn v8_stack() -> String {
    load_fixture_text("golden/stacks/v8.txt")
}

/// Raw Rust backtrace text fixture.
pub fn rust_backtrace() -> String {
    load_fixture_text("golden/stacks/rust_backtrace.txt")
}

fn load_fixture_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}
