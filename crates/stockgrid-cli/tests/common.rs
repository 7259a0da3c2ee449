//! Shared helpers for the CLI integration tests.
//!
//! Clippy cannot track usage across integration test files, hence the
//! `allow(dead_code)` annotation.
#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use stockgrid_testing::TestWorld;

/// `stockgrid` wired to the world's data dir and catalog
pub fn stockgrid(world: &TestWorld) -> Command {
    let mut cmd = cargo_bin_cmd!("stockgrid");
    world.configure_command(&mut cmd);
    cmd
}

/// Run with `--format json` and return the `content` object
pub fn json_content(world: &TestWorld, args: &[&str]) -> Value {
    let output = stockgrid(world)
        .args(args)
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run stockgrid");
    assert!(
        output.status.success(),
        "stockgrid {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );

    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    value["content"].clone()
}
