//! Shared fixtures for move-dep integration tests.
//!
//! Tests build a throwaway tree of manifests and run the real binary against it.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Workspace root manifest (depth 0).
#[allow(unused)]
pub const ROOT_MANIFEST: &str = r#"[workspace]
members = ["sui-core", "crates/sui-framework"]

[workspace.dependencies]
move-core-types = { git = "https://github.com/diem/move", rev="abc123", features = ["address20"] }
"#;

/// Member manifest (depth 1).
#[allow(unused)]
pub const CORE_MANIFEST: &str = r#"[package]
name = "sui-core"
version = "0.1.0"
edition = "2021"

[dependencies]
serde = { version = "1", features = ["derive"] }
move-cli = { git = "https://github.com/diem/move", branch="main", default-features = false }
move-vm-runtime = { git = "https://github.com/diem/move", rev="abc123" }
local-thing = { path = "../local-thing" }
"#;

/// Nested manifest (depth 2), indented declaration.
#[allow(unused)]
pub const NESTED_MANIFEST: &str = r#"[package]
name = "sui-framework"
version = "0.1.0"

[dependencies]
  foo-pkg = { git = "https://github.com/diem/move", rev="abc123" }
"#;

/// Creates a tree with manifests at depths 0, 1 and 2.
#[allow(unused)]
pub fn create_test_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "Cargo.toml", ROOT_MANIFEST);
    write(temp.path(), "sui-core/Cargo.toml", CORE_MANIFEST);
    write(temp.path(), "sui-core/src/lib.rs", "pub fn core() {}\n");
    write(temp.path(), "crates/sui-framework/Cargo.toml", NESTED_MANIFEST);
    temp
}

/// Writes `content` to `root/rel`, creating parent directories.
#[allow(unused)]
pub fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Reads `root/rel`.
#[allow(unused)]
pub fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

/// Runs `move-dep <args> --root <root>`.
#[allow(unused)]
pub fn run_move_dep(root: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("move-dep");
    cmd.args(args).arg("--root").arg(root).env("NO_COLOR", "1");

    cmd.assert()
}
