//! Local checkout layout: where each package lives relative to a manifest.
//!
//! The local checkout is expected next to the scan root, so a manifest at
//! traversal depth `d` reaches it through `d + 1` parent steps:
//!
//! ```text
//! <parent>/
//! ├── sui/                  scan root
//! │   ├── Cargo.toml        depth 0  -> ../move/language/...
//! │   └── crates/core/
//! │       └── Cargo.toml    depth 2  -> ../../../move/language/...
//! └── move/language/...     local checkout
//! ```

use std::collections::HashMap;

/// Default directory, relative to the scan root's parent, holding the packages.
pub const DEFAULT_BASE_DIR: &str = "move/language";

/// Packages whose directory differs from their name.
const DEFAULT_OVERRIDES: &[(&str, &str)] = &[
    ("move-bytecode-utils", "tools/move-bytecode-utils"),
    ("move-cli", "tools/move-cli"),
    ("move-core-types", "move-core/types"),
    ("move-package", "tools/move-package"),
    ("move-unit-test", "tools/move-unit-test"),
    ("move-vm-runtime", "move-vm/runtime"),
    ("move-vm-types", "move-vm/types"),
];

/// Returns the parent-directory prefix for a manifest at `depth`.
///
/// Always exactly `depth + 1` `../` segments.
pub fn parent_prefix(depth: usize) -> String {
    "../".repeat(depth + 1)
}

/// Package name to subpath table for local path rewrites.
///
/// Built once at startup and passed to the rewrite; never mutated during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMap {
    base_dir: String,
    overrides: HashMap<String, String>,
}

impl PathMap {
    /// Creates an empty table rooted at `base_dir`.
    pub fn new(base_dir: impl Into<String>) -> Self {
        let base_dir = base_dir.into();
        Self {
            base_dir: base_dir.trim_end_matches('/').to_string(),
            overrides: HashMap::new(),
        }
    }

    /// Creates the built-in table rooted at `base_dir`.
    pub fn with_defaults(base_dir: impl Into<String>) -> Self {
        DEFAULT_OVERRIDES
            .iter()
            .fold(Self::new(base_dir), |map, (name, subpath)| {
                map.with_override(*name, *subpath)
            })
    }

    /// Adds or replaces the subpath for `name`.
    pub fn with_override(mut self, name: impl Into<String>, subpath: impl Into<String>) -> Self {
        let subpath = subpath.into();
        self.overrides
            .insert(name.into(), subpath.trim_matches('/').to_string());
        self
    }

    pub fn base_dir(&self) -> &str {
        &self.base_dir
    }

    /// Subpath of `name` under the base directory; the name itself if unmapped.
    pub fn subpath<'a>(&'a self, name: &'a str) -> &'a str {
        self.overrides.get(name).map(String::as_str).unwrap_or(name)
    }

    /// Relative path from a manifest at `depth` to the package `name`.
    pub fn local_path(&self, name: &str, depth: usize) -> String {
        let prefix = parent_prefix(depth);
        let subpath = self.subpath(name);
        if self.base_dir.is_empty() {
            format!("{}{}", prefix, subpath)
        } else {
            format!("{}{}/{}", prefix, self.base_dir, subpath)
        }
    }
}

impl Default for PathMap {
    fn default() -> Self {
        Self::with_defaults(DEFAULT_BASE_DIR)
    }
}
