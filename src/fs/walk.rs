//! Manifest discovery and per-line rewriting.
//!
//! Walks the scan root, tracking the traversal depth of every manifest, and
//! stages the rewritten content of each one in a [`Transaction`].
//!
//! ## Depth
//!
//! Depth counts directories between the scan root and the manifest's
//! directory: `<root>/Cargo.toml` is at depth 0, `<root>/a/b/Cargo.toml` at
//! depth 2.

use crate::error::Result;
use crate::fs::transaction::Transaction;
use crate::rewrite::RewriteLine;
use std::fs;
use std::path::Path;

/// File name of the manifests that are rewritten.
pub const MANIFEST_NAME: &str = "Cargo.toml";

/// Directories never entered.
const SKIPPED_DIRS: &[&str] = &["target", ".git"];

/// Rewrites every manifest below `root` and stages the changed ones.
///
/// Returns the number of manifests visited.
///
/// # Errors
///
/// Fails on the first entry that cannot be listed or manifest that cannot be
/// read. Nothing is written here; writes happen on `Transaction::commit`.
pub fn rewrite_manifests<R: RewriteLine>(
    root: &Path,
    rewriter: &R,
    txn: &mut Transaction,
) -> Result<usize> {
    let walker = ignore::WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|e| {
            let is_dir = e.file_type().is_some_and(|ft| ft.is_dir());
            let name = e.file_name().to_str();
            !(is_dir && e.depth() > 0 && name.is_some_and(|n| SKIPPED_DIRS.contains(&n)))
        })
        .build();

    let mut visited = 0;
    for entry in walker {
        let entry = entry?;

        if entry.file_name() != MANIFEST_NAME {
            continue;
        }

        // Links are not followed into directories, but a linked manifest is
        // still a manifest.
        let is_manifest = match entry.file_type() {
            Some(ft) if ft.is_file() => true,
            Some(ft) if ft.is_symlink() => entry.path().is_file(),
            _ => false,
        };
        if !is_manifest {
            continue;
        }

        let depth = entry.depth().saturating_sub(1);
        rewrite_manifest(entry.path(), depth, rewriter, txn)?;
        visited += 1;
    }

    if visited == 0 {
        log::warn!("No {} found under {}", MANIFEST_NAME, root.display());
    }

    Ok(visited)
}

/// Rewrites one manifest found at `depth`, keeping line terminators.
fn rewrite_manifest<R: RewriteLine>(
    path: &Path,
    depth: usize,
    rewriter: &R,
    txn: &mut Transaction,
) -> Result<()> {
    let content = fs::read_to_string(path).map_err(|e| {
        std::io::Error::new(e.kind(), format!("Failed to read {}: {}", path.display(), e))
    })?;

    let mut rewritten = String::with_capacity(content.len());
    let mut declarations = 0;
    for line in content.split_inclusive('\n') {
        let new_line = rewriter.rewrite_line(line, depth);
        if new_line != line {
            declarations += 1;
        }
        rewritten.push_str(&new_line);
    }

    log::debug!(
        "Scanned {} (depth {}): {} declaration(s) rewritten",
        path.display(),
        depth,
        declarations
    );

    txn.update_file(path.to_path_buf(), content, rewritten, declarations)
}
