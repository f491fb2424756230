//! Staged manifest writes with rollback support.
//!
//! Every rewritten manifest is staged first and written only on `commit()`,
//! so a bad parameter or an unreadable file aborts the run before anything on
//! disk changes.
//!
//! ## Execution Guarantees
//!
//! - **Atomic replace**: each file is written to a sibling temporary file and
//!   renamed over the original; readers never see a half-written manifest
//! - **Rollback**: if a write fails, files already written are restored (LIFO)
//! - **Validation**: staged paths are checked before the first write
//! - **Idempotency**: files with unchanged content are never staged
//!
//! ## Example
//!
//! ```no_run
//! # use move_dep::fs::Transaction;
//! # use std::path::PathBuf;
//! # fn example() -> move_dep::error::Result<()> {
//! let mut txn = Transaction::new(false);
//!
//! txn.update_file(
//!     PathBuf::from("crates/core/Cargo.toml"),
//!     "[dependencies]\n".into(),
//!     "[dependencies]\nserde = \"1\"\n".into(),
//!     1,
//! )?;
//!
//! txn.commit()?;
//! # Ok(())
//! # }
//! ```

use crate::error::{MoveDepError, Result};

use colored::Colorize;
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A staged manifest rewrite.
#[derive(Debug, Clone)]
pub struct Operation {
    pub path: PathBuf,
    pub original: String,
    pub new: String,
    /// Number of declarations rewritten in this file.
    pub declarations: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransactionState {
    /// Staging operations.
    Building,
    /// All operations succeeded.
    Committed,
    /// Commit failed and written files were restored.
    RolledBack,
    /// Validation or rollback failed.
    Failed,
}

/// Transaction coordinating manifest writes.
///
/// Must be explicitly committed. If dropped without committing, logs a warning;
/// nothing was written, so nothing needs undoing.
///
/// ## Dry-Run Mode
///
/// When `dry_run = true`, operations are staged but never written.
#[must_use = "Transaction must be committed"]
pub struct Transaction {
    operations: Vec<Operation>,
    dry_run: bool,
    state: TransactionState,
}

impl Transaction {
    pub fn new(dry_run: bool) -> Self {
        Self {
            operations: Vec::new(),
            dry_run,
            state: TransactionState::Building,
        }
    }

    /// Stages a file update.
    ///
    /// `original` is the content the rewrite was computed from. If it equals
    /// `new_content`, nothing is staged.
    pub fn update_file(
        &mut self,
        path: PathBuf,
        original: String,
        new_content: String,
        declarations: usize,
    ) -> Result<()> {
        if self.state != TransactionState::Building {
            return Err(MoveDepError::Other(anyhow::anyhow!(
                "Cannot modify transaction after commit"
            )));
        }

        if original == new_content {
            log::debug!("Content unchanged, skipping: {}", path.display());
            return Ok(());
        }

        if self.dry_run {
            log::info!("Would update: {}", path.display());
        } else {
            log::debug!("Staging update for: {}", path.display());
        }

        self.operations.push(Operation {
            path,
            original,
            new: new_content,
            declarations,
        });

        Ok(())
    }

    /// Checks:
    /// - No duplicate file operations
    /// - Files still exist
    /// - Files are writable
    fn validate(&self) -> Result<()> {
        let mut file_paths = HashSet::new();

        for op in &self.operations {
            // Two symlinks to one manifest are still one file.
            let target = fs::canonicalize(&op.path).unwrap_or_else(|_| op.path.clone());
            if !file_paths.insert(target) {
                return Err(MoveDepError::Other(anyhow::anyhow!(
                    "Duplicate file operation: {}",
                    op.path.display()
                )));
            }

            let metadata = fs::metadata(&op.path).map_err(|e| {
                MoveDepError::Io(std::io::Error::new(
                    e.kind(),
                    format!("File no longer accessible: {}: {}", op.path.display(), e),
                ))
            })?;

            if metadata.permissions().readonly() {
                return Err(MoveDepError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    format!("File is read-only: {}", op.path.display()),
                )));
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns true if successfully committed.
    pub fn is_committed(&self) -> bool {
        self.state == TransactionState::Committed
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Writes all staged files.
    ///
    /// On failure, restores every file written so far and returns the
    /// original error.
    pub fn commit(&mut self) -> Result<()> {
        if self.state != TransactionState::Building {
            return Err(MoveDepError::Other(anyhow::anyhow!(
                "Transaction already committed"
            )));
        }

        if self.dry_run {
            self.state = TransactionState::Committed;
            return Ok(());
        }

        if let Err(e) = self.validate() {
            self.state = TransactionState::Failed;
            return Err(e);
        }

        let mut written = Vec::new();
        for (idx, op) in self.operations.iter().enumerate() {
            if let Err(e) = replace_file(&op.path, &op.new) {
                log::error!("Failed to write {}: {}", op.path.display(), e);
                return match self.rollback(&written) {
                    Ok(()) => {
                        self.state = TransactionState::RolledBack;
                        Err(e)
                    }
                    Err(rollback_err) => {
                        self.state = TransactionState::Failed;
                        Err(rollback_err)
                    }
                };
            }
            written.push(idx);
            log::debug!("Updated: {}", op.path.display());
        }

        log::info!("Committed {} manifest(s)", self.operations.len());
        self.state = TransactionState::Committed;
        Ok(())
    }

    /// Restores the given operations' original content, newest first.
    fn rollback(&self, executed: &[usize]) -> Result<()> {
        let mut errors = Vec::new();

        for &idx in executed.iter().rev() {
            let op = &self.operations[idx];
            if let Err(e) = replace_file(&op.path, &op.original) {
                errors.push(format!("Failed to restore {}: {}", op.path.display(), e));
            }
        }

        if errors.is_empty() {
            log::info!("Rollback completed");
            Ok(())
        } else {
            Err(MoveDepError::RollbackFailed(errors.join("; ")))
        }
    }

    /// Returns operation statistics.
    pub fn stats(&self) -> TransactionStats {
        TransactionStats {
            files_updated: self.operations.len(),
            declarations: self.operations.iter().map(|op| op.declarations).sum(),
        }
    }

    /// Prints the list of modified manifests to stdout.
    ///
    /// Paths are relative to `root` with forward slashes.
    pub fn print_summary(&self, root: &Path) {
        if self.operations.is_empty() {
            println!("\n{}", "No changes needed".yellow());
            return;
        }

        let display_path = |path: &Path| -> String {
            let relative = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
            relative.to_string_lossy().replace('\\', "/")
        };

        if self.dry_run {
            println!("\n{}", "DRY RUN - No changes will be made".yellow().bold());
        } else {
            println!("\n{}", "Changes applied:".green().bold());
        }

        let mut manifests: Vec<_> = self
            .operations
            .iter()
            .map(|op| (display_path(&op.path), op.declarations))
            .collect();
        manifests.sort();

        println!(
            "\n{} Manifests ({} file{})",
            "📦".bold(),
            manifests.len(),
            if manifests.len() == 1 { "" } else { "s" }
        );
        for (path, declarations) in &manifests {
            let count = format!(
                "({} declaration{})",
                declarations,
                if *declarations == 1 { "" } else { "s" }
            );
            if self.dry_run {
                println!("   • {} {}", path.dimmed(), count.dimmed());
            } else {
                println!("   {} {} {}", "✓".green(), path.dimmed(), count.dimmed());
            }
        }

        println!();
        let stats = self.stats();
        if self.dry_run {
            println!(
                "{} {} will be modified. Run without {} to apply.",
                stats.files_updated.to_string().cyan().bold(),
                if stats.files_updated > 1 { "files" } else { "file" },
                "--dry-run".cyan()
            );
        } else {
            println!("{} {}", "✓".green().bold(), completion_message(&stats));
        }
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if self.state == TransactionState::Building && !self.operations.is_empty() && !self.dry_run
        {
            log::warn!("Transaction dropped without commit");
        }
    }
}

/// Statistics about staged operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionStats {
    pub files_updated: usize,
    pub declarations: usize,
}

fn completion_message(stats: &TransactionStats) -> String {
    format!(
        "Rewrote {} declaration{} in {} file{}",
        stats.declarations,
        if stats.declarations == 1 { "" } else { "s" },
        stats.files_updated,
        if stats.files_updated == 1 { "" } else { "s" }
    )
}

/// Replaces `path` with `content` through a temporary file in the same directory.
///
/// A symlinked manifest is written through: the link's target is replaced and
/// the link itself is left in place.
fn replace_file(path: &Path, content: &str) -> Result<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = target.parent().unwrap_or_else(|| Path::new("."));

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;

    // Keep the manifest's permissions; the temporary file is created 0600.
    if let Ok(metadata) = fs::metadata(&target) {
        fs::set_permissions(tmp.path(), metadata.permissions())?;
    }

    tmp.persist(&target).map_err(|e| {
        MoveDepError::Io(std::io::Error::new(
            e.error.kind(),
            format!("Failed to write {}: {}", path.display(), e.error),
        ))
    })?;

    Ok(())
}
