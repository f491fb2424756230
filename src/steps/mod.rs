//! Orchestration of the `local` and `upgrade` commands.
//!
//! Both commands share one pipeline:
//!
//! 1. Validate parameters (no I/O)
//! 2. Pre-flight checks on the scan root
//! 3. Walk the tree and stage every rewritten manifest
//! 4. Commit atomically (skipped with `--dry-run`)
//! 5. Print a summary
//!
//! Any failure in steps 1-3 returns before a single file is written.

pub mod local;
pub mod upgrade;

use crate::cargo::RemoteSource;
use crate::error::Result;
use crate::fs::{Transaction, rewrite_manifests};
use crate::rewrite::{LineRewriter, Strategy};
use crate::verify::preflight_checks;

use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Directory to scan for Cargo.toml files
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Show what would change without writing any file
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Git host the repository lives on
    #[arg(long, value_name = "URL", default_value = RemoteSource::DEFAULT_HOST)]
    pub git_host: String,

    /// Repository (project) name under each owner
    #[arg(long, value_name = "NAME", default_value = RemoteSource::DEFAULT_PROJECT)]
    pub project: String,
}

impl ScanArgs {
    pub fn remote_source(&self) -> RemoteSource {
        RemoteSource::new(&self.git_host, &self.project)
    }
}

/// Runs one scan with a fully validated strategy.
///
/// Returns the committed (or dry-run) transaction.
pub fn apply(scan: &ScanArgs, strategy: Strategy) -> Result<Transaction> {
    let root = preflight_checks(&scan.root)?;
    let rewriter = LineRewriter::new(scan.remote_source(), strategy)?;

    let mut txn = Transaction::new(scan.dry_run);
    let visited = rewrite_manifests(&root, &rewriter, &mut txn)?;
    log::info!(
        "Scanned {} manifest(s), {} to update",
        visited,
        txn.len()
    );

    if let Err(e) = txn.commit() {
        eprintln!("{} {}", "Error during commit:".red().bold(), e);
        return Err(e);
    }

    txn.print_summary(&root);
    Ok(txn)
}
