//! `upgrade`: move git declarations to a new repository and revision/branch.

use super::{ScanArgs, apply};
use crate::error::Result;
use crate::rewrite::{Strategy, UpgradeTarget};

use clap::{ArgGroup, Parser};
use colored::Colorize;

/// Arguments for the `upgrade` subcommand.
#[derive(Parser, Debug, Clone)]
#[command(group(ArgGroup::new("pin").required(true).args(["rev", "branch"])))]
pub struct UpgradeArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Repository owner; use a fork instead of upstream
    #[arg(long, value_name = "OWNER", default_value = "diem")]
    pub repo: String,

    /// Pin to this git revision
    #[arg(long, value_name = "REV")]
    pub rev: Option<String>,

    /// Pin to this git branch
    #[arg(long, value_name = "BRANCH")]
    pub branch: Option<String>,
}

impl UpgradeArgs {
    /// Validates the target; rejects both or neither of `--rev`/`--branch`.
    pub fn target(&self) -> Result<UpgradeTarget> {
        UpgradeTarget::new(self.repo.clone(), self.rev.clone(), self.branch.clone())
    }
}

/// Executes the `upgrade` command.
pub fn execute(args: UpgradeArgs) -> Result<()> {
    let target = args.target()?;
    let description = format!(
        "{} {}=\"{}\"",
        args.scan.remote_source().url(target.owner()),
        target.pin().key(),
        target.pin().value()
    );

    let txn = apply(&args.scan, Strategy::ToRemote(target))?;

    if !txn.is_dry_run() && !txn.is_empty() {
        println!(
            "{} {}",
            "✓ Upgraded to".green().bold(),
            description.yellow()
        );
    }

    Ok(())
}
