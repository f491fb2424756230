//! `local`: switch git declarations to local paths.

use super::{ScanArgs, apply};
use crate::cargo::{DEFAULT_BASE_DIR, PathMap};
use crate::error::Result;
use crate::rewrite::Strategy;
use crate::verify::{parse_mapping, validate_base_dir};

use clap::Parser;
use colored::Colorize;

/// Arguments for the `local` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct LocalArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Directory holding the packages, relative to the scan root's parent
    #[arg(long, value_name = "DIR", default_value = DEFAULT_BASE_DIR)]
    pub base_dir: String,

    /// Extra package location under the base directory (repeatable)
    ///
    /// Example:
    ///   --map move-prover=move-prover/core
    #[arg(long, value_name = "NAME=SUBPATH", verbatim_doc_comment)]
    pub map: Vec<String>,
}

impl LocalArgs {
    /// Builds the path table: built-in entries, then `--map` overrides.
    pub fn path_map(&self) -> Result<PathMap> {
        validate_base_dir(&self.base_dir)?;

        self.map.iter().try_fold(
            PathMap::with_defaults(self.base_dir.as_str()),
            |paths, entry| -> Result<PathMap> {
                let (name, subpath) = parse_mapping(entry)?;
                log::debug!("Path override: {} -> {}", name, subpath);
                Ok(paths.with_override(name, subpath))
            },
        )
    }
}

/// Executes the `local` command.
pub fn execute(args: LocalArgs) -> Result<()> {
    let paths = args.path_map()?;
    let txn = apply(&args.scan, Strategy::ToLocal(paths))?;

    if !txn.is_dry_run() && !txn.is_empty() {
        println!(
            "{} {}",
            "✓ Switched to local paths under".green().bold(),
            args.base_dir.yellow()
        );
    }

    Ok(())
}
