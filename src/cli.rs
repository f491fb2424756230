use crate::steps::local::LocalArgs;
use crate::steps::upgrade::UpgradeArgs;
use clap::{ArgAction, Parser, Subcommand};

/// Manage the git dependency on the Move repository across every Cargo.toml.
#[derive(Parser)]
#[command(name = "move-dep", version, about, long_about = None)]
pub struct MoveDepCli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Switch git dependencies to paths into a local checkout.
    Local(LocalArgs),
    /// Point git dependencies at another repository, revision or branch.
    Upgrade(UpgradeArgs),
}

impl MoveDepCli {
    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
