//! Toggle the git dependency on an external repository across a tree of
//! `Cargo.toml` files.
//!
//! - `move-dep local` rewrites every
//!   `name = { git = "https://github.com/<owner>/move", rev="..." }` declaration
//!   into `name = { path = "../move/language/<subpath>" }`, with as many `../`
//!   segments as the manifest's depth requires.
//! - `move-dep upgrade --rev <REV>` (or `--branch <BRANCH>`) points every such
//!   declaration at a new revision or branch, optionally of a fork (`--repo`).
//!
//! Only matching declaration lines change; every other byte of every manifest
//! is preserved.

pub mod cargo;
pub mod cli;
pub mod error;
pub mod fs;
pub mod rewrite;
pub mod steps;
pub mod verify;

pub use error::*;

pub fn run() -> Result<()> {
    use clap::Parser;
    use cli::Command;

    let cli = cli::MoveDepCli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .format_timestamp(None)
        .init();

    match cli.command {
        Command::Local(args) => steps::local::execute(args),
        Command::Upgrade(args) => steps::upgrade::execute(args),
    }
}
