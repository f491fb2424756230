//! Line rewrite strategies.
//!
//! A [`LineRewriter`] couples the declaration matcher with one [`Strategy`].
//! Lines that are not git-form declarations come back borrowed and unchanged.
//!
//! ```
//! # use move_dep::cargo::{PathMap, RemoteSource};
//! # use move_dep::rewrite::{LineRewriter, RewriteLine, Strategy};
//! # fn example() -> move_dep::Result<()> {
//! let rewriter = LineRewriter::new(RemoteSource::default(), Strategy::ToLocal(PathMap::default()))?;
//! let line = "move-cli = { git = \"https://github.com/diem/move\", rev=\"abc\" }\n";
//!
//! assert_eq!(
//!     rewriter.rewrite_line(line, 0),
//!     "move-cli = { path = \"../move/language/tools/move-cli\" }\n"
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod local;
pub mod remote;

pub use local::to_local;
pub use remote::{UpgradeTarget, to_remote};

use crate::cargo::{DeclarationMatcher, PathMap, RemoteSource};
use crate::error::Result;
use std::borrow::Cow;

/// Rewrites one manifest line found at a given traversal depth.
pub trait RewriteLine {
    fn rewrite_line<'a>(&self, line: &'a str, depth: usize) -> Cow<'a, str>;
}

/// Target form for matched declarations.
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Point every declaration at the local checkout.
    ToLocal(PathMap),
    /// Point every declaration at a repository and revision/branch.
    ToRemote(UpgradeTarget),
}

/// Matcher plus active strategy.
#[derive(Debug, Clone)]
pub struct LineRewriter {
    matcher: DeclarationMatcher,
    strategy: Strategy,
}

impl LineRewriter {
    pub fn new(remote: RemoteSource, strategy: Strategy) -> Result<Self> {
        Ok(Self {
            matcher: DeclarationMatcher::new(remote)?,
            strategy,
        })
    }
}

impl RewriteLine for LineRewriter {
    fn rewrite_line<'a>(&self, line: &'a str, depth: usize) -> Cow<'a, str> {
        let Some(decl) = self.matcher.match_line(line) else {
            return Cow::Borrowed(line);
        };

        let name = decl.name;
        let rewritten = match &self.strategy {
            Strategy::ToLocal(paths) => to_local(decl, paths, depth),
            Strategy::ToRemote(target) => to_remote(decl, target),
        };

        log::debug!("Rewrote declaration '{}' at depth {}", name.trim(), depth);
        Cow::Owned(rewritten.render(self.matcher.remote()))
    }
}
