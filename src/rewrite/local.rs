//! Git to local path rewrite.

use crate::cargo::{Declaration, PathMap, Source};

/// Replaces the source of `decl` with a path into the local checkout.
///
/// Everything but the source is carried over untouched. The package name may
/// carry the spaces before `=`; they stay in the line but not in the path.
pub fn to_local<'a>(decl: Declaration<'a>, paths: &PathMap, depth: usize) -> Declaration<'a> {
    let path = paths.local_path(decl.name.trim_end(), depth);
    Declaration {
        source: Source::Local { path },
        ..decl
    }
}
