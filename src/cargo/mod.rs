//! Cargo manifest declarations.
//!
//! - **`declaration`**: recognising and rebuilding a dependency declaration line
//! - **`layout`**: where a package lives in the local checkout, per manifest depth
//!
//! Only lines are rewritten; the manifest is never parsed as a whole, so
//! formatting and comments elsewhere in the file are untouched.

pub mod declaration;
pub mod layout;

pub use declaration::{Declaration, DeclarationMatcher, Pin, RemoteSource, Source};
pub use layout::{DEFAULT_BASE_DIR, PathMap, parent_prefix};
