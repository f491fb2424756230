//! File system side of a scan.
//!
//! `walk` finds manifests and computes their rewritten content; `transaction`
//! stages those contents and writes them all at once.

pub mod transaction;
pub mod walk;

pub use transaction::{Operation, Transaction, TransactionStats};
pub use walk::{MANIFEST_NAME, rewrite_manifests};
