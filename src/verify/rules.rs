//! Validation rules for values written into declarations.
//!
//! Pure functions with no I/O or side effects. Every value a rewrite emits
//! lands inside a quoted TOML string, so quotes, backslashes and line breaks
//! are rejected up front instead of producing a broken manifest.

use crate::cargo::Pin;
use crate::error::{MoveDepError, Result};

/// Validates a repository owner or organisation name.
///
/// ## Rules
/// - Not empty
/// - No `/` (it is a single URL segment)
/// - No whitespace, quotes or backslashes
pub fn validate_repository(owner: &str) -> Result<()> {
    if owner.is_empty() {
        return Err(MoveDepError::InvalidRepository(
            owner.to_string(),
            "cannot be empty".to_string(),
        ));
    }

    if owner.contains('/') {
        return Err(MoveDepError::InvalidRepository(
            owner.to_string(),
            "must be a single owner or organisation name, not a path".to_string(),
        ));
    }

    if let Some(ch) = owner
        .chars()
        .find(|c| c.is_whitespace() || *c == '"' || *c == '\\')
    {
        return Err(MoveDepError::InvalidRepository(
            owner.to_string(),
            format!("invalid character {:?}", ch),
        ));
    }

    Ok(())
}

/// Validates a revision or branch value.
pub fn validate_pin_value(pin: &Pin) -> Result<()> {
    let kind = match pin {
        Pin::Rev(_) => "revision",
        Pin::Branch(_) => "branch",
    };
    let value = pin.value();

    if value.is_empty() {
        return Err(MoveDepError::InvalidPin(
            kind,
            value.to_string(),
            "cannot be empty".to_string(),
        ));
    }

    if let Some(ch) = value.chars().find(|c| is_unquotable(*c)) {
        return Err(MoveDepError::InvalidPin(
            kind,
            value.to_string(),
            format!("invalid character {:?}", ch),
        ));
    }

    Ok(())
}

/// Parses a `NAME=SUBPATH` path table entry.
///
/// ## Rules
/// - Both sides non-empty after trimming
/// - Subpath is relative (no leading `/`)
/// - No quotes, backslashes or line breaks on either side
pub fn parse_mapping(entry: &str) -> Result<(String, String)> {
    let invalid = |reason: &str| MoveDepError::InvalidMapping(entry.to_string(), reason.to_string());

    let (name, subpath) = entry
        .split_once('=')
        .ok_or_else(|| invalid("expected NAME=SUBPATH"))?;
    let (name, subpath) = (name.trim(), subpath.trim());

    if name.is_empty() {
        return Err(invalid("package name cannot be empty"));
    }

    if subpath.trim_matches('/').is_empty() {
        return Err(invalid("subpath cannot be empty"));
    }

    if subpath.starts_with('/') {
        return Err(invalid("subpath must be relative to the base directory"));
    }

    if entry.chars().any(is_unquotable) {
        return Err(invalid("contains a quote, backslash or line break"));
    }

    Ok((name.to_string(), subpath.to_string()))
}

/// Validates the local base directory.
pub fn validate_base_dir(base_dir: &str) -> Result<()> {
    if base_dir.starts_with('/') {
        return Err(MoveDepError::InvalidMapping(
            base_dir.to_string(),
            "base directory must be relative".to_string(),
        ));
    }

    if base_dir.chars().any(is_unquotable) {
        return Err(MoveDepError::InvalidMapping(
            base_dir.to_string(),
            "contains a quote, backslash or line break".to_string(),
        ));
    }

    Ok(())
}

fn is_unquotable(ch: char) -> bool {
    matches!(ch, '"' | '\\' | '\n' | '\r')
}
