//! Git revision/branch upgrade.

use crate::cargo::{Declaration, Pin, Source};
use crate::error::{MoveDepError, Result};
use crate::verify::{validate_pin_value, validate_repository};

/// Repository and pin every git declaration is moved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeTarget {
    owner: String,
    pin: Pin,
}

impl UpgradeTarget {
    /// Builds a target from exactly one of `rev` or `branch`.
    ///
    /// # Errors
    ///
    /// - `MissingPin` / `ConflictingPin` when not exactly one pin is given
    /// - `InvalidRepository` / `InvalidPin` when a value cannot be written
    ///   into a declaration
    pub fn new(
        owner: impl Into<String>,
        rev: Option<String>,
        branch: Option<String>,
    ) -> Result<Self> {
        let pin = match (rev, branch) {
            (Some(rev), None) => Pin::Rev(rev),
            (None, Some(branch)) => Pin::Branch(branch),
            (Some(_), Some(_)) => return Err(MoveDepError::ConflictingPin),
            (None, None) => return Err(MoveDepError::MissingPin),
        };

        let owner = owner.into();
        validate_repository(&owner)?;
        validate_pin_value(&pin)?;

        Ok(Self { owner, pin })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn pin(&self) -> &Pin {
        &self.pin
    }
}

/// Points `decl` at the target repository and pin.
///
/// The pin key follows the target, so a `rev` line upgraded to a branch ends
/// up keyed by `branch`.
pub fn to_remote<'a>(decl: Declaration<'a>, target: &UpgradeTarget) -> Declaration<'a> {
    Declaration {
        source: Source::Remote {
            owner: target.owner.clone(),
            pin: target.pin.clone(),
        },
        ..decl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cargo::{DeclarationMatcher, RemoteSource};

    fn rewrite(line: &str, target: &UpgradeTarget) -> String {
        let matcher = DeclarationMatcher::new(RemoteSource::default()).unwrap();
        let decl = matcher.match_line(line).unwrap();
        to_remote(decl, target).render(matcher.remote())
    }

    #[test]
    fn test_rev_to_branch_switches_key() {
        let target = UpgradeTarget::new("myfork", None, Some("dev".to_string())).unwrap();
        assert_eq!(
            rewrite(
                "bar = { git = \"https://github.com/diem/move\", rev=\"old\" }",
                &target
            ),
            "bar = { git = \"https://github.com/myfork/move\", branch=\"dev\" }"
        );
    }

    #[test]
    fn test_branch_to_rev_switches_key() {
        let target = UpgradeTarget::new("diem", Some("deadbeef".to_string()), None).unwrap();
        assert_eq!(
            rewrite(
                "  bar = { git = \"https://github.com/fork/move\", branch=\"main\", features = [\"a\"] }\n",
                &target
            ),
            "  bar = { git = \"https://github.com/diem/move\", rev=\"deadbeef\", features = [\"a\"] }\n"
        );
    }

    #[test]
    fn test_same_target_is_identity() {
        let target = UpgradeTarget::new("diem", Some("abc".to_string()), None).unwrap();
        let line = "x = { git = \"https://github.com/diem/move\", rev=\"abc\", optional = true }\r\n";
        assert_eq!(rewrite(line, &target), line);
    }

    #[test]
    fn test_both_pins_rejected() {
        let err = UpgradeTarget::new("diem", Some("a".into()), Some("b".into())).unwrap_err();
        assert!(matches!(err, MoveDepError::ConflictingPin));
    }

    #[test]
    fn test_no_pin_rejected() {
        let err = UpgradeTarget::new("diem", None, None).unwrap_err();
        assert!(matches!(err, MoveDepError::MissingPin));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            UpgradeTarget::new("a/b", Some("x".into()), None),
            Err(MoveDepError::InvalidRepository(..))
        ));
        assert!(matches!(
            UpgradeTarget::new("diem", None, Some("ma\"in".into())),
            Err(MoveDepError::InvalidPin(..))
        ));
    }
}
