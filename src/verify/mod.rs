//! Validation performed before a scan starts.

pub mod preflight;
pub mod rules;

pub use preflight::preflight_checks;
pub use rules::{parse_mapping, validate_base_dir, validate_pin_value, validate_repository};
