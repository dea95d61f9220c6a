//! Validation settings shared by every entity.

/// Represents the configuration for entity validation
///
/// The defaults reproduce the generated validation rule, where an unset or
/// falsy value is never reported as invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Skip the type check for falsy values (`null`, `false`, `0`, `""`).
    ///
    /// When disabled, only unset fields are skipped, so a field stored as
    /// `""` where a number is declared is reported.
    pub falsy_is_absent: bool,
}

impl ValidationConfig {
    /// A configuration that type-checks every stored value.
    pub fn strict() -> Self {
        Self {
            falsy_is_absent: false,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            falsy_is_absent: true,
        }
    }
}
