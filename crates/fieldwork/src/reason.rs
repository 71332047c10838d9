// File: src/reason.rs
// Purpose: Error taxonomy - validation reasons and engine misuse errors

use serde::{Deserialize, Serialize};

/// Machine-readable reason a field failed validation.
///
/// Validation failures are data, not exceptions: rules report reasons and
/// the form model stores them in each field's error set. `Display` gives a
/// default human-readable message per reason.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ErrorReason {
    /// Value is empty after trimming.
    Required,
    /// Value is not shaped like `local@domain.tld`.
    InvalidEmailFormat,
    /// Value is shorter than 8 characters or missing a required character class.
    WeakPassword,
    /// Value does not equal its paired field's value.
    PasswordMismatch,
}

impl std::fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorReason::Required => write!(f, "This field is required"),
            ErrorReason::InvalidEmailFormat => write!(f, "Enter a valid email address"),
            ErrorReason::WeakPassword => write!(
                f,
                "Password must be at least 8 characters with uppercase, lowercase, and digit"
            ),
            ErrorReason::PasswordMismatch => write!(f, "Passwords do not match"),
        }
    }
}

/// Misuse of the engine API.
///
/// Distinct from validation results: referencing an undeclared field name is
/// a caller bug, surfaced as a hard failure rather than a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The named field is not declared in the form's schema.
    #[error("field '{0}' is not declared in this form")]
    UnknownField(String),
}
