// File: src/field.rs
// Purpose: Per-field mutable state - value, error set, touched/dirty flags

use std::collections::BTreeSet;

use serde::Serialize;

use crate::reason::ErrorReason;

/// Mutable state of one form field.
///
/// Owned exclusively by the form model; everything outside the crate reads
/// it by shared reference. A field holds a *set* of reasons, not a single
/// one, since several rules can fail independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldState {
    pub(crate) value: String,
    pub(crate) errors: BTreeSet<ErrorReason>,
    pub(crate) touched: bool,
    pub(crate) dirty: bool,
}

impl FieldState {
    /// Current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Reasons the field currently fails validation, in stable order.
    pub fn errors(&self) -> &BTreeSet<ErrorReason> {
        &self.errors
    }

    /// A field with an empty error set is valid.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// At least one value update has targeted this field.
    pub fn touched(&self) -> bool {
        self.touched
    }

    /// The value has changed from its initial value at least once.
    pub fn dirty(&self) -> bool {
        self.dirty
    }

    /// Whether the UI should render this field's errors. An untouched field
    /// is never flagged, even if it would fail eager validation.
    pub fn shows_error(&self) -> bool {
        self.touched && !self.errors.is_empty()
    }
}
