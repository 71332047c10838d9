// File: src/rule.rs
// Purpose: Rule bindings - single-field predicates and cross-field constraints

use serde::{Deserialize, Serialize};

use crate::reason::ErrorReason;

/// A single-field rule: a pure predicate paired with the reason it raises.
///
/// Predicates never panic and judge only the one value they are given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Non-empty after trimming.
    Required,
    /// Conventional `local@domain.tld` shape.
    Email,
    /// At least 8 characters with lowercase, uppercase, and digit present.
    Password,
}

impl Rule {
    /// Runs the predicate. `true` means the value satisfies the rule.
    pub fn check(self, value: &str) -> bool {
        match self {
            Rule::Required => fieldwork_validation::is_present(value),
            Rule::Email => fieldwork_validation::is_valid_email(value),
            Rule::Password => fieldwork_validation::is_strong_password(value),
        }
    }

    /// The reason recorded when the predicate fails.
    pub fn reason(self) -> ErrorReason {
        match self {
            Rule::Required => ErrorReason::Required,
            Rule::Email => ErrorReason::InvalidEmailFormat,
            Rule::Password => ErrorReason::WeakPassword,
        }
    }
}

/// Relationship checked by a cross-field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossFieldKind {
    /// Byte-exact equality: case-sensitive, no trimming.
    Match,
}

impl CrossFieldKind {
    /// Runs the relationship check against both current values.
    pub fn check(self, value_a: &str, value_b: &str) -> bool {
        match self {
            CrossFieldKind::Match => value_a == value_b,
        }
    }

    /// The reason recorded when the relationship fails.
    pub fn reason(self) -> ErrorReason {
        match self {
            CrossFieldKind::Match => ErrorReason::PasswordMismatch,
        }
    }
}

/// Which field's error set receives a cross-field failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribution {
    /// The source field.
    FieldA,
    /// The comparison field, by convention the confirmation input.
    #[default]
    FieldB,
    /// Both referenced fields.
    Both,
}

/// A rule over two named fields, re-evaluated whenever either changes.
///
/// Failures are surfaced only on the attributed field(s); the other field's
/// error set is untouched even though its value took part in the check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossFieldRule {
    pub field_a: String,
    pub field_b: String,
    pub kind: CrossFieldKind,
    #[serde(default)]
    pub applies_to: Attribution,
}

impl CrossFieldRule {
    /// True if `name` is one of the two referenced fields.
    pub fn references(&self, name: &str) -> bool {
        self.field_a == name || self.field_b == name
    }

    /// True if failures are written to `name`'s error set.
    pub fn attributes_to(&self, name: &str) -> bool {
        match self.applies_to {
            Attribution::FieldA => self.field_a == name,
            Attribution::FieldB => self.field_b == name,
            Attribution::Both => self.references(name),
        }
    }
}
