// File: src/schema.rs
// Purpose: Declarative form description - fields, rules, cross-field constraints

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::rule::{Attribution, CrossFieldKind, CrossFieldRule, Rule};

/// Per-field declaration: the single-field rules bound to one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// Declarative form description, passed once to the model's constructor.
///
/// Fields are kept in declaration order (insertion order = display order).
/// Build the schema in code with the chained methods, or deserialize it
/// from TOML/JSON configuration:
///
/// ```toml
/// [fields.email]
/// rules = ["required", "email"]
///
/// [[cross_rules]]
/// field_a = "password"
/// field_b = "password_match"
/// kind = "match"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    #[serde(default)]
    pub fields: IndexMap<String, FieldSpec>,
    #[serde(default)]
    pub cross_rules: Vec<CrossFieldRule>,
}

impl FormSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field with its rules. Redeclaring a name replaces the
    /// earlier rules and keeps the original position.
    pub fn field<I>(mut self, name: impl Into<String>, rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        self.fields.insert(
            name.into(),
            FieldSpec {
                rules: rules.into_iter().collect(),
            },
        );
        self
    }

    /// Declares that `field_b` must match `field_a` byte-exactly, with the
    /// mismatch attributed to `field_b`.
    pub fn fields_match(self, field_a: impl Into<String>, field_b: impl Into<String>) -> Self {
        self.cross_rule(CrossFieldRule {
            field_a: field_a.into(),
            field_b: field_b.into(),
            kind: CrossFieldKind::Match,
            applies_to: Attribution::FieldB,
        })
    }

    /// Appends a cross-field constraint as declared.
    pub fn cross_rule(mut self, rule: CrossFieldRule) -> Self {
        self.cross_rules.push(rule);
        self
    }
}
