// File: src/model.rs
// Purpose: The stateful form model - field states, rule wiring, recomputation

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::field::FieldState;
use crate::reason::FormError;
use crate::rule::{CrossFieldRule, Rule};
use crate::schema::FormSchema;

/// Observer invoked after each full recomputation.
pub type Observer = Box<dyn Fn(&FormModel)>;

#[derive(Debug)]
struct FieldEntry {
    rules: Vec<Rule>,
    state: FieldState,
}

/// Aggregates named field states, owns the cross-field rule bindings, and
/// recomputes every affected field on any value change.
///
/// All operations are synchronous and complete before returning; a sequence
/// of `set_value` calls is observed exactly in call order. Mutation is
/// unsynchronized in-process state behind `&mut self` - wrap the model in a
/// mutex before sharing it across threads.
pub struct FormModel {
    fields: IndexMap<String, FieldEntry>,
    cross_rules: Vec<CrossFieldRule>,
    observers: Vec<Observer>,
}

impl std::fmt::Debug for FormModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormModel")
            .field("fields", &self.fields)
            .field("cross_rules", &self.cross_rules)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl FormModel {
    /// Builds a model from its declarative schema.
    ///
    /// Every field starts pristine: empty value, no errors, untouched.
    /// Fails if a cross-field rule references a field the schema does not
    /// declare.
    pub fn from_schema(schema: FormSchema) -> Result<Self, FormError> {
        for rule in &schema.cross_rules {
            for name in [&rule.field_a, &rule.field_b] {
                if !schema.fields.contains_key(name.as_str()) {
                    return Err(FormError::UnknownField(name.clone()));
                }
            }
        }

        let fields: IndexMap<String, FieldEntry> = schema
            .fields
            .into_iter()
            .map(|(name, spec)| {
                (
                    name,
                    FieldEntry {
                        rules: spec.rules,
                        state: FieldState::default(),
                    },
                )
            })
            .collect();

        tracing::debug!(
            "form model constructed: {} fields, {} cross-field rules",
            fields.len(),
            schema.cross_rules.len()
        );

        Ok(Self {
            fields,
            cross_rules: schema.cross_rules,
            observers: Vec::new(),
        })
    }

    /// Updates one field's value and revalidates everything that depends on
    /// it: the field's own rules, plus every field a cross-field rule
    /// referencing this one attributes its errors to.
    ///
    /// The first call on a field marks it touched; a call that changes the
    /// stored value marks it dirty. Unknown names are a hard failure and
    /// leave the model untouched.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let Some(entry) = self.fields.get_mut(name) else {
            return Err(FormError::UnknownField(name.to_string()));
        };

        let value = value.into();
        if entry.state.value != value {
            entry.state.dirty = true;
        }
        entry.state.value = value;
        entry.state.touched = true;

        self.recompute(name);

        let partners: Vec<String> = self
            .cross_rules
            .iter()
            .filter(|rule| rule.references(name))
            .flat_map(|rule| [rule.field_a.clone(), rule.field_b.clone()])
            .filter(|field| field != name)
            .collect();
        for field in partners {
            self.recompute(&field);
        }

        tracing::debug!("field '{}' updated, form valid: {}", name, self.is_valid());
        self.notify();
        Ok(())
    }

    /// Clears every field back to its pristine initial state and notifies
    /// observers once.
    pub fn reset(&mut self) {
        for entry in self.fields.values_mut() {
            entry.state = FieldState::default();
        }
        tracing::debug!("form model reset");
        self.notify();
    }

    /// Current state of a declared field.
    pub fn field_state(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name).map(|entry| &entry.state)
    }

    /// Declared field names in display order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Snapshot of current values in display order. The engine never blocks
    /// submission itself: hand this to the submission collaborator once
    /// `is_valid()` holds.
    pub fn values(&self) -> IndexMap<String, String> {
        self.fields
            .iter()
            .map(|(name, entry)| (name.clone(), entry.state.value.clone()))
            .collect()
    }

    /// True iff every field's error set is empty.
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(|entry| entry.state.errors.is_empty())
    }

    /// Registers an observer fired after each full recomputation, so a
    /// rendering layer or test harness can react to state changes without
    /// the engine depending on a UI framework.
    pub fn subscribe(&mut self, observer: impl Fn(&FormModel) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Rebuilds one field's error set from scratch against current values.
    /// Never patches incrementally, so no stale reason survives an update.
    ///
    /// Field-local rules stay silent until the field itself is touched;
    /// cross-field rules attributed to the field apply as soon as either
    /// referenced value changes.
    fn recompute(&mut self, name: &str) {
        let mut errors = BTreeSet::new();

        let Some(entry) = self.fields.get(name) else {
            return;
        };
        if entry.state.touched {
            for rule in &entry.rules {
                if !rule.check(&entry.state.value) {
                    errors.insert(rule.reason());
                }
            }
        }

        for rule in &self.cross_rules {
            if !rule.attributes_to(name) {
                continue;
            }
            let (Some(a), Some(b)) = (
                self.fields.get(rule.field_a.as_str()),
                self.fields.get(rule.field_b.as_str()),
            ) else {
                continue;
            };
            if !rule.kind.check(&a.state.value, &b.state.value) {
                errors.insert(rule.kind.reason());
            }
        }

        if let Some(entry) = self.fields.get_mut(name) {
            entry.state.errors = errors;
        }
    }

    fn notify(&mut self) {
        // Observers only get a shared view; the list is parked during the
        // walk so a callback can read the model it was registered on.
        let observers = std::mem::take(&mut self.observers);
        for observer in &observers {
            observer(&*self);
        }
        self.observers = observers;
    }
}
