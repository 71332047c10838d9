//! Fieldwork - a synchronous field-validation engine.
//!
//! Composable rules judge a single field's value (presence, email shape,
//! password strength) or the relationship between two fields (byte-exact
//! match), re-evaluating automatically as values change. Every field tracks
//! its current value, a set of machine-readable [`ErrorReason`]s, and
//! touched/dirty flags; the owning [`FormModel`] exposes aggregate validity
//! for submit-enablement and an observer hook for rendering layers.
//!
//! The engine is purely synchronous and purely local to in-memory values:
//! no persistence, no network, no async validation.
//!
//! ```
//! use fieldwork::{FormModel, FormSchema, Rule};
//!
//! let schema = FormSchema::new()
//!     .field("username", [Rule::Required])
//!     .field("password", [Rule::Required, Rule::Password])
//!     .field("password_match", [Rule::Required])
//!     .fields_match("password", "password_match");
//!
//! let mut form = FormModel::from_schema(schema)?;
//! form.set_value("password", "Pa55word")?;
//! form.set_value("password_match", "Pa55word")?;
//! assert!(form.is_valid());
//! # Ok::<(), fieldwork::FormError>(())
//! ```

pub mod field;
pub mod model;
pub mod reason;
pub mod rule;
pub mod schema;

pub use field::FieldState;
pub use model::FormModel;
pub use reason::{ErrorReason, FormError};
pub use rule::{Attribution, CrossFieldKind, CrossFieldRule, Rule};
pub use schema::{FieldSpec, FormSchema};
