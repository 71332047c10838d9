//! Fieldwork validation core
//!
//! Pure predicate functions for single-field constraints. Each function
//! takes a field value and returns `true` when the value satisfies the
//! rule; none of them panic, whatever the input.
//!
//! The stateful form engine lives in the `fieldwork` crate; this crate is
//! kept free of form state so the predicates can be reused anywhere.

pub mod email;
pub mod password;
pub mod string;

// Re-export all validators
pub use email::*;
pub use password::*;
pub use string::*;
