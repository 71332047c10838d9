//! Scenario tests for the signup form wiring
//!
//! Reconstructs the signup form (username, email, password, password_match)
//! and covers:
//! - per-field rules (required, email shape, password strength)
//! - cross-field match attribution
//! - touched gating for error display
//! - submit readiness and the values snapshot

use fieldwork::{ErrorReason, FormModel, FormSchema, Rule};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn signup_schema() -> FormSchema {
    FormSchema::new()
        .field("username", [Rule::Required])
        .field("email", [Rule::Required, Rule::Email])
        .field("password", [Rule::Required, Rule::Password])
        .field("password_match", [Rule::Required])
        .fields_match("password", "password_match")
}

fn signup_form() -> FormModel {
    FormModel::from_schema(signup_schema()).expect("signup schema is well formed")
}

#[test]
fn has_the_declared_fields_in_order() {
    let form = signup_form();
    let names: Vec<&str> = form.field_names().collect();
    assert_eq!(names, ["username", "email", "password", "password_match"]);
}

#[test]
fn validates_username_is_required() {
    let mut form = signup_form();

    form.set_value("username", "").unwrap();
    let state = form.field_state("username").unwrap();
    assert_eq!(
        state.errors().iter().copied().collect::<Vec<_>>(),
        [ErrorReason::Required]
    );
    assert!(state.shows_error());

    form.set_value("username", "value").unwrap();
    assert!(form.field_state("username").unwrap().is_valid());
}

#[test]
fn validates_email_shape() {
    let mut form = signup_form();

    form.set_value("email", "test").unwrap();
    let state = form.field_state("email").unwrap();
    assert!(state.errors().contains(&ErrorReason::InvalidEmailFormat));

    form.set_value("email", "test@test.com").unwrap();
    assert!(form.field_state("email").unwrap().is_valid());
}

#[test]
fn empty_email_fails_both_rules() {
    let mut form = signup_form();

    form.set_value("email", "  ").unwrap();
    let errors = form.field_state("email").unwrap().errors();
    assert!(errors.contains(&ErrorReason::Required));
    assert!(errors.contains(&ErrorReason::InvalidEmailFormat));
}

#[rstest]
#[case::too_short("abc")]
#[case::too_short_with_digits("abc10")]
#[case::too_short_uppercase("ABC")]
#[case::too_short_uppercase_digits("ABC10")]
#[case::too_short_mixed("aB5")]
#[case::only_lowercase("password")]
#[case::only_uppercase("PASSWORD")]
#[case::no_digit("Password")]
#[case::no_uppercase("pa55word")]
#[case::no_lowercase("PA55WORD")]
fn rejects_weak_password(#[case] password: &str) {
    let mut form = signup_form();
    form.set_value("password", password).unwrap();

    let state = form.field_state("password").unwrap();
    assert!(
        state.errors().contains(&ErrorReason::WeakPassword),
        "'{password}' should be rejected, errors: {:?}",
        state.errors()
    );
}

#[rstest]
#[case::exactly_eight("Pa55word")]
#[case::longer_than_eight("Pa55wordForAngular")]
fn accepts_strong_password(#[case] password: &str) {
    let mut form = signup_form();
    form.set_value("password", password).unwrap();

    assert!(form.field_state("password").unwrap().is_valid());
}

#[test]
fn attributes_mismatch_to_the_comparison_field_only() {
    let mut form = signup_form();

    form.set_value("password", "Pa55word").unwrap();
    form.set_value("password_match", "Pa55word").unwrap();
    assert!(form.field_state("password_match").unwrap().errors().is_empty());

    form.set_value("password_match", "X").unwrap();
    let match_state = form.field_state("password_match").unwrap();
    assert!(match_state.errors().contains(&ErrorReason::PasswordMismatch));

    // the source field never carries the mismatch
    let password_state = form.field_state("password").unwrap();
    assert!(!password_state.errors().contains(&ErrorReason::PasswordMismatch));
    assert!(password_state.is_valid());
}

#[test]
fn reevaluates_match_when_either_side_changes() {
    let mut form = signup_form();

    form.set_value("password", "abc1").unwrap();
    form.set_value("password_match", "abc2").unwrap();
    assert!(!form.field_state("password_match").unwrap().is_valid());

    // fixing the source side clears the error on the comparison side
    form.set_value("password", "abc2").unwrap();
    assert!(!form
        .field_state("password_match")
        .unwrap()
        .errors()
        .contains(&ErrorReason::PasswordMismatch));
}

#[test]
fn untouched_fields_display_nothing() {
    let mut form = signup_form();
    form.set_value("password", "Pa55word").unwrap();

    // the comparison field is now mismatched but has never been touched
    let state = form.field_state("password_match").unwrap();
    assert!(!state.is_valid());
    assert!(!state.shows_error());

    // the untouched rest of the form is clean either way
    assert!(!form.field_state("username").unwrap().shows_error());
    assert!(!form.field_state("email").unwrap().shows_error());
}

#[test]
fn full_form_becomes_submit_ready() {
    let mut form = signup_form();

    form.set_value("username", "value").unwrap();
    form.set_value("email", "test@test.com").unwrap();
    form.set_value("password", "Pa55word").unwrap();
    form.set_value("password_match", "Pa55word").unwrap();

    assert!(form.is_valid());

    // the snapshot handed to the submission collaborator
    let values = form.values();
    let entries: Vec<(&str, &str)> = values
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    assert_eq!(
        entries,
        [
            ("username", "value"),
            ("email", "test@test.com"),
            ("password", "Pa55word"),
            ("password_match", "Pa55word"),
        ]
    );
}

#[test]
fn model_from_toml_schema_behaves_identically() {
    let schema: FormSchema = toml::from_str(
        r#"
        [fields.username]
        rules = ["required"]

        [fields.email]
        rules = ["required", "email"]

        [fields.password]
        rules = ["required", "password"]

        [fields.password_match]
        rules = ["required"]

        [[cross_rules]]
        field_a = "password"
        field_b = "password_match"
        kind = "match"
        "#,
    )
    .unwrap();
    assert_eq!(schema, signup_schema());

    let mut form = FormModel::from_schema(schema).unwrap();
    form.set_value("password", "Pa55word").unwrap();
    form.set_value("password_match", "nope").unwrap();
    assert!(form
        .field_state("password_match")
        .unwrap()
        .errors()
        .contains(&ErrorReason::PasswordMismatch));
}
