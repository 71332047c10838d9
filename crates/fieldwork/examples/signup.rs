// Example: the signup form driven from a declarative TOML schema
//
// Plays the role of the excluded UI layer: feeds simulated input events into
// the model, re-renders per-field errors from an observer, and gates the
// submission collaborator on aggregate validity.

use anyhow::Result;
use fieldwork::{FormModel, FormSchema};

const SCHEMA: &str = r#"
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
"#;

fn render(form: &FormModel) {
    for name in form.field_names() {
        let Some(state) = form.field_state(name) else {
            continue;
        };
        if state.shows_error() {
            for reason in state.errors() {
                println!("    [{name}] {reason}");
            }
        }
    }
    println!("    submit enabled: {}", form.is_valid());
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let schema: FormSchema = toml::from_str(SCHEMA)?;
    let mut form = FormModel::from_schema(schema)?;

    form.subscribe(render);

    // A user filling the form in, typos first.
    let events = [
        ("username", "ada"),
        ("email", "ada"),
        ("email", "ada@lovelace.dev"),
        ("password", "password"),
        ("password", "Pa55word"),
        ("password_match", "Pa55wor"),
        ("password_match", "Pa55word"),
    ];

    for (field, value) in events {
        println!("> {field} = {value:?}");
        form.set_value(field, value)?;
    }

    // The UI decides whether to call the submission collaborator.
    if form.is_valid() {
        println!("submitting:");
        for (name, value) in &form.values() {
            println!("    {name} = {value:?}");
        }
    }

    Ok(())
}
