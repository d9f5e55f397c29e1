//! Structural validation of assembled definitions
//!
//! Checks run in a fixed order and stop at the first failure. Presence checks
//! come before the cross-reference checks, so a malformed document reports
//! the missing field rather than a dangling reference.

use crate::error::ValidationError;
use serde_json::Value;
use shared::{Document, GameDefinition};

/// Accepts or rejects a candidate definition. Never modifies it.
pub fn validate_definition(definition: &GameDefinition) -> Result<(), ValidationError> {
    if definition.id.is_empty() {
        return Err(ValidationError::MissingSection { field: "id" });
    }
    let schema = definition
        .schema
        .as_ref()
        .ok_or(ValidationError::MissingSection { field: "schema" })?;
    let machine = definition
        .machine
        .as_ref()
        .ok_or(ValidationError::MissingSection { field: "machine" })?;

    if schema.root.is_empty() {
        return Err(ValidationError::IncompleteSchema {
            field: "schema.root",
        });
    }
    let classes = schema
        .classes
        .as_ref()
        .ok_or(ValidationError::IncompleteSchema {
            field: "schema.classes",
        })?;

    if machine.initial.is_empty() {
        return Err(ValidationError::IncompleteMachine {
            field: "machine.initial",
        });
    }
    let states = machine
        .states
        .as_ref()
        .ok_or(ValidationError::IncompleteMachine {
            field: "machine.states",
        })?;

    if !is_defined(classes, &schema.root) {
        return Err(ValidationError::UnknownRootClass {
            root: schema.root.clone(),
        });
    }

    if !is_defined(states, &machine.initial) {
        return Err(ValidationError::UnknownInitialState {
            initial: machine.initial.clone(),
        });
    }

    Ok(())
}

// JSON falsy entries (`null`, `false`, `0`, `""`) declare the name without
// defining it.
fn is_defined(entries: &Document, name: &str) -> bool {
    match entries.get(name) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Number(number)) => number.as_f64() != Some(0.0),
        Some(_) => true,
    }
}
