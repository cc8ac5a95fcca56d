//! Request body validation.
//!
//! Turns raw JSON bodies into the service's typed requests, collecting every
//! field problem instead of stopping at the first.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shoplist_service::{AddItem, CreateList, SetItemChecked};
use shoplist_types::CallerId;

/// A single rejected field.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Body of a 400 response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn single(field: &str, message: &str) -> Self {
        Self {
            errors: vec![FieldError::new(field, message)],
        }
    }
}

/// Validates a create-list body: `{ "name": string, "members"?: [string] }`.
pub fn create_list(body: &[u8]) -> Result<CreateList, ValidationErrors> {
    let object = parse_object(body)?;
    let mut errors = Vec::new();

    let name = required_name(&object, &mut errors);
    let members = match object.get("members") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(values)) => {
            let mut members = Vec::with_capacity(values.len());
            for value in values {
                match value.as_str() {
                    Some(member) if !member.is_empty() => members.push(CallerId::from(member)),
                    _ => {
                        errors.push(FieldError::new(
                            "members",
                            "members must contain only non-empty strings",
                        ));
                        break;
                    }
                }
            }
            members
        }
        Some(_) => {
            errors.push(FieldError::new("members", "members must be an array"));
            Vec::new()
        }
    };

    finish(errors, || CreateList {
        name: name.unwrap_or_default(),
        members,
    })
}

/// Validates an add-item body: `{ "name": string }`.
pub fn add_item(body: &[u8]) -> Result<AddItem, ValidationErrors> {
    let object = parse_object(body)?;
    let mut errors = Vec::new();
    let name = required_name(&object, &mut errors);
    finish(errors, || AddItem {
        name: name.unwrap_or_default(),
    })
}

/// Validates a complete-item body: `{ "checked": bool }`.
pub fn set_item_checked(body: &[u8]) -> Result<SetItemChecked, ValidationErrors> {
    let object = parse_object(body)?;
    match object.get("checked") {
        Some(Value::Bool(checked)) => Ok(SetItemChecked { checked: *checked }),
        _ => Err(ValidationErrors::single("checked", "checked must be a boolean")),
    }
}

fn parse_object(body: &[u8]) -> Result<Map<String, Value>, ValidationErrors> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(_) => Err(ValidationErrors::single("body", "body must be a JSON object")),
        Err(_) => Err(ValidationErrors::single("body", "body must be valid JSON")),
    }
}

fn required_name(object: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<String> {
    match object.get("name") {
        Some(Value::String(name)) if !name.is_empty() => Some(name.clone()),
        _ => {
            errors.push(FieldError::new("name", "name must be a non-empty string"));
            None
        }
    }
}

fn finish<T>(errors: Vec<FieldError>, build: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
    if errors.is_empty() {
        Ok(build())
    } else {
        Err(ValidationErrors { errors })
    }
}
