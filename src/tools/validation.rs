//! Argument validation
//!
//! Checks raw call arguments against a descriptor's schema shape. Failure is a
//! returned value, not a raised error: the dispatcher turns it into an
//! error-flagged result.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::error::Result;

use super::definition::ToolDescriptor;

/// Why a call's arguments were rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Arguments that passed schema validation.
///
/// Only [`validate`] constructs this; handlers narrow it to their typed
/// argument struct with [`ValidatedArguments::parse`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedArguments(Map<String, Value>);

impl ValidatedArguments {
    /// Get a raw argument value
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Deserialize into a typed argument struct
    pub fn parse<A: DeserializeOwned>(self) -> Result<A> {
        Ok(serde_json::from_value(Value::Object(self.0))?)
    }
}

/// Validate `raw` against the descriptor's schema.
///
/// Required parameters must be present and non-null, present parameters must
/// have the declared kind, and non-blank strings must contain something
/// other than whitespace. Arguments the schema does not name pass through.
pub fn validate(
    descriptor: &ToolDescriptor,
    raw: &Map<String, Value>,
) -> std::result::Result<ValidatedArguments, ValidationError> {
    for param in descriptor.input_schema.params() {
        let value = match raw.get(&param.name) {
            Some(Value::Null) | None => {
                if param.required {
                    return Err(ValidationError::new(format!(
                        "Error: Missing required parameter: {}",
                        param.name
                    )));
                }
                continue;
            }
            Some(v) => v,
        };

        if !param.ty.matches(value) {
            return Err(ValidationError::new(format!(
                "Error: Parameter '{}' must be of type {}",
                param.name,
                param.ty.as_str()
            )));
        }

        if let Some(message) = &param.blank_message {
            if value.as_str().is_some_and(|s| s.trim().is_empty()) {
                return Err(ValidationError::new(message.clone()));
            }
        }
    }

    Ok(ValidatedArguments(raw.clone()))
}
