//! Tool descriptors and their parameter schemas
//!
//! A descriptor is what clients see in `tools/list`; the schema shape is also
//! what the argument validator checks calls against.

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Primitive kinds a tool parameter can have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

impl ParamType {
    /// Check whether a JSON value has this kind
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
        }
    }

    /// Lowercase name as it appears in JSON Schema
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

/// A single named parameter in a tool's input schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: String,
    pub ty: ParamType,
    pub description: String,
    pub required: bool,
    /// Reject strings that are empty after trimming, with this message
    pub blank_message: Option<String>,
}

impl ParamSpec {
    /// Create an optional parameter
    pub fn new(name: impl Into<String>, ty: ParamType, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            description: description.into(),
            required: false,
            blank_message: None,
        }
    }

    /// Shorthand for a string parameter
    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, ParamType::String, description)
    }

    /// Mark as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Reject blank strings, reporting `message`
    pub fn non_blank(mut self, message: impl Into<String>) -> Self {
        self.blank_message = Some(message.into());
        self
    }

    pub fn is_non_blank(&self) -> bool {
        self.blank_message.is_some()
    }
}

/// Ordered parameter list of a tool.
///
/// Serializes as a JSON Schema object:
/// `{"type": "object", "properties": {...}, "required": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaShape {
    params: Vec<ParamSpec>,
}

impl SchemaShape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter
    pub fn with(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Look up a parameter by name
    pub fn get(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Names of all required parameters, in declaration order
    pub fn required(&self) -> Vec<&str> {
        self.params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
            .collect()
    }

    /// Render as a JSON Schema object
    pub fn to_json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|p| {
                let schema = serde_json::json!({
                    "type": p.ty.as_str(),
                    "description": p.description,
                });
                (p.name.clone(), schema)
            })
            .collect();

        serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": self.required(),
        })
    }
}

impl Serialize for SchemaShape {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json_schema().serialize(serializer)
    }
}

/// A tool as advertised to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    /// Tool name, unique within a catalog
    pub name: String,
    /// Human-readable description for the client
    pub description: String,
    /// Parameter shape
    pub input_schema: SchemaShape,
}

impl ToolDescriptor {
    /// Create a descriptor with no parameters
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema: SchemaShape::new(),
        }
    }

    /// Add a parameter
    pub fn with_param(mut self, param: ParamSpec) -> Self {
        self.input_schema = self.input_schema.with(param);
        self
    }
}
