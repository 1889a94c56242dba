//! JSON-RPC 2.0 message types for the MCP stdio protocol.
//!
//! Requests without an `id` are notifications and never get a response.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";

/// Request read from the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version marker, `"2.0"`.
    #[serde(default = "default_version")]
    pub jsonrpc: String,
    /// Request ID for correlating responses; absent for notifications.
    /// An explicit `null` is kept as `Some(Value::Null)`.
    #[serde(default, deserialize_with = "present_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Method name (e.g., "tools/list", "tools/call").
    pub method: String,
    /// Method parameters as JSON value.
    #[serde(default)]
    pub params: Value,
}

fn present_id<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

fn default_version() -> String {
    JSONRPC_VERSION.to_string()
}

impl JsonRpcRequest {
    /// Create a new request with the given method and params.
    pub fn new(id: impl Into<Value>, method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: default_version(),
            id: Some(id.into()),
            method: method.into(),
            params,
        }
    }

    /// Create a notification (no ID, no response expected).
    pub fn notification(method: impl Into<String>) -> Self {
        Self {
            jsonrpc: default_version(),
            id: None,
            method: method.into(),
            params: Value::Null,
        }
    }

    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }

    /// An id is present but is not a string or number.
    pub fn has_invalid_id(&self) -> bool {
        self.id.as_ref().is_some_and(|id| !is_valid_id(id))
    }
}

/// Ids a response may echo: strings and numbers.
pub fn is_valid_id(id: &Value) -> bool {
    id.is_string() || id.is_number()
}

/// Response written to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    /// Request ID this response corresponds to; `null` when it could not be read.
    pub id: Value,
    /// Result value on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error details on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: default_version(),
            id: id.unwrap_or(Value::Null),
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<Value>, error: RpcError) -> Self {
        Self {
            jsonrpc: default_version(),
            id: id.unwrap_or(Value::Null),
            result: None,
            error: Some(error),
        }
    }

    /// Check if this response indicates success.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Error object of a JSON-RPC response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Parse error (-32700).
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PARSE_ERROR, message)
    }

    /// Invalid request error (-32600).
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::INVALID_REQUEST, message)
    }

    /// Method not found error (-32601).
    pub fn method_not_found(method: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::METHOD_NOT_FOUND,
            format!("Method not found: {}", method.into()),
        )
    }

    /// Invalid params error (-32602).
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::INVALID_PARAMS, message)
    }

    /// Internal error (-32603).
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::INTERNAL_ERROR, message)
    }
}

/// Standard error codes.
pub struct ErrorCode;

impl ErrorCode {
    /// Invalid JSON.
    pub const PARSE_ERROR: i32 = -32700;
    /// Invalid request object.
    pub const INVALID_REQUEST: i32 = -32600;
    /// Unknown method.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid parameters.
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal server error.
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// Known method names as constants.
pub struct Methods;

impl Methods {
    pub const INITIALIZE: &'static str = "initialize";
    pub const INITIALIZED: &'static str = "notifications/initialized";
    pub const PING: &'static str = "ping";
    pub const TOOLS_LIST: &'static str = "tools/list";
    pub const TOOLS_CALL: &'static str = "tools/call";
    pub const PROMPTS_LIST: &'static str = "prompts/list";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_deserialize() {
        let req: JsonRpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#).unwrap();
        assert_eq!(req.id, Some(json!(1)));
        assert_eq!(req.method, Methods::TOOLS_LIST);
        assert!(req.params.is_null());
        assert!(!req.is_notification());
    }

    #[test]
    fn test_request_string_id() {
        let req: JsonRpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":"abc","method":"ping","params":{}}"#).unwrap();
        assert_eq!(req.id, Some(json!("abc")));
        assert!(req.params.is_object());
    }

    #[test]
    fn test_notification() {
        let req: JsonRpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#).unwrap();
        assert!(req.is_notification());
        assert!(JsonRpcRequest::notification(Methods::INITIALIZED).is_notification());
    }

    #[test]
    fn test_null_id_is_not_a_notification() {
        let req: JsonRpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":null,"method":"ping"}"#).unwrap();
        assert_eq!(req.id, Some(Value::Null));
        assert!(!req.is_notification());
        assert!(req.has_invalid_id());
    }

    #[test]
    fn test_structured_id_is_invalid() {
        let req: JsonRpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":{"a":1},"method":"ping"}"#).unwrap();
        assert!(req.has_invalid_id());
        assert!(!JsonRpcRequest::new(1, Methods::PING, Value::Null).has_invalid_id());
        assert!(!JsonRpcRequest::notification(Methods::INITIALIZED).has_invalid_id());
    }

    #[test]
    fn test_request_without_method_rejected() {
        assert!(serde_json::from_str::<JsonRpcRequest>(r#"{"jsonrpc":"2.0","id":1}"#).is_err());
    }

    #[test]
    fn test_success_response_shape() {
        let resp = JsonRpcResponse::success(Some(json!(7)), json!({"ok": true}));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, json!({"jsonrpc": "2.0", "id": 7, "result": {"ok": true}}));
        assert!(resp.is_success());
    }

    #[test]
    fn test_error_response_null_id() {
        let resp = JsonRpcResponse::error(None, RpcError::parse_error("bad json"));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["id"], Value::Null);
        assert_eq!(json["error"]["code"], ErrorCode::PARSE_ERROR);
        assert_eq!(json["error"]["message"], "bad json");
        assert!(json.get("result").is_none());
        assert!(!resp.is_success());
    }

    #[test]
    fn test_error_constructors() {
        assert_eq!(RpcError::invalid_request("x").code, -32600);
        assert_eq!(RpcError::invalid_params("x").code, -32602);
        assert_eq!(RpcError::internal_error("x").code, -32603);

        let err = RpcError::method_not_found("resources/list");
        assert_eq!(err.code, -32601);
        assert_eq!(err.message, "Method not found: resources/list");
    }
}
