//! Handler registry - maps tool names to their handlers

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{McpError, Result};
use crate::store::PostStore;

use super::call::ToolCallResult;
use super::handlers::{AddPostHandler, DeletePostHandler, GetPostsHandler, GetWeatherHandler};
use super::validation::ValidatedArguments;

/// A tool implementation with its own typed arguments.
///
/// Returning `Err` is a handler failure; the dispatcher reports it as an
/// error-flagged result and the server keeps running.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Typed argument payload, narrowed from the validated JSON arguments
    type Args: DeserializeOwned + Send;

    /// Tool name (matches the catalog entry)
    fn name(&self) -> &'static str;

    /// Execute the tool
    async fn call(&self, args: Self::Args) -> Result<ToolCallResult>;
}

/// Uniform, object-safe handler signature stored in the registry
#[async_trait]
pub trait Handler: Send + Sync {
    async fn invoke(&self, args: ValidatedArguments) -> Result<ToolCallResult>;
}

#[async_trait]
impl<H> Handler for H
where
    H: ToolHandler,
{
    async fn invoke(&self, args: ValidatedArguments) -> Result<ToolCallResult> {
        let typed: H::Args = args
            .parse()
            .map_err(|e| McpError::Handler(format!("Arguments for {} did not match handler: {}", self.name(), e)))?;
        self.call(typed).await
    }
}

/// Immutable-after-startup map of tool name to handler
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Box<dyn Handler>>,
}

impl HandlerRegistry {
    /// Create an empty registry (for custom tool sets)
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the four standard tools sharing one post store
    pub fn standard(store: Arc<dyn PostStore>) -> Result<Self> {
        let mut registry = Self::new();

        registry.register(GetWeatherHandler)?;
        registry.register(AddPostHandler::new(Arc::clone(&store)))?;
        registry.register(GetPostsHandler::new(Arc::clone(&store)))?;
        registry.register(DeletePostHandler::new(store))?;

        Ok(registry)
    }

    /// Register a handler under its own name; names must stay unique
    pub fn register<H: ToolHandler + 'static>(&mut self, handler: H) -> Result<()> {
        let name = handler.name();
        if self.handlers.contains_key(name) {
            return Err(McpError::CatalogMismatch(format!(
                "handler '{}' registered twice",
                name
            )));
        }
        self.handlers.insert(name.to_string(), Box::new(handler));
        Ok(())
    }

    /// Look up a handler by tool name
    pub fn lookup(&self, name: &str) -> Option<&dyn Handler> {
        self.handlers.get(name).map(|h| h.as_ref())
    }

    /// Check if a handler exists
    pub fn has_handler(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered names (unordered)
    pub fn names(&self) -> Vec<&str> {
        self.handlers.keys().map(|s| s.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryPostStore;
    use crate::tools::catalog::{ADD_POST, DELETE_POST, GET_POSTS, GET_WEATHER};
    use crate::tools::definition::{ParamSpec, ToolDescriptor};
    use crate::tools::validation::validate;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct EchoArgs {
        text: String,
    }

    struct EchoHandler;

    #[async_trait]
    impl ToolHandler for EchoHandler {
        type Args = EchoArgs;

        fn name(&self) -> &'static str {
            "echo"
        }

        async fn call(&self, args: EchoArgs) -> Result<ToolCallResult> {
            Ok(ToolCallResult::success(args.text))
        }
    }

    fn echo_args(value: serde_json::Value) -> ValidatedArguments {
        let tool = ToolDescriptor::new("echo", "Echo").with_param(ParamSpec::string("text", "Text").required());
        validate(&tool, value.as_object().unwrap()).unwrap()
    }

    #[test]
    fn test_standard_registry_has_all_tools() {
        let registry = HandlerRegistry::standard(Arc::new(MemoryPostStore::new())).unwrap();

        assert_eq!(registry.len(), 4);
        assert!(registry.has_handler(GET_WEATHER));
        assert!(registry.has_handler(ADD_POST));
        assert!(registry.has_handler(GET_POSTS));
        assert!(registry.has_handler(DELETE_POST));
    }

    #[test]
    fn test_lookup_missing() {
        let registry = HandlerRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.lookup("nonexistent_tool").is_none());
    }

    #[test]
    fn test_register_duplicate_rejected() {
        let mut registry = HandlerRegistry::new();
        registry.register(EchoHandler).unwrap();
        let result = registry.register(EchoHandler);

        assert!(matches!(result, Err(McpError::CatalogMismatch(_))));
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn test_invoke_narrows_arguments() {
        let mut registry = HandlerRegistry::new();
        registry.register(EchoHandler).unwrap();

        let handler = registry.lookup("echo").unwrap();
        let result = handler.invoke(echo_args(json!({"text": "hi"}))).await.unwrap();
        assert_eq!(result.text(), "hi");
        assert!(!result.is_error);
    }

    #[tokio::test]
    async fn test_invoke_narrowing_failure_is_handler_error() {
        let mut registry = HandlerRegistry::new();
        registry.register(EchoHandler).unwrap();

        // Schema without `text`, so validation passes but narrowing cannot
        let loose = ToolDescriptor::new("echo", "Echo");
        let args = validate(&loose, json!({}).as_object().unwrap()).unwrap();

        let err = registry.lookup("echo").unwrap().invoke(args).await.unwrap_err();
        assert!(matches!(err, McpError::Handler(_)));
        assert!(err.to_string().contains("echo"));
    }
}
