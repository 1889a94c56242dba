//! Dispatcher - routes tool calls and normalizes every outcome
//!
//! `dispatch` never fails: unknown tools, rejected arguments, handler errors
//! and handler panics all come back as error-flagged [`ToolCallResult`]s.

use std::any::Any;
use std::collections::HashSet;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use log::{debug, error, warn};

use crate::error::{McpError, Result};
use crate::store::PostStore;

use super::call::{ToolCallRequest, ToolCallResult};
use super::catalog::ToolCatalog;
use super::registry::HandlerRegistry;
use super::validation::validate;

/// Routes named calls to registered handlers
pub struct Dispatcher {
    catalog: ToolCatalog,
    registry: HandlerRegistry,
}

impl Dispatcher {
    /// Pair a catalog with a registry.
    ///
    /// Fails unless every catalog entry has exactly one handler and every
    /// handler has a catalog entry.
    pub fn new(catalog: ToolCatalog, registry: HandlerRegistry) -> Result<Self> {
        let catalog_names: HashSet<&str> = catalog.names().into_iter().collect();
        let registry_names: HashSet<&str> = registry.names().into_iter().collect();

        let mut missing_handler: Vec<&str> = catalog_names.difference(&registry_names).copied().collect();
        let mut missing_descriptor: Vec<&str> = registry_names.difference(&catalog_names).copied().collect();

        if !missing_handler.is_empty() || !missing_descriptor.is_empty() {
            missing_handler.sort_unstable();
            missing_descriptor.sort_unstable();
            return Err(McpError::CatalogMismatch(format!(
                "tools without handlers: {:?}; handlers without tools: {:?}",
                missing_handler, missing_descriptor
            )));
        }

        Ok(Self { catalog, registry })
    }

    /// Standard catalog and handlers over the given store
    pub fn standard(store: Arc<dyn PostStore>) -> Result<Self> {
        Self::new(ToolCatalog::standard(), HandlerRegistry::standard(store)?)
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Look up, validate, invoke, and normalize a single call
    pub async fn dispatch(&self, request: &ToolCallRequest) -> ToolCallResult {
        debug!("Dispatching tool call: {}", request.name);

        let Some(handler) = self.registry.lookup(&request.name) else {
            warn!("Unknown tool requested: {}", request.name);
            return ToolCallResult::error(format!("Error: {}", McpError::UnknownTool(request.name.clone())));
        };

        let Some(descriptor) = self.catalog.get(&request.name) else {
            error!("Handler registered without descriptor: {}", request.name);
            return internal_error(&format!("no descriptor for tool {}", request.name));
        };

        let args = match validate(descriptor, &request.arguments) {
            Ok(args) => args,
            Err(e) => {
                debug!("Rejected arguments for {}: {}", request.name, e);
                return ToolCallResult::error(e.message);
            }
        };

        match AssertUnwindSafe(handler.invoke(args)).catch_unwind().await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => {
                error!("Error processing tool call {}: {}", request.name, e);
                internal_error(&e.to_string())
            }
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                error!("Tool {} panicked: {}", request.name, message);
                internal_error(&message)
            }
        }
    }
}

fn internal_error(message: &str) -> ToolCallResult {
    ToolCallResult::error(format!("Internal Server Error: {}", message))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    }
}
