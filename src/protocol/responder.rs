//! Answers the discovery methods: `tools/list` and `prompts/list`.

use serde::Serialize;

use crate::tools::{ToolCatalog, ToolDescriptor};

/// Result body of `tools/list`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListToolsResult {
    pub tools: Vec<ToolDescriptor>,
}

/// A prompt template advertised to the client
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptDescriptor {
    pub name: String,
    pub description: String,
}

/// Result body of `prompts/list`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListPromptsResult {
    pub prompts: Vec<PromptDescriptor>,
}

/// Serves the catalog as it was at startup.
#[derive(Debug, Clone)]
pub struct CatalogResponder {
    catalog: ToolCatalog,
}

impl CatalogResponder {
    pub fn new(catalog: ToolCatalog) -> Self {
        Self { catalog }
    }

    /// Every tool, in catalog order.
    pub fn list_tools(&self) -> ListToolsResult {
        ListToolsResult {
            tools: self.catalog.list().to_vec(),
        }
    }

    /// No prompts are offered.
    pub fn list_prompts(&self) -> ListPromptsResult {
        ListPromptsResult { prompts: Vec::new() }
    }
}
