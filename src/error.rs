//! Error types for postbox-mcp
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur while serving tools
#[derive(Debug, Error)]
pub enum McpError {
    /// Tool name not present in the registry
    #[error("Unknown tool called: {0}")]
    UnknownTool(String),

    /// A handler failed while executing
    #[error("{0}")]
    Handler(String),

    /// Post not found in the store
    #[error("No post found with ID: {0}")]
    PostNotFound(String),

    /// Tool catalog and handler registry disagree
    #[error("Catalog mismatch: {0}")]
    CatalogMismatch(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for postbox-mcp operations
pub type Result<T> = std::result::Result<T, McpError>;
