//! postbox-mcp - a minimal MCP tool server
//!
//! Advertises a small catalog of tools over JSON-RPC on stdio and routes
//! `tools/call` requests to typed handlers. Every call yields a uniform
//! result envelope, whether it succeeded or not.

pub mod config;
pub mod error;
pub mod id;
pub mod protocol;
pub mod store;
pub mod tools;

pub use error::{McpError, Result};
