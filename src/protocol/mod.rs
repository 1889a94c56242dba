//! Protocol layer - JSON-RPC over stdio
//!
//! This module provides:
//! - JSON-RPC request/response types and error codes
//! - Newline-delimited JSON codec
//! - Catalog responder for the listing methods
//! - The stdio server loop

pub mod codec;
pub mod messages;
pub mod responder;
pub mod server;

pub use codec::{FrameError, NdJsonCodec};
pub use messages::{ErrorCode, JSONRPC_VERSION, JsonRpcRequest, JsonRpcResponse, Methods, RpcError};
pub use responder::{CatalogResponder, ListPromptsResult, ListToolsResult, PromptDescriptor};
pub use server::McpServer;
