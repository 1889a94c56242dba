//! MCP server - stdio request loop
//!
//! Reads one JSON-RPC request per line, answers it, and writes the response
//! before reading the next. Bad lines produce error responses; the loop only
//! ends on EOF or an IO failure.

use futures::{SinkExt, StreamExt};
use log::{debug, info, warn};
use serde::Serialize;
use serde_json::{Value, json};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::{FramedRead, FramedWrite};

use crate::config::{Config, ServerConfig};
use crate::error::Result;
use crate::protocol::codec::{FrameError, NdJsonCodec};
use crate::protocol::messages::{JsonRpcRequest, JsonRpcResponse, Methods, RpcError, is_valid_id};
use crate::protocol::responder::CatalogResponder;
use crate::tools::{Dispatcher, ToolCallRequest};

/// Stdio tool server
pub struct McpServer {
    dispatcher: Dispatcher,
    responder: CatalogResponder,
    info: ServerConfig,
    max_message_bytes: usize,
}

impl McpServer {
    pub fn new(dispatcher: Dispatcher, config: &Config) -> Self {
        let responder = CatalogResponder::new(dispatcher.catalog().clone());
        Self {
            dispatcher,
            responder,
            info: config.server.clone(),
            max_message_bytes: config.transport.max_message_bytes,
        }
    }

    pub fn responder(&self) -> &CatalogResponder {
        &self.responder
    }

    /// Answer one request. Notifications are executed but get no response.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!("Received request: method={} id={:?}", request.method, request.id);

        if request.is_notification() {
            if request.method == Methods::INITIALIZED {
                info!("Client initialized");
            } else if let Err(e) = self.route(&request.method, request.params).await {
                debug!("Notification {} failed: {}", request.method, e.message);
            }
            return None;
        }

        if request.has_invalid_id() {
            warn!("Rejected {} request with invalid id: {:?}", request.method, request.id);
            return Some(JsonRpcResponse::error(
                None,
                RpcError::invalid_request("Request id must be a string or number"),
            ));
        }

        let response = match self.route(&request.method, request.params).await {
            Ok(result) => JsonRpcResponse::success(request.id, result),
            Err(error) => JsonRpcResponse::error(request.id, error),
        };
        Some(response)
    }

    async fn route(&self, method: &str, params: Value) -> std::result::Result<Value, RpcError> {
        match method {
            Methods::INITIALIZE => Ok(self.initialize_result()),
            Methods::PING => Ok(json!({})),
            Methods::TOOLS_LIST => to_result(&self.responder.list_tools()),
            Methods::PROMPTS_LIST => to_result(&self.responder.list_prompts()),
            Methods::TOOLS_CALL => {
                let call: ToolCallRequest = serde_json::from_value(params)
                    .map_err(|e| RpcError::invalid_params(format!("Invalid params: {}", e)))?;
                let result = self.dispatcher.dispatch(&call).await;
                to_result(&result)
            }
            other => {
                warn!("Unknown method: {}", other);
                Err(RpcError::method_not_found(other))
            }
        }
    }

    fn initialize_result(&self) -> Value {
        json!({
            "protocolVersion": self.info.protocol_version,
            "capabilities": {
                "tools": {},
                "prompts": {},
            },
            "serverInfo": {
                "name": self.info.name,
                "version": self.info.version,
            },
        })
    }

    /// Serve requests from `reader`, writing responses to `writer`, until EOF.
    pub async fn run<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut requests = FramedRead::new(
            reader,
            NdJsonCodec::<JsonRpcRequest>::with_max_length(self.max_message_bytes),
        );
        let mut responses = FramedWrite::new(writer, NdJsonCodec::<JsonRpcResponse>::new());

        while let Some(frame) = requests.next().await {
            let response = match frame? {
                Ok(request) => self.handle_request(request).await,
                Err(e) => Some(frame_error_response(e)),
            };

            if let Some(response) = response {
                responses.send(response).await?;
            }
        }

        info!("Input closed, shutting down");
        Ok(())
    }

    /// Serve on the process's stdin/stdout.
    pub async fn run_stdio(&self) -> Result<()> {
        info!("{} running on stdio", self.info.name);
        self.run(tokio::io::stdin(), tokio::io::stdout()).await
    }
}

fn to_result<T: Serialize>(value: &T) -> std::result::Result<Value, RpcError> {
    serde_json::to_value(value).map_err(|e| RpcError::internal_error(e.to_string()))
}

fn frame_error_response(error: FrameError) -> JsonRpcResponse {
    warn!("Rejected inbound message: {}", error);
    let (id, rpc_error) = match &error {
        FrameError::Parse(_) => (None, RpcError::parse_error(error.to_string())),
        FrameError::Invalid { value, .. } => {
            let id = value.get("id").filter(|id| is_valid_id(id)).cloned();
            (id, RpcError::invalid_request(error.to_string()))
        }
        FrameError::TooLarge(..) => (None, RpcError::invalid_request(error.to_string())),
    };
    JsonRpcResponse::error(id, rpc_error)
}
