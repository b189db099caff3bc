//! MCP JSON-RPC 2.0 server — reads requests from stdin, writes responses to stdout.
//!
//! The MCP protocol uses newline-delimited JSON over STDIO.
//! Tracing output goes to stderr so it doesn't interfere with the protocol.

use std::io::{self, BufRead, Write};

use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::tools;
use super::types::*;
use crate::parser::EdgeParser;
use crate::store::SharedStore;

/// Run the MCP server on the process STDIO until stdin closes.
pub fn run(store: SharedStore, parser: EdgeParser) {
    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(&store, &parser, stdin.lock(), &mut stdout.lock());
}

/// Serve newline-delimited JSON-RPC requests from `input` until EOF.
pub fn serve(store: &SharedStore, parser: &EdgeParser, input: impl BufRead, output: &mut impl Write) {
    info!("MCP server starting");

    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!(error = %e, "failed to read stdin");
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        debug!(request = %trimmed, "received request");

        let request: JsonRpcRequest = match serde_json::from_str(trimmed) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "invalid JSON-RPC request");
                let response =
                    JsonRpcResponse::error(None, PARSE_ERROR, format!("Parse error: {}", e));
                write_response(output, &response);
                continue;
            }
        };

        if let Some(response) = handle_request(store, parser, &request) {
            write_response(output, &response);
        }
    }

    info!("MCP server shutting down");
}

/// Handle a single JSON-RPC request and return a response (or None for notifications).
fn handle_request(
    store: &SharedStore,
    parser: &EdgeParser,
    request: &JsonRpcRequest,
) -> Option<JsonRpcResponse> {
    let id = request.id.clone();

    match request.method.as_str() {
        "initialize" => {
            info!("client initializing");
            let result = InitializeResult {
                protocol_version: "2024-11-05".to_string(),
                capabilities: ServerCapabilities {
                    tools: ToolCapability {},
                },
                server_info: ServerInfo {
                    name: "routefinder".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
            };
            Some(to_response(id, &result))
        }

        "notifications/initialized" => {
            info!("client initialized");
            None
        }

        "tools/list" => {
            debug!("listing tools");
            let result = ToolsListResult {
                tools: tools::list_tools(),
            };
            Some(to_response(id, &result))
        }

        "tools/call" => {
            let params: ToolsCallParams = match serde_json::from_value(request.params.clone()) {
                Ok(p) => p,
                Err(e) => {
                    return Some(JsonRpcResponse::error(
                        id,
                        INVALID_PARAMS,
                        format!("Invalid params: {}", e),
                    ));
                }
            };

            debug!(tool = %params.name, "calling tool");

            match tools::call_tool(store, parser, &params.name, &params.arguments) {
                Ok(result) => Some(to_response(id, &result)),
                Err(message) => {
                    error!(error = %message, "tool call failed");
                    Some(JsonRpcResponse::error(id, INTERNAL_ERROR, message))
                }
            }
        }

        "ping" => Some(JsonRpcResponse::success(id, Value::Object(Default::default()))),

        _ => {
            warn!(method = %request.method, "unknown method");
            Some(JsonRpcResponse::error(
                id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ))
        }
    }
}

fn to_response(id: Option<Value>, result: &impl serde::Serialize) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::error(id, INTERNAL_ERROR, format!("Serialization error: {}", e)),
    }
}

/// Write a JSON-RPC response (newline-delimited).
fn write_response(output: &mut impl Write, response: &JsonRpcResponse) {
    let json = serde_json::to_string(response).unwrap_or_default();
    debug!(response = %json, "sending response");
    let _ = writeln!(output, "{}", json);
    let _ = output.flush();
}
