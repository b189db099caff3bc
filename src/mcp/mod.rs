//! MCP (Model Context Protocol) server module.
//!
//! Exposes dataset loading and route queries to agents as JSON-RPC 2.0
//! tools over STDIO.

pub mod server;
pub mod tools;
pub mod types;
