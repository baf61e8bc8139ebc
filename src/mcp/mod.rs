//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes catalog inspection and translation checks to AI assistants over
//! stdio.
//!
//! ## Module Structure
//!
//! - `helpers`: Pagination, path resolution and JSON result helpers
//! - `server`: Main MCP server implementation
//! - `types`: MCP-specific type definitions

mod helpers;
mod server;
pub mod types;

pub use server::{TscatMcpServer, run_server};
