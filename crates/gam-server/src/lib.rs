//! # Google Analytics MCP Server
//!
//! Exposes Google Analytics account, property and reporting queries as MCP
//! tools over stdio.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gam_server::{RunOptions, run};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     run(RunOptions::default()).await
//! }
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`McpServer`] | `rmcp` server handler |
//! | [`McpServerBuilder`] | Builder wiring registry and metadata |
//! | [`tools::ToolRegistry`] | Immutable name → tool mapping |
//! | [`tools::ToolDispatcher`] | List/call dispatch with error envelopes |

pub mod args;
pub mod builder;
pub mod constants;
pub mod formatter;
pub mod handlers;
pub mod init;
pub mod mcp_server;
pub mod tools;
pub mod transport;

pub use builder::McpServerBuilder;
pub use init::{RunOptions, run};
pub use mcp_server::McpServer;
