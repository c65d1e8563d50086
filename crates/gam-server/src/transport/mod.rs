//! MCP Transport Layer
//!
//! | Transport | Description | Use Case |
//! |-----------|-------------|----------|
//! | [`stdio`] | Standard I/O streams | CLI tools, IDE integrations |

pub mod stdio;

pub use stdio::{StdioServerExt, TransportResult};
