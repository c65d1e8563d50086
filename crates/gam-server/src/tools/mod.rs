//! MCP Tools Module
//!
//! - registry.rs - Tool trait, descriptors and the immutable registry
//! - router.rs - Tool dispatch and response envelopes
//! - descriptions.rs - Long-form descriptions for the reporting tools

pub mod descriptions;
pub mod registry;
pub mod router;

pub use registry::{
    AnalyticsTool, RegistryError, ToolDescriptor, ToolRegistry, normalize_input_schema,
    schema_for_args,
};
pub use router::ToolDispatcher;
