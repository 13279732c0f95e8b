//! MCP Tools module - defines tools exposed via JSON-RPC.
//!
//! Each tool module provides its descriptor (name, description, input
//! schema) and request types; dispatch lives in `registry`.

pub mod feed_search;
pub mod greetings;
pub mod math;
pub mod registry;
pub mod support_summary;

pub use registry::ToolRegistry;
