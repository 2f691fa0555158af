//! Guidance document model for graphguide-mcp.
//!
//! This crate defines the ordered tree of string leaves that every guidance
//! topic is made of, shared by the catalog loader, the dispatcher, and the MCP
//! surface.

pub mod document;
pub mod node;

pub use document::GuidanceDocument;
pub use node::{GuidanceNode, SectionMap};
