//! MCP tool modules.
//!
//! Tools are grouped by surface: one tool per built-in guidance topic, and a
//! generic catalog surface for listing and fetching any loaded topic.

pub mod catalog;
pub mod guidance;
