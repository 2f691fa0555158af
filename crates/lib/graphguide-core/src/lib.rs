//! Core services for graphguide-mcp.
//!
//! This crate loads guidance topics from declarative resources into an
//! immutable catalog and implements the dispatcher that selects, optionally
//! narrows, and serializes a topic's document on request.

pub mod catalog;
pub mod dispatch;
pub mod error;

pub use catalog::{FocusRule, GuidanceCatalog, Topic, TopicDescriptor};
pub use dispatch::{Resolved, Selection};
pub use error::{CatalogError, GuidanceError};
