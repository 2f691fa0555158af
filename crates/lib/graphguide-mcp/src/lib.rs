//! MCP server implementation for graphguide-mcp.
//!
//! This crate wires the guidance catalog into rmcp tool handlers and exposes
//! the MCP-facing API surface for Kusto graph modeling guidance.

mod helpers;
mod tools;
pub mod server;

use std::sync::Arc;

use graphguide_core::GuidanceCatalog;
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use tracing::debug;

pub use tools::catalog::{GetGuidanceParams, TopicSummary};
pub use tools::guidance::{CommandTypeParams, FocusAreaParams};

const SERVER_INSTRUCTIONS: &str = r"graphguide-mcp provides best practices, command templates, and query guidance for Kusto graph models.

Tools:
- `get_graph_model_best_practices`: design principles for graph schemas and definition steps.
- `get_graph_command_guidance`: `.create-or-alter graph_model` templates, graph-match query patterns, and management commands.
- `get_schema_simplification_guidance`: property bags, string ID consistency, and schema evolution.
- `get_graph_match_guidance`: graph-match syntax with the intrinsic graph() function.
  Pass `focusArea` to narrow the result: `labels`, `patterns`, `variable` (or `variablelength`),
  `performance`, or `examples`. Unrecognized values return the full guidance.
- `get_guidance`: fetch any catalog topic by id with an optional `focus`.
- `list_topics`: list topic ids, their tools, and supported focus aliases.

Notes:
- Every result is an indented JSON document whose sections keep a stable order.
- `health` returns `ok`.";

/// MCP server wrapper around the guidance catalog and tool routers.
#[derive(Clone)]
pub struct GuidanceMcp {
    tool_router: ToolRouter<Self>,
    catalog: Arc<GuidanceCatalog>,
}

impl GuidanceMcp {
    /// Creates a new server using a catalog by value.
    #[must_use]
    pub fn new(catalog: GuidanceCatalog) -> Self {
        Self::with_catalog(Arc::new(catalog))
    }

    /// Creates a new server using a shared catalog handle.
    #[must_use]
    pub fn with_catalog(catalog: Arc<GuidanceCatalog>) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_guidance()
            + Self::tool_router_catalog();
        Self {
            tool_router,
            catalog,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &GuidanceCatalog {
        &self.catalog
    }

    /// Renders guidance for a topic, mapping dispatcher errors to MCP errors.
    pub(crate) fn render_guidance(
        &self,
        topic: &str,
        focus: Option<&str>,
    ) -> Result<String, ErrorData> {
        debug!(topic, focus, "guidance requested");
        self.catalog
            .get_guidance(topic, focus)
            .map_err(helpers::map_guidance_err)
    }

    pub(crate) fn guidance_result(
        &self,
        topic: &str,
        focus: Option<&str>,
    ) -> Result<CallToolResult, ErrorData> {
        let text = self.render_guidance(topic, focus)?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl GuidanceMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for GuidanceMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use graphguide_core::GuidanceCatalog;

    use super::*;

    fn server() -> GuidanceMcp {
        GuidanceMcp::new(GuidanceCatalog::builtin().expect("built-in catalog"))
    }

    #[test]
    fn router_exposes_every_tool() {
        let tools = server().tool_router.list_all();
        let mut names: Vec<&str> = tools.iter().map(|tool| tool.name.as_ref()).collect();
        names.sort_unstable();

        assert_eq!(
            names,
            [
                "get_graph_command_guidance",
                "get_graph_match_guidance",
                "get_graph_model_best_practices",
                "get_guidance",
                "get_schema_simplification_guidance",
                "health",
                "list_topics",
            ]
        );
        for tool in &tools {
            let description = tool.description.as_deref().unwrap_or_default();
            assert!(!description.trim().is_empty(), "{} has no description", tool.name);
        }
    }

    #[test]
    fn match_guidance_takes_optional_focus_area() {
        let tools = server().tool_router.list_all();
        let tool = tools
            .iter()
            .find(|tool| tool.name == "get_graph_match_guidance")
            .expect("match guidance tool registered");

        let schema = &tool.input_schema;
        assert!(
            schema
                .get("properties")
                .and_then(|properties| properties.get("focusArea"))
                .is_some(),
            "focusArea missing from {schema:?}"
        );
        let required = schema
            .get("required")
            .and_then(|required| required.as_array())
            .map(Vec::as_slice)
            .unwrap_or_default();
        assert!(required.iter().all(|name| name != "focusArea"));
    }
}
