use graphguide_core::catalog::builtin::{
    BEST_PRACTICES,
    COMMAND_GUIDANCE,
    MATCH_GUIDANCE,
    SCHEMA_SIMPLIFICATION,
};
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::GuidanceMcp;

/// Parameters for topics that take an optional focus area.
#[derive(Debug, Clone, Default, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FocusAreaParams {
    /// Optional area to narrow the guidance to.
    #[serde(rename = "focusArea", default)]
    pub focus_area: Option<String>,
}

/// Parameters for the command guidance topic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CommandTypeParams {
    /// Optional command type of interest.
    #[serde(rename = "commandType", default)]
    pub command_type: Option<String>,
}

#[tool_router(router = tool_router_guidance, vis = "pub")]
impl GuidanceMcp {
    #[tool(description = "Provides comprehensive best practices and guidelines for creating effective Kusto graph models.")]
    async fn get_graph_model_best_practices(
        &self,
        Parameters(params): Parameters<FocusAreaParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.guidance_result(BEST_PRACTICES, params.focus_area.as_deref())
    }

    #[tool(description = "Provides guidance on creating effective KQL commands for graph model management and querying.")]
    async fn get_graph_command_guidance(
        &self,
        Parameters(params): Parameters<CommandTypeParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.guidance_result(COMMAND_GUIDANCE, params.command_type.as_deref())
    }

    #[tool(description = "Provides specific guidance on simplifying graph model schemas with property bags and efficient design patterns.")]
    async fn get_schema_simplification_guidance(&self) -> Result<CallToolResult, ErrorData> {
        self.guidance_result(SCHEMA_SIMPLIFICATION, None)
    }

    #[tool(description = "Provides comprehensive guidance on using the graph-match operator with persistent graphs using the intrinsic graph function. Optional focusArea: labels, patterns, variable, variablelength, performance, examples.")]
    async fn get_graph_match_guidance(
        &self,
        Parameters(params): Parameters<FocusAreaParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.guidance_result(MATCH_GUIDANCE, params.focus_area.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use graphguide_core::GuidanceCatalog;
    use graphguide_model::GuidanceDocument;
    use serde_json::Value;

    use super::*;

    fn server() -> GuidanceMcp {
        GuidanceMcp::new(GuidanceCatalog::builtin().expect("built-in catalog"))
    }

    fn result_text(result: &CallToolResult) -> String {
        let value = serde_json::to_value(result).expect("tool result should serialize");
        value["content"][0]["text"]
            .as_str()
            .expect("tool result should carry text")
            .to_string()
    }

    fn section_names(text: &str) -> Vec<String> {
        GuidanceDocument::from_json(text)
            .expect("tool text should be a guidance document")
            .section_names()
            .map(ToString::to_string)
            .collect()
    }

    #[tokio::test]
    async fn match_guidance_honours_focus_area() {
        let server = server();
        let result = server
            .get_graph_match_guidance(Parameters(FocusAreaParams {
                focus_area: Some("Performance".to_string()),
            }))
            .await
            .expect("tool should succeed");

        assert_eq!(
            section_names(&result_text(&result)),
            ["PerformanceOptimization", "CommonMistakes"]
        );
    }

    #[tokio::test]
    async fn match_guidance_without_focus_is_full() {
        let server = server();
        let result = server
            .get_graph_match_guidance(Parameters(FocusAreaParams::default()))
            .await
            .expect("tool should succeed");

        assert_eq!(section_names(&result_text(&result)).len(), 11);
    }

    #[tokio::test]
    async fn best_practices_ignores_focus_area() {
        let server = server();
        let plain = server
            .get_graph_model_best_practices(Parameters(FocusAreaParams::default()))
            .await
            .expect("tool should succeed");
        let focused = server
            .get_graph_model_best_practices(Parameters(FocusAreaParams {
                focus_area: Some("labels".to_string()),
            }))
            .await
            .expect("tool should succeed");

        assert_eq!(result_text(&plain), result_text(&focused));
        assert_eq!(section_names(&result_text(&plain))[0], "CorePrinciples");
    }

    #[tokio::test]
    async fn command_guidance_ignores_command_type() {
        let server = server();
        let plain = server
            .get_graph_command_guidance(Parameters(CommandTypeParams::default()))
            .await
            .expect("tool should succeed");
        let typed = server
            .get_graph_command_guidance(Parameters(CommandTypeParams {
                command_type: Some("create".to_string()),
            }))
            .await
            .expect("tool should succeed");

        assert_eq!(result_text(&plain), result_text(&typed));
        assert_eq!(section_names(&result_text(&plain)), ["CreationCommands", "QueryPatterns"]);
    }

    #[tokio::test]
    async fn schema_simplification_returns_all_sections() {
        let server = server();
        let result = server
            .get_schema_simplification_guidance()
            .await
            .expect("tool should succeed");

        assert_eq!(
            section_names(&result_text(&result)),
            [
                "PropertyBagStrategy",
                "IDTypeConsistency",
                "DedicatedPropertyGuidelines",
                "SchemaEvolutionStrategy",
                "QueryingPropertyBags",
            ]
        );
    }

    #[test]
    fn params_use_camel_case_names() {
        let params: FocusAreaParams =
            serde_json::from_str(r#"{"focusArea": "labels"}"#).expect("valid params");
        assert_eq!(params.focus_area.as_deref(), Some("labels"));

        let params: CommandTypeParams =
            serde_json::from_str(r#"{"commandType": "drop"}"#).expect("valid params");
        assert_eq!(params.command_type.as_deref(), Some("drop"));

        let params: FocusAreaParams = serde_json::from_value(Value::Object(serde_json::Map::new()))
            .expect("focus area is optional");
        assert!(params.focus_area.is_none());
    }
}
