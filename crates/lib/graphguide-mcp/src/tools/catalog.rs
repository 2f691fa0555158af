use graphguide_core::Topic;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::GuidanceMcp;

/// Parameters for fetching guidance for any catalog topic.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetGuidanceParams {
    /// Topic id, as returned by `list_topics`.
    pub topic: String,
    /// Optional focus alias; ignored by topics without focus support.
    pub focus: Option<String>,
}

/// Catalog entry returned by `list_topics`.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct TopicSummary {
    pub id: String,
    pub tool: String,
    pub description: String,
    pub focus_parameter: Option<String>,
    pub supports_focus: bool,
    pub focus_aliases: Vec<String>,
    pub sections: Vec<String>,
}

impl From<&Topic> for TopicSummary {
    fn from(topic: &Topic) -> Self {
        let descriptor = topic.descriptor();
        Self {
            id: descriptor.id.clone(),
            tool: descriptor.tool.clone(),
            description: descriptor.description.clone(),
            focus_parameter: descriptor.focus_parameter.clone(),
            supports_focus: descriptor.supports_focus,
            focus_aliases: descriptor.aliases().map(ToString::to_string).collect(),
            sections: topic
                .document()
                .section_names()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

#[tool_router(router = tool_router_catalog, vis = "pub")]
impl GuidanceMcp {
    #[tool(description = "List guidance topics with their tools, focus aliases, and top-level sections.")]
    async fn list_topics(&self) -> Result<CallToolResult, ErrorData> {
        let topics: Vec<TopicSummary> = self.catalog().topics().map(TopicSummary::from).collect();
        Ok(CallToolResult::success(vec![Content::json(topics)?]))
    }

    #[tool(description = "Fetch guidance for a topic id, optionally narrowed by a focus alias. Unrecognized focus values return the full guidance.")]
    async fn get_guidance(
        &self,
        Parameters(params): Parameters<GetGuidanceParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.guidance_result(params.topic.trim(), params.focus.as_deref())
    }
}
