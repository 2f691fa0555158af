use std::borrow::Cow;

use graphguide_core::GuidanceError;
use rmcp::ErrorData;
use rmcp::model::ErrorCode;

pub fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

pub fn map_guidance_err(err: GuidanceError) -> ErrorData {
    match err {
        GuidanceError::UnknownTopic(topic) => {
            mcp_err(ErrorCode::RESOURCE_NOT_FOUND, format!("unknown topic: {topic}"))
        }
        GuidanceError::Render(err) => mcp_err(
            ErrorCode::INTERNAL_ERROR,
            format!("failed to render guidance: {err}"),
        ),
    }
}
