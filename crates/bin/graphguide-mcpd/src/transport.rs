use std::sync::Arc;

use graphguide_core::GuidanceCatalog;
use graphguide_mcp::server::{serve_stdio, serve_streamable_http};
use tracing::error;

use crate::config::GuidanceConfig;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Runs the enabled transports until they finish.
///
/// With stdio enabled the process lives as long as the stdio session and an
/// HTTP failure is only logged. In HTTP-only mode the HTTP server's error is
/// returned.
pub async fn serve(config: &GuidanceConfig, catalog: Arc<GuidanceCatalog>) -> Result<(), BoxError> {
    let http = config
        .enable_http
        .then(|| tokio::spawn(serve_streamable_http(catalog.clone(), config.mcp_http.clone())));

    match http {
        Some(handle) if !config.enable_stdio => handle.await?,
        Some(handle) => {
            tokio::spawn(async move {
                match handle.await {
                    Ok(Err(err)) => error!("streamable HTTP server failed: {err}"),
                    Err(err) => error!("streamable HTTP task aborted: {err}"),
                    Ok(Ok(())) => {}
                }
            });
            serve_stdio(catalog).await
        }
        None => serve_stdio(catalog).await,
    }
}
