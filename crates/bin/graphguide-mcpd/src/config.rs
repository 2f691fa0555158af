use clap::{Parser, builder::BoolishValueParser};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use graphguide_mcp::server::McpHttpServerConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4020";
const DEFAULT_SSE_KEEP_ALIVE_SECS: u64 = 15;
const DEFAULT_SSE_RETRY_SECS: u64 = 3;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "graphguide-mcpd", version, about = "Kusto graph modeling guidance MCP daemon.")]
struct CliArgs {
    #[arg(
        long = "stdio",
        env = "GRAPHGUIDE_ENABLE_STDIO",
        default_value_t = true,
        action = clap::ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long = "http",
        env = "GRAPHGUIDE_ENABLE_HTTP",
        default_value_t = false,
        action = clap::ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    enable_http: bool,

    #[arg(long, env = "GRAPHGUIDE_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,

    #[arg(
        long,
        env = "GRAPHGUIDE_HTTP_STATEFUL",
        default_value_t = true,
        action = clap::ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    http_stateful: bool,

    #[arg(
        long,
        env = "GRAPHGUIDE_SSE_KEEP_ALIVE_SECS",
        default_value_t = DEFAULT_SSE_KEEP_ALIVE_SECS
    )]
    sse_keep_alive_secs: u64,

    #[arg(long, env = "GRAPHGUIDE_SSE_RETRY_SECS", default_value_t = DEFAULT_SSE_RETRY_SECS)]
    sse_retry_secs: u64,

    #[arg(long, env = "GRAPHGUIDE_CATALOG_DIR")]
    catalog_dir: Option<PathBuf>,

    #[arg(long, env = "GRAPHGUIDE_LOG", default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct GuidanceConfig {
    pub enable_stdio: bool,
    pub enable_http: bool,
    pub mcp_http: McpHttpServerConfig,
    pub catalog_dir: Option<PathBuf>,
    pub log_filter: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {name} value: {value}")]
    InvalidSetting { name: &'static str, value: String },
    #[error("no transport enabled; set GRAPHGUIDE_ENABLE_STDIO or GRAPHGUIDE_ENABLE_HTTP")]
    NoTransport,
}

impl GuidanceConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for GuidanceConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if !args.enable_stdio && !args.enable_http {
            return Err(ConfigError::NoTransport);
        }

        let log_filter = args.log_filter.trim().to_string();
        if log_filter.is_empty() || EnvFilter::try_new(&log_filter).is_err() {
            return Err(ConfigError::InvalidSetting {
                name: "GRAPHGUIDE_LOG",
                value: args.log_filter,
            });
        }

        let catalog_dir = args
            .catalog_dir
            .filter(|dir| !dir.as_os_str().to_string_lossy().trim().is_empty());

        let mcp_http = McpHttpServerConfig::new(args.mcp_http_addr)
            .with_stateful_mode(args.http_stateful)
            .with_sse_keep_alive(secs_or_disabled(args.sse_keep_alive_secs))
            .with_sse_retry(secs_or_disabled(args.sse_retry_secs));

        Ok(Self {
            enable_stdio: args.enable_stdio,
            enable_http: args.enable_http,
            mcp_http,
            catalog_dir,
            log_filter,
        })
    }
}

const fn secs_or_disabled(secs: u64) -> Option<Duration> {
    if secs == 0 {
        None
    } else {
        Some(Duration::from_secs(secs))
    }
}
