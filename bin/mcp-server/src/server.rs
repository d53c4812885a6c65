//! MCP tool surface for BIN lookups.
//!
//! One tool, `get_bin_data_tool`, exposed over the Model Context Protocol.
//! The tagged lookup outcome is collapsed here: "no data" and every lookup
//! error produce the same fixed reply for the calling agent, with the
//! distinction preserved in the logs only.

use std::sync::Arc;

use bindata_core::{format::format_bin_data, ports::BinDataPort, types::BinLookup};
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

/// Fixed reply when the lookup yields no usable record.
const UNAVAILABLE: &str = "Unable to retrieve BIN data or no BIN data found";

/// Parameters for [`BinDataServer::get_bin_data_tool`].
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetBinDataParams {
    /// The BIN number to get data for.
    pub bin: String,
}

/// MCP server exposing BIN lookups backed by a [`BinDataPort`].
#[derive(Clone)]
pub struct BinDataServer {
    provider: Arc<dyn BinDataPort>,
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for BinDataServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinDataServer").finish_non_exhaustive()
    }
}

#[tool_router]
impl BinDataServer {
    /// Wrap a provider port into a servable MCP handler.
    #[must_use]
    pub fn new(provider: Arc<dyn BinDataPort>) -> Self {
        Self { provider, tool_router: Self::tool_router() }
    }

    #[tool(description = "Get BIN data for a given BIN number.")]
    pub async fn get_bin_data_tool(
        &self,
        Parameters(GetBinDataParams { bin }): Parameters<GetBinDataParams>,
    ) -> Result<CallToolResult, McpError> {
        // Per-call enhanced override is not exposed to the agent; the
        // adapter's configured default applies.
        let text = match self.provider.get_bin_data(&bin, None).await {
            Ok(BinLookup::Found(card)) => format_bin_data(Some(&card)),
            Ok(BinLookup::NotFound) => {
                tracing::info!(bin = %bin, "no BIN data found");
                UNAVAILABLE.to_string()
            }
            Err(err) => {
                tracing::warn!(bin = %bin, error = %err, "BIN lookup failed");
                UNAVAILABLE.to_string()
            }
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for BinDataServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "bin-data".to_string(),
                ..Implementation::from_build_env()
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "BIN lookup server. Call get_bin_data_tool with a Bank Identification \
                 Number to fetch card metadata as a text report."
                    .to_string(),
            ),
            ..ServerInfo::default()
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
