//! SolidGen MCP Server - Model Context Protocol server for SolidWorks script generation
//!
//! This crate exposes one MCP tool, `solidgen`, which turns a description of
//! a part into a Python (pywin32) script that drives SolidWorks. The server
//! runs no model of its own: it asks the connected client to sample its LLM
//! and hands back whatever text comes out.
//!
//! ## Diagnostics
//!
//! Besides the tool result, the server sends `notifications/message` log
//! entries when sampling fails or the reply does not look like a fenced
//! Python block. Clients can observe either signal independently.

pub mod peer;
pub mod settings;
pub mod tools;

use std::sync::Arc;

use parking_lot::Mutex;
use rmcp::{
    ErrorData as McpError,
    ServerHandler,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{
        CallToolResult, Content, Implementation, LoggingLevel, ProtocolVersion, ServerCapabilities,
        ServerInfo, SetLevelRequestParam,
    },
    service::{RequestContext, RoleServer},
    tool, tool_handler, tool_router,
};
use solidgen_core::{Error, generate};

use crate::peer::{PeerDiagnostics, PeerSampler, SharedLevel};
use crate::settings::Settings;
use crate::tools::solidgen::SolidgenRequest;

// Re-export for binary
pub use rmcp;

const INSTRUCTIONS: &str = "This server generates Python code for drawing parts in SolidWorks \
     using the pywin32 library. Use the 'solidgen' tool to create a script from a description.";

/// The SolidGen MCP service
///
/// Tool calls share nothing but the immutable settings and the client's
/// requested log level, so every call is independent.
#[derive(Clone)]
pub struct SolidgenService {
    settings: Arc<Settings>,
    log_level: SharedLevel,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SolidgenService {
    /// Create a new MCP service with the given settings
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
            // Everything is sent until the client asks otherwise
            log_level: Arc::new(Mutex::new(LoggingLevel::Debug)),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Generates Python code for SolidWorks based on a user's request. The user_request should describe the part or drawing to be created. This tool uses the client's LLM (via sampling) to generate the necessary pywin32 code. The output is a string containing a Python code block in Markdown format.")]
    async fn solidgen(
        &self,
        params: Parameters<SolidgenRequest>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let request = params.0;
        let sampler = PeerSampler::new(context.peer.clone(), self.settings.sampling.clone());
        let diagnostics = PeerDiagnostics::new(context.peer.clone(), self.log_level.clone());

        // Dropping the generate future on cancellation drops the pending sampling request
        let result = tokio::select! {
            result = generate(&request.user_request, &sampler, &diagnostics, &self.settings.prompt) => result,
            () = context.ct.cancelled() => Err(Error::Cancelled),
        };

        match result {
            Ok(code) => Ok(CallToolResult::success(vec![Content::text(code)])),
            Err(e) => {
                tracing::info!("solidgen failed: {e}");
                Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for SolidgenService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_logging()
                .build(),
            server_info: Implementation {
                name: "solidgen-mcp".to_string(),
                title: Some("SolidGen".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }

    async fn set_level(
        &self,
        request: SetLevelRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<(), McpError> {
        tracing::debug!(level = ?request.level, "Client set logging level");
        *self.log_level.lock() = request.level;
        Ok(())
    }
}
