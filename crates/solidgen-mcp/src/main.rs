//! SolidGen MCP Server Binary
//!
//! Runs the SolidGen MCP server on stdio transport. The connected client must
//! support sampling, since the server asks the client's LLM to write the
//! SolidWorks script.
//!
//! ## Usage
//!
//! Run directly:
//! ```bash
//! solidgen-mcp --config ./settings.json
//! ```
//!
//! Or add to an MCP client's configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "solidgen": {
//!       "command": "solidgen-mcp"
//!     }
//!   }
//! }
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rmcp::ServiceExt;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use solidgen_core::render_prompt;
use solidgen_mcp::SolidgenService;
use solidgen_mcp::settings::load_settings;

#[derive(Parser)]
#[command(name = "solidgen-mcp")]
#[command(about = "MCP server that generates SolidWorks automation scripts", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (defaults to {config_dir}/solidgen/settings.json if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print the prompt rendered for REQUEST and exit without serving
    #[arg(long, value_name = "REQUEST")]
    print_prompt: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // CRITICAL: Log to stderr only - stdout is reserved for MCP JSON-RPC
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter)
        .init();

    let settings = load_settings(cli.config.as_deref())?;

    if let Some(request) = cli.print_prompt {
        print!("{}", render_prompt(&request, &settings.prompt));
        return Ok(());
    }

    tracing::info!(
        max_tokens = settings.sampling.max_tokens,
        template_part = %settings.prompt.template_part,
        save_dir = %settings.prompt.save_dir,
        "SolidGen MCP server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let service = SolidgenService::new(settings);
    let server = service.serve(stdio()).await?;

    tracing::info!("Ready. Listening on stdio...");

    // Wait for client to disconnect or error
    server.waiting().await?;

    tracing::info!("Client disconnected. Shutting down.");
    Ok(())
}
