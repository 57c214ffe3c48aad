//! SolidGen Core - prompt-and-sample adapter for SolidWorks script generation
//!
//! Turns a free-text part description into an LLM prompt asking for a runnable
//! pywin32 automation script, hands it to an injected [`Sampler`], and passes
//! the reply back unchanged.
//!
//! The adapter is transport-agnostic. A host binds it to a real sampling
//! channel by implementing [`Sampler`] and [`Diagnostics`]; the MCP server in
//! `solidgen-mcp` does this over an rmcp peer.
//!
//! ## Example
//!
//! ```ignore
//! use solidgen_core::{PromptConfig, generate};
//!
//! let code = generate("a 10mm cube", &sampler, &diagnostics, &PromptConfig::default()).await?;
//! ```

pub mod capability;
pub mod error;
pub mod generate;
pub mod prompt;
pub mod reply;

pub use capability::{Diagnostics, LogDiagnostics, Sampler, Severity};
pub use error::{Error, Result};
pub use generate::generate;
pub use prompt::{PromptConfig, render_prompt};
pub use reply::{Reply, is_fenced_python};
