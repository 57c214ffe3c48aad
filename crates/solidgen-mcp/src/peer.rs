//! Sampling and diagnostics over an MCP client connection
//!
//! The MCP client owns the LLM. [`PeerSampler`] asks it for a completion with
//! `sampling/createMessage`, and [`PeerDiagnostics`] reports warnings and
//! errors back to it as `notifications/message`.

use std::sync::Arc;

use parking_lot::Mutex;
use rmcp::model::{
    Content, CreateMessageRequestParam, LoggingLevel, LoggingMessageNotificationParam, RawContent,
    ResourceContents, Role, SamplingMessage,
};
use rmcp::service::{Peer, RoleServer, ServiceError};
use solidgen_core::{Diagnostics, LogDiagnostics, Reply, Sampler, Severity};

use crate::settings::SamplingSettings;

/// Logger name attached to every log notification
pub const LOGGER: &str = "solidgen";

/// Convert sampled MCP content into an adapter reply
pub fn reply_from_content(content: Content) -> Reply {
    match content.raw {
        RawContent::Text(text) => Reply::Text(text.text),
        RawContent::Image(image) => Reply::Image {
            mime_type: image.mime_type,
        },
        RawContent::Audio(audio) => Reply::Audio {
            mime_type: audio.mime_type,
        },
        RawContent::Resource(embedded) => Reply::Resource {
            uri: match embedded.resource {
                ResourceContents::TextResourceContents { uri, .. }
                | ResourceContents::BlobResourceContents { uri, .. } => uri,
            },
        },
        RawContent::ResourceLink(link) => Reply::ResourceLink { uri: link.uri },
    }
}

/// [`Sampler`] backed by the connected client's sampling capability
#[derive(Clone)]
pub struct PeerSampler {
    peer: Peer<RoleServer>,
    settings: SamplingSettings,
}

impl PeerSampler {
    /// Create a sampler for the given client connection
    pub fn new(peer: Peer<RoleServer>, settings: SamplingSettings) -> Self {
        Self { peer, settings }
    }

    fn request(&self, prompt: &str) -> CreateMessageRequestParam {
        CreateMessageRequestParam {
            messages: vec![SamplingMessage {
                role: Role::User,
                content: Content::text(prompt),
            }],
            model_preferences: None,
            system_prompt: self.settings.system_prompt.clone(),
            include_context: None,
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
            stop_sequences: None,
            metadata: None,
        }
    }
}

impl Sampler for PeerSampler {
    type Error = ServiceError;

    async fn sample(&self, prompt: &str) -> Result<Reply, ServiceError> {
        let result = self.peer.create_message(self.request(prompt)).await?;

        tracing::debug!(
            model = %result.model,
            stop_reason = ?result.stop_reason,
            "Sampling complete"
        );

        Ok(reply_from_content(result.message.content))
    }
}

/// Minimum log level the client asked for with `logging/setLevel`
///
/// Shared between the service and every [`PeerDiagnostics`] it creates.
pub type SharedLevel = Arc<Mutex<LoggingLevel>>;

/// Rank of a log level, lowest (debug) first
fn level_rank(level: &LoggingLevel) -> u8 {
    match level {
        LoggingLevel::Debug => 0,
        LoggingLevel::Info => 1,
        LoggingLevel::Notice => 2,
        LoggingLevel::Warning => 3,
        LoggingLevel::Error => 4,
        LoggingLevel::Critical => 5,
        LoggingLevel::Alert => 6,
        LoggingLevel::Emergency => 7,
    }
}

/// Whether a message at `level` passes the client's `minimum`
pub fn level_enabled(level: &LoggingLevel, minimum: &LoggingLevel) -> bool {
    level_rank(level) >= level_rank(minimum)
}

/// [`Diagnostics`] that notifies the connected client and logs to stderr
///
/// Every diagnostic reaches the tracing log. Only those at or above the
/// client's requested level are sent as notifications.
#[derive(Clone)]
pub struct PeerDiagnostics {
    peer: Peer<RoleServer>,
    minimum: SharedLevel,
}

impl PeerDiagnostics {
    /// Create a diagnostics sink for the given client connection
    pub fn new(peer: Peer<RoleServer>, minimum: SharedLevel) -> Self {
        Self { peer, minimum }
    }
}

impl Diagnostics for PeerDiagnostics {
    async fn report(&self, severity: Severity, message: &str) {
        LogDiagnostics.report(severity, message).await;

        let level = match severity {
            Severity::Warning => LoggingLevel::Warning,
            Severity::Error => LoggingLevel::Error,
        };
        let enabled = level_enabled(&level, &self.minimum.lock());
        if !enabled {
            return;
        }

        let notification = LoggingMessageNotificationParam {
            level,
            logger: Some(LOGGER.to_string()),
            data: serde_json::Value::String(message.to_string()),
        };

        if let Err(e) = self.peer.notify_logging_message(notification).await {
            tracing::warn!("Failed to deliver {severity} notification to client: {e}");
        }
    }
}
