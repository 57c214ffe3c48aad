//! Sampling replies and the advisory code-fence check

/// Opening marker the prompt asks the LLM to start its reply with
pub const FENCE_OPEN: &str = "```python";

/// Closing marker the prompt asks the LLM to end its reply with
pub const FENCE_CLOSE: &str = "```";

/// Content returned by a sampling capability
///
/// Only [`Reply::Text`] carries generated code. Every other variant is
/// treated as a failed generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain text (expected to hold a fenced Python block)
    Text(String),

    /// Image payload
    Image { mime_type: String },

    /// Audio payload
    Audio { mime_type: String },

    /// Embedded resource
    Resource { uri: String },

    /// Link to a resource
    ResourceLink { uri: String },
}

impl Reply {
    /// Take the text payload, or `None` for any non-text variant
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::Image { .. }
            | Self::Audio { .. }
            | Self::Resource { .. }
            | Self::ResourceLink { .. } => None,
        }
    }

    /// Short name of the variant, for log messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Image { .. } => "image",
            Self::Audio { .. } => "audio",
            Self::Resource { .. } => "resource",
            Self::ResourceLink { .. } => "resource_link",
        }
    }
}

/// Check whether text looks like a single fenced Python block
///
/// Leading and trailing whitespace is ignored. Nothing between the fences
/// is inspected.
pub fn is_fenced_python(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.starts_with(FENCE_OPEN) && trimmed.ends_with(FENCE_CLOSE)
}
