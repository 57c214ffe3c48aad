//! Error types for SolidGen

use thiserror::Error;

/// Result type alias using SolidGen's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating a script
#[derive(Error, Debug)]
pub enum Error {
    /// The sampling capability failed (transport or model error)
    #[error("Failed to get response from LLM: {0}")]
    Sampling(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The sampling capability replied with something other than text
    #[error("LLM response was not text content.")]
    NonTextReply,

    /// The host cancelled the request before sampling finished
    #[error("Request was cancelled before the LLM responded.")]
    Cancelled,
}

impl Error {
    /// Wrap an upstream sampling failure
    pub fn sampling<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Sampling(Box::new(source))
    }
}
