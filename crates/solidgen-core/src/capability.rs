//! Host capabilities the adapter depends on
//!
//! [`generate`](crate::generate) never reaches for a global context. The host
//! passes in a [`Sampler`] to talk to the LLM and a [`Diagnostics`] sink for
//! side-channel notifications, so tests can substitute both.

use std::fmt;
use std::future::Future;

use crate::reply::Reply;

/// Sends a prompt to a language model and returns its reply
pub trait Sampler {
    /// Failure raised by the underlying transport or model
    type Error: std::error::Error + Send + Sync + 'static;

    /// Sample a single reply for `prompt`
    fn sample(&self, prompt: &str) -> impl Future<Output = Result<Reply, Self::Error>> + Send;
}

/// Severity of a diagnostic sent through the host's reporting channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Something looks off but the call still succeeds
    Warning,

    /// The call is about to fail
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Warning => "warning",
            Self::Error => "error",
        };
        write!(f, "{name}")
    }
}

/// Side channel for warnings and errors, independent of the return value
pub trait Diagnostics {
    /// Report a diagnostic to the caller
    ///
    /// Delivery is best effort. Implementations must not fail the
    /// surrounding operation.
    fn report(&self, severity: Severity, message: &str) -> impl Future<Output = ()> + Send;
}

/// Diagnostics sink that only writes to the tracing log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    async fn report(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Warning => tracing::warn!("{message}"),
            Severity::Error => tracing::error!("{message}"),
        }
    }
}
