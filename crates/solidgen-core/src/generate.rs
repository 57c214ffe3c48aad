//! The prompt-and-sample operation

use crate::capability::{Diagnostics, Sampler, Severity};
use crate::error::{Error, Result};
use crate::prompt::{PromptConfig, render_prompt};
use crate::reply::is_fenced_python;

const NON_TEXT_DIAGNOSTIC: &str =
    "LLM did not return text content for SolidWorks code generation.";

const UNFENCED_DIAGNOSTIC: &str = "LLM response did not conform to the expected markdown code block format \
     (```python...```). Returning the text as is, but it might need further processing \
     by the calling LLM/client.";

/// Generate a SolidWorks automation script for `request`
///
/// Renders the prompt, samples exactly once, and returns the reply text
/// byte-for-byte. A text reply that is not a fenced Python block is still
/// returned, with one warning sent to `diagnostics`.
///
/// # Errors
/// - [`Error::Sampling`] if the sampler fails. The message keeps the cause.
/// - [`Error::NonTextReply`] if the sampler returns non-text content.
pub async fn generate<S, D>(
    request: &str,
    sampler: &S,
    diagnostics: &D,
    config: &PromptConfig,
) -> Result<String>
where
    S: Sampler + Sync,
    D: Diagnostics + Sync,
{
    let prompt = render_prompt(request, config);
    tracing::debug!(
        request_len = request.len(),
        prompt_len = prompt.len(),
        "Sampling script"
    );

    let reply = match sampler.sample(&prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            diagnostics
                .report(
                    Severity::Error,
                    &format!("Error during LLM sampling: {e}"),
                )
                .await;
            return Err(Error::sampling(e));
        }
    };

    let kind = reply.kind();
    let Some(text) = reply.into_text() else {
        tracing::debug!(kind, "Sampler returned non-text content");
        diagnostics.report(Severity::Error, NON_TEXT_DIAGNOSTIC).await;
        return Err(Error::NonTextReply);
    };

    if !is_fenced_python(&text) {
        diagnostics.report(Severity::Warning, UNFENCED_DIAGNOSTIC).await;
    }

    Ok(text)
}
