//! Integration tests for the prompt-and-sample adapter

// Tests are allowed to use expect/unwrap for cleaner error messages
#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use solidgen_core::{Diagnostics, Error, PromptConfig, Reply, Sampler, Severity, generate};

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct FakeError(String);

/// Sampler that returns the same scripted outcome on every call
struct ScriptedSampler {
    outcome: Result<Reply, String>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedSampler {
    fn replying(reply: Reply) -> Self {
        Self {
            outcome: Ok(reply),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    fn text(text: &str) -> Self {
        Self::replying(Reply::Text(text.to_string()))
    }

    fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Sampler for ScriptedSampler {
    type Error = FakeError;

    async fn sample(&self, prompt: &str) -> Result<Reply, FakeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().push(prompt.to_string());
        self.outcome.clone().map_err(FakeError)
    }
}

/// Diagnostics sink that records everything it is sent
#[derive(Default)]
struct RecordingDiagnostics {
    reports: Mutex<Vec<(Severity, String)>>,
}

impl RecordingDiagnostics {
    fn count(&self, severity: Severity) -> usize {
        self.reports
            .lock()
            .iter()
            .filter(|(s, _)| *s == severity)
            .count()
    }

    fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }
}

impl Diagnostics for RecordingDiagnostics {
    async fn report(&self, severity: Severity, message: &str) {
        self.reports.lock().push((severity, message.to_string()));
    }
}

const CUBE_SCRIPT: &str = "```python\nprint(\"cube\")\n```";

#[tokio::test]
async fn fenced_reply_returned_without_diagnostics() {
    let sampler = ScriptedSampler::text(CUBE_SCRIPT);
    let diagnostics = RecordingDiagnostics::default();

    let code = generate("a 10mm cube", &sampler, &diagnostics, &PromptConfig::default())
        .await
        .expect("generation should succeed");

    assert_eq!(code, CUBE_SCRIPT);
    assert!(diagnostics.is_empty());
    assert_eq!(sampler.calls(), 1);
}

#[tokio::test]
async fn prompt_sent_to_sampler_embeds_request() {
    let request = "a *hex* nut with `M8` thread and ```fences```";
    let sampler = ScriptedSampler::text(CUBE_SCRIPT);
    let diagnostics = RecordingDiagnostics::default();

    generate(request, &sampler, &diagnostics, &PromptConfig::default())
        .await
        .unwrap();

    let prompts = sampler.prompts.lock();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains(request));
}

#[tokio::test]
async fn empty_request_accepted() {
    let sampler = ScriptedSampler::text(CUBE_SCRIPT);
    let diagnostics = RecordingDiagnostics::default();

    let code = generate("", &sampler, &diagnostics, &PromptConfig::default())
        .await
        .unwrap();

    assert_eq!(code, CUBE_SCRIPT);
    assert!(sampler.prompts.lock()[0].contains("''"));
}

#[tokio::test]
async fn unfenced_reply_returned_with_one_warning() {
    let prose = "I cannot draw that part, but here is some advice.";
    let sampler = ScriptedSampler::text(prose);
    let diagnostics = RecordingDiagnostics::default();

    let text = generate("a 10mm cube", &sampler, &diagnostics, &PromptConfig::default())
        .await
        .unwrap();

    assert_eq!(text, prose);
    assert_eq!(diagnostics.count(Severity::Warning), 1);
    assert_eq!(diagnostics.count(Severity::Error), 0);
}

#[tokio::test]
async fn surrounding_whitespace_kept_in_returned_text() {
    let padded = "\n  ```python\nx = 1\n```\n\n";
    let sampler = ScriptedSampler::text(padded);
    let diagnostics = RecordingDiagnostics::default();

    let text = generate("a plate", &sampler, &diagnostics, &PromptConfig::default())
        .await
        .unwrap();

    assert_eq!(text, padded);
    assert!(diagnostics.is_empty());
}

#[tokio::test]
async fn sampling_failure_is_typed_error_with_cause() {
    let sampler = ScriptedSampler::failing("timeout");
    let diagnostics = RecordingDiagnostics::default();

    let err = generate("a 10mm cube", &sampler, &diagnostics, &PromptConfig::default())
        .await
        .expect_err("sampling failure should propagate");

    assert!(matches!(err, Error::Sampling(_)));
    assert!(err.to_string().contains("timeout"));
    assert!(std::error::Error::source(&err).is_some());
    assert_eq!(diagnostics.count(Severity::Error), 1);
    assert_eq!(diagnostics.count(Severity::Warning), 0);
    assert!(diagnostics.reports.lock()[0].1.contains("timeout"));
    assert_eq!(sampler.calls(), 1);
}

#[tokio::test]
async fn non_text_reply_is_typed_error() {
    let sampler = ScriptedSampler::replying(Reply::Image {
        mime_type: "image/png".to_string(),
    });
    let diagnostics = RecordingDiagnostics::default();

    let err = generate("a 10mm cube", &sampler, &diagnostics, &PromptConfig::default())
        .await
        .expect_err("non-text reply should fail");

    assert!(matches!(err, Error::NonTextReply));
    assert_eq!(err.to_string(), "LLM response was not text content.");
    assert_eq!(diagnostics.count(Severity::Error), 1);
}

#[tokio::test]
async fn every_non_text_variant_fails_closed() {
    let replies = [
        Reply::Image {
            mime_type: "image/png".to_string(),
        },
        Reply::Audio {
            mime_type: "audio/wav".to_string(),
        },
        Reply::Resource {
            uri: "file:///part.py".to_string(),
        },
        Reply::ResourceLink {
            uri: "file:///part.py".to_string(),
        },
    ];

    for reply in replies {
        let sampler = ScriptedSampler::replying(reply.clone());
        let diagnostics = RecordingDiagnostics::default();
        let result =
            generate("a shaft", &sampler, &diagnostics, &PromptConfig::default()).await;
        assert!(
            matches!(result, Err(Error::NonTextReply)),
            "{} reply should fail",
            reply.kind()
        );
    }
}

#[tokio::test]
async fn repeated_calls_are_identical() {
    let sampler = ScriptedSampler::text(CUBE_SCRIPT);
    let diagnostics = RecordingDiagnostics::default();
    let config = PromptConfig::default();

    let first = generate("a 10mm cube", &sampler, &diagnostics, &config)
        .await
        .unwrap();
    let second = generate("a 10mm cube", &sampler, &diagnostics, &config)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(sampler.calls(), 2);

    let prompts = sampler.prompts.lock();
    assert_eq!(prompts[0], prompts[1]);
}
