//! Running one review request through a backend

use crate::config::Config;
use crate::Result;

use super::{CommandBackend, ReviewBackend, ReviewRequest};

/// Result of a review attempt that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// The content was empty; the backend was not called
    Skipped,
    /// The backend's review text
    Completed(String),
}

/// Sends review requests to a backend
///
/// Requests with empty or whitespace-only content are never sent.
pub struct Reviewer {
    backend: Box<dyn ReviewBackend>,
}

impl std::fmt::Debug for Reviewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reviewer")
            .field("backend", &self.backend.name())
            .finish()
    }
}

impl Reviewer {
    /// Create a reviewer around any backend
    pub fn new(backend: impl ReviewBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Create a reviewer that runs the configured external command
    pub fn from_config(config: &Config) -> Self {
        Self::new(CommandBackend::from_config(&config.reviewer))
    }

    /// Name of the backend in use
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Whether the backend can be run on this system
    pub fn is_available(&self) -> bool {
        self.backend.is_available()
    }

    /// Review a request, skipping the backend for empty content
    pub async fn review(&self, request: &ReviewRequest) -> Result<ReviewOutcome> {
        if request.is_empty() {
            tracing::debug!(context = %request.context_label, "Empty content, skipping review");
            return Ok(ReviewOutcome::Skipped);
        }

        let prompt = request.to_prompt();
        let text = self.backend.review(&prompt).await.inspect_err(|e| {
            tracing::warn!(backend = %self.backend.name(), error = %e, "Review failed");
        })?;

        tracing::debug!(bytes = text.len(), "Review received");
        Ok(ReviewOutcome::Completed(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::ContentSource;
    use crate::source::DiffSource;
    use crate::Error;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Records every prompt and answers with a fixed reply
    #[derive(Clone, Default)]
    struct RecordingBackend {
        calls: Arc<AtomicUsize>,
        prompts: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    #[async_trait]
    impl ReviewBackend for RecordingBackend {
        fn name(&self) -> &str {
            "recording"
        }

        async fn review(&self, prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            if self.fail {
                return Err(Error::ReviewerFailed {
                    status: "exit status: 1".to_string(),
                    message: "rate limited".to_string(),
                });
            }
            Ok("LGTM".to_string())
        }

        fn is_available(&self) -> bool {
            true
        }
    }

    fn file_request(content: &str) -> ReviewRequest {
        ReviewRequest::new(
            content,
            "notes.txt",
            ContentSource::File(PathBuf::from("/tmp/notes.txt")),
        )
    }

    #[tokio::test]
    async fn test_empty_content_never_reaches_backend() {
        let backend = RecordingBackend::default();
        let reviewer = Reviewer::new(backend.clone());

        for content in ["", "   ", "\n\t\n"] {
            let outcome = reviewer.review(&file_request(content)).await.unwrap();
            assert_eq!(outcome, ReviewOutcome::Skipped);
        }
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_completed_review() {
        let backend = RecordingBackend::default();
        let reviewer = Reviewer::new(backend.clone());

        let outcome = reviewer.review(&file_request("hello")).await.unwrap();
        assert_eq!(outcome, ReviewOutcome::Completed("LGTM".to_string()));

        let prompts = backend.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("CONTEXT: notes.txt"));
        assert!(prompts[0].contains("```diff\nhello\n```"));
    }

    #[tokio::test]
    async fn test_backend_failure_propagates() {
        let backend = RecordingBackend {
            fail: true,
            ..Default::default()
        };
        let reviewer = Reviewer::new(backend);

        let request = ReviewRequest::new(
            "+x",
            DiffSource::Unstaged.label(),
            ContentSource::Diff(DiffSource::Unstaged),
        );
        let err = reviewer.review(&request).await.unwrap_err();
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn test_from_config_uses_reviewer_command() {
        let mut config = Config::default();
        config.reviewer.command = "my-reviewer".to_string();
        let reviewer = Reviewer::from_config(&config);
        assert_eq!(reviewer.backend_name(), "my-reviewer");
    }
}
