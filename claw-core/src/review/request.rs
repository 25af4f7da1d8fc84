//! The unit of work handed from a resolver to the reviewer

use std::path::PathBuf;

use crate::source::DiffSource;

use super::prompt::build_prompt;

/// Where the reviewed content came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// A git diff
    Diff(DiffSource),
    /// A file on disk (absolute path)
    File(PathBuf),
}

/// Content to review plus the label that describes it in the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRequest {
    /// The text to review, already size-capped
    pub content: String,
    /// Shown to the reviewer as `CONTEXT: ...`
    pub context_label: String,
    /// Origin of the content
    pub source: ContentSource,
    /// Character count before truncation, when the content was cut
    pub original_chars: Option<usize>,
}

impl ReviewRequest {
    /// Create a request with no truncation
    pub fn new(
        content: impl Into<String>,
        context_label: impl Into<String>,
        source: ContentSource,
    ) -> Self {
        Self {
            content: content.into(),
            context_label: context_label.into(),
            source,
            original_chars: None,
        }
    }

    /// True when there is nothing but whitespace to review
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Render the full prompt for this request
    pub fn to_prompt(&self) -> String {
        build_prompt(&self.content, &self.context_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_is_empty() {
        let request = ReviewRequest::new(" \n\t ", "x", ContentSource::Diff(DiffSource::Staged));
        assert!(request.is_empty());
        assert!(request.original_chars.is_none());
    }

    #[test]
    fn test_to_prompt_includes_label_and_content() {
        let request = ReviewRequest::new(
            "fn main() {}",
            "src/main.rs",
            ContentSource::File(PathBuf::from("/repo/src/main.rs")),
        );
        let prompt = request.to_prompt();
        assert!(prompt.contains("CONTEXT: src/main.rs"));
        assert!(prompt.contains("fn main() {}"));
    }
}
