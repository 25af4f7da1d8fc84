//! Reading a single file for review

use std::path::{Path, PathBuf};

use crate::review::{ContentSource, ReviewRequest};
use crate::{Error, Result};

use super::truncate_content;

/// Resolves a user-supplied path to a review request
#[derive(Debug, Clone)]
pub struct FileResolver {
    max_chars: usize,
}

impl FileResolver {
    /// Create a resolver that caps content at `max_chars` characters
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    /// Read `path` (relative paths resolve against `workdir`)
    ///
    /// The context label is the path exactly as given.
    pub async fn resolve(&self, path: &Path, workdir: &Path) -> Result<ReviewRequest> {
        let absolute: PathBuf = if path.is_absolute() {
            path.to_path_buf()
        } else {
            workdir.join(path)
        };

        if !absolute.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        tracing::debug!(path = %absolute.display(), "Reading file");
        let bytes = tokio::fs::read(&absolute).await?;
        let content = String::from_utf8_lossy(&bytes).into_owned();
        let truncated = truncate_content(content, self.max_chars);

        Ok(ReviewRequest {
            content: truncated.text,
            context_label: path.display().to_string(),
            source: ContentSource::File(absolute),
            original_chars: truncated.original_chars,
        })
    }
}
