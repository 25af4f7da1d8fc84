//! Collecting the working-tree diff

use std::path::Path;
use std::time::Duration;

use crate::config::Config;
use crate::git::GitRepo;
use crate::review::{ContentSource, ReviewRequest};
use crate::shell::{CommandRunner, RunOptions};
use crate::Result;

use super::truncate_content;

/// Which side of the index a diff was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffSource {
    /// `git diff`: changes not yet added to the index
    Unstaged,
    /// `git diff --cached`: changes added to the index
    Staged,
}

impl DiffSource {
    /// Arguments passed to git for this source
    pub fn git_args(&self) -> &'static [&'static str] {
        match self {
            DiffSource::Unstaged => &["diff"],
            DiffSource::Staged => &["diff", "--cached"],
        }
    }

    /// Context label used in the prompt
    pub fn label(&self) -> &'static str {
        match self {
            DiffSource::Unstaged => "Git Diff (unstaged changes)",
            DiffSource::Staged => "Git Diff (staged changes)",
        }
    }
}

impl std::fmt::Display for DiffSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiffSource::Unstaged => write!(f, "unstaged"),
            DiffSource::Staged => write!(f, "staged"),
        }
    }
}

/// Produces the diff to review: unstaged changes, falling back to staged ones
#[derive(Debug, Clone)]
pub struct DiffResolver {
    runner: CommandRunner,
    git_program: String,
    timeout: Duration,
    max_chars: usize,
}

impl DiffResolver {
    /// Build a resolver from the git and limits configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            runner: CommandRunner::new(),
            git_program: config.git.program.clone(),
            timeout: config.git.timeout,
            max_chars: config.limits.max_content_chars,
        }
    }

    /// Use a different git executable
    pub fn with_git_program(mut self, program: impl Into<String>) -> Self {
        self.git_program = program.into();
        self
    }

    /// Resolve the diff for the repository containing `workdir`
    ///
    /// Returns `Ok(None)` for a clean working tree. Fails with
    /// [`Error::NotARepository`](crate::Error::NotARepository) outside a repository.
    pub async fn resolve(&self, workdir: &Path) -> Result<Option<ReviewRequest>> {
        let repo = GitRepo::open(workdir)?;
        tracing::debug!(root = %repo.root().display(), "Found repository");

        for source in [DiffSource::Unstaged, DiffSource::Staged] {
            let diff = self.read_diff(source, repo.root()).await?;
            if diff.is_empty() {
                tracing::debug!(%source, "No changes");
                continue;
            }

            let truncated = truncate_content(diff, self.max_chars);
            return Ok(Some(ReviewRequest {
                content: truncated.text,
                context_label: source.label().to_string(),
                source: ContentSource::Diff(source),
                original_chars: truncated.original_chars,
            }));
        }

        Ok(None)
    }

    async fn read_diff(&self, source: DiffSource, root: &Path) -> Result<String> {
        let options = RunOptions::new()
            .ignore_error(true)
            .with_timeout(self.timeout)
            .in_dir(root);
        self.runner
            .run(&self.git_program, source.git_args(), &options)
            .await
    }
}
