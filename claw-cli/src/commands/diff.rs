//! Diff command - review the current git changes

use std::process::ExitCode;

use clap::Args;
use claw_core::{Config, ContentSource, DiffResolver, Reviewer};

use super::{review_and_render, warn_if_truncated};
use crate::output::Output;

/// Review current git changes (unstaged, falling back to staged)
#[derive(Args, Debug, Default)]
pub struct DiffArgs {}

impl DiffArgs {
    /// Execute the diff command
    pub async fn execute(&self, config: &Config, reviewer: &Reviewer, out: &Output) -> anyhow::Result<ExitCode> {
        let workdir = std::env::current_dir()?;

        let request = match DiffResolver::from_config(config).resolve(&workdir).await {
            Ok(Some(request)) => request,
            Ok(None) => {
                out.success("Working tree clean. Nothing to review.");
                return Ok(ExitCode::SUCCESS);
            }
            Err(e) => {
                out.error("Error getting diff:", e);
                return Ok(ExitCode::SUCCESS);
            }
        };

        if let ContentSource::Diff(source) = request.source {
            out.dim(&format!("(Reviewing {} changes)", source));
        }
        warn_if_truncated(&request, "Diff", config.limits.max_content_chars, out);

        review_and_render(reviewer, &request, out).await;
        Ok(ExitCode::SUCCESS)
    }
}
