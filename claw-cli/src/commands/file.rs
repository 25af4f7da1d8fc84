//! File command - review a single file

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use claw_core::{Config, Error, FileResolver, Reviewer};

use super::{review_and_render, warn_if_truncated};
use crate::output::Output;

/// Review a specific file
#[derive(Args, Debug)]
pub struct FileArgs {
    /// Path of the file to review
    pub path: PathBuf,
}

impl FileArgs {
    /// Execute the file command
    ///
    /// Exits with status 1 only when the file does not exist.
    pub async fn execute(&self, config: &Config, reviewer: &Reviewer, out: &Output) -> anyhow::Result<ExitCode> {
        let workdir = std::env::current_dir()?;
        let resolver = FileResolver::new(config.limits.max_content_chars);

        let request = match resolver.resolve(&self.path, &workdir).await {
            Ok(request) => request,
            Err(Error::FileNotFound(path)) => {
                out.error("File not found:", path.display());
                return Ok(ExitCode::FAILURE);
            }
            Err(e) => {
                out.error("Error reading file:", e);
                return Ok(ExitCode::SUCCESS);
            }
        };

        warn_if_truncated(&request, "File", config.limits.max_content_chars, out);

        review_and_render(reviewer, &request, out).await;
        Ok(ExitCode::SUCCESS)
    }
}
