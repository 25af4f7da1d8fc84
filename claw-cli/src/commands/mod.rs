//! CLI command implementations

pub mod config;
pub mod diff;
pub mod file;

pub use config::show_config;
pub use diff::DiffArgs;
pub use file::FileArgs;

use claw_core::{ReviewOutcome, ReviewRequest, Reviewer};

use crate::output::Output;

/// Send a resolved request to the reviewer and print the result
///
/// Reviewer failures are printed, never returned: the command still exits 0.
pub(crate) async fn review_and_render(reviewer: &Reviewer, request: &ReviewRequest, out: &Output) {
    if request.is_empty() {
        out.notice("No content to review.");
        return;
    }

    out.verbose(&format!("Reviewer: {}", reviewer.backend_name()));
    out.status("🤖 analyzing...");

    match reviewer.review(request).await {
        Ok(ReviewOutcome::Completed(text)) => out.report(&text),
        Ok(ReviewOutcome::Skipped) => out.notice("No content to review."),
        Err(e) => out.error("Error calling reviewer:", e),
    }
}

/// Warn that the content was cut before being sent
pub(crate) fn warn_if_truncated(request: &ReviewRequest, what: &str, max_chars: usize, out: &Output) {
    if let Some(original) = request.original_chars {
        out.warning(&format!(
            "{} is very large ({} chars, limit {}). Truncating...",
            what, original, max_chars
        ));
    }
}
