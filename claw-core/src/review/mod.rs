//! Review module: prompt assembly and reviewer invocation
//!
//! A [`ReviewRequest`] produced by one of the [`crate::source`] resolvers is
//! rendered into a prompt and handed to a [`ReviewBackend`]. The [`Reviewer`]
//! ties the two together and skips the call entirely for empty content.

mod backend;
mod prompt;
mod request;
mod reviewer;

pub use backend::{CommandBackend, ReviewBackend};
pub use prompt::{build_prompt, SYSTEM_PROMPT};
pub use request::{ContentSource, ReviewRequest};
pub use reviewer::{ReviewOutcome, Reviewer};
