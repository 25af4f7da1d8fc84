//! claw-review core - AI code review for agents
//!
//! This crate collects the content to review (a git diff or a file), wraps it
//! in a fixed review prompt and hands it to an external AI command-line tool.

pub mod config;
pub mod error;
pub mod git;
pub mod review;
pub mod shell;
pub mod source;

pub use config::{CliOverrides, Config, PromptDelivery};
pub use error::{Error, Result};
pub use git::GitRepo;
pub use review::{
    build_prompt, CommandBackend, ContentSource, ReviewBackend, ReviewOutcome, ReviewRequest,
    Reviewer,
};
pub use shell::{CommandRunner, RunOptions};
pub use source::{DiffResolver, DiffSource, FileResolver};
