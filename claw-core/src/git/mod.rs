//! Git repository detection
//!
//! Diffs themselves come from the `git` executable (see [`crate::source`]);
//! this module only locates the repository the diff is taken from.

mod repo;

pub use repo::GitRepo;
