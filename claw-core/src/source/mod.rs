//! Content sources for a review
//!
//! A resolver turns user input (the working tree, a file path) into a
//! [`ReviewRequest`](crate::review::ReviewRequest). Both resolvers apply the
//! same size cap so the external reviewer never sees more than
//! `limits.max_content_chars` characters.

mod diff;
mod file;

pub use diff::{DiffResolver, DiffSource};
pub use file::FileResolver;

/// Appended to content that was cut at the size cap
pub const TRUNCATION_MARKER: &str = "\n... (truncated)";

/// Content after the size cap has been applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncated {
    /// The (possibly shortened) text
    pub text: String,
    /// Character count before truncation, if truncation happened
    pub original_chars: Option<usize>,
}

/// Keep at most `max_chars` characters of `content`, appending [`TRUNCATION_MARKER`] when cut
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
pub fn truncate_content(mut content: String, max_chars: usize) -> Truncated {
    match content.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            let original_chars = content.chars().count();
            content.truncate(cut);
            content.push_str(TRUNCATION_MARKER);
            tracing::warn!(original_chars, max_chars, "Content truncated");
            Truncated {
                text: content,
                original_chars: Some(original_chars),
            }
        }
        None => Truncated {
            text: content,
            original_chars: None,
        },
    }
}
