//! Prompt assembly

/// Fixed review instruction sent ahead of every request
pub const SYSTEM_PROMPT: &str = include_str!("prompts/system.md");

/// Render `content` and its label into the reviewer prompt
///
/// The layout is the system instruction, a `CONTEXT:` line and the content in
/// a ```` ```diff ```` fence, separated by blank lines.
pub fn build_prompt(content: &str, context_label: &str) -> String {
    format!(
        "{}\n\nCONTEXT: {}\n\nCODE:\n```diff\n{}\n```",
        SYSTEM_PROMPT.trim_end(),
        context_label,
        content
    )
}
