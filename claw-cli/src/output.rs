//! Console output for claw-review
//!
//! Review text goes to stdout untouched; status lines are styled with
//! `console`, which drops the colors when the stream is not a terminal.

use console::style;

/// Output handler for consistent CLI formatting
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    verbose: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print a progress line while waiting on the reviewer
    pub fn status(&self, message: &str) {
        println!("{}", style(message).blue());
    }

    /// Print a secondary, dimmed line
    pub fn dim(&self, message: &str) {
        println!("{}", style(message).dim());
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{}", style(message).green());
    }

    /// Print a notice the user should see but that is not a problem
    pub fn notice(&self, message: &str) {
        println!("{}", style(message).yellow());
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        eprintln!("{}", style(message).yellow());
    }

    /// Print an error with a red prefix and the error detail
    pub fn error(&self, prefix: &str, detail: impl std::fmt::Display) {
        eprintln!("{} {}", style(prefix).red(), detail);
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            println!("{}", style(message).dim());
        }
    }

    /// Print the review header followed by the review text verbatim
    pub fn report(&self, review: &str) {
        println!();
        println!("{}", style("Review Report:").bold().underlined());
        println!();
        println!("{}", review);
    }

    /// Print a key/value row
    pub fn table_row(&self, key: &str, value: &str) {
        println!("  {:<20} {}", style(key).dim(), value);
    }
}
