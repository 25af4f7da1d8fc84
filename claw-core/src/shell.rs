//! Running external commands and capturing their output

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::{Error, Result};

/// Options for a single command execution
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Return an empty string instead of failing on a non-zero exit or spawn error
    pub ignore_error: bool,
    /// Kill the command if it runs longer than this
    pub timeout: Option<Duration>,
    /// Directory to run the command in (defaults to the current directory)
    pub cwd: Option<PathBuf>,
}

impl RunOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Swallow command failures
    pub fn ignore_error(mut self, ignore: bool) -> Self {
        self.ignore_error = ignore;
        self
    }

    /// Bound the command's runtime
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Run in the given directory
    pub fn in_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

/// Executes external commands and returns their trimmed stdout
#[derive(Debug, Clone, Default)]
pub struct CommandRunner;

impl CommandRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run `program` with `args` and return its trimmed stdout
    ///
    /// Arguments are passed as an argument vector; no shell is involved.
    /// A timeout is always reported, even with `ignore_error` set.
    pub async fn run(&self, program: &str, args: &[&str], options: &RunOptions) -> Result<String> {
        let command_line = display_command(program, args);
        tracing::debug!(command = %command_line, "Running command");

        match self.run_inner(program, args, options, &command_line).await {
            Ok(stdout) => Ok(stdout),
            Err(e @ Error::Timeout { .. }) => Err(e),
            Err(e) if options.ignore_error => {
                tracing::debug!(command = %command_line, error = %e, "Ignoring command failure");
                Ok(String::new())
            }
            Err(e) => Err(e),
        }
    }

    async fn run_inner(
        &self,
        program: &str,
        args: &[&str],
        options: &RunOptions,
        command_line: &str,
    ) -> Result<String> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(ref cwd) = options.cwd {
            cmd.current_dir(cwd);
        }

        let child = cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::CommandNotFound(program.to_string())
            } else {
                Error::Io(e)
            }
        })?;

        let output = match options.timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| Error::Timeout {
                    command: command_line.to_string(),
                    after: limit,
                })??,
            None => child.wait_with_output().await?,
        };

        if !output.status.success() {
            return Err(Error::CommandFailed {
                command: command_line.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Render a command line for logs and error messages
pub(crate) fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_trims_stdout() {
        let out = CommandRunner::new()
            .run("echo", &["  hello  "], &RunOptions::new())
            .await
            .unwrap();
        assert_eq!(out, "hello");
    }

    #[tokio::test]
    async fn test_run_failure_propagates() {
        let result = CommandRunner::new()
            .run("sh", &["-c", "echo boom >&2; exit 3"], &RunOptions::new())
            .await;

        match result {
            Err(Error::CommandFailed { stderr, .. }) => assert_eq!(stderr, "boom"),
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_run_failure_ignored() {
        let out = CommandRunner::new()
            .run("sh", &["-c", "exit 1"], &RunOptions::new().ignore_error(true))
            .await
            .unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_missing_program() {
        let result = CommandRunner::new()
            .run("/nonexistent/claw-binary-12345", &[], &RunOptions::new())
            .await;
        assert!(matches!(result, Err(Error::CommandNotFound(_))));
    }

    #[tokio::test]
    async fn test_missing_program_ignored() {
        let out = CommandRunner::new()
            .run(
                "/nonexistent/claw-binary-12345",
                &[],
                &RunOptions::new().ignore_error(true),
            )
            .await
            .unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_timeout_is_not_ignored() {
        let options = RunOptions::new()
            .ignore_error(true)
            .with_timeout(Duration::from_millis(100));
        let result = CommandRunner::new().run("sleep", &["5"], &options).await;
        assert!(matches!(result, Err(Error::Timeout { .. })));
    }

    #[tokio::test]
    async fn test_runs_in_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = CommandRunner::new()
            .run("pwd", &[], &RunOptions::new().in_dir(dir.path()))
            .await
            .unwrap();
        let expected = dir.path().canonicalize().unwrap();
        assert_eq!(std::path::Path::new(&out).canonicalize().unwrap(), expected);
    }

    #[test]
    fn test_display_command() {
        assert_eq!(display_command("git", &["diff", "--cached"]), "git diff --cached");
        assert_eq!(display_command("git", &[]), "git");
    }
}
