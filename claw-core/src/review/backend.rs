//! Reviewer backends: the external tool that turns a prompt into review text

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::process::{Child, Command};

use crate::config::{PromptDelivery, ReviewerConfig};
use crate::{Error, Result};

/// Trait for anything that can review a prompt
#[async_trait]
pub trait ReviewBackend: Send + Sync {
    /// Get the name of this backend
    fn name(&self) -> &str;

    /// Send the prompt and return the review text
    async fn review(&self, prompt: &str) -> Result<String>;

    /// Check if this backend is available on the system
    ///
    /// Implementations must not run the reviewer to find out.
    fn is_available(&self) -> bool;
}

/// Runs an external command-line reviewer (e.g. `gemini`) once per prompt
#[derive(Debug, Clone)]
pub struct CommandBackend {
    command: String,
    args: Vec<String>,
    delivery: PromptDelivery,
    timeout: Duration,
    max_output_bytes: usize,
}

impl CommandBackend {
    /// Create a backend for `command` with default limits
    pub fn new(command: impl Into<String>) -> Self {
        Self::from_config(&ReviewerConfig {
            command: command.into(),
            ..ReviewerConfig::default()
        })
    }

    /// Create a backend from reviewer configuration
    pub fn from_config(config: &ReviewerConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
            delivery: config.delivery,
            timeout: config.timeout,
            max_output_bytes: config.max_output_bytes,
        }
    }

    /// Add an argument placed before the prompt
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Choose how the prompt reaches the process
    pub fn with_delivery(mut self, delivery: PromptDelivery) -> Self {
        self.delivery = delivery;
        self
    }

    /// Bound the review call
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Cap captured stdout
    pub fn with_max_output_bytes(mut self, limit: usize) -> Self {
        self.max_output_bytes = limit;
        self
    }

    fn build_command(&self, prompt: &str) -> Command {
        let mut cmd = Command::new(&self.command);
        cmd.args(&self.args);

        match self.delivery {
            PromptDelivery::Argument => {
                cmd.arg(prompt).stdin(Stdio::null());
            }
            PromptDelivery::Stdin => {
                cmd.stdin(Stdio::piped());
            }
        }

        cmd.stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        cmd
    }

    /// Feed stdin, read capped stdout and all of stderr, then reap the child
    async fn collect(&self, child: &mut Child, prompt: &str) -> Result<String> {
        let stdin = child.stdin.take();
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| Error::Io(std::io::Error::other("reviewer stdout not captured")))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| Error::Io(std::io::Error::other("reviewer stderr not captured")))?;

        // stderr drains on its own task so a chatty reviewer can't block on a full pipe.
        let stderr_task = tokio::spawn(read_all(stderr));

        let write_stdin = async {
            if let Some(mut stdin) = stdin {
                match stdin.write_all(prompt.as_bytes()).await {
                    Ok(()) => stdin.shutdown().await?,
                    Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                        tracing::debug!("Reviewer closed stdin early");
                    }
                    Err(e) => return Err(e),
                }
            }
            Ok::<(), std::io::Error>(())
        };

        let limit = self.max_output_bytes;
        let read_stdout = async {
            let mut buf = Vec::new();
            stdout.take(limit as u64 + 1).read_to_end(&mut buf).await?;
            Ok::<Vec<u8>, std::io::Error>(buf)
        };

        let (written, stdout) = tokio::join!(write_stdin, read_stdout);
        written?;
        let stdout = stdout?;

        if stdout.len() > limit {
            tracing::warn!(limit, "Reviewer output over limit, killing process");
            child.kill().await?;
            stderr_task.abort();
            return Err(Error::OutputTooLarge { limit });
        }

        let status = child.wait().await?;
        let stderr = stderr_task
            .await
            .map_err(|e| Error::Io(std::io::Error::other(e)))??;

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("'{}' exited with {}", self.command, status)
            } else {
                stderr
            };
            return Err(Error::ReviewerFailed {
                status: status.to_string(),
                message,
            });
        }

        Ok(String::from_utf8_lossy(&stdout).trim().to_string())
    }
}

async fn read_all(mut reader: impl AsyncRead + Unpin) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).await?;
    Ok(buf)
}

#[async_trait]
impl ReviewBackend for CommandBackend {
    fn name(&self) -> &str {
        &self.command
    }

    async fn review(&self, prompt: &str) -> Result<String> {
        tracing::debug!(
            command = %self.command,
            delivery = %self.delivery,
            prompt_bytes = prompt.len(),
            "Invoking reviewer"
        );

        let mut child = self.build_command(prompt).spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::ReviewerNotFound(self.command.clone())
            } else {
                Error::Io(e)
            }
        })?;

        let outcome = tokio::time::timeout(self.timeout, self.collect(&mut child, prompt)).await;
        match outcome {
            Ok(result) => result,
            Err(_) => {
                if let Err(e) = child.kill().await {
                    tracing::debug!(error = %e, "Failed to kill timed out reviewer");
                }
                Err(Error::Timeout {
                    command: self.command.clone(),
                    after: self.timeout,
                })
            }
        }
    }

    fn is_available(&self) -> bool {
        which::which(&self.command).is_ok()
    }
}
