//! Configuration management for claw-review
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (CLAW_REVIEW_*)
//! 3. Config file (~/.config/claw-review/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default cap on reviewed content, in characters
pub const DEFAULT_MAX_CONTENT_CHARS: usize = 50_000;

/// Default cap on reviewer output, in bytes (10 MiB)
pub const DEFAULT_MAX_OUTPUT_BYTES: usize = 10 * 1024 * 1024;

/// How the prompt is handed to the reviewer process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptDelivery {
    /// As the final positional argument
    #[default]
    Argument,
    /// Written to the reviewer's stdin
    Stdin,
}

impl std::fmt::Display for PromptDelivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptDelivery::Argument => write!(f, "argument"),
            PromptDelivery::Stdin => write!(f, "stdin"),
        }
    }
}

/// External reviewer configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReviewerConfig {
    /// Reviewer executable
    pub command: String,

    /// Extra arguments placed before the prompt
    pub args: Vec<String>,

    /// How the prompt reaches the reviewer
    pub delivery: PromptDelivery,

    /// Upper bound on a single review call
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,

    /// Upper bound on captured reviewer stdout
    pub max_output_bytes: usize,
}

impl Default for ReviewerConfig {
    fn default() -> Self {
        Self {
            command: "gemini".to_string(),
            args: Vec::new(),
            delivery: PromptDelivery::default(),
            timeout: Duration::from_secs(300),
            max_output_bytes: DEFAULT_MAX_OUTPUT_BYTES,
        }
    }
}

/// Git invocation configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GitConfig {
    /// Path to the git executable
    pub program: String,

    /// Upper bound on each git call
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Size limits applied to reviewed content
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Content longer than this is truncated before prompting
    pub max_content_chars: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_content_chars: DEFAULT_MAX_CONTENT_CHARS,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Reviewer configuration
    pub reviewer: ReviewerConfig,

    /// Git configuration
    pub git: GitConfig,

    /// Content limits
    pub limits: LimitsConfig,
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Reviewer executable
    pub reviewer: Option<String>,
    /// Reviewer timeout
    pub timeout: Option<Duration>,
    /// Explicit config file
    pub config_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/claw-review/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("claw-review").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - CLAW_REVIEW_REVIEWER: reviewer executable
    /// - CLAW_REVIEW_TIMEOUT: reviewer timeout (humantime, e.g. "90s")
    /// - CLAW_REVIEW_GIT: git executable
    /// - CLAW_REVIEW_MAX_CHARS: content cap in characters
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(reviewer) = var("CLAW_REVIEW_REVIEWER") {
            self.reviewer.command = reviewer;
        }

        if let Some(timeout) = var("CLAW_REVIEW_TIMEOUT") {
            self.reviewer.timeout = humantime::parse_duration(&timeout)
                .map_err(|e| Error::Config(format!("Invalid CLAW_REVIEW_TIMEOUT: {}", e)))?;
        }

        if let Some(git) = var("CLAW_REVIEW_GIT") {
            self.git.program = git;
        }

        if let Some(max) = var("CLAW_REVIEW_MAX_CHARS") {
            self.limits.max_content_chars = max
                .parse()
                .map_err(|e| Error::Config(format!("Invalid CLAW_REVIEW_MAX_CHARS: {}", e)))?;
        }

        Ok(self)
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, reviewer: Option<String>, timeout: Option<Duration>) -> Self {
        if let Some(cmd) = reviewer {
            self.reviewer.command = cmd;
        }

        if let Some(t) = timeout {
            self.reviewer.timeout = t;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(overrides: CliOverrides) -> Result<Self> {
        let base = match overrides.config_path {
            Some(ref path) => Self::load_from_file(path)?,
            None => Self::load()?,
        };

        Ok(base
            .with_env_overrides()?
            .with_cli_overrides(overrides.reviewer, overrides.timeout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.reviewer.command, "gemini");
        assert!(config.reviewer.args.is_empty());
        assert_eq!(config.reviewer.delivery, PromptDelivery::Argument);
        assert_eq!(config.reviewer.max_output_bytes, 10_485_760);
        assert_eq!(config.git.program, "git");
        assert_eq!(config.limits.max_content_chars, 50_000);
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::default()
            .with_cli_overrides(Some("/custom/gemini".to_string()), Some(Duration::from_secs(5)));

        assert_eq!(config.reviewer.command, "/custom/gemini");
        assert_eq!(config.reviewer.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("CLAW_REVIEW_REVIEWER", "claude"),
            ("CLAW_REVIEW_TIMEOUT", "90s"),
            ("CLAW_REVIEW_MAX_CHARS", "1000"),
        ]
        .into_iter()
        .collect();

        let config = Config::default()
            .with_overrides_from(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.reviewer.command, "claude");
        assert_eq!(config.reviewer.timeout, Duration::from_secs(90));
        assert_eq!(config.limits.max_content_chars, 1000);
        assert_eq!(config.git.program, "git");
    }

    #[test]
    fn test_invalid_env_timeout() {
        let result = Config::default().with_overrides_from(|k| {
            (k == "CLAW_REVIEW_TIMEOUT").then(|| "soon".to_string())
        });
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_cli_beats_env() {
        let config = Config::default()
            .with_overrides_from(|k| (k == "CLAW_REVIEW_REVIEWER").then(|| "env-tool".to_string()))
            .unwrap()
            .with_cli_overrides(Some("cli-tool".to_string()), None);
        assert_eq!(config.reviewer.command, "cli-tool");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[reviewer]
command = "/usr/local/bin/gemini"
args = ["--model", "pro"]
delivery = "stdin"
timeout = "2m"

[git]
timeout = "10s"

[limits]
max_content_chars = 2000
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.reviewer.command, "/usr/local/bin/gemini");
        assert_eq!(config.reviewer.args, vec!["--model", "pro"]);
        assert_eq!(config.reviewer.delivery, PromptDelivery::Stdin);
        assert_eq!(config.reviewer.timeout, Duration::from_secs(120));
        assert_eq!(config.git.timeout, Duration::from_secs(10));
        assert_eq!(config.limits.max_content_chars, 2000);
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
[reviewer]
args = ["-y"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        // command should use default
        assert_eq!(config.reviewer.command, "gemini");
        assert_eq!(config.reviewer.args, vec!["-y"]);
        assert_eq!(config.git.program, "git");
    }

    #[test]
    fn test_load_from_file_reports_parse_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[reviewer\ncommand = 1").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_load_with_explicit_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("review.toml");
        std::fs::write(&path, "[limits]\nmax_content_chars = 10\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.limits.max_content_chars, 10);
    }
}
