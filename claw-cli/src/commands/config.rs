//! Config command - show the effective configuration

use std::path::Path;

use claw_core::{Config, Reviewer};

use crate::output::Output;

/// Print the configuration after file, env and CLI overrides
pub fn show_config(config: &Config, config_path: Option<&Path>, reviewer: &Reviewer, out: &Output) {
    println!("claw-review Configuration");
    println!("=========================");
    println!();
    println!("Reviewer:");
    out.table_row("command", &config.reviewer.command);
    out.table_row(
        "args",
        &if config.reviewer.args.is_empty() {
            "(none)".to_string()
        } else {
            config.reviewer.args.join(" ")
        },
    );
    out.table_row("delivery", &config.reviewer.delivery.to_string());
    out.table_row("timeout", &humantime::format_duration(config.reviewer.timeout).to_string());
    out.table_row("max_output_bytes", &config.reviewer.max_output_bytes.to_string());
    out.table_row(
        "available",
        if reviewer.is_available() { "yes" } else { "no (not found on PATH)" },
    );
    println!();
    println!("Git:");
    out.table_row("program", &config.git.program);
    out.table_row("timeout", &humantime::format_duration(config.git.timeout).to_string());
    println!();
    println!("Limits:");
    out.table_row("max_content_chars", &config.limits.max_content_chars.to_string());
    println!();

    let path = config_path
        .map(Path::to_path_buf)
        .or_else(Config::default_config_path);
    if let Some(path) = path {
        println!("Config file: {}", path.display());
        if path.exists() {
            println!("  (exists)");
        } else {
            println!("  (not found - using defaults)");
        }
    }
}
