//! CLI argument definitions for the Foreman chat console.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use foreman_core::config::ForemanConfig;
use std::path::PathBuf;

/// Foreman: chat with your construction portfolio from the terminal.
#[derive(Parser, Debug)]
#[command(name = "foreman", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Delay before each assistant reply, in milliseconds.
    #[arg(long = "think-time-ms")]
    pub think_time_ms: Option<u64>,

    /// Start without the assistant's greeting.
    #[arg(long = "no-greeting")]
    pub no_greeting: bool,

    /// Write the transcript as JSON to this path on exit.
    #[arg(long = "export")]
    pub export: Option<PathBuf>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > FOREMAN_CONFIG env var > ~/.foreman/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("FOREMAN_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log level. `RUST_LOG`, when set, still wins at subscriber setup.
    ///
    /// Priority: --log-level flag > config file value > "info".
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        if let Some(ref level) = self.log_level {
            return level.clone();
        }
        if !config_level.trim().is_empty() {
            return config_level.to_string();
        }
        "info".to_string()
    }

    /// Apply chat flags on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut ForemanConfig) {
        if let Some(ms) = self.think_time_ms {
            config.chat.think_time_ms = ms;
        }
        if self.no_greeting {
            config.chat.show_greeting = false;
        }
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".foreman").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".foreman").join("config.toml");
    }
    PathBuf::from("config.toml")
}
