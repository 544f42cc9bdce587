//! Foreman chat console - composition root.
//!
//! 1. Parse CLI flags and load configuration from TOML
//! 2. Initialize tracing (stderr, so it never mixes with the conversation)
//! 3. Open a coordinated chat session and run the stdin loop
//! 4. Close the session and optionally export the transcript

mod cli;

use std::path::Path;

use clap::Parser;
use foreman_chat::{render_turn, ChatError, ComposeState, Turn, TurnCoordinator, QUICK_PROMPTS};
use foreman_core::config::ForemanConfig;
use tokio::io::{AsyncBufReadExt, BufReader};

use cli::CliArgs;

/// What one input line asks the console to do.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Say(&'a str),
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    let Some(name) = trimmed.strip_prefix('/') else {
        return Command::Say(line);
    };
    match name {
        "quit" | "exit" => Command::Quit,
        "help" => Command::Help,
        _ => match name.parse::<usize>() {
            Ok(n) if (1..=QUICK_PROMPTS.len()).contains(&n) => Command::Say(QUICK_PROMPTS[n - 1]),
            _ => Command::Unknown(trimmed),
        },
    }
}

fn print_help() {
    println!("Ask anything about your projects, or pick a quick prompt:");
    for (i, prompt) in QUICK_PROMPTS.iter().enumerate() {
        println!("  /{}  {}", i + 1, prompt);
    }
    println!("  /help  show this list");
    println!("  /quit  leave the chat");
}

fn print_turn(turn: &Turn) {
    println!(
        "[{}] {}: {}",
        turn.created_at().format("%H:%M:%S"),
        turn.author(),
        turn.text()
    );
    for card in render_turn(turn) {
        print!("{}", card);
    }
}

/// Load the config file, keeping the error so it can be logged once tracing is up.
fn load_config(path: &Path) -> (ForemanConfig, Option<String>) {
    if !path.exists() {
        return (ForemanConfig::default(), None);
    }
    match ForemanConfig::load(path) {
        Ok(config) => (config, None),
        Err(e) => (ForemanConfig::default(), Some(e.to_string())),
    }
}

async fn run_console(coord: &mut TurnCoordinator) -> Result<(), ChatError> {
    let mut state_rx = coord.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read stdin");
                    break;
                }
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        };

        let text = match parse_command(&line) {
            Command::Say(text) => text,
            Command::Help => {
                print_help();
                continue;
            }
            Command::Quit => break,
            Command::Unknown(cmd) => {
                println!("Unknown command {}. Type /help for options.", cmd);
                continue;
            }
        };

        if coord.submit(text)?.is_none() {
            continue;
        }
        if *state_rx.borrow_and_update() == ComposeState::Composing {
            println!("Assistant is typing...");
        }
        tokio::select! {
            reply = coord.wait_for_response() => {
                if let Some(turn) = reply? {
                    print_turn(&turn);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted while composing");
                break;
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let (mut config, load_error) = load_config(&config_file);
    args.apply_overrides(&mut config);

    // Tracing. RUST_LOG beats every other source.
    let level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&level)),
        )
        .init();

    tracing::info!("Starting Foreman v{}", env!("CARGO_PKG_VERSION"));
    match load_error {
        Some(e) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Failed to load config, using defaults"
        ),
        None => tracing::debug!(path = %config_file.display(), "Configuration resolved"),
    }

    // Session.
    let mut coord = TurnCoordinator::from_config(&config);
    for turn in coord.transcript()?.all() {
        print_turn(turn);
    }
    println!("(type /help for quick prompts)");

    let result = run_console(&mut coord).await;
    coord.close();
    if let Err(ref e) = result {
        tracing::error!(error = %e, "Chat loop stopped");
    }

    if let Some(path) = args.export.as_deref() {
        coord.transcript()?.write_json(path)?;
        println!("Transcript written to {}", path.display());
    }

    result?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_said_verbatim() {
        assert_eq!(parse_command("  budget? "), Command::Say("  budget? "));
    }

    #[test]
    fn test_quick_prompt_shortcuts() {
        assert_eq!(parse_command("/1"), Command::Say(QUICK_PROMPTS[0]));
        assert_eq!(parse_command(" /4 "), Command::Say(QUICK_PROMPTS[3]));
        assert_eq!(parse_command("/5"), Command::Unknown("/5"));
        assert_eq!(parse_command("/0"), Command::Unknown("/0"));
    }

    #[test]
    fn test_control_commands() {
        assert_eq!(parse_command("/quit"), Command::Quit);
        assert_eq!(parse_command("/exit"), Command::Quit);
        assert_eq!(parse_command("/help"), Command::Help);
        assert_eq!(parse_command("/dance"), Command::Unknown("/dance"));
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let dir = std::env::temp_dir().join("foreman-missing-config-test");
        let (config, error) = load_config(&dir.join("nope.toml"));
        assert!(error.is_none());
        assert_eq!(config.chat.think_time_ms, 1500);
    }
}
