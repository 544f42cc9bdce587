use std::path::Path;
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::types::{Money, SignedPercent};

/// Introduction the assistant posts when a panel opens.
pub const DEFAULT_GREETING: &str = "Hello! I'm your AI construction expert. I can help you manage your custom home building projects through natural conversation. What would you like to work on today?";

/// Top-level configuration for the Foreman application.
///
/// Loaded from `~/.foreman/config.toml` by default. Every section is
/// optional and falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForemanConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub portfolio: PortfolioConfig,
}

impl ForemanConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ForemanConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Conversation panel settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Artificial delay between accepting a message and posting the reply.
    pub think_time_ms: u64,
    /// Post the greeting as the first assistant turn of every session.
    pub show_greeting: bool,
    /// Greeting text.
    pub greeting: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            think_time_ms: 1500,
            show_greeting: true,
            greeting: DEFAULT_GREETING.to_string(),
        }
    }
}

impl ChatConfig {
    pub fn think_time(&self) -> Duration {
        Duration::from_millis(self.think_time_ms)
    }
}

// =============================================================================
// Portfolio reference data
// =============================================================================

/// Fixed portfolio figures the assistant reports on.
///
/// Read-only for the lifetime of a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub projects: ProjectFigures,
    pub budget: BudgetFigures,
    pub timeline: TimelineFigures,
    pub team: TeamFigures,
}

/// Project counts by status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectFigures {
    pub total: u32,
    pub on_schedule: u32,
    pub delayed: u32,
    pub planning: u32,
}

impl Default for ProjectFigures {
    fn default() -> Self {
        Self {
            total: 12,
            on_schedule: 8,
            delayed: 2,
            planning: 2,
        }
    }
}

/// Portfolio budget in whole dollars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetFigures {
    pub total_budget: Money,
    pub spent: Money,
    /// Variance against plan; negative means under budget.
    pub variance_pct: SignedPercent,
}

impl Default for BudgetFigures {
    fn default() -> Self {
        Self {
            total_budget: Money(2_400_000),
            spent: Money(1_800_000),
            variance_pct: SignedPercent(-5),
        }
    }
}

impl BudgetFigures {
    pub fn remaining(&self) -> Money {
        self.total_budget.minus(self.spent)
    }
}

/// The pending schedule change surfaced by timeline questions.
///
/// Dates are ISO strings in TOML (`"2024-03-15"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineFigures {
    pub project: String,
    pub original_date: NaiveDate,
    pub new_date: NaiveDate,
    pub reason: String,
}

impl Default for TimelineFigures {
    fn default() -> Self {
        Self {
            project: "Beverly Hills Townhouse".to_string(),
            original_date: calendar_date(2024, 3, 15),
            new_date: calendar_date(2024, 3, 29),
            reason: "Permit delays".to_string(),
        }
    }
}

/// Team roster headline numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamFigures {
    pub total_members: u32,
    pub active_contractors: u32,
    pub upcoming_schedule: String,
}

impl Default for TeamFigures {
    fn default() -> Self {
        Self {
            total_members: 24,
            active_contractors: 3,
            upcoming_schedule: "Mike's Electrical - Malibu Villa".to_string(),
        }
    }
}

fn calendar_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
