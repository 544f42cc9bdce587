//! Message model for the conversation panel.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Enums
// =============================================================================

/// Who wrote a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    /// The person at the dashboard.
    Operator,
    /// The conversational assistant.
    Assistant,
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Author::Operator => write!(f, "You"),
            Author::Assistant => write!(f, "Assistant"),
        }
    }
}

/// Classified category of an operator message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    ProjectStatus,
    BudgetInquiry,
    ScheduleInquiry,
    TeamInquiry,
    /// Fallback when no rule matches.
    Unknown,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::ProjectStatus => write!(f, "project_status"),
            Intent::BudgetInquiry => write!(f, "budget_inquiry"),
            Intent::ScheduleInquiry => write!(f, "schedule_inquiry"),
            Intent::TeamInquiry => write!(f, "team_inquiry"),
            Intent::Unknown => write!(f, "unknown"),
        }
    }
}

/// Whether the assistant is currently producing a reply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComposeState {
    #[default]
    Idle,
    Composing,
}

impl fmt::Display for ComposeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeState::Idle => write!(f, "Idle"),
            ComposeState::Composing => write!(f, "Composing"),
        }
    }
}

// =============================================================================
// Artifacts
// =============================================================================

/// Structured summary card attached to an assistant turn.
///
/// Serialized with an internal `type` tag (`"project_summary"`, ...). A tag
/// this build does not know deserializes to [`Artifact::Unrecognized`], which
/// renders nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum Artifact {
    ProjectSummary(ProjectSummary),
    BudgetAlert(BudgetAlert),
    TimelineUpdate(TimelineUpdate),
    TeamStatus(TeamStatus),
    #[serde(other)]
    Unrecognized,
}

impl Artifact {
    /// Wire tag of this variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Artifact::ProjectSummary(_) => "project_summary",
            Artifact::BudgetAlert(_) => "budget_alert",
            Artifact::TimelineUpdate(_) => "timeline_update",
            Artifact::TeamStatus(_) => "team_status",
            Artifact::Unrecognized => "unrecognized",
        }
    }
}

/// Portfolio project counts by status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub total_projects: u32,
    pub on_schedule: u32,
    pub delayed: u32,
    pub planning: u32,
}

/// Budget headline, already formatted for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAlert {
    pub total_budget: String,
    pub spent: String,
    pub remaining: String,
    /// Signed percentage, e.g. `-5%`.
    pub variance: String,
}

/// A proposed change to one project's completion date.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineUpdate {
    pub project: String,
    pub original_date: NaiveDate,
    pub new_date: NaiveDate,
    pub reason: String,
}

/// Team roster headline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatus {
    pub total_members: u32,
    pub active_contractors: u32,
    pub upcoming_schedule: String,
}

// =============================================================================
// Turns
// =============================================================================

/// Per-session sequence number of a turn. Starts at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TurnId(pub u64);

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One entry in the transcript.
///
/// Only the [`Transcript`](crate::transcript::Transcript) creates turns, and
/// it never hands out mutable access to them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    id: TurnId,
    author: Author,
    text: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    artifacts: Vec<Artifact>,
}

impl Turn {
    pub(crate) fn new(
        id: TurnId,
        author: Author,
        text: String,
        created_at: DateTime<Utc>,
        artifacts: Vec<Artifact>,
    ) -> Self {
        Self {
            id,
            author,
            text,
            created_at,
            artifacts,
        }
    }

    pub fn id(&self) -> TurnId {
        self.id
    }

    pub fn author(&self) -> Author {
        self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Artifacts in generation order. Always empty for operator turns.
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }
}
