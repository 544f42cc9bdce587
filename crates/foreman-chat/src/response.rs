//! Reply generation for classified intents.
//!
//! Each intent maps to one canned reply and at most one artifact built from
//! the portfolio reference data. Nothing here performs I/O or can fail.

use foreman_core::config::PortfolioConfig;

use crate::classifier::IntentClassifier;
use crate::types::{
    Artifact, BudgetAlert, Intent, ProjectSummary, TeamStatus, TimelineUpdate,
};

/// Canned prompts offered next to the input box, one per intent.
pub const QUICK_PROMPTS: [&str; 4] = [
    "What's the status of my projects?",
    "Show me the budget overview",
    "Any timeline updates needed?",
    "How is my team doing?",
];

const PROJECT_STATUS_REPLY: &str = "Here's the current status of your active projects. The Malibu Villa is progressing well in the foundation phase, while the Beverly Hills Townhouse is moving into framing. Would you like me to dive deeper into any specific project?";

const BUDGET_REPLY: &str = "I can see you're asking about budget. Your current portfolio is performing well - you're 5% under budget overall. The Malibu Villa has some material cost increases we should discuss. Would you like me to show you the detailed budget breakdown?";

const SCHEDULE_REPLY: &str = "Looking at your project timelines, most are on track. However, I notice the Beverly Hills project might face a 2-week delay due to permit approvals. I can help you adjust the schedule and notify your subcontractors. Should I proceed with the timeline updates?";

const TEAM_REPLY: &str = "Your team coordination looks good. All 24 team members are accounted for, with 3 contractors currently active on-site. Mike's electrical crew is scheduled for the Malibu project next week. Need me to send any updates or schedule changes?";

/// Reply for input no rule recognizes.
pub const FALLBACK_REPLY: &str = "I understand you're asking about your construction projects. I can help you with project status, budget tracking, timeline management, team coordination, and much more. Try asking me something like 'What's the status of my projects?' or 'Show me the budget overview'.";

// =============================================================================
// Reply
// =============================================================================

/// Generated assistant output for one operator message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub artifacts: Vec<Artifact>,
}

// =============================================================================
// ResponseGenerator
// =============================================================================

/// Builds replies from fixed portfolio figures.
#[derive(Debug, Clone, Default)]
pub struct ResponseGenerator {
    portfolio: PortfolioConfig,
}

impl ResponseGenerator {
    pub fn new(portfolio: PortfolioConfig) -> Self {
        Self { portfolio }
    }

    pub fn portfolio(&self) -> &PortfolioConfig {
        &self.portfolio
    }

    /// Produce the reply text and artifacts for `intent`.
    pub fn generate(&self, intent: Intent) -> Reply {
        let (text, artifacts) = match intent {
            Intent::ProjectStatus => (
                PROJECT_STATUS_REPLY,
                vec![Artifact::ProjectSummary(self.project_summary())],
            ),
            Intent::BudgetInquiry => (
                BUDGET_REPLY,
                vec![Artifact::BudgetAlert(self.budget_alert())],
            ),
            Intent::ScheduleInquiry => (
                SCHEDULE_REPLY,
                vec![Artifact::TimelineUpdate(self.timeline_update())],
            ),
            Intent::TeamInquiry => (TEAM_REPLY, vec![Artifact::TeamStatus(self.team_status())]),
            Intent::Unknown => (FALLBACK_REPLY, vec![]),
        };

        Reply {
            text: text.to_string(),
            artifacts,
        }
    }

    // -- Private helpers --

    fn project_summary(&self) -> ProjectSummary {
        let projects = &self.portfolio.projects;
        ProjectSummary {
            total_projects: projects.total,
            on_schedule: projects.on_schedule,
            delayed: projects.delayed,
            planning: projects.planning,
        }
    }

    fn budget_alert(&self) -> BudgetAlert {
        let budget = &self.portfolio.budget;
        BudgetAlert {
            total_budget: budget.total_budget.to_string(),
            spent: budget.spent.to_string(),
            remaining: budget.remaining().to_string(),
            variance: budget.variance_pct.to_string(),
        }
    }

    fn timeline_update(&self) -> TimelineUpdate {
        let timeline = &self.portfolio.timeline;
        TimelineUpdate {
            project: timeline.project.clone(),
            original_date: timeline.original_date,
            new_date: timeline.new_date,
            reason: timeline.reason.clone(),
        }
    }

    fn team_status(&self) -> TeamStatus {
        let team = &self.portfolio.team;
        TeamStatus {
            total_members: team.total_members,
            active_contractors: team.active_contractors,
            upcoming_schedule: team.upcoming_schedule.clone(),
        }
    }
}

// =============================================================================
// Responder
// =============================================================================

/// Classifier and generator bundled for one call per operator message.
#[derive(Debug, Clone, Default)]
pub struct Responder {
    classifier: IntentClassifier,
    generator: ResponseGenerator,
}

impl Responder {
    pub fn new(classifier: IntentClassifier, generator: ResponseGenerator) -> Self {
        Self {
            classifier,
            generator,
        }
    }

    /// Classify `text` and generate the matching reply.
    pub fn respond(&self, text: &str) -> (Intent, Reply) {
        let intent = self.classifier.classify(text);
        tracing::debug!(intent = %intent, "Operator message classified");
        (intent, self.generator.generate(intent))
    }
}

// =============================================================================
// Tests
// =============================================================================
