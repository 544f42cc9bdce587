//! Artifact cards for display surfaces.
//!
//! Rendering happens when a turn is displayed, not when it is generated.
//! Unrecognized artifacts produce no card.

use std::fmt;

use crate::types::{Artifact, Turn};

/// One labelled value on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRow {
    pub label: &'static str,
    pub value: String,
}

/// Surface-neutral rendering of an artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCard {
    pub title: &'static str,
    pub rows: Vec<CardRow>,
    /// Buttons the card offers, e.g. "Approve Changes".
    pub actions: Vec<&'static str>,
}

impl ArtifactCard {
    fn new(title: &'static str, rows: Vec<(&'static str, String)>) -> Self {
        Self {
            title,
            rows: rows
                .into_iter()
                .map(|(label, value)| CardRow { label, value })
                .collect(),
            actions: Vec::new(),
        }
    }

    fn with_action(mut self, action: &'static str) -> Self {
        self.actions.push(action);
        self
    }

    /// Value of the row with `label`.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}

impl fmt::Display for ArtifactCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  [{}]", self.title)?;
        for row in &self.rows {
            writeln!(f, "    {}: {}", row.label, row.value)?;
        }
        for action in &self.actions {
            writeln!(f, "    > {}", action)?;
        }
        Ok(())
    }
}

/// Render one artifact, or nothing for an unrecognized kind.
pub fn render_artifact(artifact: &Artifact) -> Option<ArtifactCard> {
    match artifact {
        Artifact::ProjectSummary(summary) => Some(ArtifactCard::new(
            "Project Summary",
            vec![
                ("Total Projects", summary.total_projects.to_string()),
                ("On Schedule", summary.on_schedule.to_string()),
                ("Delayed", summary.delayed.to_string()),
                ("Planning", summary.planning.to_string()),
            ],
        )),
        Artifact::BudgetAlert(alert) => Some(ArtifactCard::new(
            "Budget Overview",
            vec![
                ("Total Budget", alert.total_budget.clone()),
                ("Spent", alert.spent.clone()),
                ("Remaining", alert.remaining.clone()),
                ("Variance", alert.variance.clone()),
            ],
        )),
        Artifact::TimelineUpdate(update) => Some(
            ArtifactCard::new(
                "Timeline Update Required",
                vec![
                    ("Project", update.project.clone()),
                    ("Original Date", update.original_date.to_string()),
                    ("New Date", update.new_date.to_string()),
                    ("Reason", update.reason.clone()),
                ],
            )
            .with_action("Approve Changes"),
        ),
        Artifact::TeamStatus(team) => Some(ArtifactCard::new(
            "Team Status",
            vec![
                ("Total Members", team.total_members.to_string()),
                ("Active Contractors", team.active_contractors.to_string()),
                ("Upcoming", team.upcoming_schedule.clone()),
            ],
        )),
        Artifact::Unrecognized => {
            tracing::debug!("Skipping unrecognized artifact");
            None
        }
    }
}

/// Cards for every renderable artifact on `turn`, in order.
pub fn render_turn(turn: &Turn) -> Vec<ArtifactCard> {
    turn.artifacts().iter().filter_map(render_artifact).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::ResponseGenerator;
    use crate::transcript::Transcript;
    use crate::types::Intent;

    fn card_for(intent: Intent) -> ArtifactCard {
        let reply = ResponseGenerator::default().generate(intent);
        render_artifact(&reply.artifacts[0]).unwrap()
    }

    #[test]
    fn test_project_summary_card() {
        let card = card_for(Intent::ProjectStatus);
        assert_eq!(card.title, "Project Summary");
        assert_eq!(card.value("Total Projects"), Some("12"));
        assert_eq!(card.value("On Schedule"), Some("8"));
        assert_eq!(card.value("Delayed"), Some("2"));
        assert_eq!(card.value("Planning"), Some("2"));
        assert!(card.actions.is_empty());
    }

    #[test]
    fn test_budget_card() {
        let card = card_for(Intent::BudgetInquiry);
        assert_eq!(card.title, "Budget Overview");
        assert_eq!(card.value("Total Budget"), Some("$2.4M"));
        assert_eq!(card.value("Remaining"), Some("$600K"));
        assert_eq!(card.value("Variance"), Some("-5%"));
    }

    #[test]
    fn test_timeline_card_offers_approval() {
        let card = card_for(Intent::ScheduleInquiry);
        assert_eq!(card.title, "Timeline Update Required");
        assert_eq!(card.value("Original Date"), Some("2024-03-15"));
        assert_eq!(card.value("New Date"), Some("2024-03-29"));
        assert_eq!(card.actions, vec!["Approve Changes"]);
    }

    #[test]
    fn test_team_card() {
        let card = card_for(Intent::TeamInquiry);
        assert_eq!(card.title, "Team Status");
        assert_eq!(card.value("Active Contractors"), Some("3"));
        assert_eq!(card.value("Upcoming"), Some("Mike's Electrical - Malibu Villa"));
    }

    #[test]
    fn test_unrecognized_renders_nothing() {
        assert!(render_artifact(&Artifact::Unrecognized).is_none());
    }

    #[test]
    fn test_render_turn_skips_unrecognized() {
        let mut artifacts = ResponseGenerator::default()
            .generate(Intent::TeamInquiry)
            .artifacts;
        artifacts.insert(0, Artifact::Unrecognized);

        let mut transcript = Transcript::new();
        let turn = transcript.append_assistant("mixed", artifacts);
        let cards = render_turn(turn);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Team Status");
    }

    #[test]
    fn test_render_turn_without_artifacts() {
        let mut transcript = Transcript::new();
        let turn = transcript.append_operator("hello");
        assert!(render_turn(turn).is_empty());
    }

    #[test]
    fn test_card_display() {
        let text = card_for(Intent::ScheduleInquiry).to_string();
        assert!(text.starts_with("  [Timeline Update Required]\n"));
        assert!(text.contains("    Project: Beverly Hills Townhouse\n"));
        assert!(text.ends_with("    > Approve Changes\n"));
    }
}
