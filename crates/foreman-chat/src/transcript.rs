//! Append-only transcript of a session's turns.

use std::path::Path;

use chrono::Utc;
use foreman_core::error::ForemanError;
use serde::Serialize;

use crate::error::ChatError;
use crate::types::{Artifact, Author, Turn, TurnId};

/// Ordered log of turns.
///
/// Turns are only ever appended. Ids count up from 1 and `created_at` never
/// decreases along the sequence, even if the wall clock steps backwards.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an operator message.
    pub fn append_operator(&mut self, text: impl Into<String>) -> &Turn {
        self.push(Author::Operator, text.into(), Vec::new())
    }

    /// Append an assistant reply with its artifacts.
    pub fn append_assistant(&mut self, text: impl Into<String>, artifacts: Vec<Artifact>) -> &Turn {
        self.push(Author::Assistant, text.into(), artifacts)
    }

    /// All turns in append order.
    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn get(&self, id: TurnId) -> Option<&Turn> {
        let index = usize::try_from(id.0).ok()?.checked_sub(1)?;
        self.turns.get(index)
    }

    /// Serialize the transcript as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ChatError> {
        let json = serde_json::to_string_pretty(self).map_err(ForemanError::from)?;
        Ok(json)
    }

    /// Write the transcript as JSON, creating parent directories.
    pub fn write_json(&self, path: &Path) -> Result<(), ChatError> {
        let json = self.to_json()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ForemanError::from)?;
        }
        std::fs::write(path, json).map_err(ForemanError::from)?;
        tracing::info!(path = %path.display(), turns = self.turns.len(), "Transcript exported");
        Ok(())
    }

    fn push(&mut self, author: Author, text: String, artifacts: Vec<Artifact>) -> &Turn {
        let id = TurnId(self.turns.len() as u64 + 1);
        let now = Utc::now();
        let created_at = match self.turns.last() {
            Some(last) if last.created_at() > now => last.created_at(),
            _ => now,
        };
        let index = self.turns.len();
        self.turns
            .push(Turn::new(id, author, text, created_at, artifacts));
        &self.turns[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TeamStatus;

    fn team_artifact() -> Artifact {
        Artifact::TeamStatus(TeamStatus {
            total_members: 24,
            active_contractors: 3,
            upcoming_schedule: "Mike's Electrical - Malibu Villa".to_string(),
        })
    }

    #[test]
    fn test_new_transcript_is_empty() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
        assert!(transcript.last().is_none());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.append_operator("first");
        transcript.append_assistant("second", vec![]);
        transcript.append_operator("third");

        let texts: Vec<&str> = transcript.all().iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_ids_count_up_from_one() {
        let mut transcript = Transcript::new();
        let a = transcript.append_operator("a").id();
        let b = transcript.append_assistant("b", vec![]).id();
        assert_eq!(a, TurnId(1));
        assert_eq!(b, TurnId(2));
    }

    #[test]
    fn test_operator_turns_carry_no_artifacts() {
        let mut transcript = Transcript::new();
        let turn = transcript.append_operator("How is my team doing?");
        assert_eq!(turn.author(), Author::Operator);
        assert!(turn.artifacts().is_empty());
    }

    #[test]
    fn test_assistant_turn_keeps_artifacts() {
        let mut transcript = Transcript::new();
        let turn = transcript.append_assistant("Team looks good.", vec![team_artifact()]);
        assert_eq!(turn.author(), Author::Assistant);
        assert_eq!(turn.artifacts(), &[team_artifact()]);
    }

    #[test]
    fn test_timestamps_non_decreasing() {
        let mut transcript = Transcript::new();
        for i in 0..50 {
            transcript.append_operator(format!("message {}", i));
        }
        let turns = transcript.all();
        assert!(turns
            .windows(2)
            .all(|pair| pair[0].created_at() <= pair[1].created_at()));
    }

    #[test]
    fn test_all_is_restartable() {
        let mut transcript = Transcript::new();
        transcript.append_operator("one");
        transcript.append_assistant("two", vec![]);

        let first: Vec<TurnId> = transcript.all().iter().map(|t| t.id()).collect();
        let second: Vec<TurnId> = transcript.all().iter().map(|t| t.id()).collect();
        assert_eq!(first, second);
        assert_eq!(transcript.len(), 2);
    }

    #[test]
    fn test_get_by_id() {
        let mut transcript = Transcript::new();
        transcript.append_operator("one");
        transcript.append_assistant("two", vec![]);

        assert_eq!(transcript.get(TurnId(2)).map(|t| t.text()), Some("two"));
        assert!(transcript.get(TurnId(0)).is_none());
        assert!(transcript.get(TurnId(3)).is_none());
    }

    #[test]
    fn test_to_json() {
        let mut transcript = Transcript::new();
        transcript.append_operator("How is my team doing?");
        transcript.append_assistant("Team looks good.", vec![team_artifact()]);

        let json: serde_json::Value =
            serde_json::from_str(&transcript.to_json().unwrap()).unwrap();
        let turns = json["turns"].as_array().unwrap();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0]["author"], "operator");
        assert_eq!(turns[1]["author"], "assistant");
        assert_eq!(turns[1]["artifacts"][0]["type"], "team_status");
    }

    #[test]
    fn test_json_turns_deserialize_back() {
        let mut transcript = Transcript::new();
        transcript.append_assistant("Team looks good.", vec![team_artifact()]);

        let json: serde_json::Value =
            serde_json::from_str(&transcript.to_json().unwrap()).unwrap();
        let turn: Turn = serde_json::from_value(json["turns"][0].clone()).unwrap();
        assert_eq!(&turn, &transcript.all()[0]);
    }

    #[test]
    fn test_write_json_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("transcript.json");

        let mut transcript = Transcript::new();
        transcript.append_operator("Show me the budget overview");
        transcript.write_json(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Show me the budget overview"));
    }
}
