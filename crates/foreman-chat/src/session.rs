//! Conversation session: one transcript plus the composing flag.
//!
//! Turn-taking cycles between two states:
//! - Idle -> Composing (operator message accepted)
//! - Composing -> Idle (assistant reply appended)
//!
//! A session that is composing accepts no new message until its reply lands.

use chrono::{DateTime, Utc};
use foreman_core::config::ChatConfig;
use uuid::Uuid;

use crate::error::ChatError;
use crate::response::{Reply, Responder};
use crate::transcript::Transcript;
use crate::types::{ComposeState, Turn, TurnId};

/// Handle for the reply a session is waiting on.
///
/// Produced by [`Session::begin_turn`] and consumed by
/// [`Session::complete_turn`]. Not `Clone`, so one message yields one reply.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingTurn {
    operator_turn: TurnId,
    text: String,
}

impl PendingTurn {
    /// Id of the operator turn awaiting a reply.
    pub fn operator_turn(&self) -> TurnId {
        self.operator_turn
    }

    /// Trimmed operator text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// State owned by one open conversation panel.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    opened_at: DateTime<Utc>,
    transcript: Transcript,
    state: ComposeState,
    awaiting: Option<TurnId>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Open an empty session.
    pub fn new() -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            opened_at: Utc::now(),
            transcript: Transcript::new(),
            state: ComposeState::Idle,
            awaiting: None,
        };
        tracing::info!(session_id = %session.id, "Chat session opened");
        session
    }

    /// Open a session whose first turn is the assistant's greeting.
    pub fn with_greeting(greeting: &str) -> Self {
        let mut session = Self::new();
        session.transcript.append_assistant(greeting, Vec::new());
        session
    }

    /// Open a session as configured.
    pub fn from_config(config: &ChatConfig) -> Self {
        if config.show_greeting {
            Self::with_greeting(&config.greeting)
        } else {
            Self::new()
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn state(&self) -> ComposeState {
        self.state
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Accept an operator message.
    ///
    /// Whitespace-only input is ignored and returns `Ok(None)` without
    /// touching the transcript. Otherwise the trimmed text is appended as an
    /// operator turn and the session starts composing.
    pub fn begin_turn(&mut self, raw: &str) -> Result<Option<PendingTurn>, ChatError> {
        let text = raw.trim();
        if text.is_empty() {
            tracing::debug!(session_id = %self.id, "Ignoring empty submission");
            return Ok(None);
        }
        if self.state == ComposeState::Composing {
            tracing::warn!(session_id = %self.id, "Submission rejected while composing");
            return Err(ChatError::ResponsePending);
        }

        let operator_turn = self.transcript.append_operator(text).id();
        self.transition(ComposeState::Composing);
        self.awaiting = Some(operator_turn);

        Ok(Some(PendingTurn {
            operator_turn,
            text: text.to_string(),
        }))
    }

    /// Append the assistant reply for `pending` and return to idle.
    pub fn complete_turn(&mut self, pending: PendingTurn, reply: Reply) -> Result<&Turn, ChatError> {
        if self.state != ComposeState::Composing || self.awaiting != Some(pending.operator_turn) {
            return Err(ChatError::NothingPending(pending.operator_turn));
        }

        self.awaiting = None;
        self.transition(ComposeState::Idle);
        Ok(self.transcript.append_assistant(reply.text, reply.artifacts))
    }

    /// Accept a message and reply immediately, without think time.
    pub fn exchange(&mut self, raw: &str, responder: &Responder) -> Result<Option<&Turn>, ChatError> {
        let Some(pending) = self.begin_turn(raw)? else {
            return Ok(None);
        };
        let (_, reply) = responder.respond(pending.text());
        self.complete_turn(pending, reply).map(Some)
    }

    fn transition(&mut self, target: ComposeState) {
        tracing::debug!(session_id = %self.id, "Chat state: {} -> {}", self.state, target);
        self.state = target;
    }
}

// =============================================================================
// Tests
// =============================================================================
