//! Turn coordinator: drives one session through timed request/reply cycles.
//!
//! A submission is appended right away and the reply is produced by a single
//! scheduled task after the configured think time. At most one such task
//! exists per session.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use foreman_core::config::ForemanConfig;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::classifier::IntentClassifier;
use crate::error::ChatError;
use crate::response::{Responder, ResponseGenerator};
use crate::session::Session;
use crate::transcript::Transcript;
use crate::types::{ComposeState, Turn, TurnId};

type ReplyTask = JoinHandle<Result<Turn, ChatError>>;

/// Owns a session and schedules its replies.
pub struct TurnCoordinator {
    session: Arc<Mutex<Session>>,
    session_id: Uuid,
    responder: Arc<Responder>,
    think_time: Duration,
    state_tx: Arc<watch::Sender<ComposeState>>,
    pending: Option<ReplyTask>,
    closed: bool,
}

impl std::fmt::Debug for TurnCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnCoordinator")
            .field("session_id", &self.session_id)
            .field("think_time", &self.think_time)
            .field("state", &*self.state_tx.borrow())
            .field("has_pending", &self.pending.is_some())
            .field("closed", &self.closed)
            .finish()
    }
}

impl TurnCoordinator {
    /// Create a coordinator for `session`.
    pub fn new(session: Session, responder: Responder, think_time: Duration) -> Self {
        let session_id = session.id();
        let (state_tx, _) = watch::channel(session.state());
        Self {
            session: Arc::new(Mutex::new(session)),
            session_id,
            responder: Arc::new(responder),
            think_time,
            state_tx: Arc::new(state_tx),
            pending: None,
            closed: false,
        }
    }

    /// Open a session and coordinator from application config.
    pub fn from_config(config: &ForemanConfig) -> Self {
        let responder = Responder::new(
            IntentClassifier::new(),
            ResponseGenerator::new(config.portfolio.clone()),
        );
        Self::new(
            Session::from_config(&config.chat),
            responder,
            config.chat.think_time(),
        )
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn think_time(&self) -> Duration {
        self.think_time
    }

    pub fn state(&self) -> ComposeState {
        *self.state_tx.borrow()
    }

    /// Watch composing state changes, e.g. to drive a typing indicator.
    pub fn subscribe(&self) -> watch::Receiver<ComposeState> {
        self.state_tx.subscribe()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Copy of the transcript as it stands now.
    pub fn transcript(&self) -> Result<Transcript, ChatError> {
        let session = self
            .session
            .lock()
            .map_err(|e| ChatError::StateLock(format!("session lock poisoned: {}", e)))?;
        Ok(session.transcript().clone())
    }

    /// Submit operator text.
    ///
    /// Returns the id of the appended operator turn, or `None` when the text
    /// was blank and nothing happened. Must be called inside a Tokio runtime.
    pub fn submit(&mut self, raw: &str) -> Result<Option<TurnId>, ChatError> {
        if self.closed {
            return Err(ChatError::SessionClosed);
        }

        let pending = {
            let mut session = self
                .session
                .lock()
                .map_err(|e| ChatError::StateLock(format!("session lock poisoned: {}", e)))?;
            let Some(pending) = session.begin_turn(raw)? else {
                return Ok(None);
            };
            // Published under the lock so the watch never lags the session.
            self.state_tx.send_replace(session.state());
            pending
        };

        let operator_turn = pending.operator_turn();
        tracing::info!(
            session_id = %self.session_id,
            turn = %operator_turn,
            chars = pending.text().len(),
            "Operator message accepted"
        );

        let session = Arc::clone(&self.session);
        let responder = Arc::clone(&self.responder);
        let state_tx = Arc::clone(&self.state_tx);
        let think_time = self.think_time;
        let session_id = self.session_id;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(think_time).await;

            let (intent, reply) = responder.respond(pending.text());
            let turn = {
                let mut session = session
                    .lock()
                    .map_err(|e| ChatError::StateLock(format!("session lock poisoned: {}", e)))?;
                let turn = session.complete_turn(pending, reply)?.clone();
                state_tx.send_replace(session.state());
                turn
            };

            tracing::info!(
                session_id = %session_id,
                turn = %turn.id(),
                intent = %intent,
                artifacts = turn.artifacts().len(),
                "Assistant reply appended"
            );
            Ok(turn)
        }));

        Ok(Some(operator_turn))
    }

    /// Wait for the pending reply and return the assistant turn.
    ///
    /// Returns `Ok(None)` when no reply is pending. Cancel safe: dropping the
    /// future leaves the reply pending, so a later `close` still aborts it.
    pub async fn wait_for_response(&mut self) -> Result<Option<Turn>, ChatError> {
        let Some(task) = self.pending.as_mut() else {
            return Ok(None);
        };
        let joined = task.await;
        self.pending = None;
        match joined {
            Ok(result) => result.map(Some),
            Err(e) => Err(ChatError::ResponseTask(e.to_string())),
        }
    }

    /// Submit and wait for the reply in one step.
    pub async fn send(&mut self, raw: &str) -> Result<Option<Turn>, ChatError> {
        match self.submit(raw)? {
            Some(_) => self.wait_for_response().await,
            None => Ok(None),
        }
    }

    /// Close the session, dropping any reply still being composed.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        if let Some(task) = self.pending.take() {
            task.abort();
            tracing::debug!(session_id = %self.session_id, "Pending reply cancelled");
        }
        self.closed = true;
        let turns = self.session.lock().map(|s| s.transcript().len()).unwrap_or(0);
        tracing::info!(session_id = %self.session_id, turns, "Chat session closed");
    }
}

impl Drop for TurnCoordinator {
    fn drop(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
