//! Conversation engine for the Foreman dashboard chat panel.
//!
//! Classifies operator messages into intents, answers each with a canned
//! reply plus an optional structured artifact, and records both sides in an
//! append-only transcript. Replies arrive after a short think time, during
//! which the session refuses new input.

pub mod classifier;
pub mod coordinator;
pub mod error;
pub mod render;
pub mod response;
pub mod session;
pub mod transcript;
pub mod types;

pub use classifier::{IntentClassifier, IntentRule, Predicate, INTENT_RULES};
pub use coordinator::TurnCoordinator;
pub use error::ChatError;
pub use render::{render_artifact, render_turn, ArtifactCard, CardRow};
pub use response::{Reply, Responder, ResponseGenerator, FALLBACK_REPLY, QUICK_PROMPTS};
pub use session::{PendingTurn, Session};
pub use transcript::Transcript;
pub use types::{
    Artifact, Author, BudgetAlert, ComposeState, Intent, ProjectSummary, TeamStatus,
    TimelineUpdate, Turn, TurnId,
};
