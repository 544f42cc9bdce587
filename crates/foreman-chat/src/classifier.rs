//! Rule-based intent classifier.
//!
//! Input is case-folded and split into word tokens. Rules are evaluated in
//! table order and the first one whose predicate holds wins; anything left
//! over is [`Intent::Unknown`].
//!
//! A keyword is present when some token contains it, so "projects" mentions
//! "project" and "contractor's" mentions "contractor". For single-word
//! keywords this matches plain substring search over the whole text.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Intent;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}']+").expect("Invalid token regex"));

/// Condition a rule places on the tokenized input. Keywords are lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Every keyword must be present.
    AllOf(&'static [&'static str]),
    /// At least one keyword must be present.
    AnyOf(&'static [&'static str]),
}

impl Predicate {
    /// Evaluate against lowercase tokens.
    pub fn holds(&self, tokens: &[String]) -> bool {
        match self {
            Predicate::AllOf(keywords) => keywords.iter().all(|k| mentions(tokens, k)),
            Predicate::AnyOf(keywords) => keywords.iter().any(|k| mentions(tokens, k)),
        }
    }
}

/// One row of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentRule {
    pub intent: Intent,
    pub predicate: Predicate,
}

/// Rules in priority order.
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::ProjectStatus,
        predicate: Predicate::AllOf(&["project", "status"]),
    },
    IntentRule {
        intent: Intent::BudgetInquiry,
        predicate: Predicate::AnyOf(&["budget", "cost"]),
    },
    IntentRule {
        intent: Intent::ScheduleInquiry,
        predicate: Predicate::AnyOf(&["schedule", "timeline"]),
    },
    IntentRule {
        intent: Intent::TeamInquiry,
        predicate: Predicate::AnyOf(&["team", "contractor"]),
    },
];

/// Case-fold `text` and split it into word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let folded = text.to_lowercase();
    TOKEN_RE
        .find_iter(&folded)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn mentions(tokens: &[String], keyword: &str) -> bool {
    tokens.iter().any(|t| t.contains(keyword))
}

// =============================================================================
// IntentClassifier
// =============================================================================

/// Maps free text to an [`Intent`]. Pure and deterministic.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Classifier over [`INTENT_RULES`].
    pub fn new() -> Self {
        Self::with_rules(INTENT_RULES.to_vec())
    }

    /// Classifier over a custom table, evaluated in the given order.
    pub fn with_rules(rules: Vec<IntentRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    /// Classify raw operator text.
    pub fn classify(&self, text: &str) -> Intent {
        self.matching_rule(text)
            .map(|rule| rule.intent)
            .unwrap_or(Intent::Unknown)
    }

    /// The first rule that fires for `text`, if any.
    pub fn matching_rule(&self, text: &str) -> Option<&IntentRule> {
        let tokens = tokenize(text);
        self.rules.iter().find(|rule| rule.predicate.holds(&tokens))
    }
}

// =============================================================================
// Tests
// =============================================================================
