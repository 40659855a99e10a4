//! Conversation state threaded through the pipeline.
//!
//! [`ConversationState`] is an immutable record: each node consumes the
//! state by value and returns an updated copy, so no node ever observes
//! another node's in-place mutation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The classified category of a user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// The user is asking about current weather conditions.
    Weather,
    /// Anything else; the user gets a joke.
    Joke,
}

impl Intent {
    /// Lowercase wire label for the intent.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Weather => "weather",
            Intent::Joke => "joke",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The record threaded through the pipeline.
///
/// Created fresh per request, populated by exactly two node executions
/// (classifier, then one of weather/joke), discarded after the response
/// is rendered. There is no conversation memory across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationState {
    /// The caller's message, trimmed. Immutable after creation.
    pub user_input: String,

    /// Classified intent. Seeded with [`Intent::Joke`]; the classifier
    /// always overwrites it.
    pub intent: Intent,

    /// City extracted by the classifier, if it emitted a non-empty value.
    pub city: Option<String>,

    /// Joke topic extracted by the classifier (`"general"` when the model
    /// left it out).
    pub topic: Option<String>,

    /// The final answer. `None` until a terminal node runs.
    pub final_answer: Option<String>,
}

impl ConversationState {
    /// Seed a fresh state for one pipeline run.
    pub fn new(user_input: impl Into<String>) -> Self {
        Self {
            user_input: user_input.into(),
            intent: Intent::Joke,
            city: None,
            topic: None,
            final_answer: None,
        }
    }

    /// Copy with the classifier's output applied.
    pub fn with_classification(
        self,
        intent: Intent,
        city: Option<String>,
        topic: Option<String>,
    ) -> Self {
        Self {
            intent,
            city,
            topic,
            ..self
        }
    }

    /// Copy with the final answer set by a terminal node.
    pub fn with_answer(self, answer: impl Into<String>) -> Self {
        Self {
            final_answer: Some(answer.into()),
            ..self
        }
    }
}
