//! Pipeline orchestrator.
//!
//! One [`Router::run`] invocation handles exactly one message end to end:
//! classify, branch on the intent, fulfill, terminate. No node runs more
//! than once and there are no cycles; the whole graph is a two-level tree
//! with a fan-out of two at the root.

use crate::ctx::RouterCtx;
use crate::error::Result;
use crate::nodes;
use crate::state::{ConversationState, Intent};
use crate::RouterError;

/// The conversational router: classifier plus two terminal nodes.
pub struct Router {
    ctx: RouterCtx,
}

impl Router {
    /// Create a router over the given execution context.
    pub fn new(ctx: RouterCtx) -> Self {
        Self { ctx }
    }

    /// Run the full pipeline for one message and return the terminal state.
    ///
    /// The question is trimmed first; an empty or whitespace-only question
    /// is rejected with [`RouterError::EmptyInput`] before any node runs.
    /// On success the returned state always carries a final answer.
    pub async fn run(&self, question: &str) -> Result<ConversationState> {
        let cleaned = question.trim();
        if cleaned.is_empty() {
            return Err(RouterError::EmptyInput);
        }

        let state = ConversationState::new(cleaned);
        let state = nodes::classify::run(&self.ctx, state).await?;

        match state.intent {
            Intent::Weather => nodes::weather::run(&self.ctx, state).await,
            Intent::Joke => nodes::joke::run(&self.ctx, state).await,
        }
    }
}
