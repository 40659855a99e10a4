//! Joke node: generates one short joke on the classified topic.

use crate::ctx::RouterCtx;
use crate::error::Result;
use crate::state::ConversationState;
use crate::textgen::GenRequest;

const SYSTEM_PROMPT: &str = "Tell one short, clean joke.";

/// Produce the final answer for a joke intent.
pub async fn run(ctx: &RouterCtx, state: ConversationState) -> Result<ConversationState> {
    let topic = state.topic.as_deref().unwrap_or("general").trim();
    let topic = if topic.is_empty() { "general" } else { topic };

    let request = GenRequest::new(SYSTEM_PROMPT, format!("Topic: {topic}")).with_temperature(0.8);
    let answer = ctx.textgen.generate(&ctx.client, &request).await?;
    Ok(state.with_answer(answer))
}
