//! Classifier node: labels a message with an intent, city, and topic.
//!
//! The model is asked for exactly three labeled lines and the response is
//! parsed defensively: a sequential scan with explicit defaults, so
//! malformed output degrades to `joke` / no city / `"general"` rather
//! than failing the pipeline.

use crate::ctx::RouterCtx;
use crate::error::Result;
use crate::state::{ConversationState, Intent};
use crate::textgen::GenRequest;

const SYSTEM_PROMPT: &str =
    "Classify the user message into weather or joke. Return exactly these labeled lines and nothing else.";

/// Parsed classifier output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub intent: Intent,
    pub city: Option<String>,
    pub topic: String,
}

fn format_user_prompt(user_input: &str) -> String {
    format!(
        "Format:\n\
         INTENT: weather|joke\n\
         CITY: <city or empty>\n\
         TOPIC: <topic or general>\n\n\
         Message: {user_input}"
    )
}

/// Parse the classifier's labeled-line response.
///
/// Scans each line after trimming, matching the `INTENT:`/`CITY:`/`TOPIC:`
/// prefixes case-sensitively. Unknown lines are ignored and a repeated
/// label overwrites the previous one (last occurrence wins). Defaults:
/// unrecognized or missing intent is `joke`, an empty city is `None`, an
/// empty or missing topic is `"general"`. This is best-effort by design;
/// there is no validation that the model followed the format.
pub fn parse_classification(text: &str) -> Classification {
    let mut intent = Intent::Joke;
    let mut city: Option<String> = None;
    let mut topic: Option<String> = None;

    for line in text.lines() {
        let line = line.trim();
        if let Some(value) = line.strip_prefix("INTENT:") {
            intent = if value.trim().eq_ignore_ascii_case("weather") {
                Intent::Weather
            } else {
                Intent::Joke
            };
        } else if let Some(value) = line.strip_prefix("CITY:") {
            let value = value.trim();
            city = (!value.is_empty()).then(|| value.to_string());
        } else if let Some(value) = line.strip_prefix("TOPIC:") {
            let value = value.trim();
            topic = Some(if value.is_empty() {
                "general".to_string()
            } else {
                value.to_string()
            });
        }
    }

    Classification {
        intent,
        city,
        topic: topic.unwrap_or_else(|| "general".to_string()),
    }
}

/// Run the classifier against the state's user input.
pub async fn run(ctx: &RouterCtx, state: ConversationState) -> Result<ConversationState> {
    let request = GenRequest::new(SYSTEM_PROMPT, format_user_prompt(&state.user_input))
        .with_temperature(0.0);
    let raw = ctx.textgen.generate(&ctx.client, &request).await?;
    let classification = parse_classification(&raw);

    tracing::debug!(
        intent = %classification.intent,
        city = classification.city.as_deref(),
        topic = %classification.topic,
        "classified user message"
    );

    Ok(state.with_classification(
        classification.intent,
        classification.city,
        Some(classification.topic),
    ))
}
