//! Weather node: answers a weather question for the classified city.
//!
//! Both failure modes are recovered locally: a missing city yields a
//! fixed prompt-for-city reply without touching either provider, and a
//! provider error status yields a templated explanation without a model
//! call. Only the happy path makes the second generation call.

use crate::ctx::RouterCtx;
use crate::error::Result;
use crate::state::ConversationState;
use crate::textgen::GenRequest;
use crate::weather::{LookupOutcome, WeatherReport};

/// Fixed reply when the classifier extracted no city.
pub const MISSING_CITY_REPLY: &str = "Please include a city so I can check the weather.";

const SYSTEM_PROMPT: &str = "You are a concise assistant. Use the provided weather summary only.";

/// One-line conditions summary handed to the model.
pub fn summarize(city: &str, report: &WeatherReport) -> String {
    format!(
        "{}: {}, {} deg C, humidity {}%.",
        city, report.description, report.temperature_c, report.humidity_pct
    )
}

/// Produce the final answer for a weather intent.
pub async fn run(ctx: &RouterCtx, state: ConversationState) -> Result<ConversationState> {
    let city = state.city.as_deref().unwrap_or("").trim().to_string();
    if city.is_empty() {
        return Ok(state.with_answer(MISSING_CITY_REPLY));
    }

    match ctx.weather.lookup(&ctx.client, &city).await? {
        LookupOutcome::Unavailable { message } => {
            tracing::warn!(%city, %message, "weather lookup failed");
            Ok(state.with_answer(format!(
                "I could not fetch weather for '{city}'. API returned: {message}."
            )))
        }
        LookupOutcome::Report(report) => {
            let summary = summarize(&city, &report);
            tracing::debug!(%city, %summary, "weather lookup succeeded");

            let request = GenRequest::new(
                SYSTEM_PROMPT,
                format!(
                    "User asked: {}\nWeather summary: {}\nWrite a short friendly answer.",
                    state.user_input, summary
                ),
            )
            .with_temperature(0.3);
            let answer = ctx.textgen.generate(&ctx.client, &request).await?;
            Ok(state.with_answer(answer))
        }
    }
}
