//! # chat-router
//!
//! A minimal conversational router: classifies a free-text message into
//! one of two intents (`weather` or `joke`), dispatches to a fulfilling
//! node, and returns a single final answer. Exposed both as an
//! interactive text loop and as a small HTTP API with one chat endpoint.
//!
//! The pipeline is a linear, two-level state machine: classify, branch,
//! fulfill, terminate. No loops, no retries, no persistence. Each
//! invocation is independent and issues at most three upstream calls
//! (classification, plus a weather lookup and one more generation).
//!
//! ## Core Concepts
//!
//! - **[`ConversationState`]** — immutable record threaded through the
//!   pipeline; each node returns an updated copy.
//! - **[`TextGen`](textgen::TextGen)** — object-safe trait over hosted
//!   chat-completion providers.
//! - **[`WeatherProvider`](weather::WeatherProvider)** — object-safe
//!   trait over weather-data services.
//! - **[`Router`]** — the orchestrator: classifier node, then exactly one
//!   of the weather/joke terminal nodes.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use chat_router::{Router, RouterCtx};
//! use chat_router::textgen::OpenAiTextGen;
//! use chat_router::weather::OpenWeatherProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ctx = RouterCtx::builder()
//!         .textgen(Arc::new(OpenAiTextGen::new("sk-...", "gpt-4o-mini")))
//!         .weather(Arc::new(OpenWeatherProvider::new("owm-...")))
//!         .build();
//!
//!     let router = Router::new(ctx);
//!     let state = router.run("what's the weather in Paris?").await?;
//!     println!("{}", state.final_answer.unwrap_or_default());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod ctx;
pub mod error;
pub mod nodes;
pub mod router;
pub mod server;
pub mod state;
pub mod textgen;
pub mod weather;

pub use config::Settings;
pub use ctx::{RouterCtx, RouterCtxBuilder};
pub use error::{Result, RouterError};
pub use router::Router;
pub use state::{ConversationState, Intent};
