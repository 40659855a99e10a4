//! Text-generation client boundary.
//!
//! The [`TextGen`] trait abstracts over hosted chat-completion providers,
//! translating a normalized [`GenRequest`] into the provider's HTTP API.
//! Built-in implementations: [`OpenAiTextGen`] for live calls and
//! [`MockTextGen`] for deterministic tests.
//!
//! ```text
//! node ──► GenRequest ──► TextGen::generate() ──► String
//!                               │
//!                    ┌──────────┴──────────┐
//!               OpenAiTextGen         MockTextGen
//!             /v1/chat/completions   canned responses
//! ```

pub mod mock;
pub mod openai;

pub use mock::MockTextGen;
pub use openai::OpenAiTextGen;

use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// A normalized text-generation request.
///
/// Every pipeline node builds one of these; the [`TextGen`] implementation
/// translates it into the provider-specific HTTP request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenRequest {
    /// System instruction sent ahead of the user turn.
    pub system_prompt: String,

    /// The user instruction.
    pub user_prompt: String,

    /// Sampling temperature (0.0 = deterministic).
    pub temperature: f64,
}

impl GenRequest {
    /// Create a request with the default temperature of 0.2.
    pub fn new(system_prompt: impl Into<String>, user_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_prompt: user_prompt.into(),
            temperature: 0.2,
        }
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Abstraction over hosted text-generation providers.
///
/// Implementors issue one outbound call per invocation and return the
/// generated text. There is no retry and no timeout beyond what the
/// supplied `client` carries; transport and service errors propagate to
/// the caller.
///
/// # Object Safety
///
/// This trait is object-safe and designed to be used as `Arc<dyn TextGen>`.
#[async_trait]
pub trait TextGen: Send + Sync {
    /// Execute one completion call and return the generated text.
    ///
    /// Returns an empty string when the service produced no content.
    async fn generate(&self, client: &Client, request: &GenRequest) -> Result<String>;

    /// Human-readable name for logging and diagnostics.
    fn name(&self) -> &'static str;
}
