//! Execution context shared across pipeline nodes.
//!
//! [`RouterCtx`] carries the HTTP client and the two provider handles.
//! It is constructed once at startup and shared by every pipeline run;
//! concurrent runs are independent because nothing in it is mutable.

use crate::textgen::TextGen;
use crate::weather::WeatherProvider;
use reqwest::Client;
use std::sync::Arc;

/// Shared execution context for pipeline nodes.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use chat_router::{RouterCtx, textgen::OpenAiTextGen, weather::OpenWeatherProvider};
///
/// let ctx = RouterCtx::builder()
///     .textgen(Arc::new(OpenAiTextGen::new("sk-...", "gpt-4o-mini")))
///     .weather(Arc::new(OpenWeatherProvider::new("owm-...")))
///     .build();
/// ```
pub struct RouterCtx {
    /// HTTP client (cheap to clone -- uses `Arc` internally). Built with
    /// transport defaults; the weather provider applies its own
    /// per-request timeout.
    pub client: Client,
    /// Text-generation provider.
    pub textgen: Arc<dyn TextGen>,
    /// Weather-data provider.
    pub weather: Arc<dyn WeatherProvider>,
}

impl RouterCtx {
    /// Create a new builder.
    pub fn builder() -> RouterCtxBuilder {
        RouterCtxBuilder {
            client: None,
            textgen: None,
            weather: None,
        }
    }
}

impl std::fmt::Debug for RouterCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterCtx")
            .field("textgen", &self.textgen.name())
            .field("weather", &self.weather.name())
            .finish()
    }
}

/// Builder for [`RouterCtx`].
pub struct RouterCtxBuilder {
    client: Option<Client>,
    textgen: Option<Arc<dyn TextGen>>,
    weather: Option<Arc<dyn WeatherProvider>>,
}

impl RouterCtxBuilder {
    /// Set the HTTP client. If not set, a default client is created.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the text-generation provider. Required.
    pub fn textgen(mut self, textgen: Arc<dyn TextGen>) -> Self {
        self.textgen = Some(textgen);
        self
    }

    /// Set the weather-data provider. Required.
    pub fn weather(mut self, weather: Arc<dyn WeatherProvider>) -> Self {
        self.weather = Some(weather);
        self
    }

    /// Build the execution context.
    ///
    /// # Panics
    ///
    /// Panics if a provider was not supplied; wiring happens once at
    /// startup and a missing provider is a programming error.
    pub fn build(self) -> RouterCtx {
        RouterCtx {
            client: self.client.unwrap_or_default(),
            textgen: self.textgen.expect("RouterCtx requires a textgen provider"),
            weather: self.weather.expect("RouterCtx requires a weather provider"),
        }
    }
}
