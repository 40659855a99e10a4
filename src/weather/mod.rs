//! Weather lookup client boundary.
//!
//! The [`WeatherProvider`] trait abstracts over weather-data services.
//! A lookup distinguishes two kinds of non-answer: a provider that
//! responded with an error status yields [`LookupOutcome::Unavailable`]
//! (recovered locally by the weather node), while a transport failure
//! propagates as an error. Built-in implementations:
//! [`OpenWeatherProvider`] and [`MockWeatherProvider`].

pub mod mock;
pub mod openweather;

pub use mock::MockWeatherProvider;
pub use openweather::OpenWeatherProvider;

use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Number;

/// Current conditions for a city.
///
/// Temperature and humidity stay [`serde_json::Number`] so the rendered
/// summary reproduces exactly what the provider sent (`21.0` stays
/// `21.0`, `21` stays `21`).
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// First weather-description entry (e.g. `"clear sky"`).
    pub description: String,
    /// Main temperature in degrees Celsius.
    pub temperature_c: Number,
    /// Relative humidity in percent.
    pub humidity_pct: Number,
}

/// Result of a weather lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The provider returned current conditions.
    Report(WeatherReport),
    /// The provider answered with an error status; `message` carries its
    /// explanation (or the raw body when none was given).
    Unavailable { message: String },
}

/// Abstraction over weather-data services.
///
/// One outbound call per lookup; no retry, no cache.
///
/// # Object Safety
///
/// This trait is object-safe and designed to be used as
/// `Arc<dyn WeatherProvider>`.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch current conditions for `city`.
    async fn lookup(&self, client: &Client, city: &str) -> Result<LookupOutcome>;

    /// Human-readable name for logging and diagnostics.
    fn name(&self) -> &'static str;
}
