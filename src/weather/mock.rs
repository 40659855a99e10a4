//! Mock weather provider for testing without a live service.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Number;

use super::{LookupOutcome, WeatherProvider, WeatherReport};
use crate::error::Result;

/// A test provider that returns canned outcomes in order.
///
/// Cycles back to the beginning when all outcomes have been consumed and
/// counts every lookup it receives.
#[derive(Debug)]
pub struct MockWeatherProvider {
    outcomes: Vec<LookupOutcome>,
    index: AtomicUsize,
    calls: AtomicUsize,
}

impl MockWeatherProvider {
    /// Create a mock with the given canned outcomes.
    pub fn new(outcomes: Vec<LookupOutcome>) -> Self {
        assert!(
            !outcomes.is_empty(),
            "MockWeatherProvider requires at least one outcome"
        );
        Self {
            outcomes,
            index: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock that always returns the same outcome.
    pub fn fixed(outcome: LookupOutcome) -> Self {
        Self::new(vec![outcome])
    }

    /// Create a mock that always reports the given conditions.
    pub fn reporting(description: impl Into<String>, temperature_c: Number, humidity_pct: Number) -> Self {
        Self::fixed(LookupOutcome::Report(WeatherReport {
            description: description.into(),
            temperature_c,
            humidity_pct,
        }))
    }

    /// Create a mock that always answers with a provider failure.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::fixed(LookupOutcome::Unavailable {
            message: message.into(),
        })
    }

    /// Number of lookups received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn lookup(&self, _client: &Client, _city: &str) -> Result<LookupOutcome> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let idx = self.index.fetch_add(1, Ordering::Relaxed) % self.outcomes.len();
        Ok(self.outcomes[idx].clone())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
