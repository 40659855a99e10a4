//! Weather lookups via the OpenWeather current-conditions API.
//!
//! Endpoint: `/data/2.5/weather` with metric units and a fixed 20-second
//! request timeout. A non-200 response becomes
//! [`LookupOutcome::Unavailable`]; only transport failures are errors.

use super::{LookupOutcome, WeatherProvider, WeatherReport};
use crate::error::Result;
use crate::RouterError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Number, Value};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(20);

/// Client for the OpenWeather current-conditions API.
#[derive(Clone)]
pub struct OpenWeatherProvider {
    /// API key, sent as the `appid` query parameter.
    api_key: String,
    /// Base URL of the provider. Overridable for tests.
    base_url: String,
}

impl std::fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Successful response payload, reduced to the fields the summary needs.
#[derive(Debug, Deserialize)]
struct ConditionsPayload {
    weather: Vec<ConditionsEntry>,
    main: ConditionsMain,
}

#[derive(Debug, Deserialize)]
struct ConditionsEntry {
    description: String,
}

#[derive(Debug, Deserialize)]
struct ConditionsMain {
    temp: Number,
    humidity: Number,
}

impl OpenWeatherProvider {
    /// Create a client for the hosted API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (used by tests to point at a stub server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Pull the provider's `message` field out of an error body, falling
    /// back to the raw body text.
    fn error_message(body: &str) -> String {
        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
            if let Some(message) = map.get("message").and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
        body.to_string()
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn lookup(&self, client: &Client, city: &str) -> Result<LookupOutcome> {
        let url = format!("{}/data/2.5/weather", self.base_url.trim_end_matches('/'));
        let resp = client
            .get(url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .timeout(LOOKUP_TIMEOUT)
            .send()
            .await?;

        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Ok(LookupOutcome::Unavailable {
                message: Self::error_message(&body),
            });
        }

        let payload: ConditionsPayload = resp.json().await?;
        let entry = payload.weather.into_iter().next().ok_or_else(|| {
            RouterError::Other("weather payload has no description entry".to_string())
        })?;

        Ok(LookupOutcome::Report(WeatherReport {
            description: entry.description,
            temperature_c: payload.main.temp,
            humidity_pct: payload.main.humidity,
        }))
    }

    fn name(&self) -> &'static str {
        "openweather"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(server: &MockServer) -> OpenWeatherProvider {
        OpenWeatherProvider::new("owm-key").with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_lookup_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "London"))
            .and(query_param("appid", "owm-key"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "weather": [{"description": "clear sky"}, {"description": "ignored"}],
                "main": {"temp": 21.0, "humidity": 40}
            })))
            .mount(&server)
            .await;

        let outcome = provider(&server)
            .lookup(&Client::new(), "London")
            .await
            .unwrap();
        match outcome {
            LookupOutcome::Report(report) => {
                assert_eq!(report.description, "clear sky");
                assert_eq!(report.temperature_c.to_string(), "21.0");
                assert_eq!(report.humidity_pct.to_string(), "40");
            }
            other => panic!("expected report, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_lookup_non_200_uses_provider_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "cod": "404", "message": "city not found"
            })))
            .mount(&server)
            .await;

        let outcome = provider(&server)
            .lookup(&Client::new(), "Nowhereland")
            .await
            .unwrap();
        assert_eq!(
            outcome,
            LookupOutcome::Unavailable {
                message: "city not found".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_lookup_non_200_without_message_uses_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(500).set_body_string("gateway exploded"))
            .mount(&server)
            .await;

        let outcome = provider(&server)
            .lookup(&Client::new(), "Paris")
            .await
            .unwrap();
        assert_eq!(
            outcome,
            LookupOutcome::Unavailable {
                message: "gateway exploded".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_lookup_malformed_success_body_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"weather": []})))
            .mount(&server)
            .await;

        let result = provider(&server).lookup(&Client::new(), "Paris").await;
        assert!(result.is_err());
    }
}
