//! Mock text generation for testing without a live service.
//!
//! [`MockTextGen`] returns pre-configured responses in order and records
//! every request it receives, so tests can assert on call counts and on
//! the prompts a node actually sent.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Client;

use super::{GenRequest, TextGen};
use crate::error::Result;

/// A test client that returns canned responses in order.
///
/// Cycles back to the beginning when all responses have been consumed.
#[derive(Debug)]
pub struct MockTextGen {
    responses: Vec<String>,
    index: AtomicUsize,
    requests: Mutex<Vec<GenRequest>>,
}

impl MockTextGen {
    /// Create a mock with the given canned responses.
    ///
    /// Responses are returned in order. When exhausted, cycles from the
    /// beginning.
    pub fn new(responses: Vec<String>) -> Self {
        assert!(
            !responses.is_empty(),
            "MockTextGen requires at least one response"
        );
        Self {
            responses,
            index: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that always returns the same response.
    pub fn fixed(response: impl Into<String>) -> Self {
        Self::new(vec![response.into()])
    }

    /// Number of calls received so far.
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Copies of every request received, in order.
    pub fn requests(&self) -> Vec<GenRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next_response(&self) -> String {
        let idx = self.index.fetch_add(1, Ordering::Relaxed) % self.responses.len();
        self.responses[idx].clone()
    }
}

#[async_trait]
impl TextGen for MockTextGen {
    async fn generate(&self, _client: &Client, request: &GenRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.next_response())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_fixed_response() {
        let mock = MockTextGen::fixed("Hello!");
        let client = Client::new();
        let text = mock
            .generate(&client, &GenRequest::new("s", "u"))
            .await
            .unwrap();
        assert_eq!(text, "Hello!");
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_mock_cycles_responses() {
        let mock = MockTextGen::new(vec!["first".into(), "second".into()]);
        let client = Client::new();
        let request = GenRequest::new("s", "u");
        let r1 = mock.generate(&client, &request).await.unwrap();
        let r2 = mock.generate(&client, &request).await.unwrap();
        let r3 = mock.generate(&client, &request).await.unwrap();
        assert_eq!(r1, "first");
        assert_eq!(r2, "second");
        assert_eq!(r3, "first"); // cycles
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let mock = MockTextGen::fixed("ok");
        let client = Client::new();
        let request = GenRequest::new("system here", "user here").with_temperature(0.8);
        mock.generate(&client, &request).await.unwrap();

        let seen = mock.requests();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], request);
    }
}
