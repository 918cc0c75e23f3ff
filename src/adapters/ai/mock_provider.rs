//! Mock Inference Service for testing.
//!
//! Provides a configurable mock implementation of the InferenceService port,
//! allowing tests to run without calling a real AI endpoint.
//!
//! # Features
//!
//! - Pre-configured reply texts (raw or serialized from a value)
//! - Simulated delays
//! - Error injection
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let service = MockInferenceService::new()
//!     .with_reply(r#"{"skinType":"Oily","topConcerns":[...],"summary":"..."}"#);
//!
//! let text = service.generate(request).await?;
//! ```

use async_trait::async_trait;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{InferenceError, InferenceRequest, InferenceService, ProviderInfo};

/// Mock inference service for testing.
///
/// Clones share the reply queue and call history.
#[derive(Debug, Clone)]
pub struct MockInferenceService {
    /// Pre-configured replies (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    info: ProviderInfo,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<InferenceRequest>>>,
}

/// A configured mock reply.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return this reply text.
    Reply(String),
    /// Return an error.
    Error(InferenceError),
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Default for MockInferenceService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockInferenceService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a reply text to the queue.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        lock(&self.responses).push_back(MockResponse::Reply(text.into()));
        self
    }

    /// Adds a reply serialized from `value` to the queue.
    pub fn with_json<T: Serialize>(self, value: &T) -> Self {
        let text = serde_json::to_string(value).unwrap_or_default();
        self.with_reply(text)
    }

    /// Adds an error to the queue.
    pub fn with_error(self, error: InferenceError) -> Self {
        lock(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_provider_info(mut self, info: ProviderInfo) -> Self {
        self.info = info;
        self
    }

    /// Returns the number of calls made to this service.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<InferenceRequest> {
        lock(&self.calls).clone()
    }

    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    /// Gets the next reply; an exhausted queue behaves like an unreachable endpoint.
    fn next_response(&self) -> MockResponse {
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| {
                MockResponse::Error(InferenceError::unavailable("no mock response configured"))
            })
    }
}

#[async_trait]
impl InferenceService for MockInferenceService {
    async fn generate(&self, request: InferenceRequest) -> Result<String, InferenceError> {
        lock(&self.calls).push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Reply(text) => Ok(text),
            MockResponse::Error(err) => Err(err),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}
