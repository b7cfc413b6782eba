//! In-memory [`BackendClient`] for tests.

use super::{ApiError, ApiRequest, BackendClient, HttpResponse};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

enum MockResponse {
    Immediate(Result<HttpResponse, ApiError>),
    /// Held back until the paired sender fires or is dropped
    Triggered {
        response: Result<HttpResponse, ApiError>,
        trigger: oneshot::Receiver<()>,
    },
}

/// Records every request and answers from per-key FIFO queues.
///
/// Keys are `"METHOD /path"`, see [`ApiRequest::key`].
#[derive(Clone, Default)]
pub struct MockBackend {
    responses: Arc<Mutex<HashMap<String, VecDeque<MockResponse>>>>,
    calls: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_response(&self, key: &str, response: Result<HttpResponse, ApiError>) {
        self.responses
            .lock()
            .unwrap()
            .entry(key.to_string())
            .or_default()
            .push_back(MockResponse::Immediate(response));
    }

    /// Queue a response that only completes once the returned sender is used.
    pub fn add_response_with_trigger(
        &self,
        key: &str,
        response: Result<HttpResponse, ApiError>,
    ) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.responses
            .lock()
            .unwrap()
            .entry(key.to_string())
            .or_default()
            .push_back(MockResponse::Triggered {
                response,
                trigger: rx,
            });
        tx
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

pub fn respond(status: u16, body: &str) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse {
        status,
        body: body.to_string(),
    })
}

#[async_trait]
impl BackendClient for MockBackend {
    async fn send(&self, request: ApiRequest) -> Result<HttpResponse, ApiError> {
        let key = request.key();
        self.calls.lock().unwrap().push(request);

        let next = self
            .responses
            .lock()
            .unwrap()
            .get_mut(&key)
            .and_then(VecDeque::pop_front);

        match next {
            Some(MockResponse::Immediate(response)) => response,
            Some(MockResponse::Triggered { response, trigger }) => {
                let _ = trigger.await;
                response
            }
            None => Err(ApiError::Network(format!("no mock response for {}", key))),
        }
    }

    fn base_url(&self) -> &str {
        "http://mock.invalid"
    }
}
