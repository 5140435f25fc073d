use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::GenerateTransport;
use crate::envelope::GenerateContentRequest;
use crate::error::GeminiError;

/// A scripted response for the mock transport.
#[derive(Debug)]
pub enum MockResponse {
    /// Raw response body returned as a transport success
    Body(String),
    /// Transport-level failure
    Failure(GeminiError),
}

/// Handle for scripting a [`MockTransport`] and inspecting what it saw.
#[derive(Debug, Default)]
pub struct MockHandle {
    scripted: Mutex<VecDeque<MockResponse>>,
    repeat_body: Mutex<Option<String>>,
    requests: Mutex<Vec<String>>,
}

impl MockHandle {
    /// Queue a one-shot response; consumed in FIFO order before any repeat body.
    pub fn add_response(&self, response: MockResponse) {
        self.scripted.lock().unwrap().push_back(response);
    }

    /// Set a body returned for every call once the scripted queue is empty.
    pub fn set_repeat_body(&self, body: impl Into<String>) {
        *self.repeat_body.lock().unwrap() = Some(body.into());
    }

    /// Number of requests the transport has executed.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Serialized JSON bodies of every request seen, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Mock transport for tests: returns scripted bodies or failures without
/// touching the network.
#[derive(Debug, Clone)]
pub struct MockTransport {
    handle: Arc<MockHandle>,
}

impl MockTransport {
    pub fn new() -> (Self, Arc<MockHandle>) {
        let handle = Arc::new(MockHandle::default());
        (Self { handle: handle.clone() }, handle)
    }

    /// A transport that answers every call with the same body.
    pub fn with_body(body: impl Into<String>) -> (Self, Arc<MockHandle>) {
        let (transport, handle) = Self::new();
        handle.set_repeat_body(body);
        (transport, handle)
    }

    /// A transport with a queue of one-shot responses.
    pub fn with_responses(responses: Vec<MockResponse>) -> (Self, Arc<MockHandle>) {
        let (transport, handle) = Self::new();
        for response in responses {
            handle.add_response(response);
        }
        (transport, handle)
    }
}

#[async_trait]
impl GenerateTransport for MockTransport {
    async fn execute(&self, request: &GenerateContentRequest) -> Result<String, GeminiError> {
        let body = serde_json::to_string(request)
            .unwrap_or_else(|_| "[serialization failed]".to_string());
        self.handle.requests.lock().unwrap().push(body);

        if let Some(response) = self.handle.scripted.lock().unwrap().pop_front() {
            return match response {
                MockResponse::Body(body) => Ok(body),
                MockResponse::Failure(error) => Err(error),
            };
        }

        match self.handle.repeat_body.lock().unwrap().clone() {
            Some(body) => Ok(body),
            None => Err(GeminiError::Api(
                "mock transport has no scripted response".to_string(),
            )),
        }
    }

    fn clone_box(&self) -> Box<dyn GenerateTransport> {
        Box::new(self.clone())
    }
}
