use async_trait::async_trait;
use grid_prompt_gateway::{
    Error, Result,
    backend::{GenerateClient, GenerationRequest},
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Records every envelope it is handed and answers with a fixed outcome.
#[derive(Debug, Clone)]
pub struct RecordingGenerateClient {
    pub requests: Arc<Mutex<Vec<GenerationRequest>>>,
    pub response: Value,
    pub error: Option<String>,
}

impl RecordingGenerateClient {
    pub fn new(response: Value) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            response,
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.get_requests()
            .last()
            .and_then(|request| request.prompt().map(str::to_string))
    }
}

#[async_trait]
impl GenerateClient for RecordingGenerateClient {
    async fn send(&self, request: GenerationRequest) -> Result<Value> {
        self.requests.lock().unwrap().push(request);

        match &self.error {
            Some(error) => Err(Error::transport(error.clone())),
            None => Ok(self.response.clone()),
        }
    }
}
