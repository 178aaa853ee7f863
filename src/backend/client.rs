use super::types::*;
use crate::{Error, Result, config::BackendConfig};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tracing::{debug, warn};

/// Sends a prepared envelope to the backend matching its mode.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerateClient: Send + Sync {
    async fn send(&self, request: GenerationRequest) -> Result<Value>;
}

pub struct HttpGenerateClient {
    client: reqwest::Client,
    completion_endpoint: String,
    chat_endpoint: String,
}

impl HttpGenerateClient {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let completion_endpoint = config
            .generate_endpoint
            .clone()
            .ok_or_else(|| Error::config("GENERATE_ENDPOINT is not configured"))?;
        let chat_endpoint = config
            .generate_endpoint_chat
            .clone()
            .ok_or_else(|| Error::config("GENERATE_ENDPOINT_CHAT is not configured"))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            completion_endpoint,
            chat_endpoint,
        })
    }

    fn endpoint(&self, mode: TargetMode) -> &str {
        match mode {
            TargetMode::Completion => &self.completion_endpoint,
            TargetMode::Chat => &self.chat_endpoint,
        }
    }
}

#[async_trait]
impl GenerateClient for HttpGenerateClient {
    async fn send(&self, request: GenerationRequest) -> Result<Value> {
        let endpoint = self.endpoint(request.mode());
        debug!("Posting {} request to {}", request.mode(), endpoint);

        let response = self
            .client
            .post(endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::transport(format!("Failed to reach generate endpoint: {}", e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Generate endpoint {} responded with {}", endpoint, status);
            return Err(Error::Backend {
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await.map_err(|e| {
            Error::transport(format!("Malformed response from generate endpoint: {}", e))
        })?;

        debug!("Received response from {}", endpoint);
        Ok(body)
    }
}

/// Wraps a prompt and its generation parameters in the envelope for the
/// requested mode and hands it to a [`GenerateClient`].
#[derive(Clone)]
pub struct Dispatcher {
    client: Arc<dyn GenerateClient>,
    max_seq_len: Option<u32>,
}

impl Dispatcher {
    pub fn new(client: Arc<dyn GenerateClient>) -> Self {
        Self {
            client,
            max_seq_len: None,
        }
    }

    pub fn with_max_seq_len(mut self, max_seq_len: Option<u32>) -> Self {
        self.max_seq_len = max_seq_len;
        self
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        let client = HttpGenerateClient::new(config)?;
        Ok(Self::new(Arc::new(client)).with_max_seq_len(config.max_seq_len))
    }

    pub async fn dispatch(
        &self,
        prompt: String,
        max_gen_len: u32,
        temperature: f64,
        mode: TargetMode,
    ) -> Result<Value> {
        let parameters = GenerationParameters {
            max_gen_len,
            temperature,
            max_seq_len: self.max_seq_len,
        };
        let request = GenerationRequest::new(mode, prompt, parameters);
        self.client.send(request).await
    }
}
