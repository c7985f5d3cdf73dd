//! TTS (Text-to-Speech) client.

use super::types::SpeechRequest;
use crate::config::{Credentials, PluginEnv};
use crate::transport::{self, TransportError};
use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;
use url::Url;

const DEFAULT_ENDPOINT_PATH: &str = "/audio/speech";

/// Anything that can turn a [`SpeechRequest`] into audio bytes.
///
/// Implementations perform exactly one call per invocation and neither retry
/// nor classify failures; callers decide what an error means.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, credentials: &Credentials, request: &SpeechRequest) -> Result<Bytes>;
}

/// Client for an OpenAI-compatible speech endpoint.
#[derive(Debug, Clone)]
pub struct HttpSpeechClient {
    http_client: reqwest::Client,
    endpoint_path: String,
}

impl HttpSpeechClient {
    pub fn builder() -> HttpSpeechClientBuilder {
        HttpSpeechClientBuilder::new()
    }

    /// Full URL of the speech endpoint under `base_url`.
    pub fn endpoint(&self, base_url: &str) -> Result<Url> {
        let raw = format!("{}{}", base_url.trim_end_matches('/'), self.endpoint_path);
        Url::parse(&raw).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid TTS endpoint '{}': {}", raw, e),
                ErrorContext::new()
                    .with_field_path("credentials.base_url")
                    .with_source("tts"),
            )
        })
    }
}

#[async_trait]
impl SpeechSynthesizer for HttpSpeechClient {
    async fn synthesize(&self, credentials: &Credentials, request: &SpeechRequest) -> Result<Bytes> {
        let endpoint = self.endpoint(credentials.base_url())?;
        debug!(
            endpoint = %endpoint,
            model = %request.model,
            voice = %request.voice,
            format = %request.response_format,
            "sending speech request"
        );

        let response = self
            .http_client
            .post(endpoint)
            .bearer_auth(&credentials.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes);
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("no response body").to_string()
            } else {
                format!("TTS API error ({}): {}", status, body.trim())
            };
            return Err(Error::Remote {
                status: status.as_u16(),
                message,
            });
        }

        debug!(bytes = bytes.len(), "speech response received");
        Ok(bytes)
    }
}

pub struct HttpSpeechClientBuilder {
    endpoint_path: Option<String>,
    env: PluginEnv,
}

impl HttpSpeechClientBuilder {
    pub fn new() -> Self {
        Self {
            endpoint_path: None,
            env: PluginEnv::default(),
        }
    }

    /// Settings used to build the underlying HTTP client.
    pub fn env(mut self, env: PluginEnv) -> Self {
        self.env = env;
        self
    }

    pub fn endpoint_path(mut self, path: impl Into<String>) -> Self {
        self.endpoint_path = Some(path.into());
        self
    }

    pub fn build(self) -> Result<HttpSpeechClient> {
        let endpoint_path = self
            .endpoint_path
            .unwrap_or_else(|| DEFAULT_ENDPOINT_PATH.to_string());
        let endpoint_path = if endpoint_path.starts_with('/') {
            endpoint_path
        } else {
            format!("/{}", endpoint_path)
        };
        Ok(HttpSpeechClient {
            http_client: transport::build_client(&self.env)?,
            endpoint_path,
        })
    }
}

impl Default for HttpSpeechClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
