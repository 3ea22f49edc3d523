//! reqwest transport for the conversion backend.

use async_trait::async_trait;
use toonmaker_core::{
    ConversionError, ConversionResult, ConversionService, ConvertRequest, interpret_response,
};

use crate::config::ClientConfig;

/// Sends `POST <endpoint>` with the JSON request body.
#[derive(Debug, Clone)]
pub struct HttpConversionService {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpConversionService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Targets `TOONMAKER_CONVERT_ENDPOINT` when set, the reference deployment otherwise.
impl Default for HttpConversionService {
    fn default() -> Self {
        Self::from_config(&ClientConfig::from_env())
    }
}

#[async_trait]
impl ConversionService for HttpConversionService {
    async fn convert(&self, request: &ConvertRequest) -> ConversionResult<String> {
        tracing::debug!(endpoint = %self.endpoint, lang = %request.lang, "sending conversion request");

        let resp = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(endpoint = %self.endpoint, "conversion backend unreachable: {e}");
                ConversionError::transport(e.to_string())
            })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            tracing::warn!(%status, "failed to read conversion response: {e}");
            ConversionError::transport(e.to_string())
        })?;

        let outcome = interpret_response(status.as_u16(), &body);
        match &outcome {
            Ok(result) => tracing::info!(%status, len = result.len(), "conversion succeeded"),
            Err(e) => tracing::warn!(%status, "conversion failed: {e}"),
        }
        outcome
    }
}
