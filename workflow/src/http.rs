use reqwest::multipart::{Form, Part};
use shared::DetectionResult;

use crate::client::{DetectionClient, IMAGE_FIELD, SelectedFile, interpret_response};
use crate::config::DetectorConfig;
use crate::error::DetectError;

/// Native detection client backed by `reqwest`.
#[derive(Clone)]
pub struct HttpDetectionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpDetectionClient {
    pub fn new(config: &DetectorConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &DetectorConfig) -> Self {
        Self {
            client,
            endpoint: config.detect_endpoint(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl DetectionClient<SelectedFile> for HttpDetectionClient {
    async fn detect(&self, file: &SelectedFile) -> Result<DetectionResult, DetectError> {
        let part = Part::bytes(file.bytes().to_vec())
            .file_name(file.name().to_string())
            .mime_str(file.media_type())
            .map_err(|e| DetectError::Unexpected(format!("Invalid media type: {}", e)))?;
        let form = Form::new().part(IMAGE_FIELD, part);

        log::debug!(
            "POST {} ({}, {} bytes)",
            self.endpoint,
            file.name(),
            file.size()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| DetectError::Transport(format!("Network error: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| DetectError::Transport(format!("Network error: {}", e)))?;

        interpret_response(status, &body)
    }
}
