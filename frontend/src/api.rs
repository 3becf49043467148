use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::DetectionResult;
use web_sys::{AbortSignal, FormData};
use workflow::{
    DetectError, DetectionClient, DetectorConfig, IMAGE_FIELD, interpret_response,
};

/// Browser client for the detection service.
#[derive(Clone)]
pub struct GlooDetectionClient {
    endpoint: String,
    abort_signal: Option<AbortSignal>,
}

impl GlooDetectionClient {
    pub fn new(config: &DetectorConfig) -> Self {
        Self {
            endpoint: config.detect_endpoint(),
            abort_signal: None,
        }
    }

    /// Copy of this client whose requests are cancelled through `signal`.
    pub fn with_abort_signal(&self, signal: AbortSignal) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            abort_signal: Some(signal),
        }
    }
}

impl DetectionClient<GlooFile> for GlooDetectionClient {
    async fn detect(&self, file: &GlooFile) -> Result<DetectionResult, DetectError> {
        let form_data = FormData::new()
            .map_err(|e| DetectError::Unexpected(format!("Failed to build form: {:?}", e)))?;
        let raw: &web_sys::File = file.as_ref();
        form_data
            .append_with_blob_and_filename(IMAGE_FIELD, raw, &file.name())
            .map_err(|e| DetectError::Unexpected(format!("Failed to attach image: {:?}", e)))?;

        let request = Request::post(&self.endpoint)
            .abort_signal(self.abort_signal.as_ref())
            .body(form_data)
            .map_err(|e| DetectError::Unexpected(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| DetectError::Transport(format!("Network error: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DetectError::Transport(format!("Network error: {}", e)))?;

        interpret_response(status, &body)
    }
}
