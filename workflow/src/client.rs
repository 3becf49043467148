use shared::DetectionResult;

use crate::error::DetectError;

/// Multipart field the detection service reads the image from.
pub const IMAGE_FIELD: &str = "image";

/// Sends one image to the detection service.
///
/// Implemented with `gloo-net` in the browser and `reqwest` natively. The
/// returned future is not `Send`.
#[allow(async_fn_in_trait)]
pub trait DetectionClient<F> {
    async fn detect(&self, file: &F) -> Result<DetectionResult, DetectError>;
}

/// Maps a completed HTTP exchange onto the detection outcome.
pub fn interpret_response(status: u16, body: &str) -> Result<DetectionResult, DetectError> {
    if !(200..300).contains(&status) {
        return Err(DetectError::service(status, body));
    }
    serde_json::from_str::<DetectionResult>(body)
        .map_err(|e| DetectError::Unexpected(format!("Failed to parse response: {}", e)))
}

/// An image held in memory, used outside the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    name: String,
    media_type: String,
    bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}
