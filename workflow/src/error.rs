/// Shown when a failure carries no usable message of its own.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Why a detection attempt ended in `Failure`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DetectError {
    /// The service answered with a non-2xx status.
    #[error("{message}")]
    Service { status: u16, message: String },
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),
    /// Anything else, typically a body that is not a detection result.
    #[error("{0}")]
    Unexpected(String),
}

impl DetectError {
    /// Builds a service error from the raw response body. Empty bodies are
    /// replaced by a message naming the status code.
    pub fn service(status: u16, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            format!("Request failed: {}", status)
        } else {
            body.to_string()
        };
        DetectError::Service { status, message }
    }

    /// Text rendered in the result panel. Never empty.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// A `detect()` call that was ignored without touching the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DetectRejected {
    #[error("No file selected for analysis")]
    NoSelection,
    #[error("A detection request is already in flight")]
    AlreadyPending,
}
