//! Upload-and-detect workflow for the floture detector.
//!
//! The browser app and native callers drive the same [`Workflow`]: a file is
//! selected (which derives a preview and resets the status to `Idle`), one
//! detection request is sent at a time, and its outcome is mapped to a
//! [`ResultView`] for rendering.

pub mod client;
pub mod config;
pub mod detection;
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod http;
pub mod presenter;
pub mod preview;
mod state;

pub use client::{DetectionClient, IMAGE_FIELD, SelectedFile, interpret_response};
pub use config::{ConfigError, DetectorConfig};
pub use detection::{DetectionController, DetectionStatus, RequestTicket};
pub use error::{DetectError, DetectRejected};
#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpDetectionClient;
pub use presenter::{ResultCard, ResultView};
pub use preview::PreviewLifecycle;
pub use shared::{DetectionMetrics, DetectionResult};
pub use state::Workflow;
