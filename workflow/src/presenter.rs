use shared::DetectionResult;

use crate::detection::DetectionStatus;

pub const NO_RESULT_TEXT: &str = "No result yet";
pub const PROCESSING_TEXT: &str = "Processing image…";
pub const DETECT_LABEL: &str = "Detect floture";
pub const ANALYZING_LABEL: &str = "Analyzing…";

/// Display-ready form of a detection status.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    NoResult,
    Processing,
    Detected(ResultCard),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    pub detected: bool,
    pub headline: &'static str,
    pub confidence: String,
    pub red_ratio: String,
    pub saturation: String,
    pub dimensions: String,
    pub label: String,
}

impl ResultView {
    pub fn from_status(status: &DetectionStatus) -> Self {
        match status {
            DetectionStatus::Idle => ResultView::NoResult,
            DetectionStatus::Pending => ResultView::Processing,
            DetectionStatus::Success(result) => ResultView::Detected(ResultCard::from(result)),
            DetectionStatus::Failure(message) => ResultView::Failed(message.clone()),
        }
    }

    /// Placeholder text while there is neither a card nor an error to show.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ResultView::Processing => Some(PROCESSING_TEXT),
            ResultView::NoResult => Some(NO_RESULT_TEXT),
            ResultView::Detected(_) | ResultView::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ResultView::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl From<&DetectionResult> for ResultCard {
    fn from(result: &DetectionResult) -> Self {
        Self {
            detected: result.detected,
            headline: if result.detected {
                "Floture detected"
            } else {
                "Floture not detected"
            },
            confidence: format!("{}%", confidence_percent(result.confidence)),
            red_ratio: result.metrics.red_ratio.to_string(),
            saturation: result.metrics.saturation.to_string(),
            dimensions: format!("{}×{}", result.metrics.width, result.metrics.height),
            label: result.label.clone(),
        }
    }
}

/// Whole-number percentage, rounded half away from zero.
pub fn confidence_percent(confidence: f64) -> i64 {
    (confidence * 100.0).round() as i64
}

pub fn detect_button_label(status: &DetectionStatus) -> &'static str {
    if status.is_pending() {
        ANALYZING_LABEL
    } else {
        DETECT_LABEL
    }
}
