use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DetectionResult {
    pub detected: bool,
    // Absent confidence reads as 0.
    #[serde(default)]
    pub confidence: f64,
    pub label: String,
    pub metrics: DetectionMetrics,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DetectionMetrics {
    pub red_ratio: f64,
    pub saturation: f64,
    pub width: u32,
    pub height: u32,
}
