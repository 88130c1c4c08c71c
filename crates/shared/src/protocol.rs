use serde::{Deserialize, Serialize};

use crate::domain::RiskLabel;

pub const PREDICT_PATH: &str = "/predict_api";

/// Reply from `POST /predict_api`.
///
/// Every field is optional on the wire; a missing `success` reads as a
/// failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prob: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictionResponse {
    pub fn ok(prob: f64, label: i64) -> Self {
        Self {
            success: true,
            prob: Some(prob),
            label: Some(label.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn risk_label(&self) -> RiskLabel {
        RiskLabel::from_wire(self.label.as_ref())
    }
}
