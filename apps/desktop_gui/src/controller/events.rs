//! Backend-to-UI events and status-line wording for failures.

use shared::protocol::PredictionResponse;

pub enum UiEvent {
    Info(String),
    /// The worker cannot serve requests; submits will settle with an error.
    BackendUnavailable(String),
    PredictionSettled(anyhow::Result<PredictionResponse>),
}

/// Short status-line hint for a failed request. The error panel already
/// carries the full message; this only suggests what to check.
pub fn classify_prediction_failure(message: &str) -> Option<&'static str> {
    let lower = message.to_ascii_lowercase();
    if lower.contains("backend worker startup failure") {
        Some("Backend worker failed to start; restart the app.")
    } else if lower.contains("invalid server url") || lower.contains("unsupported server url") {
        Some("Server URL is invalid; fix --server-url or client.toml and restart.")
    } else if lower.contains("connect")
        || lower.contains("connection refused")
        || lower.contains("dns")
        || lower.contains("timed out")
    {
        Some("Server unreachable; check that the prediction service is running.")
    } else if lower.contains("decoding") {
        Some("Server replied with something other than a prediction.")
    } else {
        None
    }
}
