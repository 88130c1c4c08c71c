use std::{sync::Arc, time::Instant};

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::FormInput, protocol::PredictionResponse};
use thiserror::Error;
use tracing::info;
use url::Url;

pub mod config;
pub mod controller;
pub mod gauge;
pub mod validation;
pub mod view;

pub use config::{load_settings_from, ClientSettings};
pub use controller::{complete_submit, interpret_response, start_submit, FormController};
pub use gauge::{render_gauge, GaugeFigure, GaugeTone};
pub use validation::validate_and_serialize;
pub use view::{render, PageView, RiskAssessment, UiState};

/// Sends a validated form to the prediction service.
///
/// Implementations return the decoded reply whatever the HTTP status was;
/// only transport and decode failures are errors.
#[async_trait]
pub trait PredictionTransport: Send + Sync {
    async fn predict(&self, payload: &FormInput) -> Result<PredictionResponse>;
}

#[async_trait]
impl<T> PredictionTransport for Arc<T>
where
    T: PredictionTransport + ?Sized,
{
    async fn predict(&self, payload: &FormInput) -> Result<PredictionResponse> {
        (**self).predict(payload).await
    }
}

#[derive(Debug, Error)]
pub enum ClientSetupError {
    #[error("invalid server url '{url}': {source}")]
    InvalidServerUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported server url scheme '{scheme}', expected http or https")]
    UnsupportedScheme { scheme: String },
    #[error("failed to build http client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Resolves the predict path against the server origin, the way a page-relative
/// `/predict_api` resolves against the page's origin.
pub fn predict_endpoint(server_url: &str, predict_path: &str) -> Result<Url, ClientSetupError> {
    let invalid = |source| ClientSetupError::InvalidServerUrl {
        url: server_url.to_string(),
        source,
    };

    let base = Url::parse(server_url.trim()).map_err(invalid)?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(ClientSetupError::UnsupportedScheme {
            scheme: base.scheme().to_string(),
        });
    }
    base.join(predict_path).map_err(invalid)
}

pub struct PredictionClient {
    http: Client,
    endpoint: Url,
}

impl PredictionClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ClientSetupError> {
        let endpoint = predict_endpoint(&settings.server_url, &settings.predict_path)?;
        let mut builder = Client::builder();
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PredictionTransport for PredictionClient {
    async fn predict(&self, payload: &FormInput) -> Result<PredictionResponse> {
        let started = Instant::now();
        info!(
            endpoint = %self.endpoint,
            fields = payload.len(),
            "predict: posting form"
        );

        let res = self
            .http
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;
        let status = res.status();
        let body: PredictionResponse = res.json().await?;

        info!(
            status = status.as_u16(),
            success = body.success,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "predict: response received"
        );
        Ok(body)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
