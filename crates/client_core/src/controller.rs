//! Submit and reset flow for the prediction form.
//!
//! `start_submit` and `complete_submit` are the two halves of a submit around
//! the network call. Surfaces that run the request elsewhere (the desktop GUI
//! hands it to a worker thread) call them directly; `FormController` chains
//! them around its own transport.

use anyhow::Result;
use shared::{domain::FormInput, error::SubmitError, protocol::PredictionResponse};
use tracing::{debug, info, warn};

use crate::{
    validation::validate_and_serialize,
    view::{render, PageView, RiskAssessment, UiState},
    PredictionTransport,
};

/// Enters `Submitting` and validates `form`.
///
/// Returns the payload to post, or `None` when validation failed and the
/// state has already settled on the error.
pub fn start_submit(state: UiState, form: &FormInput) -> (UiState, Option<FormInput>) {
    let state = state.begin_submit();
    match validate_and_serialize(form) {
        Ok(payload) => (state, Some(payload)),
        Err(err) => {
            debug!("form: validation failed: {err:?}");
            (state.finish(Err(err.into())), None)
        }
    }
}

pub fn interpret_response(response: PredictionResponse) -> Result<RiskAssessment, SubmitError> {
    if !response.success {
        return Err(SubmitError::rejected(response.error));
    }
    let label = response.risk_label();
    let prob = response
        .prob
        .ok_or_else(|| SubmitError::network("prediction reply is missing prob"))?;
    Ok(RiskAssessment::new(prob, label))
}

/// Settles a submit with the transport outcome.
pub fn complete_submit(state: UiState, outcome: Result<PredictionResponse>) -> UiState {
    let outcome = match outcome {
        Ok(response) => interpret_response(response),
        Err(err) => Err(SubmitError::network(format!("{err:#}"))),
    };

    match &outcome {
        Ok(result) => info!(
            probability = result.probability(),
            label = ?result.label(),
            "form: prediction shown"
        ),
        Err(err) => warn!("form: prediction failed: {err}"),
    }
    state.finish(outcome)
}

/// Owns a form, its UI state, and the transport used to submit it.
pub struct FormController<T> {
    transport: T,
    form: FormInput,
    state: UiState,
}

impl<T: PredictionTransport> FormController<T> {
    pub fn new(transport: T, form: FormInput) -> Self {
        Self {
            transport,
            form,
            state: UiState::Idle,
        }
    }

    pub fn form(&self) -> &FormInput {
        &self.form
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.form.set(name, value);
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn view(&self) -> PageView {
        render(&self.state)
    }

    /// Runs one submit to completion and returns the settled view.
    pub async fn submit(&mut self) -> PageView {
        let (state, payload) = start_submit(std::mem::take(&mut self.state), &self.form);
        self.state = state;

        if let Some(payload) = payload {
            let outcome = self.transport.predict(&payload).await;
            self.state = complete_submit(std::mem::take(&mut self.state), outcome);
        }
        self.view()
    }

    /// Blanks every field and hides both panels.
    pub fn reset(&mut self) {
        self.form.clear_values();
        self.state = std::mem::take(&mut self.state).reset();
        debug!("form: reset");
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
