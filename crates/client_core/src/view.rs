//! UI state machine for the prediction form and its rendered view.
//!
//! `UiState` transitions are pure: each consumes the current state and
//! returns the next one. `render` maps a state to the panels a surface shows,
//! so a surface never toggles panels on its own.

use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};
use shared::{domain::RiskLabel, error::SubmitError};

use crate::gauge::{render_gauge, GaugeFigure};

pub const SUBMIT_LABEL: &str = "Predict Risk";
pub const BUSY_LABEL: &str = "Predicting...";
pub const ADVICE_HEADING: &str = "Advice:";
pub const HIGH_RISK_ADVICE: &str = "High probability — recommend clinical follow-up, further tests (ECG, lipid panel), and lifestyle modification.";
pub const LOW_RISK_ADVICE: &str =
    "Low probability. Maintain healthy lifestyle and periodic checkups.";

/// A prediction ready for display, with the probability already rounded to
/// one decimal.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    probability: f64,
    label: RiskLabel,
}

impl RiskAssessment {
    pub fn new(prob: f64, label: RiskLabel) -> Self {
        Self {
            probability: round_to_tenth(prob),
            label,
        }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn label(&self) -> RiskLabel {
        self.label
    }

    /// Shortest text for the rounded probability: `73.5`, `20`.
    pub fn probability_text(&self) -> String {
        self.probability.to_string()
    }
}

/// Rounds the exact binary value of `value`, so `60.05` (stored just below
/// the tie) becomes `60` while an exact tie such as `0.25` goes up to `0.3`.
fn round_to_tenth(value: f64) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };
    let rounded = exact
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(value);
    // Adding zero folds -0.0 into 0.0 so it never renders as "-0".
    rounded + 0.0
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    #[default]
    Idle,
    /// A request is in flight. A result shown before the submit stays on
    /// screen until the new outcome replaces it.
    Submitting { shown: Option<RiskAssessment> },
    ResultShown(RiskAssessment),
    ErrorShown(String),
}

impl UiState {
    /// Disables the submit control and clears any prior error.
    pub fn begin_submit(self) -> Self {
        let shown = match self {
            UiState::ResultShown(result) => Some(result),
            UiState::Submitting { shown } => shown,
            UiState::Idle | UiState::ErrorShown(_) => None,
        };
        UiState::Submitting { shown }
    }

    pub fn show_result(self, prob: f64, label: RiskLabel) -> Self {
        UiState::ResultShown(RiskAssessment::new(prob, label))
    }

    pub fn show_error(self, message: impl Into<String>) -> Self {
        UiState::ErrorShown(message.into())
    }

    pub fn hide_error(self) -> Self {
        match self {
            UiState::ErrorShown(_) => UiState::Idle,
            other => other,
        }
    }

    /// Settles a submit with its outcome. Every outcome leaves `Submitting`,
    /// which is what re-enables the submit control.
    pub fn finish(self, outcome: Result<RiskAssessment, SubmitError>) -> Self {
        match outcome {
            Ok(result) => UiState::ResultShown(result),
            Err(err) => self.show_error(err.to_string()),
        }
    }

    /// Hides both panels. A request already in flight keeps running and the
    /// control stays busy until it settles.
    pub fn reset(self) -> Self {
        match self {
            UiState::Submitting { .. } => UiState::Submitting { shown: None },
            _ => UiState::Idle,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, UiState::Submitting { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub submit: SubmitControl,
    pub result: Option<ResultPanel>,
    pub error: Option<ErrorPanel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    pub probability: String,
    pub badge: RiskBadge,
    pub advice: Advice,
    pub gauge: GaugeFigure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskBadge {
    pub text: &'static str,
    pub class: &'static str,
    pub label: RiskLabel,
}

impl RiskBadge {
    fn for_label(label: RiskLabel) -> Self {
        match label {
            RiskLabel::High => Self {
                text: "High risk",
                class: "badge bad",
                label,
            },
            RiskLabel::Low => Self {
                text: "Low risk",
                class: "badge good",
                label,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advice {
    pub heading: &'static str,
    pub body: &'static str,
}

impl Advice {
    fn for_label(label: RiskLabel) -> Self {
        let body = match label {
            RiskLabel::High => HIGH_RISK_ADVICE,
            RiskLabel::Low => LOW_RISK_ADVICE,
        };
        Self {
            heading: ADVICE_HEADING,
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPanel {
    pub message: String,
}

impl ResultPanel {
    fn from_assessment(result: &RiskAssessment) -> Self {
        Self {
            probability: result.probability_text(),
            badge: RiskBadge::for_label(result.label),
            advice: Advice::for_label(result.label),
            gauge: render_gauge(result.probability),
        }
    }
}

pub fn render(state: &UiState) -> PageView {
    let submit = if state.is_submitting() {
        SubmitControl {
            enabled: false,
            label: BUSY_LABEL,
        }
    } else {
        SubmitControl {
            enabled: true,
            label: SUBMIT_LABEL,
        }
    };

    let (result, error) = match state {
        UiState::Idle | UiState::Submitting { shown: None } => (None, None),
        UiState::Submitting {
            shown: Some(result),
        }
        | UiState::ResultShown(result) => (Some(ResultPanel::from_assessment(result)), None),
        UiState::ErrorShown(message) => (
            None,
            Some(ErrorPanel {
                message: message.clone(),
            }),
        ),
    };

    PageView {
        submit,
        result,
        error,
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
