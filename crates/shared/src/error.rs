use thiserror::Error;

pub const SERVER_ERROR_FALLBACK: &str = "Server error";

/// Local, user-correctable problems found before anything is sent.
///
/// The display text is the exact message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill all fields correctly.")]
    EmptyField { field: String },
    #[error("Enter a valid age.")]
    InvalidAge,
    #[error("Diastolic must be <= Systolic.")]
    DiastolicAboveSystolic,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The server answered with `success: false`.
    #[error("{0}")]
    Rejected(String),
    #[error("Network error: {0}")]
    Network(String),
}

impl SubmitError {
    pub fn rejected(error: Option<String>) -> Self {
        match error {
            Some(message) if !message.is_empty() => Self::Rejected(message),
            _ => Self::Rejected(SERVER_ERROR_FALLBACK.to_string()),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }
}
