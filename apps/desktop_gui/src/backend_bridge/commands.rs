//! Backend commands queued from UI to backend worker.

use shared::domain::FormInput;

pub enum BackendCommand {
    /// Post an already validated form to the prediction endpoint.
    Predict { payload: FormInput },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Predict { .. } => "predict",
        }
    }
}
