use db::models::onboarding::OnboardingProgress;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct StepSubmitRequest {
    pub step: String,
    pub payload: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct StepSubmitResponse {
    pub progress: OnboardingProgress,
    /// Next step id in catalog order, null after the last one.
    pub next_step: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct StepStatus {
    pub id: &'static str,
    pub required_fields: &'static [&'static str],
    pub completed: bool,
    pub payload: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct OnboardingOverview {
    pub role: String,
    pub steps: Vec<StepStatus>,
    pub current_step: Option<&'static str>,
    pub all_steps_completed: bool,
}
