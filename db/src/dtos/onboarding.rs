use uuid::Uuid;

pub struct OnboardingStepUpsert {
    pub user_id: Uuid,
    pub role: String,
    pub step: String,
    pub payload: serde_json::Value,
}
