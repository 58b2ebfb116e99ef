use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct OnboardingProgress {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role: String,
    pub step: String,
    pub payload: serde_json::Value,
    pub completed: bool,
    pub updated_at: NaiveDateTime,
}
