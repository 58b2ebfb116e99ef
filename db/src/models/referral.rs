use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ReferralCode {
    pub id: Uuid,
    pub ambassador_id: Uuid,
    pub code: String,
    pub active: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ReferralAttribution {
    pub id: Uuid,
    pub code_id: Uuid,
    pub referred_user_id: Uuid,
    pub created_at: NaiveDateTime,
}
