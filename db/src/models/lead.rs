use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct SilverLead {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub message: Option<String>,
    pub source: Option<String>,
    pub referral_code: Option<String>,
    pub reviewed: bool,
    pub created_at: NaiveDateTime,
}
