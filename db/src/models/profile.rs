use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: Uuid,
    pub role: String,
    pub age: Option<i32>,
    pub bio: Option<String>,
    pub budget: Option<i32>,
    pub noise_level: Option<String>,
    pub interests: Vec<String>,
    pub lifestyle_tags: Vec<String>,
    pub photo_path: Option<String>,
    pub onboarding_completed: bool,
    pub verified: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub user_id: Uuid,
    pub question_key: String,
    pub answer: String,
    pub answered_at: NaiveDateTime,
}

/// Flattened join of `users` and `profiles` for directory views.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ProfileWithUser {
    pub user_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub age: Option<i32>,
    pub bio: Option<String>,
    pub onboarding_completed: bool,
    pub verified: bool,
    pub created_at: NaiveDateTime,
}
