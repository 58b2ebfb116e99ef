use db::models::{profile::Profile, user::User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    /// tenant (default), owner or host. Admins are promoted, never registered.
    pub role: Option<String>,
    /// Ambassador code captured by the marketing site, if any.
    pub referral_code: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
    pub profile: Profile,
}

#[derive(Debug, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: String,
}

#[derive(Debug)]
pub struct OAuthUserData {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub provider_user_id: String,
}
