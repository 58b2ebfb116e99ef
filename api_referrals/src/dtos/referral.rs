use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ReferralStats {
    pub code: String,
    pub total_signups: i64,
    pub signups_last_30_days: i64,
}

/// Payload posted by the marketing site's lead form.
#[derive(Debug, Deserialize)]
pub struct LeadRequest {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub message: Option<String>,
    pub source: Option<String>,
    pub referral_code: Option<String>,
}
