pub struct LeadCreateRequest {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub message: Option<String>,
    pub source: Option<String>,
    pub referral_code: Option<String>,
}
