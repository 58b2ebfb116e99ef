use serde::Deserialize;

/// Partial profile update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdateRequest {
    pub age: Option<i32>,
    pub bio: Option<String>,
    pub budget: Option<i32>,
    pub noise_level: Option<String>,
    pub interests: Option<Vec<String>>,
    pub lifestyle_tags: Option<Vec<String>>,
    pub photo_path: Option<String>,
}
