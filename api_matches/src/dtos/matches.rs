use db::models::profile::Profile;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::Compatibility;

#[derive(Debug, Deserialize)]
pub struct LikeRequest {
    pub target_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    /// True when this like completed the pair.
    pub mutual: bool,
    pub compatibility: Compatibility,
}

#[derive(Debug, Serialize)]
pub struct ScoredProfile {
    pub profile: Profile,
    pub compatibility: Compatibility,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionsQuery {
    pub limit: Option<i64>,
}
