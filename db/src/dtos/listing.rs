use serde::Deserialize;
use uuid::Uuid;

pub struct ListingCreateRequest {
    pub host_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub city: String,
    pub monthly_price: i32,
    pub amenities: Vec<String>,
}

/// Partial listing update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingUpdateRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub city: Option<String>,
    pub monthly_price: Option<i32>,
    pub amenities: Option<Vec<String>>,
    pub visible: Option<bool>,
}

pub struct PropertyCreateRequest {
    pub owner_id: Uuid,
    pub listing_id: Option<Uuid>,
    pub address: String,
    pub rooms: i32,
    pub size_sqm: Option<i32>,
}
