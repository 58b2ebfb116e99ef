use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateListingRequest {
    pub title: String,
    pub description: Option<String>,
    pub city: String,
    pub monthly_price: i32,
    #[serde(default)]
    pub amenities: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddPhotoRequest {
    /// Storage path inside the property-media bucket; bytes never pass
    /// through this API.
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct PublicListingsQuery {
    pub city: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePropertyRequest {
    pub listing_id: Option<Uuid>,
    pub address: String,
    pub rooms: i32,
    pub size_sqm: Option<i32>,
}
