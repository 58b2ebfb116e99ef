use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct HostListing {
    pub id: Uuid,
    pub host_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub city: String,
    pub monthly_price: i32,
    pub amenities: Vec<String>,
    pub photo_paths: Vec<String>,
    pub visible: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Property {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub listing_id: Option<Uuid>,
    pub address: String,
    pub rooms: i32,
    pub size_sqm: Option<i32>,
    pub created_at: NaiveDateTime,
}
