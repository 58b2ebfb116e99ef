use common::{
    error::{AppError, Res},
    misc::Role,
};
use db::{
    dtos::listing::{ListingCreateRequest, ListingUpdateRequest, PropertyCreateRequest},
    models::listing::{HostListing, Property},
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::listing::{CreateListingRequest, CreatePropertyRequest};

/// Only room-offering roles may publish.
async fn require_room_offering_role(pool: &PgPool, user_id: Uuid) -> Res<()> {
    let profile = db::profile::get_profile(pool, user_id).await?;
    let role = Role::from_str(&profile.role)?;
    if role.offers_rooms() || role == Role::Admin {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Only hosts and owners can manage listings".to_string(),
        ))
    }
}

pub async fn create_listing(
    pool: &PgPool,
    host_id: Uuid,
    req: CreateListingRequest,
) -> Res<HostListing> {
    require_room_offering_role(pool, host_id).await?;

    let title = req.title.trim().to_string();
    let city = req.city.trim().to_string();
    if title.is_empty() || city.is_empty() {
        return Err(AppError::BadRequest(
            "Title and city are required".to_string(),
        ));
    }
    if req.monthly_price <= 0 {
        return Err(AppError::BadRequest(
            "Monthly price must be positive".to_string(),
        ));
    }

    db::listing::insert_listing(
        pool,
        ListingCreateRequest {
            host_id,
            title,
            description: req.description,
            city,
            monthly_price: req.monthly_price,
            amenities: req.amenities,
        },
    )
    .await
}

pub async fn list_own(pool: &PgPool, host_id: Uuid) -> Res<Vec<HostListing>> {
    db::listing::list_by_host(pool, host_id).await
}

pub async fn update_listing(
    pool: &PgPool,
    id: Uuid,
    host_id: Uuid,
    req: ListingUpdateRequest,
) -> Res<HostListing> {
    if let Some(price) = req.monthly_price {
        if price <= 0 {
            return Err(AppError::BadRequest(
                "Monthly price must be positive".to_string(),
            ));
        }
    }

    db::listing::update_listing(pool, id, host_id, req)
        .await?
        .ok_or_else(|| AppError::NotFound("Listing not found".to_string()))
}

pub async fn add_photo(pool: &PgPool, id: Uuid, host_id: Uuid, path: String) -> Res<()> {
    let path = path.trim().to_string();
    if path.is_empty() {
        return Err(AppError::BadRequest("Photo path is required".to_string()));
    }

    let affected = db::listing::append_photo(pool, id, host_id, path).await?;
    if affected == 0 {
        return Err(AppError::NotFound("Listing not found".to_string()));
    }
    Ok(())
}

pub async fn delete_listing(pool: &PgPool, id: Uuid, host_id: Uuid) -> Res<()> {
    let affected = db::listing::delete_listing(pool, id, host_id).await?;
    if affected == 0 {
        return Err(AppError::NotFound("Listing not found".to_string()));
    }
    Ok(())
}

pub async fn list_public(
    pool: &PgPool,
    city: Option<String>,
    limit: i64,
) -> Res<Vec<HostListing>> {
    db::listing::list_public(pool, city, limit.clamp(1, 100)).await
}

pub async fn create_property(
    pool: &PgPool,
    owner_id: Uuid,
    req: CreatePropertyRequest,
) -> Res<Property> {
    require_room_offering_role(pool, owner_id).await?;

    let address = req.address.trim().to_string();
    if address.is_empty() {
        return Err(AppError::BadRequest("Address is required".to_string()));
    }
    if req.rooms <= 0 {
        return Err(AppError::BadRequest(
            "Room count must be positive".to_string(),
        ));
    }

    db::listing::insert_property(
        pool,
        PropertyCreateRequest {
            owner_id,
            listing_id: req.listing_id,
            address,
            rooms: req.rooms,
            size_sqm: req.size_sqm,
        },
    )
    .await
}

pub async fn list_properties(pool: &PgPool, owner_id: Uuid) -> Res<Vec<Property>> {
    db::listing::list_properties_by_owner(pool, owner_id).await
}
