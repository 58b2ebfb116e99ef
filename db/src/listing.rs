use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    dtos::listing::{ListingCreateRequest, ListingUpdateRequest, PropertyCreateRequest},
    models::listing::{HostListing, Property},
};

pub async fn insert_listing<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: ListingCreateRequest,
) -> Res<HostListing> {
    sqlx::query_as::<_, HostListing>(
        r#"
        INSERT INTO host_listings (host_id, title, description, city, monthly_price, amenities)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(data.host_id)
    .bind(data.title)
    .bind(data.description)
    .bind(data.city)
    .bind(data.monthly_price)
    .bind(data.amenities)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn list_by_host<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    host_id: Uuid,
) -> Res<Vec<HostListing>> {
    sqlx::query_as::<_, HostListing>(
        "SELECT * FROM host_listings WHERE host_id = $1 ORDER BY created_at DESC",
    )
    .bind(host_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn count_by_host<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    host_id: Uuid,
) -> Res<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM host_listings WHERE host_id = $1")
        .bind(host_id)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

/// Owner-checked partial update; `None` when the listing is not the caller's.
pub async fn update_listing<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    id: Uuid,
    host_id: Uuid,
    data: ListingUpdateRequest,
) -> Res<Option<HostListing>> {
    sqlx::query_as::<_, HostListing>(
        r#"
        UPDATE host_listings SET
            title = COALESCE($3, title),
            description = COALESCE($4, description),
            city = COALESCE($5, city),
            monthly_price = COALESCE($6, monthly_price),
            amenities = COALESCE($7, amenities),
            visible = COALESCE($8, visible),
            updated_at = now()
        WHERE id = $1 AND host_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(host_id)
    .bind(data.title)
    .bind(data.description)
    .bind(data.city)
    .bind(data.monthly_price)
    .bind(data.amenities)
    .bind(data.visible)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}

pub async fn append_photo<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    id: Uuid,
    host_id: Uuid,
    path: String,
) -> Res<u64> {
    let result = sqlx::query(
        r#"
        UPDATE host_listings
        SET photo_paths = array_append(photo_paths, $3), updated_at = now()
        WHERE id = $1 AND host_id = $2
        "#,
    )
    .bind(id)
    .bind(host_id)
    .bind(path)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete_listing<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    id: Uuid,
    host_id: Uuid,
) -> Res<u64> {
    let result = sqlx::query("DELETE FROM host_listings WHERE id = $1 AND host_id = $2")
        .bind(id)
        .bind(host_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

/// Marketing-site feed: visible listings only.
pub async fn list_public<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    city: Option<String>,
    limit: i64,
) -> Res<Vec<HostListing>> {
    sqlx::query_as::<_, HostListing>(
        r#"
        SELECT * FROM host_listings
        WHERE visible AND ($1::text IS NULL OR lower(city) = lower($1))
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(city)
    .bind(limit)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn insert_property<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: PropertyCreateRequest,
) -> Res<Property> {
    sqlx::query_as::<_, Property>(
        r#"
        INSERT INTO properties (owner_id, listing_id, address, rooms, size_sqm)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(data.owner_id)
    .bind(data.listing_id)
    .bind(data.address)
    .bind(data.rooms)
    .bind(data.size_sqm)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn list_properties_by_owner<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    owner_id: Uuid,
) -> Res<Vec<Property>> {
    sqlx::query_as::<_, Property>(
        "SELECT * FROM properties WHERE owner_id = $1 ORDER BY created_at DESC",
    )
    .bind(owner_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}
