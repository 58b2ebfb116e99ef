use std::sync::Arc;

use actix_web::{Responder, delete, get, post, put, web};
use common::{error::Res, http::Success, jwt::JwtClaims};
use db::dtos::listing::ListingUpdateRequest;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    dtos::listing::{AddPhotoRequest, CreateListingRequest, PublicListingsQuery},
    services,
};

const DEFAULT_PUBLIC_LIMIT: i64 = 30;

/// Publishes a new room listing for the caller.
///
/// # Output
/// - Success: The created listing with 201 Created status
/// - Error: 403 for tenants, 400 for blank title/city or non-positive price
#[post("")]
pub async fn post_listing(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<CreateListingRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let listing =
        services::listing::create_listing(pg_pool, claims.user_id, req.into_inner()).await?;
    Success::created(listing)
}

/// The caller's listings, newest first.
#[get("")]
pub async fn get_listings(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let listings = services::listing::list_own(pg_pool, claims.user_id).await?;
    Success::ok(listings)
}

/// Partial update of one of the caller's listings.
///
/// # Output
/// - Error: 404 when the listing does not exist or belongs to someone else
#[put("/{id}")]
pub async fn put_listing(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    req: web::Json<ListingUpdateRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let listing = services::listing::update_listing(
        pg_pool,
        path.into_inner(),
        claims.user_id,
        req.into_inner(),
    )
    .await?;
    Success::ok(listing)
}

/// Registers an uploaded photo's storage path on the listing.
#[post("/{id}/photos")]
pub async fn post_photo(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    req: web::Json<AddPhotoRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    services::listing::add_photo(
        pg_pool,
        path.into_inner(),
        claims.user_id,
        req.into_inner().path,
    )
    .await?;
    Success::ok(json!({ "added": true }))
}

/// Deletes one of the caller's listings.
#[delete("/{id}")]
pub async fn delete_listing(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    services::listing::delete_listing(pg_pool, path.into_inner(), claims.user_id).await?;
    Success::ok(json!({ "deleted": true }))
}

/// Visible listings for the marketing site, optionally filtered by city.
#[get("/public")]
pub async fn get_public_listings(
    query: web::Query<PublicListingsQuery>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let query = query.into_inner();
    let listings = services::listing::list_public(
        pg_pool,
        query.city,
        query.limit.unwrap_or(DEFAULT_PUBLIC_LIMIT),
    )
    .await?;
    Success::ok(listings)
}
