use std::sync::Arc;

use actix_web::{Responder, get, post, put, web};
use common::{error::Res, http::Success, jwt::JwtClaims};
use db::dtos::profile::ProfileUpdateRequest;
use sqlx::PgPool;

use crate::services;

/// The caller's matching profile.
#[get("")]
pub async fn get_profile(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let profile = services::profile::get_profile(pg_pool, claims.user_id).await?;
    Success::ok(profile)
}

/// Partial profile update; omitted fields keep their stored value.
///
/// # Input
/// - `req`: Any subset of age, bio, budget, noise_level, interests,
///   lifestyle_tags, photo_path
///
/// # Output
/// - Success: The updated profile
/// - Error: 400 for an unknown noise level or out-of-range numbers
#[put("")]
pub async fn put_profile(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<ProfileUpdateRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let profile =
        services::profile::update_profile(pg_pool, claims.user_id, req.into_inner()).await?;
    Success::ok(profile)
}

/// Marks the profile completed once its gate passes (bio for tenants,
/// first listing for hosts/owners). The transition is one-way.
#[post("/complete")]
pub async fn post_complete(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let profile = services::profile::complete_profile(pg_pool, claims.user_id).await?;
    Success::ok(profile)
}
