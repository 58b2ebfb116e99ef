use std::sync::Arc;

use actix_web::{Responder, get, post, web};
use common::{error::Res, http::Success, jwt::JwtClaims};
use sqlx::PgPool;

use crate::{dtos::listing::CreatePropertyRequest, services};

/// Records an owner-side property, optionally linked to a listing.
#[post("")]
pub async fn post_property(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<CreatePropertyRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let property =
        services::listing::create_property(pg_pool, claims.user_id, req.into_inner()).await?;
    Success::created(property)
}

/// The caller's properties, newest first.
#[get("")]
pub async fn get_properties(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let properties = services::listing::list_properties(pg_pool, claims.user_id).await?;
    Success::ok(properties)
}
