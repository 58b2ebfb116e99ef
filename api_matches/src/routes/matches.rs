use std::sync::Arc;

use actix_web::{Responder, get, post, web};
use common::{error::Res, http::Success, jwt::JwtClaims};
use mailer::Mailer;
use sqlx::PgPool;

use crate::{
    dtos::matches::{LikeRequest, SuggestionsQuery},
    services,
};

const DEFAULT_SUGGESTIONS: i64 = 20;

/// Compatibility-ranked feed of completed tenant profiles.
///
/// # Input
/// - `query`: Optional `limit` (default 20)
///
/// # Output
/// - Success: List of `{ profile, compatibility }`, best score first
#[get("/suggestions")]
pub async fn get_suggestions(
    claims: web::ReqData<JwtClaims>,
    query: web::Query<SuggestionsQuery>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let limit = query.limit.unwrap_or(DEFAULT_SUGGESTIONS);
    let scored = services::matches::suggestions(pg_pool, claims.user_id, limit).await?;
    Success::ok(scored)
}

/// Likes another profile; answers whether that completed a mutual match.
///
/// # Input
/// - `req`: `{ target_id }`
///
/// # Output
/// - Success: `{ mutual, compatibility }`; `mutual` is true only once both
///   directions exist
/// - Error: 400 when liking yourself, 404 for an unknown profile
#[post("/like")]
pub async fn post_like(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<LikeRequest>,
    pool: web::Data<Arc<PgPool>>,
    mail: web::Data<Mailer>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let response = services::matches::like(
        pg_pool,
        mail.get_ref().clone(),
        claims.user_id,
        req.target_id,
    )
    .await?;
    Success::ok(response)
}

/// The caller's mutual matches.
#[get("")]
pub async fn get_matches(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let matches = services::matches::list_matches(pg_pool, claims.user_id).await?;
    Success::ok(matches)
}

/// Outgoing likes still waiting for an answer.
#[get("/likes")]
pub async fn get_likes(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let likes = services::matches::list_pending_likes(pg_pool, claims.user_id).await?;
    Success::ok(likes)
}
