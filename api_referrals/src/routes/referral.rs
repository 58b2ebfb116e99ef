use std::sync::Arc;

use actix_web::{Responder, get, post, web};
use common::{
    error::{AppError, Res},
    http::Success,
    jwt::JwtClaims,
};
use sqlx::PgPool;

use crate::services;

/// Issues the caller's ambassador code. Calling it again returns the
/// same active code, so the dashboard button is idempotent.
#[post("/code")]
pub async fn post_code(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let code = services::code::issue_code(pg_pool, claims.user_id).await?;
    Success::created(code)
}

/// Signup counts for the caller's code.
///
/// # Output
/// - Success: `{ code, total_signups, signups_last_30_days }`
/// - Error: 404 when the caller never issued a code
#[get("/stats")]
pub async fn get_stats(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let stats = services::code::stats(pg_pool, claims.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No referral code issued yet".to_string()))?;
    Success::ok(stats)
}
