use std::sync::Arc;

use actix_web::{Responder, get, put, web};
use common::{error::Res, http::Success, jwt::JwtClaims};
use sqlx::PgPool;

use crate::{dtos::profile::QuizSubmitRequest, services};

/// Upserts quiz answers (one row per question) and mirrors the
/// matching-relevant ones into the profile.
#[put("/quiz")]
pub async fn put_quiz(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<QuizSubmitRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let answers =
        services::quiz::submit_answers(pg_pool, claims.user_id, req.into_inner().answers).await?;
    Success::ok(answers)
}

/// The caller's stored quiz answers.
#[get("/quiz")]
pub async fn get_quiz(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let answers = services::quiz::get_answers(pg_pool, claims.user_id).await?;
    Success::ok(answers)
}
