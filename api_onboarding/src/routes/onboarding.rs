use std::sync::Arc;

use actix_web::{Responder, get, post, web};
use common::{error::Res, http::Success, jwt::JwtClaims};
use sqlx::PgPool;

use crate::{dtos::onboarding::StepSubmitRequest, services};

/// Step catalog for the caller's role merged with stored progress.
///
/// # Output
/// - Success: `{ role, steps, current_step, all_steps_completed }` where
///   `current_step` is the first not-completed step in catalog order
#[get("")]
pub async fn get_onboarding(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let overview = services::onboarding::overview(pg_pool, claims.user_id).await?;
    Success::ok(overview)
}

/// Submits one wizard step.
///
/// # Input
/// - `req`: `{ step, payload }`
///
/// # Output
/// - Success: The stored progress row and the next step id (null after the
///   last step)
/// - Error: 400 for an unknown step or missing required fields; stored
///   progress is untouched in both cases
#[post("/step")]
pub async fn post_step(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<StepSubmitRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let response =
        services::onboarding::submit_step(pg_pool, claims.user_id, req.into_inner()).await?;
    Success::ok(response)
}

/// Finishes the wizard and applies the profile completion gate.
#[post("/complete")]
pub async fn post_complete(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let profile = services::onboarding::complete(pg_pool, claims.user_id).await?;
    Success::ok(profile)
}
