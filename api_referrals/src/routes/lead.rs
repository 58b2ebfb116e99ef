use std::sync::Arc;

use actix_web::{Responder, post, web};
use common::{error::Res, http::Success};
use mailer::Mailer;
use sqlx::PgPool;

use crate::{dtos::referral::LeadRequest, services};

/// Public endpoint behind the marketing site's interest form.
///
/// # Input
/// - `req`: JSON payload with at least `full_name` and `email`
///
/// # Output
/// - Success: Returns the stored lead with 201 Created status
/// - Error: Returns 400 Bad Request when name or email are unusable
#[post("")]
pub async fn post_lead(
    req: web::Json<LeadRequest>,
    pool: web::Data<Arc<PgPool>>,
    mail: web::Data<Mailer>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let lead =
        services::lead::capture_lead(pg_pool, mail.get_ref().clone(), req.into_inner()).await?;
    Success::created(lead)
}
