use std::sync::Arc;

use actix_web::{Responder, get, post, web};
use common::{
    error::{AppError, Res},
    http::Success,
    jwt::JwtClaims,
};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::notifications::NotificationsQuery;

/// The caller's notifications, newest first.
///
/// # Input
/// - `query`: Optional `unread_only` flag
#[get("")]
pub async fn get_notifications(
    claims: web::ReqData<JwtClaims>,
    query: web::Query<NotificationsQuery>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let notifications = db::notification::list_notifications(
        pg_pool,
        claims.user_id,
        query.unread_only.unwrap_or(false),
    )
    .await?;
    Success::ok(notifications)
}

/// Badge counter for the dashboard header.
#[get("/unread_count")]
pub async fn get_unread_count(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let count = db::notification::unread_count(pg_pool, claims.user_id).await?;
    Success::ok(json!({ "unread": count }))
}

/// Marks one of the caller's notifications read.
///
/// # Output
/// - Error: 404 when the row belongs to someone else, does not exist, or
///   was already read
#[post("/{id}/read")]
pub async fn post_mark_read(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let affected = db::notification::mark_read(pg_pool, path.into_inner(), claims.user_id).await?;
    if affected == 0 {
        return Err(AppError::NotFound("Notification not found".to_string()));
    }
    Success::ok(json!({ "read": true }))
}
