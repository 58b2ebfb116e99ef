use std::sync::Arc;

use actix_web::{Responder, get, post, web};
use common::{
    error::{AppError, Res},
    http::Success,
};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    dtos::admin::{BroadcastRequest, LeadsQuery, LogsQuery, PromoteRequest, UsersQuery},
    services,
};

const DEFAULT_DIRECTORY_LIMIT: i64 = 100;

/// User directory with profile state, optionally filtered by role.
#[get("/users")]
pub async fn get_users(
    query: web::Query<UsersQuery>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let query = query.into_inner();
    let users = services::admin::list_users(
        pg_pool,
        query.role,
        query.limit.unwrap_or(DEFAULT_DIRECTORY_LIMIT),
    )
    .await?;
    Success::ok(users)
}

/// Changes a user's role (tenant/owner/host/admin).
#[post("/users/{id}/promote")]
pub async fn post_promote(
    path: web::Path<Uuid>,
    req: web::Json<PromoteRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    services::admin::promote_user(pg_pool, path.into_inner(), &req.role).await?;
    Success::ok(json!({ "promoted": true }))
}

/// Marks a profile verified after a manual review.
#[post("/users/{id}/verify")]
pub async fn post_verify(path: web::Path<Uuid>, pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    services::admin::verify_profile(pg_pool, path.into_inner()).await?;
    Success::ok(json!({ "verified": true }))
}

/// Captured marketing leads, newest first.
#[get("/leads")]
pub async fn get_leads(
    query: web::Query<LeadsQuery>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let leads =
        db::lead::list_leads(pg_pool, query.unreviewed_only.unwrap_or(false), 200).await?;
    Success::ok(leads)
}

/// Marks a lead as handled.
#[post("/leads/{id}/review")]
pub async fn post_lead_review(
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let affected = db::lead::mark_reviewed(pg_pool, path.into_inner()).await?;
    if affected == 0 {
        return Err(AppError::NotFound("Lead not found".to_string()));
    }
    Success::ok(json!({ "reviewed": true }))
}

/// Tail of the request-audit trail.
#[get("/logs")]
pub async fn get_logs(
    query: web::Query<LogsQuery>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let logs = db::log::list_recent(pg_pool, query.limit.unwrap_or(100).clamp(1, 1000)).await?;
    Success::ok(logs)
}

/// Sends an in-app announcement to every account.
#[post("/broadcast")]
pub async fn post_broadcast(
    req: web::Json<BroadcastRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    if req.title.trim().is_empty() || req.body.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Title and body are required".to_string(),
        ));
    }
    let pg_pool: &PgPool = &**pool;
    let delivered =
        api_notifications::services::notify::broadcast(pg_pool, &req.title, &req.body).await?;
    Success::ok(json!({ "delivered": delivered }))
}
