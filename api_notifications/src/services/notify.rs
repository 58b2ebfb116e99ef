use common::error::Res;
use db::{dtos::notification::NotificationCreateRequest, models::notification::Notification};
use sqlx::PgPool;
use uuid::Uuid;

/// In-app celebration row for a freshly completed mutual match.
pub async fn match_found(pool: &PgPool, user_id: Uuid, counterpart_name: &str) -> Res<Notification> {
    db::notification::insert_notification(
        pool,
        NotificationCreateRequest {
            user_id,
            kind: "match".to_string(),
            title: "¡Es un match!".to_string(),
            body: format!("A {} también le gustó tu perfil.", counterpart_name),
        },
    )
    .await
}

pub async fn profile_verified(pool: &PgPool, user_id: Uuid) -> Res<Notification> {
    db::notification::insert_notification(
        pool,
        NotificationCreateRequest {
            user_id,
            kind: "verification".to_string(),
            title: "Perfil verificado".to_string(),
            body: "Tu perfil ha sido verificado por nuestro equipo.".to_string(),
        },
    )
    .await
}

/// Admin announcement delivered to every account. Returns the row count.
pub async fn broadcast(pool: &PgPool, title: &str, body: &str) -> Res<u64> {
    db::notification::insert_for_all_users(
        pool,
        "announcement".to_string(),
        title.to_string(),
        body.to_string(),
    )
    .await
}
