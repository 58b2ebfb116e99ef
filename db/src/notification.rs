use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{dtos::notification::NotificationCreateRequest, models::notification::Notification};

pub async fn insert_notification<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: NotificationCreateRequest,
) -> Res<Notification> {
    sqlx::query_as::<_, Notification>(
        r#"
        INSERT INTO notifications (user_id, kind, title, body)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(data.user_id)
    .bind(data.kind)
    .bind(data.title)
    .bind(data.body)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn list_notifications<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    unread_only: bool,
) -> Res<Vec<Notification>> {
    sqlx::query_as::<_, Notification>(
        r#"
        SELECT * FROM notifications
        WHERE user_id = $1 AND (NOT $2 OR read_at IS NULL)
        ORDER BY delivered_at DESC
        "#,
    )
    .bind(user_id)
    .bind(unread_only)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn unread_count<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<i64> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND read_at IS NULL",
    )
    .bind(user_id)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

/// Marks one of the user's own notifications read. Returns affected rows
/// so the caller can turn 0 into a 404.
pub async fn mark_read<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    id: Uuid,
    user_id: Uuid,
) -> Res<u64> {
    let result = sqlx::query(
        r#"
        UPDATE notifications SET read_at = now()
        WHERE id = $1 AND user_id = $2 AND read_at IS NULL
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

pub async fn insert_for_all_users<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    kind: String,
    title: String,
    body: String,
) -> Res<u64> {
    let result = sqlx::query(
        r#"
        INSERT INTO notifications (user_id, kind, title, body)
        SELECT id, $1, $2, $3 FROM users
        "#,
    )
    .bind(kind)
    .bind(title)
    .bind(body)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}
