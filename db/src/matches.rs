use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

/// Inserts the directional edge. Returns false when the edge already
/// existed (re-liking is a no-op, never an error).
pub async fn insert_like<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    actor_id: Uuid,
    target_id: Uuid,
) -> Res<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO matches (actor_id, target_id)
        VALUES ($1, $2)
        ON CONFLICT (actor_id, target_id) DO NOTHING
        "#,
    )
    .bind(actor_id)
    .bind(target_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn reverse_edge_exists<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    actor_id: Uuid,
    target_id: Uuid,
) -> Res<bool> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM matches WHERE actor_id = $1 AND target_id = $2)",
    )
    .bind(target_id)
    .bind(actor_id)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

/// Users the caller liked who liked them back.
pub async fn list_mutual_ids<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Vec<Uuid>> {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT m.target_id
        FROM matches m
        JOIN matches r ON r.actor_id = m.target_id AND r.target_id = m.actor_id
        WHERE m.actor_id = $1
        ORDER BY m.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

/// Outgoing likes still waiting for the reverse edge.
pub async fn list_pending_target_ids<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Vec<Uuid>> {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT m.target_id
        FROM matches m
        WHERE m.actor_id = $1
          AND NOT EXISTS (
              SELECT 1 FROM matches r
              WHERE r.actor_id = m.target_id AND r.target_id = m.actor_id
          )
        ORDER BY m.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}
