use chrono::NaiveDateTime;
use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::referral::ReferralCode;

pub async fn get_active_code_by_ambassador<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    ambassador_id: Uuid,
) -> Res<Option<ReferralCode>> {
    sqlx::query_as::<_, ReferralCode>(
        r#"
        SELECT * FROM referral_codes
        WHERE ambassador_id = $1 AND active
        ORDER BY created_at DESC
        LIMIT 1
        "#,
    )
    .bind(ambassador_id)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}

pub async fn get_code<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    code: String,
) -> Res<Option<ReferralCode>> {
    sqlx::query_as::<_, ReferralCode>("SELECT * FROM referral_codes WHERE code = $1")
        .bind(code)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert_code<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    ambassador_id: Uuid,
    code: String,
) -> Res<ReferralCode> {
    sqlx::query_as::<_, ReferralCode>(
        r#"
        INSERT INTO referral_codes (ambassador_id, code)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(ambassador_id)
    .bind(code)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

/// First code wins per referred user; a second attribution is a no-op.
pub async fn insert_attribution<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    code_id: Uuid,
    referred_user_id: Uuid,
) -> Res<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO referral_attributions (code_id, referred_user_id)
        VALUES ($1, $2)
        ON CONFLICT (referred_user_id) DO NOTHING
        "#,
    )
    .bind(code_id)
    .bind(referred_user_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn count_attributions<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    code_id: Uuid,
) -> Res<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM referral_attributions WHERE code_id = $1")
        .bind(code_id)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn count_attributions_since<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    code_id: Uuid,
    since: NaiveDateTime,
) -> Res<i64> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM referral_attributions WHERE code_id = $1 AND created_at >= $2",
    )
    .bind(code_id)
    .bind(since)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}
