use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{dtos::lead::LeadCreateRequest, models::lead::SilverLead};

pub async fn insert_lead<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: LeadCreateRequest,
) -> Res<SilverLead> {
    sqlx::query_as::<_, SilverLead>(
        r#"
        INSERT INTO silver_leads (full_name, email, phone, city, message, source, referral_code)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(data.full_name)
    .bind(data.email)
    .bind(data.phone)
    .bind(data.city)
    .bind(data.message)
    .bind(data.source)
    .bind(data.referral_code)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn list_leads<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    unreviewed_only: bool,
    limit: i64,
) -> Res<Vec<SilverLead>> {
    sqlx::query_as::<_, SilverLead>(
        r#"
        SELECT * FROM silver_leads
        WHERE NOT $1 OR NOT reviewed
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(unreviewed_only)
    .bind(limit)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn mark_reviewed<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    id: Uuid,
) -> Res<u64> {
    let result = sqlx::query("UPDATE silver_leads SET reviewed = TRUE WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
