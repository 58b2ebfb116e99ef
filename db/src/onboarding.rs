use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{dtos::onboarding::OnboardingStepUpsert, models::onboarding::OnboardingProgress};

/// Stores a submitted step as completed; resubmitting replaces the payload.
pub async fn upsert_step<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: OnboardingStepUpsert,
) -> Res<OnboardingProgress> {
    sqlx::query_as::<_, OnboardingProgress>(
        r#"
        INSERT INTO onboarding_progress (user_id, role, step, payload, completed)
        VALUES ($1, $2, $3, $4, TRUE)
        ON CONFLICT (user_id, role, step)
        DO UPDATE SET payload = EXCLUDED.payload, completed = TRUE, updated_at = now()
        RETURNING *
        "#,
    )
    .bind(data.user_id)
    .bind(data.role)
    .bind(data.step)
    .bind(data.payload)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn get_progress<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    role: String,
) -> Res<Vec<OnboardingProgress>> {
    sqlx::query_as::<_, OnboardingProgress>(
        "SELECT * FROM onboarding_progress WHERE user_id = $1 AND role = $2",
    )
    .bind(user_id)
    .bind(role)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}
