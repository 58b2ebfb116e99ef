use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    dtos::profile::ProfileUpdateRequest,
    models::profile::{Profile, ProfileWithUser, QuizAnswer},
};

pub async fn insert_default_profile<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    role: String,
) -> Res<Profile> {
    sqlx::query_as::<_, Profile>(
        r#"
        INSERT INTO profiles (user_id, role)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(role)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn get_profile<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Profile> {
    sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

/// Partial update: unset fields fall back to the stored column value.
pub async fn update_profile<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    data: ProfileUpdateRequest,
) -> Res<Profile> {
    sqlx::query_as::<_, Profile>(
        r#"
        UPDATE profiles SET
            age = COALESCE($2, age),
            bio = COALESCE($3, bio),
            budget = COALESCE($4, budget),
            noise_level = COALESCE($5, noise_level),
            interests = COALESCE($6, interests),
            lifestyle_tags = COALESCE($7, lifestyle_tags),
            photo_path = COALESCE($8, photo_path),
            updated_at = now()
        WHERE user_id = $1
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(data.age)
    .bind(data.bio)
    .bind(data.budget)
    .bind(data.noise_level)
    .bind(data.interests)
    .bind(data.lifestyle_tags)
    .bind(data.photo_path)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

/// One-way transition; never flips back to false.
pub async fn set_onboarding_completed<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<()> {
    sqlx::query(
        "UPDATE profiles SET onboarding_completed = TRUE, updated_at = now() WHERE user_id = $1",
    )
    .bind(user_id)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn set_role<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    role: String,
) -> Res<()> {
    sqlx::query("UPDATE profiles SET role = $2, updated_at = now() WHERE user_id = $1")
        .bind(user_id)
        .bind(role)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn set_verified<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<u64> {
    let result =
        sqlx::query("UPDATE profiles SET verified = TRUE, updated_at = now() WHERE user_id = $1")
            .bind(user_id)
            .execute(executor)
            .await?;
    Ok(result.rows_affected())
}

/// Completed tenant profiles other users can be matched against.
pub async fn list_match_candidates<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    exclude_user_id: Uuid,
    limit: i64,
) -> Res<Vec<Profile>> {
    sqlx::query_as::<_, Profile>(
        r#"
        SELECT * FROM profiles
        WHERE user_id <> $1 AND role = 'tenant' AND onboarding_completed
        ORDER BY updated_at DESC
        LIMIT $2
        "#,
    )
    .bind(exclude_user_id)
    .bind(limit)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn get_profiles_by_user_ids<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_ids: Vec<Uuid>,
) -> Res<Vec<Profile>> {
    sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = ANY($1)")
        .bind(user_ids)
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn list_profiles_with_users<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    role: Option<String>,
    limit: i64,
) -> Res<Vec<ProfileWithUser>> {
    sqlx::query_as::<_, ProfileWithUser>(
        r#"
        SELECT p.user_id, u.email, u.first_name, u.last_name, p.role, p.age, p.bio,
               p.onboarding_completed, p.verified, u.created_at
        FROM profiles p
        JOIN users u ON u.id = p.user_id
        WHERE $1::text IS NULL OR p.role = $1
        ORDER BY u.created_at DESC
        LIMIT $2
        "#,
    )
    .bind(role)
    .bind(limit)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn upsert_quiz_answer<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    question_key: String,
    answer: String,
) -> Res<()> {
    sqlx::query(
        r#"
        INSERT INTO profile_quiz_answers (user_id, question_key, answer)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id, question_key)
        DO UPDATE SET answer = EXCLUDED.answer, answered_at = now()
        "#,
    )
    .bind(user_id)
    .bind(question_key)
    .bind(answer)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn get_quiz_answers<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Vec<QuizAnswer>> {
    sqlx::query_as::<_, QuizAnswer>(
        "SELECT * FROM profile_quiz_answers WHERE user_id = $1 ORDER BY question_key",
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}
