use common::{
    error::{AppError, Res},
    misc::Role,
};
use db::models::profile::ProfileWithUser;
use sqlx::PgPool;
use uuid::Uuid;

pub async fn list_users(
    pool: &PgPool,
    role: Option<String>,
    limit: i64,
) -> Res<Vec<ProfileWithUser>> {
    if let Some(role) = role.as_deref() {
        Role::from_str(role)?;
    }
    db::profile::list_profiles_with_users(pool, role, limit.clamp(1, 500)).await
}

/// Changes a user's role. The one-way completion flag is untouched; a
/// promoted host keeps whatever progress they had.
pub async fn promote_user(pool: &PgPool, user_id: Uuid, role: &str) -> Res<()> {
    let role = Role::from_str(role)?;
    // make sure the user exists before the update silently matches nothing
    db::user::get_user_by_id(pool, user_id)
        .await
        .map_err(|_| AppError::NotFound("User not found".to_string()))?;
    db::profile::set_role(pool, user_id, role.as_str().to_string()).await
}

/// Marks a profile verified and tells the user in-app.
pub async fn verify_profile(pool: &PgPool, user_id: Uuid) -> Res<()> {
    let affected = db::profile::set_verified(pool, user_id).await?;
    if affected == 0 {
        return Err(AppError::NotFound("Profile not found".to_string()));
    }
    api_notifications::services::notify::profile_verified(pool, user_id).await?;
    Ok(())
}
