use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, password_hash::PasswordHasher};
use common::error::{AppError, Res};
use common::misc::{Role, UserVerificationOrigin};
use db::dtos::user::{AuthProviderCreateRequest, UserCreateRequest};
use db::models::profile::Profile;
use db::models::user::{AuthCredentials, User};

use crate::dtos::auth::{OAuthUserData, RegisterRequest};
use crate::misc::oauth::OAuthProvider;

use sqlx::PgPool;
use uuid::Uuid;

pub async fn exists_user_by_email(pool: &PgPool, email: String) -> Res<bool> {
    db::user::exists_user_by_email(pool, email).await
}
pub async fn get_user_by_email(pool: &PgPool, email: String) -> Res<User> {
    db::user::get_user_by_email(pool, email).await
}
pub async fn get_user_by_id(pool: &PgPool, user_id: Uuid) -> Res<User> {
    db::user::get_user_by_id(pool, user_id).await
}
pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Res<Profile> {
    db::profile::get_profile(pool, user_id).await
}

/// Inserts user record and OAuth data to the database.
/// Used when signing in using an OAuth provider for the first time.
/// OAuth signups start as tenants; the role can be changed later.
pub async fn create_user_with_oauth(
    pool: &PgPool,
    user_data: &OAuthUserData,
    provider: &OAuthProvider,
) -> Res<(User, Profile)> {
    let mut tx = pool.begin().await?;

    // insert user
    let user = db::user::insert_user(
        &mut *tx,
        UserCreateRequest {
            email: user_data.email.clone(),
            first_name: user_data.first_name.clone(),
            last_name: user_data.last_name.clone(),
            verification_origin: UserVerificationOrigin::OAuth,
        },
    )
    .await?;

    // insert provider's user data
    db::user::insert_user_with_provider(
        &mut *tx,
        AuthProviderCreateRequest {
            user_id: user.id,
            provider: provider.as_str().to_string(),
            provider_user_id: user_data.provider_user_id.clone(),
        },
    )
    .await?;

    let profile = db::profile::insert_default_profile(
        &mut *tx,
        user.id,
        Role::Tenant.as_str().to_string(),
    )
    .await?;

    tx.commit().await?;
    Ok((user, profile))
}

/// Inserts user record, credentials and an empty profile in one transaction.
/// Used when registering with email and password.
pub async fn create_user_with_credentials(
    pool: &PgPool,
    req: &RegisterRequest,
) -> Res<(User, Profile)> {
    let role = match req.role.as_deref() {
        Some(value) => Role::from_str(value)?,
        None => Role::Tenant,
    };
    if role == Role::Admin {
        return Err(AppError::BadRequest(
            "Admin accounts cannot be self-registered".to_string(),
        ));
    }

    let mut tx = pool.begin().await?;

    // insert user
    let user = db::user::insert_user(
        &mut *tx,
        UserCreateRequest {
            email: req.email.clone(),
            first_name: req.first_name.clone(),
            last_name: req.last_name.clone(),
            verification_origin: UserVerificationOrigin::Email,
        },
    )
    .await?;

    // hash the password
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(req.password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?
        .to_string();

    // insert credentials
    db::user::insert_user_with_credentials(
        &mut *tx,
        AuthCredentials {
            user_id: user.id,
            password_hash,
        },
    )
    .await?;

    let profile =
        db::profile::insert_default_profile(&mut *tx, user.id, role.as_str().to_string()).await?;

    tx.commit().await?;
    Ok((user, profile))
}
