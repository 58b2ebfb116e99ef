use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};
use common::{
    env_config::Config,
    error::{AppError, Res},
};
use db::models::user::User;
use oauth2::basic::*;
use oauth2::*;
use sqlx::PgPool;

use crate::{dtos::auth::LoginRequest, dtos::auth::OAuthUserData, misc::oauth::OAuthProvider};

/// Create OAuth client object.
///
/// # Arguments
///
/// * `provider` - The OAuth provider.
/// * `config` - The application configuration.
///
/// # Returns
///
/// A `Client` object for the specified OAuth provider.
pub fn create_oauth_client(
    provider: &OAuthProvider,
    config: &Config,
) -> Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
> {
    let provider_client = match provider {
        OAuthProvider::Google => &config.google_client,
        OAuthProvider::Facebook => &config.facebook_client,
    };

    let client_id = ClientId::new(provider_client.client_id.clone());
    let client_secret = ClientSecret::new(provider_client.client_secret.clone());
    let auth_url =
        AuthUrl::new(provider_client.auth_url.clone()).expect("Invalid authorization endpoint URL");
    let token_url =
        TokenUrl::new(provider_client.token_url.clone()).expect("Invalid token endpoint URL");

    let client = BasicClient::new(client_id)
        .set_client_secret(client_secret)
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(
            RedirectUrl::new(provider_client.redirect_uri.to_string())
                .expect("Invalid redirect URL"),
        );

    client
}

/// Authenticates existing user.
/// If user does not exist, returns 400.
/// If the password does not match the stored hash, returns 401.
///
/// # Arguments
///
/// * `pool` - A reference to the database connection pool.
/// * `login_data` - The login data.
///
/// # Returns
///
/// A `Result` containing the `User` object or an `AppError` if an error occurs.
pub async fn authenticate_user(pool: &PgPool, login_data: &LoginRequest) -> Res<User> {
    let (user, credentials) = db::user::get_user_with_password_hash(pool, login_data.email.clone())
        .await
        .map_err(|_| AppError::BadRequest("User with this email does not exist".to_string()))?;

    let parsed_hash = PasswordHash::new(&credentials.password_hash)
        .map_err(|e| AppError::Internal(format!("Stored password hash is invalid: {}", e)))?;
    let is_valid = Argon2::default()
        .verify_password(login_data.password.as_bytes(), &parsed_hash)
        .is_ok();

    if is_valid {
        Ok(user)
    } else {
        Err(AppError::Unauthorized("Invalid credentials".to_string()))
    }
}

/// Fetches additional user data from the provider's OAuth API.
///
/// # Arguments
///
/// * `provider` - The OAuth provider.
/// * `access_token` - The access token.
///
/// # Returns
///
/// A `Result` containing the `OAuthUserData` object or an `AppError` if an error occurs.
pub async fn fetch_provider_user_data(
    provider: &OAuthProvider,
    access_token: &str,
) -> Res<OAuthUserData> {
    match provider {
        OAuthProvider::Google => fetch_google_user_data(access_token).await,
        OAuthProvider::Facebook => fetch_facebook_user_data(access_token).await,
    }
}

async fn fetch_google_user_data(access_token: &str) -> Res<OAuthUserData> {
    let client = reqwest::Client::new();
    let request = client
        .get("https://www.googleapis.com/oauth2/v3/userinfo")
        .header("Authorization", format!("Bearer {}", access_token));

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Internal(format!("Failed to fetch Google user data: {}", e)))?;

    if response.status().is_success() {
        let google_user: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse Google user data: {}", e)))?;

        let email = google_user["email"].as_str().unwrap_or("").to_string();
        let first_name = google_user["given_name"].as_str().unwrap_or("").to_string();
        let last_name = google_user["family_name"]
            .as_str()
            .unwrap_or("")
            .to_string();
        let provider_user_id = google_user["sub"].to_string();

        Ok(OAuthUserData {
            email,
            first_name,
            last_name,
            provider_user_id,
        })
    } else {
        Err(AppError::Internal(format!(
            "Google API returned error status: {}",
            response.status()
        )))
    }
}

async fn fetch_facebook_user_data(access_token: &str) -> Res<OAuthUserData> {
    let client = reqwest::Client::new();
    let request = client
        .get("https://graph.facebook.com/me")
        .query(&[("fields", "email,first_name,last_name")])
        .header("Authorization", format!("Bearer {}", access_token));

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Internal(format!("Failed to fetch Facebook user data: {}", e)))?;

    if response.status().is_success() {
        let facebook_user: serde_json::Value = response.json().await.map_err(|e| {
            AppError::Internal(format!("Failed to parse Facebook user data: {}", e))
        })?;

        let email = facebook_user["email"].as_str().unwrap_or("").to_string();
        let first_name = facebook_user["first_name"]
            .as_str()
            .unwrap_or("")
            .to_string();
        let last_name = facebook_user["last_name"]
            .as_str()
            .unwrap_or("")
            .to_string();
        let provider_user_id = facebook_user["id"].to_string();

        Ok(OAuthUserData {
            email,
            first_name,
            last_name,
            provider_user_id,
        })
    } else {
        Err(AppError::Internal(format!(
            "Facebook API returned error status: {}",
            response.status()
        )))
    }
}
