use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, http::header::LOCATION, post, web};
use common::env_config::Config;
use common::error::{AppError, Res};
use common::http::Success;
use common::jwt::{self, ClaimsSpec};
use mailer::Mailer;
use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse, reqwest};
use sqlx::PgPool;
use std::sync::Arc;

use crate::dtos::auth::{AuthResponse, LoginRequest, OAuthCallbackQuery, RegisterRequest};
use crate::misc::oauth::OAuthProvider;
use crate::services;

/// Registers a new user with email and password authentication.
///
/// # Input
/// - `req`: JSON payload containing registration information (email, password,
///   names, optional role and referral code)
/// - `pool`: Database connection pool
/// - `config`: Application configuration
/// - `mail`: Email function client
///
/// # Output
/// - Success: Returns token, user and the freshly created profile with 201 Created status
/// - Error: Returns 400 Bad Request if the email already exists or the role is invalid
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/auth/register', {
///   method: 'POST',
///   headers: { 'Content-Type': 'application/json' },
///   body: JSON.stringify({
///     email: 'user@example.com',
///     password: 'securepassword',
///     first_name: 'Ana',
///     last_name: 'García',
///     role: 'tenant',
///     referral_code: localStorage.getItem('refCode') // Optional
///   })
/// });
/// ```
#[post("/register")]
pub async fn post_register(
    req: web::Json<RegisterRequest>,
    pool: web::Data<Arc<PgPool>>,
    config: web::Data<Arc<Config>>,
    mail: web::Data<Mailer>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let email_exists = services::user::exists_user_by_email(pg_pool, req.email.clone()).await?;
    if email_exists {
        return Err(AppError::BadRequest(
            "An account with this email already exists".to_string(),
        ));
    }

    let req = req.into_inner();
    let (user, profile) = services::user::create_user_with_credentials(pg_pool, &req).await?;

    // marketing attribution is best effort, a bad code never fails signup
    if let Some(code) = req.referral_code.as_deref() {
        if let Err(e) =
            api_referrals::services::attribution::attribute_signup(pg_pool, code, user.id).await
        {
            log::warn!("Referral attribution failed for user {}: {}", user.id, e);
        }
    }

    let mailer = mail.get_ref().clone();
    let (to, first_name) = (user.email.clone(), user.first_name.clone());
    mailer::spawn_mail("welcome email", async move {
        mailer.send_welcome_email(&to, &first_name).await
    });

    let token = jwt::generate_jwt(
        ClaimsSpec {
            user_id: user.id,
            role: profile.role.clone(),
        },
        &config.jwt_config,
    )?;
    Success::created(AuthResponse {
        token,
        user,
        profile,
    })
}

/// Authenticates a user with email and password.
///
/// # Input
/// - `login_data`: JSON payload containing email and password
/// - `config`: Application configuration for JWT generation
/// - `pool`: Database connection pool
///
/// # Output
/// - Success: Returns an auth response with JWT token, user and profile
/// - Error: Returns 401 Unauthorized for invalid credentials
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/auth/login', {
///   method: 'POST',
///   headers: { 'Content-Type': 'application/json' },
///   body: JSON.stringify({ email: 'user@example.com', password: 'securepassword' })
/// });
///
/// if (response.ok) {
///   const authData = await response.json();
///   localStorage.setItem('authToken', authData.token);
/// }
/// ```
#[post("/login")]
pub async fn post_login(
    login_data: web::Json<LoginRequest>,
    config: web::Data<Arc<Config>>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let user = services::auth::authenticate_user(pg_pool, &login_data.into_inner()).await?;
    let profile = services::user::get_profile(pg_pool, user.id).await?;
    let token = jwt::generate_jwt(
        ClaimsSpec {
            user_id: user.id,
            role: profile.role.clone(),
        },
        &config.jwt_config,
    )?;
    Success::ok(AuthResponse {
        token,
        user,
        profile,
    })
}

/// Initiates OAuth authentication flow with the specified provider.
///
/// # Input
/// - `path`: OAuth provider name (google, facebook)
/// - `config`: Application configuration with OAuth settings
///
/// # Output
/// - Success: Redirects user to the OAuth provider's authentication page
/// - Error: Returns 400 Bad Request for invalid provider names
#[get("oauth/{provider}")]
pub async fn get_auth_provider(
    path: web::Path<String>,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    let provider = OAuthProvider::from_str(path.as_str())?;
    let client = services::auth::create_oauth_client(&provider, &config);

    let (auth_url, _csrf_token) = client
        .authorize_url(CsrfToken::new_random)
        .add_scopes(
            provider
                .get_scopes()
                .into_iter()
                .map(|s| Scope::new(s.to_string())),
        )
        .url();

    Ok(HttpResponse::Found()
        .append_header(("Location", auth_url.to_string()))
        .finish())
}

/// Handles OAuth callback after user authenticates with the provider.
///
/// # Input
/// - `path`: OAuth provider name (google, facebook)
/// - `query`: Query parameters containing the authorization code from the OAuth provider
/// - `config`: Application configuration
/// - `pool`: Database connection pool
/// - `session`: User session for storing authentication data
///
/// # Output
/// - Success: Redirects to the application callback URL with session data set
/// - Error: Returns appropriate error responses for various failure scenarios
///
/// # Note
/// This endpoint is not called directly from your frontend code.
/// It's the redirect URL configured with your OAuth provider that users
/// are sent to after authenticating with the provider. The web app route
/// matching `web_app_auth_callback_url` picks the session up afterwards.
#[get("oauth/{provider}/callback")]
pub async fn get_auth_provider_callback(
    path: web::Path<String>,
    query: web::Query<OAuthCallbackQuery>,
    config: web::Data<Arc<Config>>,
    pool: web::Data<Arc<PgPool>>,
    mail: web::Data<Mailer>,
    session: Session,
) -> Res<impl Responder> {
    let provider = OAuthProvider::from_str(path.as_str())
        .map_err(|_| AppError::BadRequest("Invalid provider".to_string()))?;
    let client = services::auth::create_oauth_client(&provider, &config);
    let pg_pool: &PgPool = &**pool;

    let http_client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Client should build");

    let token = client
        .exchange_code(AuthorizationCode::new(query.code.clone()))
        .request_async(&http_client)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to exchange code. {}", e)))?;

    let access_token = token.access_token().secret();
    let user_data = services::auth::fetch_provider_user_data(&provider, access_token).await?;

    let existing_user =
        services::user::exists_user_by_email(pg_pool, user_data.email.clone()).await?;

    let (user, profile) = if existing_user {
        let user = services::user::get_user_by_email(pg_pool, user_data.email).await?;
        let profile = services::user::get_profile(pg_pool, user.id).await?;
        (user, profile)
    } else {
        let (user, profile) =
            services::user::create_user_with_oauth(pg_pool, &user_data, &provider).await?;

        let mailer = mail.get_ref().clone();
        let (to, first_name) = (user.email.clone(), user.first_name.clone());
        mailer::spawn_mail("welcome email", async move {
            mailer.send_welcome_email(&to, &first_name).await
        });

        (user, profile)
    };

    let token = jwt::generate_jwt(
        ClaimsSpec {
            user_id: user.id,
            role: profile.role.clone(),
        },
        &config.jwt_config,
    )?;
    let auth_response = AuthResponse {
        token,
        user,
        profile,
    };

    let user_string = serde_json::to_string(&auth_response.user)
        .map_err(|_| AppError::Internal("Failed to serialize user json".to_string()))?;
    let redirect_uri = config.web_app_auth_callback_url.as_str();

    session
        .insert("token", &auth_response.token)
        .map_err(|_| AppError::Internal("Failed to insert token cookie".to_string()))?;
    session
        .insert("user", &user_string)
        .map_err(|_| AppError::Internal("Failed to insert user cookie".to_string()))?;

    Ok(HttpResponse::Found()
        .append_header((LOCATION, redirect_uri))
        .finish())
}
