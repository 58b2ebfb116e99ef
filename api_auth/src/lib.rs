use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use actix_web::web;

use middleware::auth::AuthMiddleware;

pub mod middleware {
    pub mod auth;
}
pub mod dtos {
    pub mod auth;
}
pub mod misc {
    pub mod oauth;
}
pub mod routes {
    pub mod auth;
    pub mod session;
    pub mod user;
}
pub mod services {
    pub mod auth;
    pub mod user;
}

pub fn mount_auth() -> actix_web::Scope {
    web::scope("/auth")
        .service(routes::auth::post_register)
        .service(routes::auth::post_login)
        .service(routes::auth::get_auth_provider)
        .service(routes::auth::get_auth_provider_callback)
        .service(routes::session::get_session)
}

pub fn mount_user() -> actix_web::Scope {
    web::scope("").service(routes::user::get_me)
}

/// Rejects requests whose extracted claims are missing or invalid; on
/// success the bare `JwtClaims` land in request extensions for handlers.
pub fn auth_middleware() -> AuthMiddleware {
    AuthMiddleware::new()
}

/// Cookie session used to hand the OAuth result back to the web app.
pub fn session_middleware(
    cookie_secure: bool,
    is_production: bool,
    secret: &[u8],
) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::derive_from(secret))
        .cookie_name("flatmatch_session".to_string())
        .cookie_secure(cookie_secure)
        .cookie_same_site(if is_production {
            SameSite::None
        } else {
            SameSite::Lax
        })
        .build()
}
