use std::sync::Arc;

use actix_web::{Responder, get, web};
use common::{error::Res, http::Success, jwt::JwtClaims};
use sqlx::PgPool;

use crate::services;

/// Endpoint to retrieve the current authenticated user's information.
///
/// This handler extracts the user ID from the authentication claims and fetches
/// the corresponding user record from the database.
///
/// # Input
/// - `claims`: The JWT claims extracted from the authentication token, containing the user ID
/// - `pool`: A database connection pool for retrieving user data
///
/// # Output
/// - Success: Returns a JSON object with the user's account information
/// - Error: Returns 401 Unauthorized if no valid token is provided or 404 Not Found if user doesn't exist
#[get("/me")]
pub async fn get_me(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let user_id = claims.user_id;
    let pg_pool: &PgPool = &**pool;
    let user = services::user::get_user_by_id(pg_pool, user_id).await?;
    Success::ok(user)
}
