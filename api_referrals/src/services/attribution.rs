use common::error::Res;
use sqlx::PgPool;
use uuid::Uuid;

/// Attributes a signup to an ambassador code. Unknown, inactive and
/// self-referring codes are ignored; returns whether a row was written.
pub async fn attribute_signup(pool: &PgPool, code: &str, referred_user_id: Uuid) -> Res<bool> {
    let normalized = code.trim().to_uppercase();
    if normalized.is_empty() {
        return Ok(false);
    }

    let Some(referral_code) = db::referral::get_code(pool, normalized).await? else {
        log::debug!("Ignoring unknown referral code for user {}", referred_user_id);
        return Ok(false);
    };
    if !referral_code.active || referral_code.ambassador_id == referred_user_id {
        return Ok(false);
    }

    db::referral::insert_attribution(pool, referral_code.id, referred_user_id).await
}
