use common::{
    error::{AppError, Res},
    misc::{NoiseLevel, Role},
};
use db::{dtos::profile::ProfileUpdateRequest, models::profile::Profile};
use sqlx::PgPool;
use uuid::Uuid;

/// Tenants must say something about themselves before they show up in
/// suggestion feeds.
pub const MIN_BIO_CHARS: usize = 40;

pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Res<Profile> {
    db::profile::get_profile(pool, user_id).await
}

pub async fn update_profile(
    pool: &PgPool,
    user_id: Uuid,
    mut data: ProfileUpdateRequest,
) -> Res<Profile> {
    if let Some(noise) = data.noise_level.as_deref() {
        let level = NoiseLevel::parse(noise).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown noise level: {}", noise))
        })?;
        // store the canonical spelling
        data.noise_level = Some(level.as_str().to_string());
    }
    if let Some(age) = data.age {
        if !(16..=120).contains(&age) {
            return Err(AppError::BadRequest("Age is out of range".to_string()));
        }
    }
    if let Some(budget) = data.budget {
        if budget < 0 {
            return Err(AppError::BadRequest("Budget cannot be negative".to_string()));
        }
    }

    db::profile::update_profile(pool, user_id, data).await
}

/// Whether the profile may transition to completed. Tenants qualify with a
/// real bio; room-offering roles qualify with their first listing.
pub fn completion_ready(role: Role, bio: Option<&str>, listing_count: i64) -> bool {
    match role {
        Role::Admin => true,
        _ if role.offers_rooms() => listing_count > 0,
        _ => bio
            .map(|b| b.trim().chars().count() >= MIN_BIO_CHARS)
            .unwrap_or(false),
    }
}

/// Applies the one-way completion transition. Idempotent once completed.
pub async fn complete_profile(pool: &PgPool, user_id: Uuid) -> Res<Profile> {
    let profile = db::profile::get_profile(pool, user_id).await?;
    if profile.onboarding_completed {
        return Ok(profile);
    }

    let role = Role::from_str(&profile.role)?;
    let listing_count = if role.offers_rooms() {
        db::listing::count_by_host(pool, user_id).await?
    } else {
        0
    };

    if !completion_ready(role, profile.bio.as_deref(), listing_count) {
        return Err(AppError::BadRequest(if role.offers_rooms() {
            "Create your first listing before completing the profile".to_string()
        } else {
            format!(
                "Write a bio of at least {} characters before completing the profile",
                MIN_BIO_CHARS
            )
        }));
    }

    db::profile::set_onboarding_completed(pool, user_id).await?;
    db::profile::get_profile(pool, user_id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenants_need_a_real_bio() {
        assert!(!completion_ready(Role::Tenant, None, 0));
        assert!(!completion_ready(Role::Tenant, Some("corto"), 0));
        assert!(completion_ready(
            Role::Tenant,
            Some("Busco piso tranquilo cerca del centro, soy ordenada y teletrabajo."),
            0
        ));
    }

    #[test]
    fn bio_length_counts_characters_not_bytes() {
        // 40 multibyte characters must pass
        let bio = "ñ".repeat(MIN_BIO_CHARS);
        assert!(completion_ready(Role::Tenant, Some(&bio), 0));
    }

    #[test]
    fn hosts_and_owners_need_a_listing() {
        assert!(!completion_ready(Role::Host, Some("a long enough bio would not matter here"), 0));
        assert!(completion_ready(Role::Host, None, 1));
        assert!(completion_ready(Role::Owner, None, 3));
    }

    #[test]
    fn surrounding_whitespace_does_not_count() {
        let padded = format!("   {}   ", "x".repeat(MIN_BIO_CHARS - 1));
        assert!(!completion_ready(Role::Tenant, Some(&padded), 0));
    }
}
