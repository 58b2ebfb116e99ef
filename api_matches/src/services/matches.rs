use common::error::{AppError, Res};
use db::models::profile::Profile;
use mailer::Mailer;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    dtos::matches::{LikeResponse, ScoredProfile},
    scoring,
};

// Candidate pool scored per request; plenty for a sorted first page.
const CANDIDATE_POOL: i64 = 200;

/// Completed tenant profiles ranked by compatibility with the caller.
pub async fn suggestions(pool: &PgPool, user_id: Uuid, limit: i64) -> Res<Vec<ScoredProfile>> {
    let me = db::profile::get_profile(pool, user_id).await?;
    let candidates = db::profile::list_match_candidates(pool, user_id, CANDIDATE_POOL).await?;

    let mut scored: Vec<ScoredProfile> = candidates
        .into_iter()
        .map(|profile| {
            let compatibility = scoring::compatibility(&me, &profile);
            ScoredProfile {
                profile,
                compatibility,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.compatibility.total.cmp(&a.compatibility.total));
    scored.truncate(limit.clamp(1, CANDIDATE_POOL) as usize);
    Ok(scored)
}

/// Records the directional like and detects mutuality.
///
/// The celebration side effects (notification rows and match emails for
/// both users) run exactly once: only on the insert that actually created
/// the edge completing the pair. Re-liking is a no-op.
pub async fn like(
    pool: &PgPool,
    mailer: Mailer,
    actor_id: Uuid,
    target_id: Uuid,
) -> Res<LikeResponse> {
    if actor_id == target_id {
        return Err(AppError::BadRequest(
            "You cannot like your own profile".to_string(),
        ));
    }

    let me = db::profile::get_profile(pool, actor_id).await?;
    let target = db::profile::get_profile(pool, target_id)
        .await
        .map_err(|_| AppError::NotFound("Profile not found".to_string()))?;

    let inserted = db::matches::insert_like(pool, actor_id, target_id).await?;
    let mutual = db::matches::reverse_edge_exists(pool, actor_id, target_id).await?;

    if inserted && mutual {
        celebrate_match(pool, mailer, actor_id, target_id).await?;
    }

    Ok(LikeResponse {
        mutual,
        compatibility: scoring::compatibility(&me, &target),
    })
}

/// Mutual matches with the counterpart profile and score.
pub async fn list_matches(pool: &PgPool, user_id: Uuid) -> Res<Vec<ScoredProfile>> {
    let me = db::profile::get_profile(pool, user_id).await?;
    let ids = db::matches::list_mutual_ids(pool, user_id).await?;
    let profiles = db::profile::get_profiles_by_user_ids(pool, ids).await?;
    Ok(score_against(&me, profiles))
}

/// Outgoing likes that have not been reciprocated yet.
pub async fn list_pending_likes(pool: &PgPool, user_id: Uuid) -> Res<Vec<ScoredProfile>> {
    let me = db::profile::get_profile(pool, user_id).await?;
    let ids = db::matches::list_pending_target_ids(pool, user_id).await?;
    let profiles = db::profile::get_profiles_by_user_ids(pool, ids).await?;
    Ok(score_against(&me, profiles))
}

fn score_against(me: &Profile, profiles: Vec<Profile>) -> Vec<ScoredProfile> {
    profiles
        .into_iter()
        .map(|profile| {
            let compatibility = scoring::compatibility(me, &profile);
            ScoredProfile {
                profile,
                compatibility,
            }
        })
        .collect()
}

async fn celebrate_match(
    pool: &PgPool,
    mailer: Mailer,
    actor_id: Uuid,
    target_id: Uuid,
) -> Res<()> {
    let actor = db::user::get_user_by_id(pool, actor_id).await?;
    let target = db::user::get_user_by_id(pool, target_id).await?;

    for (user, counterpart) in [(&actor, &target), (&target, &actor)] {
        api_notifications::services::notify::match_found(
            pool,
            user.id,
            &counterpart.first_name,
        )
        .await?;

        let mailer = mailer.clone();
        let (to, name) = (user.email.clone(), counterpart.first_name.clone());
        mailer::spawn_mail("match email", async move {
            mailer.send_match_email(&to, &name).await
        });
    }

    log::info!("Mutual match between {} and {}", actor_id, target_id);
    Ok(())
}
