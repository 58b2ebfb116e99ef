use std::collections::{HashMap, HashSet};

use common::{
    error::{AppError, Res},
    misc::Role,
};
use db::{dtos::onboarding::OnboardingStepUpsert, models::profile::Profile};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    dtos::onboarding::{OnboardingOverview, StepStatus, StepSubmitRequest, StepSubmitResponse},
    steps,
};

/// The caller's step catalog merged with stored progress.
pub async fn overview(pool: &PgPool, user_id: Uuid) -> Res<OnboardingOverview> {
    let profile = db::profile::get_profile(pool, user_id).await?;
    let role = Role::from_str(&profile.role)?;
    let progress = db::onboarding::get_progress(pool, user_id, profile.role.clone()).await?;

    let mut stored: HashMap<String, (bool, serde_json::Value)> = progress
        .into_iter()
        .map(|p| (p.step, (p.completed, p.payload)))
        .collect();
    let completed: HashSet<String> = stored
        .iter()
        .filter(|(_, (done, _))| *done)
        .map(|(step, _)| step.clone())
        .collect();

    let steps: Vec<StepStatus> = steps::catalog_for(role)
        .iter()
        .map(|spec| {
            let (completed, payload) = match stored.remove(spec.id) {
                Some((done, payload)) => (done, Some(payload)),
                None => (false, None),
            };
            StepStatus {
                id: spec.id,
                required_fields: spec.required_fields,
                completed,
                payload,
            }
        })
        .collect();

    let current_step = steps::next_step(role, &completed);

    Ok(OnboardingOverview {
        role: profile.role,
        steps,
        current_step,
        all_steps_completed: current_step.is_none(),
    })
}

/// Validates and stores one step submission. A payload missing required
/// fields leaves stored progress untouched and does not advance.
pub async fn submit_step(
    pool: &PgPool,
    user_id: Uuid,
    req: StepSubmitRequest,
) -> Res<StepSubmitResponse> {
    let profile = db::profile::get_profile(pool, user_id).await?;
    let role = Role::from_str(&profile.role)?;

    let spec = steps::find_step(role, &req.step).ok_or_else(|| {
        AppError::BadRequest(format!("Unknown onboarding step: {}", req.step))
    })?;

    let missing = steps::missing_fields(spec, &req.payload);
    if !missing.is_empty() {
        return Err(AppError::BadRequest(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let progress = db::onboarding::upsert_step(
        pool,
        OnboardingStepUpsert {
            user_id,
            role: profile.role.clone(),
            step: req.step,
            payload: req.payload,
        },
    )
    .await?;

    let stored = db::onboarding::get_progress(pool, user_id, profile.role).await?;
    let completed: HashSet<String> = stored
        .into_iter()
        .filter(|p| p.completed)
        .map(|p| p.step)
        .collect();

    Ok(StepSubmitResponse {
        progress,
        next_step: steps::next_step(role, &completed),
    })
}

/// Finishes the wizard: every catalog step must be stored as completed,
/// then the profile completion gate applies.
pub async fn complete(pool: &PgPool, user_id: Uuid) -> Res<Profile> {
    let profile = db::profile::get_profile(pool, user_id).await?;
    let role = Role::from_str(&profile.role)?;

    let stored = db::onboarding::get_progress(pool, user_id, profile.role.clone()).await?;
    let completed: HashSet<String> = stored
        .into_iter()
        .filter(|p| p.completed)
        .map(|p| p.step)
        .collect();

    if let Some(pending) = steps::next_step(role, &completed) {
        return Err(AppError::BadRequest(format!(
            "Step '{}' is still pending",
            pending
        )));
    }

    api_profiles::services::profile::complete_profile(pool, user_id).await
}
