use common::{error::Res, misc::NoiseLevel};
use db::{dtos::profile::ProfileUpdateRequest, models::profile::QuizAnswer};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::profile::QuizAnswerInput;

/// Persists quiz answers and mirrors the matching-relevant ones into the
/// profile so the scorer sees them without a second submission step.
pub async fn submit_answers(
    pool: &PgPool,
    user_id: Uuid,
    answers: Vec<QuizAnswerInput>,
) -> Res<Vec<QuizAnswer>> {
    for answer in &answers {
        db::profile::upsert_quiz_answer(
            pool,
            user_id,
            answer.question_key.trim().to_string(),
            answer.answer.trim().to_string(),
        )
        .await?;
    }

    let mirror = mirror_into_profile(&answers);
    if mirror_has_updates(&mirror) {
        db::profile::update_profile(pool, user_id, mirror).await?;
    }

    db::profile::get_quiz_answers(pool, user_id).await
}

pub async fn get_answers(pool: &PgPool, user_id: Uuid) -> Res<Vec<QuizAnswer>> {
    db::profile::get_quiz_answers(pool, user_id).await
}

/// Known question keys map onto profile attributes; everything else stays
/// quiz-only. Comma-separated answers become tag lists.
fn mirror_into_profile(answers: &[QuizAnswerInput]) -> ProfileUpdateRequest {
    let mut update = ProfileUpdateRequest::default();

    for answer in answers {
        match answer.question_key.trim() {
            "interests" => update.interests = Some(split_tags(&answer.answer)),
            "lifestyle" | "lifestyle_tags" => {
                update.lifestyle_tags = Some(split_tags(&answer.answer))
            }
            "noise_level" => {
                if let Some(level) = NoiseLevel::parse(&answer.answer) {
                    update.noise_level = Some(level.as_str().to_string());
                }
            }
            _ => {}
        }
    }

    update
}

fn mirror_has_updates(update: &ProfileUpdateRequest) -> bool {
    update.interests.is_some() || update.lifestyle_tags.is_some() || update.noise_level.is_some()
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(key: &str, value: &str) -> QuizAnswerInput {
        QuizAnswerInput {
            question_key: key.to_string(),
            answer: value.to_string(),
        }
    }

    #[test]
    fn matching_answers_are_mirrored() {
        let update = mirror_into_profile(&[
            answer("interests", "cocina, yoga , "),
            answer("noise_level", "Bajo"),
            answer("favorite_color", "azul"),
        ]);

        assert_eq!(
            update.interests,
            Some(vec!["cocina".to_string(), "yoga".to_string()])
        );
        assert_eq!(update.noise_level, Some("bajo".to_string()));
        assert!(update.lifestyle_tags.is_none());
    }

    #[test]
    fn unknown_noise_answers_are_not_mirrored() {
        let update = mirror_into_profile(&[answer("noise_level", "a veces")]);
        assert!(update.noise_level.is_none());
        assert!(!mirror_has_updates(&update));
    }
}
