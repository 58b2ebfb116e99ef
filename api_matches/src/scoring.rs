use std::collections::HashSet;

use common::misc::NoiseLevel;
use db::models::profile::Profile;
use serde::Serialize;

// Per-category point budgets. They sum to 100, so two identical complete
// profiles score exactly 100.
pub const INTERESTS_MAX: u32 = 40;
pub const LIFESTYLE_MAX: u32 = 30;
pub const AGE_MAX: u32 = 15;
pub const NOISE_MAX: u32 = 15;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategoryScore {
    pub points: u32,
    pub max: u32,
}

/// Compatibility percentage with its per-category breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct Compatibility {
    pub total: u32,
    pub interests: CategoryScore,
    pub lifestyle: CategoryScore,
    pub age: CategoryScore,
    pub noise: CategoryScore,
}

/// Scores two profiles against each other. Pure and symmetric:
/// `compatibility(a, b)` always equals `compatibility(b, a)`.
pub fn compatibility(a: &Profile, b: &Profile) -> Compatibility {
    let interests = CategoryScore {
        points: overlap_points(&a.interests, &b.interests, INTERESTS_MAX),
        max: INTERESTS_MAX,
    };
    let lifestyle = CategoryScore {
        points: overlap_points(&a.lifestyle_tags, &b.lifestyle_tags, LIFESTYLE_MAX),
        max: LIFESTYLE_MAX,
    };
    let age = CategoryScore {
        points: age_points(a.age, b.age),
        max: AGE_MAX,
    };
    let noise = CategoryScore {
        points: noise_points(a.noise_level.as_deref(), b.noise_level.as_deref()),
        max: NOISE_MAX,
    };

    let total = (interests.points + lifestyle.points + age.points + noise.points).min(100);

    Compatibility {
        total,
        interests,
        lifestyle,
        age,
        noise,
    }
}

/// Jaccard overlap of the case-folded tag sets, scaled to the category
/// budget with half-up rounding. Two empty sets are identical, so they
/// take the full budget.
fn overlap_points(a: &[String], b: &[String], max: u32) -> u32 {
    let set_a: HashSet<String> = a.iter().map(|s| s.trim().to_lowercase()).collect();
    let set_b: HashSet<String> = b.iter().map(|s| s.trim().to_lowercase()).collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return max;
    }
    let intersection = set_a.intersection(&set_b).count();

    ((max as f64 * intersection as f64) / union as f64).round() as u32
}

/// Thresholded age proximity. An unknown age on either side earns nothing.
fn age_points(a: Option<i32>, b: Option<i32>) -> u32 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0;
    };
    match (a - b).abs() {
        0..=2 => AGE_MAX,
        3..=5 => 10,
        6..=10 => 5,
        _ => 0,
    }
}

/// Ordinal noise-tolerance match: exact level takes the budget, adjacent
/// levels take partial credit, opposite ends (or unparseable input) none.
fn noise_points(a: Option<&str>, b: Option<&str>) -> u32 {
    let (Some(a), Some(b)) = (
        a.and_then(NoiseLevel::parse),
        b.and_then(NoiseLevel::parse),
    ) else {
        return 0;
    };
    match (a.rank() - b.rank()).abs() {
        0 => NOISE_MAX,
        1 => 7,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use uuid::Uuid;

    fn profile(
        age: Option<i32>,
        noise: Option<&str>,
        interests: &[&str],
        lifestyle: &[&str],
    ) -> Profile {
        let epoch = DateTime::from_timestamp(0, 0).unwrap().naive_utc();
        Profile {
            user_id: Uuid::new_v4(),
            role: "tenant".to_string(),
            age,
            bio: None,
            budget: Some(500),
            noise_level: noise.map(|s| s.to_string()),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            lifestyle_tags: lifestyle.iter().map(|s| s.to_string()).collect(),
            photo_path: None,
            onboarding_completed: true,
            verified: false,
            created_at: epoch,
            updated_at: epoch,
        }
    }

    #[test]
    fn identical_complete_profiles_score_100() {
        let a = profile(
            Some(28),
            Some("bajo"),
            &["cocina", "yoga"],
            &["ordenado", "madrugador"],
        );
        let b = profile(
            Some(28),
            Some("bajo"),
            &["cocina", "yoga"],
            &["ordenado", "madrugador"],
        );
        assert_eq!(compatibility(&a, &b).total, 100);
    }

    #[test]
    fn fully_mismatched_profiles_score_0() {
        let a = profile(Some(20), Some("bajo"), &["cocina"], &["fiestas"]);
        let b = profile(Some(45), Some("alto"), &["escalada"], &["teletrabajo"]);
        let score = compatibility(&a, &b);
        assert_eq!(score.interests.points, 0);
        assert_eq!(score.lifestyle.points, 0);
        assert_eq!(score.age.points, 0);
        assert_eq!(score.noise.points, 0);
        assert_eq!(score.total, 0);
    }

    #[test]
    fn score_is_symmetric() {
        let a = profile(Some(30), Some("medio"), &["cocina", "yoga"], &["mascotas"]);
        let b = profile(Some(36), Some("bajo"), &["cocina", "running"], &[]);
        assert_eq!(compatibility(&a, &b).total, compatibility(&b, &a).total);
    }

    #[test]
    fn shared_interest_never_lowers_the_interests_score() {
        let base_a = profile(Some(30), Some("bajo"), &["cocina"], &[]);
        let base_b = profile(Some(30), Some("bajo"), &["running"], &[]);
        let before = compatibility(&base_a, &base_b).interests.points;

        let grown_a = profile(Some(30), Some("bajo"), &["cocina", "yoga"], &[]);
        let grown_b = profile(Some(30), Some("bajo"), &["running", "yoga"], &[]);
        let after = compatibility(&grown_a, &grown_b).interests.points;

        assert!(after >= before);
    }

    #[test]
    fn tag_comparison_ignores_case_and_whitespace() {
        let a = profile(Some(30), Some("bajo"), &["Cocina ", "YOGA"], &[]);
        let b = profile(Some(30), Some("bajo"), &["cocina", "yoga"], &[]);
        assert_eq!(compatibility(&a, &b).interests.points, INTERESTS_MAX);
    }

    #[test]
    fn reference_pair_is_reproducible() {
        // cocina/yoga vs cocina/running share 1 of 3 distinct interests,
        // are one year apart and agree on low noise.
        let a = profile(Some(30), Some("Bajo"), &["cocina", "yoga"], &[]);
        let b = profile(Some(31), Some("Bajo"), &["cocina", "running"], &[]);

        let score = compatibility(&a, &b);
        assert_eq!(score.interests.points, 13); // 40 * 1/3, rounded
        assert_eq!(score.lifestyle.points, LIFESTYLE_MAX);
        assert_eq!(score.age.points, AGE_MAX);
        assert_eq!(score.noise.points, NOISE_MAX);
        assert_eq!(score.total, 73);
    }

    #[test]
    fn adjacent_noise_levels_earn_partial_credit() {
        let a = profile(Some(30), Some("bajo"), &[], &[]);
        let b = profile(Some(30), Some("medio"), &[], &[]);
        assert_eq!(compatibility(&a, &b).noise.points, 7);
    }

    #[test]
    fn missing_age_earns_nothing() {
        let a = profile(None, Some("bajo"), &[], &[]);
        let b = profile(Some(30), Some("bajo"), &[], &[]);
        assert_eq!(compatibility(&a, &b).age.points, 0);
    }

    #[test]
    fn age_proximity_is_thresholded() {
        let base = |age| profile(Some(age), None, &[], &[]);
        assert_eq!(compatibility(&base(30), &base(32)).age.points, 15);
        assert_eq!(compatibility(&base(30), &base(35)).age.points, 10);
        assert_eq!(compatibility(&base(30), &base(40)).age.points, 5);
        assert_eq!(compatibility(&base(30), &base(41)).age.points, 0);
    }
}
