use chrono::{Duration, Utc};
use common::error::Res;
use db::models::referral::ReferralCode;
use rand::Rng;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::referral::ReferralStats;

/// Unambiguous uppercase alphabet (no I/O/0/1) for codes people type
/// off flyers.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const CODE_LENGTH: usize = 8;

pub fn generate_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}

/// Returns the caller's active code, creating one on first use.
pub async fn issue_code(pool: &PgPool, ambassador_id: Uuid) -> Res<ReferralCode> {
    if let Some(existing) = db::referral::get_active_code_by_ambassador(pool, ambassador_id).await?
    {
        return Ok(existing);
    }

    // regenerate on the (unlikely) unique-violation collision
    loop {
        let code = generate_code();
        if db::referral::get_code(pool, code.clone()).await?.is_some() {
            continue;
        }
        return db::referral::insert_code(pool, ambassador_id, code).await;
    }
}

pub async fn stats(pool: &PgPool, ambassador_id: Uuid) -> Res<Option<ReferralStats>> {
    let Some(code) = db::referral::get_active_code_by_ambassador(pool, ambassador_id).await? else {
        return Ok(None);
    };

    let total = db::referral::count_attributions(pool, code.id).await?;
    let since = (Utc::now() - Duration::days(30)).naive_utc();
    let recent = db::referral::count_attributions_since(pool, code.id, since).await?;

    Ok(Some(ReferralStats {
        code: code.code,
        total_signups: total,
        signups_last_30_days: recent,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_have_fixed_length_and_alphabet() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn codes_avoid_ambiguous_characters() {
        for banned in ['I', 'O', '0', '1'] {
            assert!(!CODE_ALPHABET.contains(&(banned as u8)));
        }
    }
}
