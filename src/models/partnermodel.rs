use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const BADGE_FIRST_SUCCESS: &str = "First Success";
pub const BADGE_TOP_PARTNER: &str = "Top Partner";

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct ReferralPartner {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub badges: Vec<String>,
    pub total_referrals: i32,
    pub successful_referrals: i32,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Badges a partner has earned at a given success count. The storage layer appends
/// them idempotently, so calling this with an already-awarded badge is harmless.
pub fn badges_for_success_count(successful_referrals: i32) -> Vec<&'static str> {
    let mut badges = Vec::new();
    if successful_referrals >= 1 {
        badges.push(BADGE_FIRST_SUCCESS);
    }
    if successful_referrals >= 5 {
        badges.push(BADGE_TOP_PARTNER);
    }
    badges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_badges_before_first_success() {
        assert!(badges_for_success_count(0).is_empty());
    }

    #[test]
    fn first_success_at_one() {
        assert_eq!(badges_for_success_count(1), vec![BADGE_FIRST_SUCCESS]);
        assert_eq!(badges_for_success_count(4), vec![BADGE_FIRST_SUCCESS]);
    }

    #[test]
    fn top_partner_at_five() {
        assert_eq!(
            badges_for_success_count(5),
            vec![BADGE_FIRST_SUCCESS, BADGE_TOP_PARTNER]
        );
        assert_eq!(
            badges_for_success_count(100),
            vec![BADGE_FIRST_SUCCESS, BADGE_TOP_PARTNER]
        );
    }
}
