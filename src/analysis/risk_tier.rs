//! Score classification into risk tiers and priorities.

use crate::config::{PriorityThresholds, TierThresholds};
use crate::models::{Priority, RiskTier};

/// Buckets a score into a risk tier.
///
/// With the default policy: below 30 is Low, 30 to 59 Medium, 60 and above High.
///
/// # Examples
///
/// ```
/// use attrition_engine::analysis::classify_tier;
/// use attrition_engine::config::TierThresholds;
/// use attrition_engine::models::RiskTier;
///
/// let tiers = TierThresholds::default();
/// assert_eq!(classify_tier(29, &tiers), RiskTier::Low);
/// assert_eq!(classify_tier(30, &tiers), RiskTier::Medium);
/// assert_eq!(classify_tier(60, &tiers), RiskTier::High);
/// ```
pub fn classify_tier(score: u32, tiers: &TierThresholds) -> RiskTier {
    if score < tiers.medium_from {
        RiskTier::Low
    } else if score < tiers.high_from {
        RiskTier::Medium
    } else {
        RiskTier::High
    }
}

/// Buckets a score into a retention or alert priority.
///
/// Scores below the high boundary are `Medium`; callers decide separately
/// whether such a score warrants a plan at all.
pub fn classify_priority(score: u32, priority: &PriorityThresholds) -> Priority {
    if score >= priority.urgent_from {
        Priority::Urgent
    } else if score >= priority.high_from {
        Priority::High
    } else {
        Priority::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries_are_exact() {
        let tiers = TierThresholds::default();
        assert_eq!(classify_tier(0, &tiers), RiskTier::Low);
        assert_eq!(classify_tier(29, &tiers), RiskTier::Low);
        assert_eq!(classify_tier(30, &tiers), RiskTier::Medium);
        assert_eq!(classify_tier(59, &tiers), RiskTier::Medium);
        assert_eq!(classify_tier(60, &tiers), RiskTier::High);
        assert_eq!(classify_tier(100, &tiers), RiskTier::High);
    }

    #[test]
    fn test_priority_boundaries_are_exact() {
        let priority = PriorityThresholds::default();
        assert_eq!(classify_priority(50, &priority), Priority::Medium);
        assert_eq!(classify_priority(59, &priority), Priority::Medium);
        assert_eq!(classify_priority(60, &priority), Priority::High);
        assert_eq!(classify_priority(74, &priority), Priority::High);
        assert_eq!(classify_priority(75, &priority), Priority::Urgent);
        assert_eq!(classify_priority(100, &priority), Priority::Urgent);
    }

    #[test]
    fn test_custom_tier_thresholds() {
        let tiers = TierThresholds {
            medium_from: 20,
            high_from: 40,
        };
        assert_eq!(classify_tier(19, &tiers), RiskTier::Low);
        assert_eq!(classify_tier(20, &tiers), RiskTier::Medium);
        assert_eq!(classify_tier(40, &tiers), RiskTier::High);
    }
}
