//! Reward calculation
//!
//! Class multipliers scale XP awards; level-ups grant skill points and
//! milestone cosmetics. Rewards are a closed variant type - one case per
//! kind, each carrying only what it needs.

use crate::content::CharacterClassDef;
use crate::core::types::SkillCategory;
use serde::{Deserialize, Serialize};

/// Something a player can be granted outside of raw XP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reward {
    /// A cosmetic UI theme, added to the inventory
    Theme(String),
    /// An avatar part, added to the inventory
    AvatarPart(String),
    /// Unspent skill points, granted to every skill
    SkillPoints(u32),
}

/// Apply a class multiplier to a base XP amount, truncating down
pub fn apply_multiplier(base: u64, multiplier: f64) -> u64 {
    (base as f64 * multiplier).floor() as u64
}

/// The multiplied XP for an award tagged with `skill` under `class`
///
/// A missing class or an untagged award multiplies by 1.0.
pub fn xp_with_bonus(base: u64, skill: Option<SkillCategory>, class: Option<&CharacterClassDef>) -> u64 {
    let multiplier = class.map(|c| c.multiplier(skill)).unwrap_or(1.0);
    apply_multiplier(base, multiplier)
}

/// Skill points granted on reaching `level`
pub fn skill_points_for_level(level: u32) -> u32 {
    level / 5 + 1
}

/// Rewards granted on reaching `level`
///
/// Every level grants skill points; every 5th adds a theme and every 10th
/// an avatar accessory.
pub fn level_up_rewards(level: u32) -> Vec<Reward> {
    let mut rewards = Vec::new();

    if level % 5 == 0 {
        rewards.push(Reward::Theme(format!("level_{}_theme", level)));
    }

    if level % 10 == 0 {
        rewards.push(Reward::AvatarPart(format!("milestone_{}_accessory", level)));
    }

    rewards.push(Reward::SkillPoints(skill_points_for_level(level)));

    rewards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin_classes;

    #[test]
    fn test_multiplier_floors() {
        assert_eq!(apply_multiplier(100, 1.2), 120);
        assert_eq!(apply_multiplier(55, 1.2), 66);
        assert_eq!(apply_multiplier(33, 1.5), 49);
        assert_eq!(apply_multiplier(100, 1.0), 100);
    }

    #[test]
    fn test_untagged_award_gets_no_bonus() {
        let classes = builtin_classes();
        let wizard = classes.iter().find(|c| c.id == "frontend_wizard").unwrap();

        assert_eq!(xp_with_bonus(100, Some(SkillCategory::Frontend), Some(wizard)), 120);
        assert_eq!(xp_with_bonus(100, None, Some(wizard)), 100);
        assert_eq!(xp_with_bonus(100, Some(SkillCategory::Frontend), None), 100);
    }

    #[test]
    fn test_level_five_rewards() {
        let rewards = level_up_rewards(5);
        assert!(rewards.contains(&Reward::Theme("level_5_theme".into())));
        assert!(rewards.contains(&Reward::SkillPoints(2)));
        assert!(!rewards.iter().any(|r| matches!(r, Reward::AvatarPart(_))));
    }

    #[test]
    fn test_level_ten_rewards() {
        let rewards = level_up_rewards(10);
        assert!(rewards.contains(&Reward::Theme("level_10_theme".into())));
        assert!(rewards.contains(&Reward::AvatarPart("milestone_10_accessory".into())));
        assert!(rewards.contains(&Reward::SkillPoints(3)));
    }

    #[test]
    fn test_off_milestone_level_grants_points_only() {
        let rewards = level_up_rewards(3);
        assert_eq!(rewards, vec![Reward::SkillPoints(1)]);
    }
}
