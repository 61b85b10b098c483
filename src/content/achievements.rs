//! Achievement definitions
//!
//! An achievement is a declarative goal: a map of statistic thresholds plus
//! a one-time XP reward. Unlock records live in the player aggregate, not
//! here.

use crate::core::types::{AchievementId, Rarity, StatKey};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Static definition of an achievement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub rarity: Rarity,
    /// Statistic thresholds that must all be reached
    pub requirements: HashMap<StatKey, u64>,
    /// XP granted when the achievement is claimed
    pub xp_reward: u64,
}

/// The achievement catalog shipped with the platform
pub fn builtin_achievements() -> Vec<AchievementDef> {
    vec![
        AchievementDef {
            id: "first_quest".into(),
            name: "First Steps".into(),
            description: "Complete your first quest".into(),
            icon: "🌟".into(),
            rarity: Rarity::Common,
            requirements: HashMap::from([(StatKey::QuestsCompleted, 1)]),
            xp_reward: 50,
        },
        AchievementDef {
            id: "quest_veteran".into(),
            name: "Quest Veteran".into(),
            description: "Complete 10 quests".into(),
            icon: "🏅".into(),
            rarity: Rarity::Uncommon,
            requirements: HashMap::from([(StatKey::QuestsCompleted, 10)]),
            xp_reward: 200,
        },
        AchievementDef {
            id: "code_warrior".into(),
            name: "Code Warrior".into(),
            description: "Solve 10 coding challenges".into(),
            icon: "⚔️".into(),
            rarity: Rarity::Uncommon,
            requirements: HashMap::from([(StatKey::ChallengesSolved, 10)]),
            xp_reward: 200,
        },
        AchievementDef {
            id: "syntax_master".into(),
            name: "Syntax Master".into(),
            description: "Write 1000 lines of code".into(),
            icon: "🎯".into(),
            rarity: Rarity::Rare,
            requirements: HashMap::from([(StatKey::LinesOfCode, 1000)]),
            xp_reward: 150,
        },
        AchievementDef {
            id: "bug_hunter".into(),
            name: "Bug Hunter".into(),
            description: "Fix 50 bugs".into(),
            icon: "🐛".into(),
            rarity: Rarity::Rare,
            requirements: HashMap::from([(StatKey::BugsFixed, 50)]),
            xp_reward: 100,
        },
        AchievementDef {
            id: "streak_keeper".into(),
            name: "Streak Keeper".into(),
            description: "Code for 7 consecutive days".into(),
            icon: "🔥".into(),
            rarity: Rarity::Uncommon,
            requirements: HashMap::from([(StatKey::CurrentStreak, 7)]),
            xp_reward: 300,
        },
        AchievementDef {
            id: "iron_will".into(),
            name: "Iron Will".into(),
            description: "Keep a 30 day coding streak".into(),
            icon: "💪".into(),
            rarity: Rarity::Epic,
            requirements: HashMap::from([(StatKey::LongestStreak, 30)]),
            xp_reward: 800,
        },
        AchievementDef {
            id: "arena_gladiator".into(),
            name: "Arena Gladiator".into(),
            description: "Win 10 battle-arena matches".into(),
            icon: "🏟️".into(),
            rarity: Rarity::Epic,
            requirements: HashMap::from([(StatKey::BattlesWon, 10)]),
            xp_reward: 400,
        },
        AchievementDef {
            id: "renaissance_coder".into(),
            name: "Renaissance Coder".into(),
            description: "Complete 25 quests, solve 25 challenges and fix 25 bugs".into(),
            icon: "💎".into(),
            rarity: Rarity::Legendary,
            requirements: HashMap::from([
                (StatKey::QuestsCompleted, 25),
                (StatKey::ChallengesSolved, 25),
                (StatKey::BugsFixed, 25),
            ]),
            xp_reward: 1000,
        },
    ]
}
