//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

/// String identifiers for content definitions.
///
/// Content packs are authored as data (TOML or built-in tables), so these
/// stay strings rather than enums - a pack can add a class or quest the
/// engine has never seen.
pub type ClassId = String;
pub type QuestId = String;
pub type AchievementId = String;
pub type NodeId = String;

/// Skill category enumeration
///
/// The fixed set of skill trees a player progresses through. XP awards can
/// be tagged with one of these; class bonuses are keyed by them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Ai,
    Mobile,
    Devops,
    Security,
    Algorithms,
    Databases,
}

impl SkillCategory {
    /// All categories, in display order
    pub const ALL: [SkillCategory; 8] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Ai,
        SkillCategory::Mobile,
        SkillCategory::Devops,
        SkillCategory::Security,
        SkillCategory::Algorithms,
        SkillCategory::Databases,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Ai => "ai",
            SkillCategory::Mobile => "mobile",
            SkillCategory::Devops => "devops",
            SkillCategory::Security => "security",
            SkillCategory::Algorithms => "algorithms",
            SkillCategory::Databases => "databases",
        }
    }

    pub fn parse(s: &str) -> Option<SkillCategory> {
        match s {
            "frontend" => Some(SkillCategory::Frontend),
            "backend" => Some(SkillCategory::Backend),
            "ai" => Some(SkillCategory::Ai),
            "mobile" => Some(SkillCategory::Mobile),
            "devops" => Some(SkillCategory::Devops),
            "security" => Some(SkillCategory::Security),
            "algorithms" => Some(SkillCategory::Algorithms),
            "databases" => Some(SkillCategory::Databases),
            _ => None,
        }
    }
}

/// Achievement rarity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

impl Rarity {
    pub fn parse(s: &str) -> Option<Rarity> {
        match s {
            "common" => Some(Rarity::Common),
            "uncommon" => Some(Rarity::Uncommon),
            "rare" => Some(Rarity::Rare),
            "epic" => Some(Rarity::Epic),
            "legendary" => Some(Rarity::Legendary),
            "mythic" => Some(Rarity::Mythic),
            _ => None,
        }
    }
}

/// Keys into the player statistics block, used by achievement requirements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKey {
    QuestsCompleted,
    ChallengesSolved,
    LinesOfCode,
    BugsFixed,
    CurrentStreak,
    LongestStreak,
    BattlesWon,
}

impl StatKey {
    pub fn parse(s: &str) -> Option<StatKey> {
        match s {
            "quests_completed" => Some(StatKey::QuestsCompleted),
            "challenges_solved" => Some(StatKey::ChallengesSolved),
            "lines_of_code" => Some(StatKey::LinesOfCode),
            "bugs_fixed" => Some(StatKey::BugsFixed),
            "current_streak" => Some(StatKey::CurrentStreak),
            "longest_streak" => Some(StatKey::LongestStreak),
            "battles_won" => Some(StatKey::BattlesWon),
            _ => None,
        }
    }
}

/// Avatar customization slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarSlot {
    Head,
    Body,
    Accessory,
    Theme,
}
