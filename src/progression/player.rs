//! The per-player state aggregate
//!
//! Everything the engine persists lives here. Every section carries
//! `#[serde(default)]` so partially written or older saves backfill with
//! defaults instead of failing to load.

use crate::core::types::{AchievementId, ClassId, NodeId, PlayerId, QuestId, SkillCategory, StatKey};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default class for a fresh profile
pub const DEFAULT_CLASS: &str = "frontend_wizard";

/// Aggregate statistics driving achievement requirements
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerStats {
    #[serde(default)]
    pub quests_completed: u64,
    #[serde(default)]
    pub challenges_solved: u64,
    #[serde(default)]
    pub lines_of_code: u64,
    #[serde(default)]
    pub bugs_fixed: u64,
    #[serde(default)]
    pub current_streak: u64,
    #[serde(default)]
    pub longest_streak: u64,
    #[serde(default)]
    pub last_active: Option<NaiveDate>,
    #[serde(default)]
    pub battles_won: u64,
    #[serde(default)]
    pub battles_lost: u64,
}

impl PlayerStats {
    /// Statistic value for an achievement requirement key
    pub fn value(&self, key: StatKey) -> u64 {
        match key {
            StatKey::QuestsCompleted => self.quests_completed,
            StatKey::ChallengesSolved => self.challenges_solved,
            StatKey::LinesOfCode => self.lines_of_code,
            StatKey::BugsFixed => self.bugs_fixed,
            StatKey::CurrentStreak => self.current_streak,
            StatKey::LongestStreak => self.longest_streak,
            StatKey::BattlesWon => self.battles_won,
        }
    }
}

/// Avatar configuration, one string per slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    pub head: String,
    pub body: String,
    pub accessory: String,
    pub theme: String,
}

impl Default for Avatar {
    fn default() -> Self {
        Self {
            head: "default".into(),
            body: "default".into(),
            accessory: "none".into(),
            theme: "classic".into(),
        }
    }
}

/// Player identity and top-level progression numbers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: PlayerId,
    #[serde(default)]
    pub username: String,
    pub level: u32,
    /// XP earned since profile creation, including spent-for-nothing XP.
    /// Mirrors `total_xp` today; kept separate so a future prestige reset
    /// can zero one without the other.
    pub xp: u64,
    pub total_xp: u64,
    pub class_id: ClassId,
    #[serde(default)]
    pub avatar: Avatar,
    #[serde(default)]
    pub stats: PlayerStats,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            id: PlayerId::new(),
            username: String::new(),
            level: 1,
            xp: 0,
            total_xp: 0,
            class_id: DEFAULT_CLASS.into(),
            avatar: Avatar::default(),
            stats: PlayerStats::default(),
        }
    }
}

/// Per-skill progression state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillState {
    pub level: u32,
    pub xp: u64,
    /// Unspent skill points for this tree
    pub points: u32,
}

impl Default for SkillState {
    fn default() -> Self {
        Self {
            level: 1,
            xp: 0,
            points: 0,
        }
    }
}

/// Where a quest currently sits for this player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestState {
    Available,
    Active,
    Completed,
    Unknown,
}

/// An accepted quest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveQuest {
    pub id: QuestId,
    pub started_at: DateTime<Utc>,
}

/// A finished quest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedQuest {
    pub id: QuestId,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

/// Quest bookkeeping: each quest id is in exactly one list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestLog {
    #[serde(default)]
    pub available: Vec<QuestId>,
    #[serde(default)]
    pub active: Vec<ActiveQuest>,
    #[serde(default)]
    pub completed: Vec<CompletedQuest>,
}

impl QuestLog {
    pub fn state_of(&self, id: &str) -> QuestState {
        if self.completed.iter().any(|q| q.id == id) {
            QuestState::Completed
        } else if self.active.iter().any(|q| q.id == id) {
            QuestState::Active
        } else if self.available.iter().any(|q| q == id) {
            QuestState::Available
        } else {
            QuestState::Unknown
        }
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.state_of(id) == QuestState::Completed
    }
}

/// One-time achievement unlock records
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchievementLog {
    #[serde(default)]
    pub unlocked: HashMap<AchievementId, DateTime<Utc>>,
}

impl AchievementLog {
    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.contains_key(id)
    }
}

/// Cosmetics the player owns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    pub themes: Vec<String>,
    #[serde(default)]
    pub avatar_parts: Vec<String>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            themes: vec!["classic".into()],
            avatar_parts: Vec::new(),
        }
    }
}

impl Inventory {
    pub fn add_theme(&mut self, theme: String) {
        if !self.themes.contains(&theme) {
            self.themes.push(theme);
        }
    }

    pub fn add_avatar_part(&mut self, part: String) {
        if !self.avatar_parts.contains(&part) {
            self.avatar_parts.push(part);
        }
    }
}

/// Battle-arena record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleRecord {
    pub wins: u64,
    pub losses: u64,
    pub rating: i32,
    pub best_rating: i32,
}

impl Default for BattleRecord {
    fn default() -> Self {
        Self {
            wins: 0,
            losses: 0,
            rating: 1000,
            best_rating: 1000,
        }
    }
}

/// Player-controlled engine preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Persist the aggregate after every mutation
    pub autosave: bool,
    /// Emit user-facing notifications
    pub notifications: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            autosave: true,
            notifications: true,
        }
    }
}

/// The whole persisted state for one player
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerAggregate {
    #[serde(default)]
    pub player: PlayerProfile,
    #[serde(default)]
    pub skills: HashMap<SkillCategory, SkillState>,
    /// Current upgrade level per skill-tree node (absent = 0)
    #[serde(default)]
    pub skill_nodes: HashMap<NodeId, u32>,
    #[serde(default)]
    pub quest_log: QuestLog,
    #[serde(default)]
    pub achievement_log: AchievementLog,
    #[serde(default)]
    pub inventory: Inventory,
    #[serde(default)]
    pub battle_record: BattleRecord,
    #[serde(default)]
    pub preferences: Preferences,
}

impl PlayerAggregate {
    /// Fresh aggregate with every skill at level 1
    pub fn fresh() -> Self {
        let mut aggregate = Self::default();
        for cat in SkillCategory::ALL {
            aggregate.skills.insert(cat, SkillState::default());
        }
        aggregate
    }

    /// Skill state, materializing the default for sparse saves
    pub fn skill_mut(&mut self, cat: SkillCategory) -> &mut SkillState {
        self.skills.entry(cat).or_default()
    }

    pub fn skill(&self, cat: SkillCategory) -> SkillState {
        self.skills.get(&cat).cloned().unwrap_or_default()
    }
}
