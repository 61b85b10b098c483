//! The progression engine
//!
//! XP, levels, skill points, achievements: the rules that turn learning
//! activity into visible player progress. The pure pieces (level curve,
//! reward math, requirement evaluation, prerequisite graph) live in their
//! own modules; the store owns the state and applies them.

pub mod evaluator;
pub mod graph;
pub mod level;
pub mod player;
pub mod rewards;
pub mod store;

pub use evaluator::{evaluate, AchievementProgress, RequirementProgress};
pub use graph::{can_upgrade, check_upgrade, validate_acyclic, UpgradeError};
pub use level::{
    cumulative_xp_for_level, level_for_total_xp, next_level_progress, skill_level_for_xp,
    xp_required_for_level, LevelProgress,
};
pub use player::{PlayerAggregate, PlayerProfile, PlayerStats, QuestState, SkillState};
pub use rewards::{apply_multiplier, level_up_rewards, xp_with_bonus, Reward};
pub use store::{ClaimOutcome, ProgressionStore};
