//! Level curve
//!
//! Player levels follow an exponential curve; skill levels are linear.
//! Everything here is pure arithmetic over the injected [`GameConfig`].

use crate::core::config::GameConfig;
use serde::{Deserialize, Serialize};

/// XP needed to advance from `level` to `level + 1`
///
/// `floor(base * growth^(level-1))`. Level 1 to 2 costs the base amount.
pub fn xp_required_for_level(level: u32, cfg: &GameConfig) -> u64 {
    let cost = cfg.base_level_xp as f64 * cfg.level_growth.powi(level as i32 - 1);
    cost.floor() as u64
}

/// Total XP needed to have reached `level` from a fresh profile
pub fn cumulative_xp_for_level(level: u32, cfg: &GameConfig) -> u64 {
    (1..level).map(|l| xp_required_for_level(l, cfg)).sum()
}

/// Level for a lifetime XP total, capped at `max_level`
///
/// Accumulates per-level costs from level 1 upward until the running total
/// exceeds `total_xp`. Zero XP is level 1.
pub fn level_for_total_xp(total_xp: u64, cfg: &GameConfig) -> u32 {
    let mut level = 1;
    let mut required = 0u64;

    while level < cfg.max_level {
        required += xp_required_for_level(level, cfg);
        if total_xp < required {
            break;
        }
        level += 1;
    }

    level
}

/// Skill level for accumulated skill XP (linear)
pub fn skill_level_for_xp(skill_xp: u64, cfg: &GameConfig) -> u32 {
    (skill_xp / cfg.skill_xp_per_level) as u32 + 1
}

/// Progress within the current level, for progress-bar display
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LevelProgress {
    /// XP earned since the current level began
    pub into_level: u64,
    /// XP the current level costs in total
    pub required: u64,
    /// 0.0..=100.0
    pub percent: f64,
}

/// Progress toward the next level for a player at `level` with `total_xp`
pub fn next_level_progress(level: u32, total_xp: u64, cfg: &GameConfig) -> LevelProgress {
    let floor = cumulative_xp_for_level(level, cfg);
    let required = xp_required_for_level(level, cfg);
    let into_level = total_xp.saturating_sub(floor);
    let percent = if required == 0 {
        100.0
    } else {
        (into_level as f64 / required as f64 * 100.0).min(100.0)
    };

    LevelProgress {
        into_level,
        required,
        percent,
    }
}
