//! Achievement requirement evaluation
//!
//! Compares player statistics against an achievement's declarative
//! thresholds. Completion requires every requirement to be individually
//! satisfied. The weighted-sum figure is kept only for display as
//! `overall_percent` - it can reach 100 while a single
//! requirement is still short, so it must never gate a claim.

use crate::content::AchievementDef;
use crate::core::types::StatKey;
use crate::progression::player::PlayerStats;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Progress toward one requirement
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RequirementProgress {
    /// Current statistic value, capped at the threshold
    pub current: u64,
    pub threshold: u64,
    /// 0.0..=100.0
    pub percent: f64,
}

impl RequirementProgress {
    pub fn satisfied(&self) -> bool {
        self.current >= self.threshold
    }
}

/// Evaluation result for one achievement against one player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementProgress {
    pub per_requirement: HashMap<StatKey, RequirementProgress>,
    /// Display-only weighted sum: sum(current) / sum(threshold)
    pub overall_percent: f64,
    /// True iff every requirement is satisfied
    pub is_complete: bool,
}

/// Evaluate an achievement definition against current player statistics
pub fn evaluate(def: &AchievementDef, stats: &PlayerStats) -> AchievementProgress {
    let mut per_requirement = HashMap::new();
    let mut total_current = 0u64;
    let mut total_threshold = 0u64;
    let mut is_complete = true;

    for (&key, &threshold) in &def.requirements {
        let current = stats.value(key).min(threshold);
        let percent = if threshold == 0 {
            100.0
        } else {
            (current as f64 / threshold as f64 * 100.0).min(100.0)
        };

        total_current += current;
        total_threshold += threshold;
        is_complete &= current >= threshold;

        per_requirement.insert(
            key,
            RequirementProgress {
                current,
                threshold,
                percent,
            },
        );
    }

    let overall_percent = if total_threshold == 0 {
        100.0
    } else {
        (total_current as f64 / total_threshold as f64 * 100.0).min(100.0)
    };

    AchievementProgress {
        per_requirement,
        overall_percent,
        is_complete,
    }
}
