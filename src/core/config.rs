//! Engine configuration with documented constants
//!
//! All tuning numbers are collected here with explanations of their purpose
//! and how they interact with each other.

/// Configuration for the progression engine
///
/// The defaults define the intended pacing. Changing them will affect
/// how quickly players level and earn skill points.
#[derive(Debug, Clone)]
pub struct GameConfig {
    // === LEVEL CURVE ===
    /// Hard cap on player level
    ///
    /// XP keeps accumulating past the cap but the level no longer rises.
    pub max_level: u32,

    /// XP required to go from level 1 to level 2
    ///
    /// Each subsequent level costs `level_growth` times the previous one,
    /// so the curve is exponential: level N costs
    /// `floor(base_level_xp * level_growth^(N-1))`.
    pub base_level_xp: u64,

    /// Per-level cost growth factor
    ///
    /// At 1.5, reaching level 10 takes ~7.5k total XP and level 20 ~430k.
    /// Early levels arrive fast, late levels are a long grind.
    pub level_growth: f64,

    // === SKILL PROGRESSION ===
    /// Fraction of an XP award that also accrues to the tagged skill
    ///
    /// At 0.5, a 120 XP frontend award adds 60 XP to the frontend skill.
    pub skill_xp_share: f64,

    /// Skill XP per skill level
    ///
    /// Skill levels are linear, unlike the player level curve:
    /// `level = skill_xp / skill_xp_per_level + 1`.
    pub skill_xp_per_level: u64,

    // === NOTIFICATIONS ===
    /// Maximum buffered notifications before the oldest are dropped
    ///
    /// The store never blocks on a slow consumer; it just forgets.
    pub notification_backlog: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_level: 100,
            base_level_xp: 100,
            level_growth: 1.5,
            skill_xp_share: 0.5,
            skill_xp_per_level: 200,
            notification_backlog: 64,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.max_level == 0 {
            return Err("max_level must be at least 1".into());
        }

        if self.base_level_xp == 0 {
            return Err("base_level_xp must be positive".into());
        }

        // Growth below 1.0 would make later levels cheaper than earlier
        // ones and break the cumulative-threshold search.
        if self.level_growth < 1.0 {
            return Err(format!(
                "level_growth ({}) must be >= 1.0",
                self.level_growth
            ));
        }

        if !(0.0..=1.0).contains(&self.skill_xp_share) {
            return Err(format!(
                "skill_xp_share ({}) must be within 0.0..=1.0",
                self.skill_xp_share
            ));
        }

        if self.skill_xp_per_level == 0 {
            return Err("skill_xp_per_level must be positive".into());
        }

        Ok(())
    }
}
