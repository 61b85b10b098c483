//! Character class definitions
//!
//! A class grants XP multipliers for a few skill categories and unlocks at
//! a fixed player level. The player has exactly one active class.

use crate::core::types::{ClassId, SkillCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Definition of a character class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterClassDef {
    pub id: ClassId,
    pub name: String,
    pub description: String,
    pub icon: String,
    /// Player level at which this class becomes selectable
    pub unlock_level: u32,
    /// XP multipliers per skill category (absent = 1.0)
    pub bonuses: HashMap<SkillCategory, f64>,
}

impl CharacterClassDef {
    /// Multiplier applied to XP awards tagged with `skill`
    pub fn multiplier(&self, skill: Option<SkillCategory>) -> f64 {
        skill
            .and_then(|s| self.bonuses.get(&s))
            .copied()
            .unwrap_or(1.0)
    }
}

/// The four classes shipped with the platform
pub fn builtin_classes() -> Vec<CharacterClassDef> {
    vec![
        CharacterClassDef {
            id: "frontend_wizard".into(),
            name: "Frontend Wizard".into(),
            description: "Master of UI/UX and visual magic".into(),
            icon: "🧙".into(),
            unlock_level: 1,
            bonuses: HashMap::from([(SkillCategory::Frontend, 1.2)]),
        },
        CharacterClassDef {
            id: "backend_knight".into(),
            name: "Backend Knight".into(),
            description: "Defender of servers and databases".into(),
            icon: "🛡️".into(),
            unlock_level: 10,
            bonuses: HashMap::from([
                (SkillCategory::Backend, 1.2),
                (SkillCategory::Databases, 1.3),
            ]),
        },
        CharacterClassDef {
            id: "ai_sorcerer".into(),
            name: "AI Sorcerer".into(),
            description: "Wielder of machine learning spells".into(),
            icon: "🔮".into(),
            unlock_level: 25,
            bonuses: HashMap::from([
                (SkillCategory::Ai, 1.5),
                (SkillCategory::Algorithms, 1.2),
            ]),
        },
        CharacterClassDef {
            id: "fullstack_paladin".into(),
            name: "Full-Stack Paladin".into(),
            description: "Balanced warrior of all domains".into(),
            icon: "⚖️".into(),
            unlock_level: 50,
            bonuses: HashMap::from([
                (SkillCategory::Frontend, 1.1),
                (SkillCategory::Backend, 1.1),
                (SkillCategory::Mobile, 1.1),
            ]),
        },
    ]
}
