//! Quest definitions
//!
//! Quests are static content; the player aggregate tracks which are
//! available, active or completed. Prerequisites gate when a quest can be
//! started.

use crate::core::types::{QuestId, SkillCategory};
use crate::progression::rewards::Reward;
use serde::{Deserialize, Serialize};

/// Static definition of a quest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestDef {
    pub id: QuestId,
    pub title: String,
    pub description: String,
    /// Skill the XP reward is tagged with
    pub skill: Option<SkillCategory>,
    pub xp_reward: u64,
    pub objectives: Vec<String>,
    /// Quests that must be completed before this one can start
    #[serde(default)]
    pub prerequisites: Vec<QuestId>,
    /// Extra rewards granted on completion, beyond the XP
    #[serde(default)]
    pub rewards: Vec<Reward>,
}

/// Starter quests seeded into a fresh profile
pub fn builtin_quests() -> Vec<QuestDef> {
    vec![
        QuestDef {
            id: "welcome_quest".into(),
            title: "Welcome to Coding Society".into(),
            description: "Complete your first coding challenge to begin your journey".into(),
            skill: Some(SkillCategory::Frontend),
            xp_reward: 100,
            objectives: vec![
                "Complete the HTML basics tutorial".into(),
                "Write your first JavaScript function".into(),
            ],
            prerequisites: vec![],
            rewards: vec![],
        },
        QuestDef {
            id: "syntax_explorer".into(),
            title: "Syntax Explorer".into(),
            description: "Learn the basics of different programming languages".into(),
            skill: Some(SkillCategory::Algorithms),
            xp_reward: 150,
            objectives: vec![
                "Try Python syntax".into(),
                "Compare with JavaScript".into(),
                "Solve a simple algorithm".into(),
            ],
            prerequisites: vec![],
            rewards: vec![],
        },
        QuestDef {
            id: "first_deployment".into(),
            title: "First Deployment".into(),
            description: "Ship something real".into(),
            skill: Some(SkillCategory::Devops),
            xp_reward: 250,
            objectives: vec![
                "Containerize the welcome project".into(),
                "Deploy it to a public host".into(),
            ],
            prerequisites: vec!["welcome_quest".into()],
            rewards: vec![Reward::Theme("deployer_theme".into())],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prerequisites_reference_known_quests() {
        let quests = builtin_quests();
        for q in &quests {
            for prereq in &q.prerequisites {
                assert!(
                    quests.iter().any(|other| &other.id == prereq),
                    "{} has unknown prerequisite {}",
                    q.id,
                    prereq
                );
            }
        }
    }
}
