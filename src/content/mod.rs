//! Static game content: classes, achievements, quests and skill trees
//!
//! All definitions are plain data assembled into a [`ContentPack`] that is
//! injected into the progression store at construction. Nothing in the
//! engine reaches for an ambient catalog.

pub mod achievements;
pub mod classes;
pub mod loader;
pub mod quests;
pub mod skill_trees;

pub use achievements::{builtin_achievements, AchievementDef};
pub use classes::{builtin_classes, CharacterClassDef};
pub use loader::load_content_pack;
pub use quests::{builtin_quests, QuestDef};
pub use skill_trees::{builtin_skill_trees, SkillBranchDef, SkillNodeDef, SkillTreeDef};

use crate::core::error::{CodequestError, Result};
use crate::core::types::{AchievementId, ClassId, QuestId, SkillCategory};
use crate::progression::graph::validate_acyclic;
use std::collections::HashMap;

/// The full set of definitions the engine operates against
#[derive(Debug, Clone)]
pub struct ContentPack {
    pub classes: HashMap<ClassId, CharacterClassDef>,
    pub achievements: HashMap<AchievementId, AchievementDef>,
    pub quests: HashMap<QuestId, QuestDef>,
    pub skill_trees: Vec<SkillTreeDef>,
}

impl ContentPack {
    /// Assemble and validate a pack from loose definition lists
    pub fn assemble(
        classes: Vec<CharacterClassDef>,
        achievements: Vec<AchievementDef>,
        quests: Vec<QuestDef>,
        skill_trees: Vec<SkillTreeDef>,
    ) -> Result<Self> {
        let pack = Self {
            classes: classes.into_iter().map(|c| (c.id.clone(), c)).collect(),
            achievements: achievements.into_iter().map(|a| (a.id.clone(), a)).collect(),
            quests: quests.into_iter().map(|q| (q.id.clone(), q)).collect(),
            skill_trees,
        };
        pack.validate()?;
        Ok(pack)
    }

    /// The content shipped with the platform
    pub fn builtin() -> Self {
        Self {
            classes: builtin_classes().into_iter().map(|c| (c.id.clone(), c)).collect(),
            achievements: builtin_achievements()
                .into_iter()
                .map(|a| (a.id.clone(), a))
                .collect(),
            quests: builtin_quests().into_iter().map(|q| (q.id.clone(), q)).collect(),
            skill_trees: builtin_skill_trees(),
        }
    }

    /// Find a skill node and the tree it belongs to
    pub fn find_node(&self, node_id: &str) -> Option<(&SkillTreeDef, &SkillNodeDef)> {
        self.skill_trees
            .iter()
            .find_map(|tree| tree.node(node_id).map(|n| (tree, n)))
    }

    pub fn tree_for(&self, skill: SkillCategory) -> Option<&SkillTreeDef> {
        self.skill_trees.iter().find(|t| t.skill == skill)
    }

    /// Check cross-reference integrity and prerequisite-graph acyclicity
    pub fn validate(&self) -> Result<()> {
        for quest in self.quests.values() {
            for prereq in &quest.prerequisites {
                if !self.quests.contains_key(prereq) {
                    return Err(CodequestError::InvalidContent(format!(
                        "quest {} requires unknown quest {}",
                        quest.id, prereq
                    )));
                }
            }
        }

        for tree in &self.skill_trees {
            for node in tree.nodes() {
                if node.max_level == 0 {
                    return Err(CodequestError::InvalidContent(format!(
                        "node {} has max_level 0",
                        node.id
                    )));
                }
                for prereq in &node.prerequisites {
                    // No cross-tree prerequisites
                    if tree.node(prereq).is_none() {
                        return Err(CodequestError::InvalidContent(format!(
                            "node {} requires unknown node {} in tree {}",
                            node.id, prereq, tree.name
                        )));
                    }
                }
            }
            validate_acyclic(tree)?;
        }

        Ok(())
    }
}
