//! Skill prerequisite graph
//!
//! Nodes are purchasable with skill points once every prerequisite node has
//! been upgraded at least once. Each tree's prerequisite graph must be a
//! DAG; `validate_acyclic` enforces that at content-load time.

use crate::content::{SkillNodeDef, SkillTreeDef};
use crate::core::error::{CodequestError, Result};
use crate::core::types::NodeId;
use std::collections::HashMap;
use thiserror::Error;

/// Why a node cannot be upgraded right now
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpgradeError {
    #[error("Not enough skill points: need {needed}, have {available}")]
    InsufficientPoints { needed: u32, available: u32 },

    #[error("Prerequisite not met: {0}")]
    PrerequisiteNotMet(NodeId),

    #[error("Node is already at max level {0}")]
    MaxLevel(u32),

    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),
}

/// Check whether a node can be upgraded
///
/// `node_levels` maps node id to current upgrade level (absent = 0).
pub fn check_upgrade(
    node: &SkillNodeDef,
    node_levels: &HashMap<NodeId, u32>,
    available_points: u32,
) -> std::result::Result<(), UpgradeError> {
    let current = node_levels.get(&node.id).copied().unwrap_or(0);
    if current >= node.max_level {
        return Err(UpgradeError::MaxLevel(node.max_level));
    }

    for prereq in &node.prerequisites {
        if node_levels.get(prereq).copied().unwrap_or(0) == 0 {
            return Err(UpgradeError::PrerequisiteNotMet(prereq.clone()));
        }
    }

    if available_points < node.cost {
        return Err(UpgradeError::InsufficientPoints {
            needed: node.cost,
            available: available_points,
        });
    }

    Ok(())
}

/// Convenience boolean form of [`check_upgrade`]
pub fn can_upgrade(
    node: &SkillNodeDef,
    node_levels: &HashMap<NodeId, u32>,
    available_points: u32,
) -> bool {
    check_upgrade(node, node_levels, available_points).is_ok()
}

/// Verify a tree's prerequisite graph contains no cycles
///
/// Iterative DFS with a three-color marking. Unknown prerequisite ids are
/// caught by pack validation before this runs, and ignored here.
pub fn validate_acyclic(tree: &SkillTreeDef) -> Result<()> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Unvisited,
        InProgress,
        Done,
    }

    let mut marks: HashMap<&str, Mark> = tree.nodes().map(|n| (n.id.as_str(), Mark::Unvisited)).collect();

    for start in tree.nodes() {
        if marks[start.id.as_str()] != Mark::Unvisited {
            continue;
        }

        // Stack entries: (node, next prerequisite index to explore)
        let mut stack: Vec<(&SkillNodeDef, usize)> = vec![(start, 0)];
        marks.insert(start.id.as_str(), Mark::InProgress);

        while let Some((node, idx)) = stack.pop() {
            if idx >= node.prerequisites.len() {
                marks.insert(node.id.as_str(), Mark::Done);
                continue;
            }
            stack.push((node, idx + 1));

            let Some(next) = tree.node(&node.prerequisites[idx]) else {
                continue;
            };
            match marks[next.id.as_str()] {
                Mark::InProgress => {
                    return Err(CodequestError::InvalidContent(format!(
                        "skill tree '{}' has a prerequisite cycle through '{}'",
                        tree.name, next.id
                    )));
                }
                Mark::Unvisited => {
                    marks.insert(next.id.as_str(), Mark::InProgress);
                    stack.push((next, 0));
                }
                Mark::Done => {}
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SkillBranchDef;
    use crate::core::types::SkillCategory;

    fn node(id: &str, cost: u32, max_level: u32, prereqs: &[&str]) -> SkillNodeDef {
        SkillNodeDef {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            max_level,
            cost,
            prerequisites: prereqs.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn tree(nodes: Vec<SkillNodeDef>) -> SkillTreeDef {
        SkillTreeDef {
            skill: SkillCategory::Frontend,
            name: "test".into(),
            branches: vec![SkillBranchDef {
                id: "main".into(),
                name: "Main".into(),
                nodes,
            }],
        }
    }

    #[test]
    fn test_unmet_prerequisite_blocks_regardless_of_points() {
        let advanced = node("advanced", 2, 5, &["basics"]);
        let levels = HashMap::new();

        assert_eq!(
            check_upgrade(&advanced, &levels, 1000),
            Err(UpgradeError::PrerequisiteNotMet("basics".into()))
        );
    }

    #[test]
    fn test_insufficient_points() {
        let basics = node("basics", 3, 5, &[]);
        let levels = HashMap::new();

        assert_eq!(
            check_upgrade(&basics, &levels, 2),
            Err(UpgradeError::InsufficientPoints {
                needed: 3,
                available: 2
            })
        );
        assert!(can_upgrade(&basics, &levels, 3));
    }

    #[test]
    fn test_max_level_blocks() {
        let basics = node("basics", 1, 3, &[]);
        let levels = HashMap::from([("basics".to_string(), 3)]);

        assert_eq!(check_upgrade(&basics, &levels, 10), Err(UpgradeError::MaxLevel(3)));
    }

    #[test]
    fn test_prerequisite_at_level_one_suffices() {
        let advanced = node("advanced", 2, 5, &["basics"]);
        let levels = HashMap::from([("basics".to_string(), 1)]);

        assert!(can_upgrade(&advanced, &levels, 2));
    }

    #[test]
    fn test_acyclic_tree_accepted() {
        let t = tree(vec![
            node("a", 1, 5, &[]),
            node("b", 1, 5, &["a"]),
            node("c", 1, 5, &["a", "b"]),
        ]);
        assert!(validate_acyclic(&t).is_ok());
    }

    #[test]
    fn test_cycle_detected() {
        let t = tree(vec![
            node("a", 1, 5, &["c"]),
            node("b", 1, 5, &["a"]),
            node("c", 1, 5, &["b"]),
        ]);
        assert!(validate_acyclic(&t).is_err());
    }

    #[test]
    fn test_self_cycle_detected() {
        let t = tree(vec![node("a", 1, 5, &["a"])]);
        assert!(validate_acyclic(&t).is_err());
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let t = tree(vec![
            node("root", 1, 5, &[]),
            node("left", 1, 5, &["root"]),
            node("right", 1, 5, &["root"]),
            node("apex", 1, 5, &["left", "right"]),
        ]);
        assert!(validate_acyclic(&t).is_ok());
    }
}
