//! Skill tree definitions
//!
//! Each skill category can carry a tree of upgradable nodes organized into
//! branches. Nodes cost skill points and are gated by prerequisite nodes
//! within the same tree. Prerequisite graphs must be acyclic; the content
//! pack validates this at assembly.

use crate::core::types::{NodeId, SkillCategory};
use serde::{Deserialize, Serialize};

/// A single upgradable node in a skill tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillNodeDef {
    pub id: NodeId,
    pub name: String,
    pub description: String,
    /// Highest level this node can be upgraded to
    pub max_level: u32,
    /// Skill points per upgrade
    pub cost: u32,
    /// Nodes that must be at level > 0 before this one is purchasable
    #[serde(default)]
    pub prerequisites: Vec<NodeId>,
}

/// A named branch grouping related nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillBranchDef {
    pub id: String,
    pub name: String,
    pub nodes: Vec<SkillNodeDef>,
}

/// A full tree for one skill category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillTreeDef {
    pub skill: SkillCategory,
    pub name: String,
    pub branches: Vec<SkillBranchDef>,
}

impl SkillTreeDef {
    /// Iterate every node in the tree, across branches
    pub fn nodes(&self) -> impl Iterator<Item = &SkillNodeDef> {
        self.branches.iter().flat_map(|b| b.nodes.iter())
    }

    pub fn node(&self, id: &str) -> Option<&SkillNodeDef> {
        self.nodes().find(|n| n.id == id)
    }
}

fn node(
    id: &str,
    name: &str,
    description: &str,
    max_level: u32,
    cost: u32,
    prerequisites: &[&str],
) -> SkillNodeDef {
    SkillNodeDef {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        max_level,
        cost,
        prerequisites: prerequisites.iter().map(|s| s.to_string()).collect(),
    }
}

/// The trees shipped with the platform (frontend and backend)
pub fn builtin_skill_trees() -> Vec<SkillTreeDef> {
    vec![
        SkillTreeDef {
            skill: SkillCategory::Frontend,
            name: "Frontend Mastery".into(),
            branches: vec![
                SkillBranchDef {
                    id: "foundations".into(),
                    name: "Web Foundations".into(),
                    nodes: vec![
                        node(
                            "html_basics",
                            "HTML Fundamentals",
                            "Master semantic HTML and document structure",
                            5,
                            1,
                            &[],
                        ),
                        node(
                            "css_basics",
                            "CSS Styling",
                            "Learn styling, layouts, and responsive design",
                            5,
                            2,
                            &["html_basics"],
                        ),
                        node(
                            "javascript_core",
                            "JavaScript Core",
                            "Master JavaScript fundamentals and ES6+",
                            10,
                            3,
                            &["html_basics"],
                        ),
                    ],
                },
                SkillBranchDef {
                    id: "frameworks".into(),
                    name: "Modern Frameworks".into(),
                    nodes: vec![
                        node(
                            "dom_manipulation",
                            "DOM Manipulation",
                            "Control the document tree directly",
                            8,
                            3,
                            &["javascript_core"],
                        ),
                        node(
                            "react_mastery",
                            "React Expertise",
                            "Build complex applications with React",
                            10,
                            5,
                            &["javascript_core", "dom_manipulation"],
                        ),
                        node(
                            "accessibility",
                            "Accessibility",
                            "Build interfaces everyone can use",
                            5,
                            4,
                            &["html_basics", "css_basics"],
                        ),
                    ],
                },
            ],
        },
        SkillTreeDef {
            skill: SkillCategory::Backend,
            name: "Backend Engineering".into(),
            branches: vec![SkillBranchDef {
                id: "services".into(),
                name: "Services".into(),
                nodes: vec![
                    node(
                        "nodejs_basics",
                        "Node.js Basics",
                        "Server-side JavaScript runtime fundamentals",
                        8,
                        2,
                        &[],
                    ),
                    node(
                        "rest_api_design",
                        "REST API Design",
                        "Design clean resource-oriented APIs",
                        8,
                        4,
                        &["nodejs_basics"],
                    ),
                    node(
                        "database_modeling",
                        "Database Modeling",
                        "Schema design and query optimization",
                        10,
                        3,
                        &[],
                    ),
                ],
            }],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_lookup_across_branches() {
        let trees = builtin_skill_trees();
        let frontend = &trees[0];
        assert!(frontend.node("react_mastery").is_some());
        assert!(frontend.node("nodejs_basics").is_none());
    }

    #[test]
    fn test_builtin_prerequisites_exist_in_tree() {
        for tree in builtin_skill_trees() {
            for n in tree.nodes() {
                for prereq in &n.prerequisites {
                    assert!(
                        tree.node(prereq).is_some(),
                        "{} references missing prerequisite {}",
                        n.id,
                        prereq
                    );
                }
            }
        }
    }
}
