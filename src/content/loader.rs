//! Load content packs from TOML files
//!
//! A content directory may carry `classes.toml`, `achievements.toml`,
//! `quests.toml` and `skill_trees.toml`. Any file that is absent falls back
//! to the built-in catalog for that section, so a pack can override just
//! one kind of content.

use crate::content::{
    builtin_achievements, builtin_classes, builtin_quests, builtin_skill_trees, AchievementDef,
    CharacterClassDef, ContentPack, QuestDef, SkillBranchDef, SkillNodeDef, SkillTreeDef,
};
use crate::core::error::{CodequestError, Result};
use crate::core::types::{Rarity, SkillCategory, StatKey};
use crate::progression::rewards::Reward;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

fn invalid(msg: String) -> CodequestError {
    CodequestError::InvalidContent(msg)
}

/// Load a validated content pack from a directory of TOML files
pub fn load_content_pack(dir: &Path) -> Result<ContentPack> {
    let classes = match read(dir, "classes.toml")? {
        Some(content) => parse_classes(&content)?,
        None => builtin_classes(),
    };
    let achievements = match read(dir, "achievements.toml")? {
        Some(content) => parse_achievements(&content)?,
        None => builtin_achievements(),
    };
    let quests = match read(dir, "quests.toml")? {
        Some(content) => parse_quests(&content)?,
        None => builtin_quests(),
    };
    let skill_trees = match read(dir, "skill_trees.toml")? {
        Some(content) => parse_skill_trees(&content)?,
        None => builtin_skill_trees(),
    };

    ContentPack::assemble(classes, achievements, quests, skill_trees)
}

fn read(dir: &Path, filename: &str) -> Result<Option<String>> {
    let path = dir.join(filename);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)
        .map_err(|e| invalid(format!("Failed to read {}: {}", filename, e)))?;
    Ok(Some(content))
}

fn parse_toml(content: &str, what: &str) -> Result<toml::Value> {
    content
        .parse()
        .map_err(|e| invalid(format!("{}: Invalid TOML: {}", what, e)))
}

fn get_str(value: &toml::Value, key: &str, what: &str) -> Result<String> {
    value
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| invalid(format!("{} missing '{}'", what, key)))
}

fn get_str_or(value: &toml::Value, key: &str, default: &str) -> String {
    value
        .get(key)
        .and_then(|v| v.as_str())
        .unwrap_or(default)
        .to_string()
}

fn get_u64(value: &toml::Value, key: &str, what: &str) -> Result<u64> {
    value
        .get(key)
        .and_then(|v| v.as_integer())
        .filter(|n| *n >= 0)
        .map(|n| n as u64)
        .ok_or_else(|| invalid(format!("{} missing or negative '{}'", what, key)))
}

fn get_string_list(value: &toml::Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str())
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}

fn parse_skill(s: &str, what: &str) -> Result<SkillCategory> {
    SkillCategory::parse(s).ok_or_else(|| invalid(format!("{}: unknown skill '{}'", what, s)))
}

fn parse_classes(content: &str) -> Result<Vec<CharacterClassDef>> {
    let toml = parse_toml(content, "classes.toml")?;
    let mut classes = Vec::new();

    if let Some(entries) = toml.get("classes").and_then(|v| v.as_array()) {
        for entry in entries {
            let id = get_str(entry, "id", "class")?;
            let what = format!("class '{}'", id);

            let mut bonuses = HashMap::new();
            if let Some(table) = entry.get("bonuses").and_then(|v| v.as_table()) {
                for (skill_name, mult) in table {
                    let skill = parse_skill(skill_name, &what)?;
                    let mult = mult
                        .as_float()
                        .ok_or_else(|| invalid(format!("{}: bonus must be a float", what)))?;
                    bonuses.insert(skill, mult);
                }
            }

            classes.push(CharacterClassDef {
                name: get_str(entry, "name", &what)?,
                description: get_str_or(entry, "description", ""),
                icon: get_str_or(entry, "icon", ""),
                unlock_level: get_u64(entry, "unlock_level", &what)? as u32,
                bonuses,
                id,
            });
        }
    }

    Ok(classes)
}

fn parse_achievements(content: &str) -> Result<Vec<AchievementDef>> {
    let toml = parse_toml(content, "achievements.toml")?;
    let mut achievements = Vec::new();

    if let Some(entries) = toml.get("achievements").and_then(|v| v.as_array()) {
        for entry in entries {
            let id = get_str(entry, "id", "achievement")?;
            let what = format!("achievement '{}'", id);

            let rarity_str = get_str_or(entry, "rarity", "common");
            let rarity = Rarity::parse(&rarity_str)
                .ok_or_else(|| invalid(format!("{}: unknown rarity '{}'", what, rarity_str)))?;

            let mut requirements = HashMap::new();
            let table = entry
                .get("requirements")
                .and_then(|v| v.as_table())
                .ok_or_else(|| invalid(format!("{} missing 'requirements'", what)))?;
            for (stat_name, threshold) in table {
                let key = StatKey::parse(stat_name)
                    .ok_or_else(|| invalid(format!("{}: unknown stat '{}'", what, stat_name)))?;
                let threshold = threshold
                    .as_integer()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| invalid(format!("{}: threshold must be positive", what)))?;
                requirements.insert(key, threshold as u64);
            }

            achievements.push(AchievementDef {
                name: get_str(entry, "name", &what)?,
                description: get_str_or(entry, "description", ""),
                icon: get_str_or(entry, "icon", ""),
                rarity,
                requirements,
                xp_reward: get_u64(entry, "xp_reward", &what)?,
                id,
            });
        }
    }

    Ok(achievements)
}

fn parse_reward(value: &toml::Value, what: &str) -> Result<Reward> {
    let kind = get_str(value, "kind", what)?;
    match kind.as_str() {
        "theme" => Ok(Reward::Theme(get_str(value, "item", what)?)),
        "avatar" => Ok(Reward::AvatarPart(get_str(value, "item", what)?)),
        "skill_points" => Ok(Reward::SkillPoints(get_u64(value, "amount", what)? as u32)),
        other => Err(invalid(format!("{}: unknown reward kind '{}'", what, other))),
    }
}

fn parse_quests(content: &str) -> Result<Vec<QuestDef>> {
    let toml = parse_toml(content, "quests.toml")?;
    let mut quests = Vec::new();

    if let Some(entries) = toml.get("quests").and_then(|v| v.as_array()) {
        for entry in entries {
            let id = get_str(entry, "id", "quest")?;
            let what = format!("quest '{}'", id);

            let skill = match entry.get("skill").and_then(|v| v.as_str()) {
                Some(s) => Some(parse_skill(s, &what)?),
                None => None,
            };

            let mut rewards = Vec::new();
            if let Some(arr) = entry.get("rewards").and_then(|v| v.as_array()) {
                for reward in arr {
                    rewards.push(parse_reward(reward, &what)?);
                }
            }

            quests.push(QuestDef {
                title: get_str(entry, "title", &what)?,
                description: get_str_or(entry, "description", ""),
                skill,
                xp_reward: get_u64(entry, "xp_reward", &what)?,
                objectives: get_string_list(entry, "objectives"),
                prerequisites: get_string_list(entry, "prerequisites"),
                rewards,
                id,
            });
        }
    }

    Ok(quests)
}

fn parse_node(value: &toml::Value, tree: &str) -> Result<SkillNodeDef> {
    let id = get_str(value, "id", &format!("node in tree '{}'", tree))?;
    let what = format!("node '{}'", id);

    Ok(SkillNodeDef {
        name: get_str(value, "name", &what)?,
        description: get_str_or(value, "description", ""),
        max_level: get_u64(value, "max_level", &what)? as u32,
        cost: get_u64(value, "cost", &what)? as u32,
        prerequisites: get_string_list(value, "prerequisites"),
        id,
    })
}

fn parse_skill_trees(content: &str) -> Result<Vec<SkillTreeDef>> {
    let toml = parse_toml(content, "skill_trees.toml")?;
    let mut trees = Vec::new();

    if let Some(entries) = toml.get("trees").and_then(|v| v.as_array()) {
        for entry in entries {
            let name = get_str(entry, "name", "tree")?;
            let skill_str = get_str(entry, "skill", &format!("tree '{}'", name))?;
            let skill = parse_skill(&skill_str, &format!("tree '{}'", name))?;

            let mut branches = Vec::new();
            if let Some(branch_entries) = entry.get("branches").and_then(|v| v.as_array()) {
                for branch in branch_entries {
                    let branch_id = get_str(branch, "id", &format!("branch in '{}'", name))?;
                    let mut nodes = Vec::new();
                    if let Some(node_entries) = branch.get("nodes").and_then(|v| v.as_array()) {
                        for node in node_entries {
                            nodes.push(parse_node(node, &name)?);
                        }
                    }
                    branches.push(SkillBranchDef {
                        name: get_str_or(branch, "name", &branch_id),
                        id: branch_id,
                        nodes,
                    });
                }
            }

            trees.push(SkillTreeDef { skill, name, branches });
        }
    }

    Ok(trees)
}
